use super::{body_pages, read, read_summary};
use crate::error::Error;
use crate::segment::SegmentSpan;
use crate::source::PagedText;

fn page(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|line| (*line).to_string()).collect()
}

fn annex() -> PagedText {
    PagedText::new(vec![
        page(&["ANEXO I", "01. Autopeças", "02. Bebidas frias"]),
        page(&[
            "AUTOPEÇAS",
            "DESCRIÇÃO",
            "",
            "1.0",
            "",
            "01.001.00",
            "3815.12.10",
            "3815.12.90",
            "  Catalisadores em colmeia  ",
            "cerâmica ou metálica",
            "2.0",
            "",
            "01.002.00",
            "3917",
            "Tubos de plástico",
        ]),
        page(&[
            "BEBIDAS FRIAS",
            "DESCRIÇÃO",
            "",
            "1.0",
            "",
            "03.001.00",
            "Capítulo 22",
            "Águas minerais",
        ]),
    ])
}

#[test]
fn test_body_pages_default_to_every_page() {
    assert_eq!(body_pages(&[], 4), vec![2, 3, 4]);
    assert!(body_pages(&[], 1).is_empty());
}

#[test]
fn test_body_pages_sorted_without_summary_page() {
    assert_eq!(body_pages(&[3, 1, 2, 3], 5), vec![2, 3]);
}

#[test]
fn test_read_summary() {
    let summary = read_summary(&annex()).unwrap();

    let descriptions: Vec<&str> = summary.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Autopeças", "Bebidas frias"]);
    assert_eq!(summary[0].index, "01");
}

#[test]
fn test_read_every_page() {
    let reading = read(&annex(), &[]).unwrap();

    assert_eq!(reading.lines.len(), 26);
    assert_eq!(reading.lines[11], "Catalisadores em colmeia");
    assert_eq!(
        reading.spans.get("Autopeças"),
        Some(&SegmentSpan {
            segment: "Autopeças".to_string(),
            start: 4,
            end: 18,
        })
    );
    assert_eq!(
        reading.spans.get("Bebidas frias"),
        Some(&SegmentSpan {
            segment: "Bebidas frias".to_string(),
            start: 19,
            end: 26,
        })
    );

    assert_eq!(reading.segments.len(), reading.summary.len());

    let autopecas = &reading.segments[0];
    assert_eq!(autopecas.len(), 2);
    assert_eq!(autopecas[0].cest.as_deref(), Some("01.001.00"));
    assert_eq!(
        autopecas[0].description,
        "Catalisadores em colmeia cerâmica ou metálica"
    );
    assert_eq!(autopecas[1].item.as_deref(), Some("2.0"));
    assert_eq!(autopecas[1].ncms, vec!["3917".to_string()]);
    assert_eq!(autopecas[1].description, "Tubos de plástico");

    let bebidas = &reading.segments[1];
    assert_eq!(bebidas.len(), 1);
    assert_eq!(bebidas[0].ncms, vec!["Capítulo 22".to_string()]);
    assert_eq!(bebidas[0].description, "Águas minerais");
}

#[test]
fn test_output_has_no_internal_fields() {
    let reading = read(&annex(), &[]).unwrap();

    let json = serde_json::to_value(&reading.segments).unwrap();
    let segments = json.as_array().unwrap();
    assert_eq!(segments.len(), 2);
    for row in segments.iter().flat_map(|s| s.as_array().unwrap()) {
        let row = row.as_object().unwrap();
        assert!(!row.contains_key("lines_consumed"));
        assert!(row.contains_key("item"));
        assert!(row.contains_key("cest"));
        assert!(row.contains_key("ncms"));
        assert!(row.contains_key("description"));
    }
}

#[test]
fn test_page_selection_drops_unscanned_segments() {
    let reading = read(&annex(), &[2]).unwrap();

    assert_eq!(reading.summary.len(), 2);
    assert_eq!(reading.segments.len(), 1);
    assert!(reading.spans.get("Bebidas frias").is_none());
    assert_eq!(reading.segments[0].len(), 2);
}

#[test]
fn test_summary_page_is_scanned_as_body() {
    let source = PagedText::new(vec![page(&[
        "ANEXO I",
        "01. Cimentos",
        "CIMENTOS",
        "DESCRIÇÃO",
        "",
        "1.0",
        "",
        "02.001.00",
        "2523.29.10",
        "Cimento Portland",
    ])]);

    let reading = read(&source, &[]).unwrap();

    assert_eq!(reading.segments.len(), 1);
    assert_eq!(reading.segments[0][0].item.as_deref(), Some("1.0"));
    assert_eq!(reading.segments[0][0].description, "Cimento Portland");
}

#[test]
fn test_reading_is_repeatable() {
    let source = annex();

    let first = read(&source, &[]).unwrap();
    let second = read(&source, &[3, 2]).unwrap();

    assert_eq!(first.spans, second.spans);
    assert_eq!(first.segments, second.segments);
}

#[test]
fn test_missing_page_aborts() {
    let result = read(&annex(), &[2, 9]);

    assert!(matches!(
        result,
        Err(Error::PageOutOfRange { page: 9, count: 3 })
    ));
}

#[test]
fn test_empty_document_fails_on_summary_page() {
    let result = read(&PagedText::default(), &[]);

    assert!(matches!(result, Err(Error::PageOutOfRange { page: 1, .. })));
}
