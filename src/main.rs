//! anexo: print the classification tables of the Anexo I PDF as JSON.
#![allow(clippy::multiple_crate_versions)]

use anexo::source::pdf::PdfDocument;
use anexo::source::{PagedText, TextSource};
use anexo::{config, reader};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anexo")]
#[command(about = "Extract CEST/NCM classification tables from the Anexo I PDF", long_about = None)]
struct Args {
    /// PDF to read, or a form-feed separated .txt dump of its pages
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Body page to scan (repeatable); page 1 is always read
    #[arg(long, short = 'p', value_name = "N")]
    page: Vec<u32>,

    /// Print the table of contents instead of the parsed rows
    #[arg(long)]
    summary: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anexo::Result<String> {
    let cfg = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .init();

    let path = args.path.unwrap_or_else(|| PathBuf::from(&cfg.document));
    let source = open_source(&path)?;
    let pretty = cfg.pretty && !args.compact;

    if args.summary {
        let summary = reader::read_summary(source.as_ref())?;
        return to_json(&summary, pretty);
    }

    let reading = reader::read(source.as_ref(), &args.page)?;
    to_json(&reading.segments, pretty)
}

fn open_source(path: &Path) -> anexo::Result<Box<dyn TextSource>> {
    tracing::debug!(path = %path.display(), "opening document");
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt")) {
        let text = std::fs::read_to_string(path)?;
        Ok(Box::new(PagedText::from_text(&text)))
    } else {
        Ok(Box::new(PdfDocument::open(path)?))
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anexo::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
