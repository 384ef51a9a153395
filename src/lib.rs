//! anexo: extract the CEST/NCM classification tables from the Anexo I PDF.
//!
//! The first page lists the segments of the annex. Each segment's heading is located again in
//! the body, and the rows of the table under it are tokenized into item, CEST, NCM and
//! description fields.

pub mod config;
pub mod error;
pub mod locator;
pub mod reader;
pub mod rows;
pub mod segment;
pub mod source;
pub mod summary;

pub use error::{Error, Result};
