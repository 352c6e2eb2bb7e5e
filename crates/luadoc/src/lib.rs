#![doc = include_str!("../README.md")]

pub mod decode;
pub mod doc;
pub mod error;
pub mod options;
pub mod value;

mod number;

pub use crate::decode::parser::{
    Diagnostic, DiagnosticKind, Parsed, parse_source, parse_table_str, parse_value_at,
};
pub use crate::doc::{Document, Event, Field, Function, TableDef};
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Number, Value};

use std::io::Read;

/// Parse one documentation source unit and project it into a
/// [`Document`]. Sources without a `local Name = {` prefix produce an
/// empty document.
pub fn parse_document(input: &str, options: &Options) -> Result<Document> {
    let parsed = parse_source(input, options)?;
    Ok(Document::from_value(&parsed.value))
}

/// Reader variant of [`parse_document`]. The parser itself never does
/// I/O; this just decodes the unit into a string first.
pub fn parse_document_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Document> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_document(&buf, options)
}
