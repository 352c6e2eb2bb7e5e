//! Decoding pipeline: byte cursor plus the literal-table parser.

pub mod cursor;
pub mod parser;
