//! Hex text capture source.
//!
//! Captures are plain text: one command payload per line as hex digits.
//! Whitespace and `:` separators are ignored, `#` starts a comment, and
//! blank lines are skipped. Line numbers are kept so analysis results can
//! point back into the file.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::HexFileSource;
