use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hex parse error (line {line}): {message}")]
    Hex { line: u64, message: String },
}
