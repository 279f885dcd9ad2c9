mod hexfile;

pub use hexfile::HexFileSource;

use thiserror::Error;

/// One captured command payload.
#[derive(Debug, Clone)]
pub struct FrameEvent {
    /// 1-based line number in the capture.
    pub line: u64,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hex parse error on line {line}: {message}")]
    Hex { line: u64, message: String },
}

/// Decode one frame written the way capture lines are.
///
/// Whitespace and `:` separators are ignored and a `#` comment is dropped.
/// Errors are reported against line 1.
///
/// # Examples
/// ```
/// use tuyadp_core::parse_hex_frame;
///
/// let bytes = parse_hex_frame("00:01 00 02 # dp 2").unwrap();
/// assert_eq!(bytes, vec![0x00, 0x01, 0x00, 0x02]);
/// ```
pub fn parse_hex_frame(text: &str) -> Result<Vec<u8>, SourceError> {
    let text = hexfile::reader::frame_text(text).unwrap_or_default();
    Ok(hexfile::reader::decode_hex_frame(text, 1)?)
}

impl From<hexfile::error::HexSourceError> for SourceError {
    fn from(value: hexfile::error::HexSourceError) -> Self {
        match value {
            hexfile::error::HexSourceError::Io(err) => SourceError::Io(err),
            hexfile::error::HexSourceError::Hex { line, message } => {
                SourceError::Hex { line, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceError, parse_hex_frame};

    #[test]
    fn hex_frame_drops_comment_and_separators() {
        let bytes = parse_hex_frame(" 00:01 02\tdb  # tail").unwrap();
        assert_eq!(bytes, vec![0x00, 0x01, 0x02, 0xdb]);
    }

    #[test]
    fn comment_only_frame_is_empty() {
        assert_eq!(parse_hex_frame("# nothing here").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn bad_digits_report_line_one() {
        let err = parse_hex_frame("0g").unwrap_err();
        assert!(matches!(err, SourceError::Hex { line: 1, .. }));
    }
}
