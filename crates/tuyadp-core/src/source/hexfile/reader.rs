use super::error::HexSourceError;

const COMMENT_MARKER: char = '#';

/// Strip the comment and surrounding blanks from a capture line.
///
/// Returns `None` when nothing but a comment or whitespace remains.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use tuyadp_core::source::hexfile::reader::frame_text;
///
/// assert_eq!(frame_text("00 01 # report"), Some("00 01"));
/// assert_eq!(frame_text("   # only a comment"), None);
/// ```
pub fn frame_text(line: &str) -> Option<&str> {
    let text = match line.split_once(COMMENT_MARKER) {
        Some((text, _)) => text,
        None => line,
    };
    let text = text.trim();
    if text.is_empty() { None } else { Some(text) }
}

/// Decode hex digits, ignoring whitespace and `:` separators.
///
/// # Errors
/// Returns `HexSourceError::Hex` for odd digit counts or non-hex characters.
pub fn decode_hex_frame(text: &str, line: u64) -> Result<Vec<u8>, HexSourceError> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).map_err(|err| HexSourceError::Hex {
        line,
        message: err.to_string(),
    })
}
