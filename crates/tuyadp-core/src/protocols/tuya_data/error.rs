use thiserror::Error;

use super::value::DpType;

/// Errors returned by data point decoding and encoding.
///
/// Parsing only ever fails with `TooShort` and encoding only with `TooLong`;
/// the width, text and type errors surface later, when the typed payload is
/// computed.
///
/// # Examples
/// ```
/// use tuyadp_core::protocols::tuya_data::{DpType, ErrorKind, TuyaDataError};
///
/// let err = TuyaDataError::InvalidWidth { dp_type: DpType::Bitmap, length: 3 };
/// assert_eq!(err.to_string(), "invalid bitmap width: 3 bytes");
/// assert_eq!(err.kind(), ErrorKind::InvalidValue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuyaDataError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("value too long: {length} bytes do not fit the length field")]
    TooLong { length: usize },
    #[error("invalid {dp_type} width: {length} bytes")]
    InvalidWidth { dp_type: DpType, length: usize },
    #[error("invalid string value: not UTF-8 after {valid_up_to} bytes")]
    InvalidText { valid_up_to: usize },
    #[error("unknown data point type: 0x{tag:02x}")]
    UnknownType { tag: u8 },
}

/// Coarse error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input bytes that cannot be framed.
    Malformed,
    /// Framed bytes that carry no meaningful value for their type.
    InvalidValue,
    /// A value that cannot be written to the wire.
    Unencodable,
}

impl TuyaDataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TuyaDataError::TooShort { .. } => ErrorKind::Malformed,
            TuyaDataError::TooLong { .. } => ErrorKind::Unencodable,
            TuyaDataError::InvalidWidth { .. }
            | TuyaDataError::InvalidText { .. }
            | TuyaDataError::UnknownType { .. } => ErrorKind::InvalidValue,
        }
    }
}

impl From<crate::protocols::common::reader::ShortRead> for TuyaDataError {
    fn from(value: crate::protocols::common::reader::ShortRead) -> Self {
        TuyaDataError::TooShort {
            needed: value.needed,
            actual: value.actual,
        }
    }
}
