use thiserror::Error;

use crate::protocols::tuya_data::{ErrorKind, TuyaDataError};

/// Errors returned by command frame decoding and encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuyaCommandError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("data point: {0}")]
    Data(#[from] TuyaDataError),
}

impl TuyaCommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TuyaCommandError::TooShort { .. } => ErrorKind::Malformed,
            TuyaCommandError::Data(err) => err.kind(),
        }
    }
}
