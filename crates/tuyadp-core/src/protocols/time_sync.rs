//! Time synchronisation payloads.
//!
//! Devices ask for the time with a two-byte request value; the gateway
//! answers with a length-prefixed block holding UTC and local time as
//! big-endian seconds. The length prefix itself is little-endian.

use thiserror::Error;

use crate::protocols::common::reader::{ByteCursor, ShortRead};

pub const SET_TIME_REQUEST_LEN: usize = 2;
pub const TIME_PAYLOAD_LEN: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSyncError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("invalid time payload length: {length}")]
    InvalidLength { length: u16 },
}

impl From<ShortRead> for TimeSyncError {
    fn from(value: ShortRead) -> Self {
        TimeSyncError::TooShort {
            needed: value.needed,
            actual: value.actual,
        }
    }
}

/// Decode the argument of a time sync request.
pub fn parse_set_time_request(payload: &[u8]) -> Result<u16, TimeSyncError> {
    let mut cursor = ByteCursor::new(payload);
    Ok(cursor.read_u16_be()?)
}

/// Time sync response sent back to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSyncPayload {
    /// Seconds since the Unix epoch, UTC.
    pub utc: u32,
    /// Seconds since the Unix epoch, shifted to local time.
    pub local: u32,
}

impl TimeSyncPayload {
    pub fn new(utc: u32, local: u32) -> Self {
        Self { utc, local }
    }

    pub fn parse(payload: &[u8]) -> Result<Self, TimeSyncError> {
        let mut cursor = ByteCursor::new(payload);
        let length = cursor.read_u16_le()?;
        if length != TIME_PAYLOAD_LEN {
            return Err(TimeSyncError::InvalidLength { length });
        }
        let utc = cursor.read_u32_be()?;
        let local = cursor.read_u32_be()?;
        Ok(Self { utc, local })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + TIME_PAYLOAD_LEN as usize);
        out.extend_from_slice(&TIME_PAYLOAD_LEN.to_le_bytes());
        out.extend_from_slice(&self.utc.to_be_bytes());
        out.extend_from_slice(&self.local.to_be_bytes());
        out
    }
}
