use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TuyaDataError;
use super::layout;

/// Data point type carried in the first byte of every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DpType {
    Raw,
    Bool,
    /// Unsigned integer, big-endian on the wire.
    Value,
    String,
    Enum,
    Bitmap,
    /// Tag outside the known range; kept so the value can still be framed.
    Other(u8),
}

impl From<u8> for DpType {
    fn from(tag: u8) -> Self {
        match tag {
            layout::DP_TYPE_RAW => DpType::Raw,
            layout::DP_TYPE_BOOL => DpType::Bool,
            layout::DP_TYPE_VALUE => DpType::Value,
            layout::DP_TYPE_STRING => DpType::String,
            layout::DP_TYPE_ENUM => DpType::Enum,
            layout::DP_TYPE_BITMAP => DpType::Bitmap,
            other => DpType::Other(other),
        }
    }
}

impl From<DpType> for u8 {
    fn from(dp_type: DpType) -> Self {
        match dp_type {
            DpType::Raw => layout::DP_TYPE_RAW,
            DpType::Bool => layout::DP_TYPE_BOOL,
            DpType::Value => layout::DP_TYPE_VALUE,
            DpType::String => layout::DP_TYPE_STRING,
            DpType::Enum => layout::DP_TYPE_ENUM,
            DpType::Bitmap => layout::DP_TYPE_BITMAP,
            DpType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for DpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DpType::Raw => write!(f, "raw"),
            DpType::Bool => write!(f, "bool"),
            DpType::Value => write!(f, "value"),
            DpType::String => write!(f, "string"),
            DpType::Enum => write!(f, "enum"),
            DpType::Bitmap => write!(f, "bitmap"),
            DpType::Other(tag) => write!(f, "unknown(0x{:02x})", tag),
        }
    }
}

/// Typed value of a data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Raw(Vec<u8>),
    Bool(bool),
    Value(u32),
    String(String),
    Enum(u8),
    Bitmap(u32),
}

impl Payload {
    pub fn dp_type(&self) -> DpType {
        match self {
            Payload::Raw(_) => DpType::Raw,
            Payload::Bool(_) => DpType::Bool,
            Payload::Value(_) => DpType::Value,
            Payload::String(_) => DpType::String,
            Payload::Enum(_) => DpType::Enum,
            Payload::Bitmap(_) => DpType::Bitmap,
        }
    }
}

/// A single tagged data point value.
///
/// `raw` holds the value bytes in canonical order: `Value` integers are
/// stored byte-reversed relative to the wire, every other type verbatim.
/// The typed payload is derived on demand and may fail even though the value
/// was framed correctly.
///
/// # Examples
/// ```
/// use tuyadp_core::protocols::tuya_data::{Payload, parse_tuya_data};
///
/// let (data, rest) = parse_tuya_data(b"\x02\x00\x04\x00\x00\x02\xdbtail")?;
/// assert_eq!(data.raw(), b"\xdb\x02\x00\x00");
/// assert_eq!(data.payload()?, Payload::Value(731));
/// assert_eq!(rest, b"tail");
/// # Ok::<(), tuyadp_core::protocols::tuya_data::TuyaDataError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuyaData {
    dp_type: DpType,
    raw: Vec<u8>,
}

impl TuyaData {
    /// Build a value from already canonical `raw` bytes.
    pub fn new(dp_type: impl Into<DpType>, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            dp_type: dp_type.into(),
            raw: raw.into(),
        }
    }

    /// Build a value from bytes in wire order.
    pub fn from_wire(dp_type: impl Into<DpType>, value: &[u8]) -> Self {
        let dp_type = dp_type.into();
        Self {
            dp_type,
            raw: swap_value_order(dp_type, value),
        }
    }

    /// Canonical value for a typed payload.
    ///
    /// Bitmaps use the narrowest of 1, 2 or 4 bytes that holds the value.
    pub fn from_payload(payload: Payload) -> Self {
        let dp_type = payload.dp_type();
        let raw = match payload {
            Payload::Raw(bytes) => bytes,
            Payload::Bool(value) => vec![u8::from(value)],
            Payload::Value(value) => value.to_le_bytes().to_vec(),
            Payload::String(text) => text.into_bytes(),
            Payload::Enum(value) => vec![value],
            Payload::Bitmap(value) => {
                let width = bitmap_width(value);
                value.to_be_bytes()[layout::VALUE_WIDTH - width..].to_vec()
            }
        };
        Self { dp_type, raw }
    }

    pub fn dp_type(&self) -> DpType {
        self.dp_type
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Value bytes as they appear on the wire.
    pub fn wire_value(&self) -> Vec<u8> {
        swap_value_order(self.dp_type, &self.raw)
    }

    /// Decode the typed payload.
    ///
    /// # Errors
    /// `InvalidWidth` when the byte count is not allowed for the type,
    /// `InvalidText` for strings that are not UTF-8, and `UnknownType` for
    /// tags outside the known range.
    pub fn payload(&self) -> Result<Payload, TuyaDataError> {
        match self.dp_type {
            DpType::Raw => Ok(Payload::Raw(self.raw.clone())),
            DpType::Bool => self.single_byte().map(|byte| Payload::Bool(byte != 0)),
            DpType::Value => {
                if self.raw.is_empty() || self.raw.len() > layout::VALUE_WIDTH {
                    return Err(self.invalid_width());
                }
                let value = self
                    .raw
                    .iter()
                    .rev()
                    .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
                Ok(Payload::Value(value))
            }
            DpType::String => std::str::from_utf8(&self.raw)
                .map(|text| Payload::String(text.to_string()))
                .map_err(|err| TuyaDataError::InvalidText {
                    valid_up_to: err.valid_up_to(),
                }),
            DpType::Enum => self.single_byte().map(Payload::Enum),
            DpType::Bitmap => {
                if !layout::BITMAP_WIDTHS.contains(&self.raw.len()) {
                    return Err(self.invalid_width());
                }
                let value = self
                    .raw
                    .iter()
                    .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte));
                Ok(Payload::Bitmap(value))
            }
            DpType::Other(tag) => Err(TuyaDataError::UnknownType { tag }),
        }
    }

    fn single_byte(&self) -> Result<u8, TuyaDataError> {
        match self.raw.as_slice() {
            [byte] => Ok(*byte),
            _ => Err(self.invalid_width()),
        }
    }

    fn invalid_width(&self) -> TuyaDataError {
        TuyaDataError::InvalidWidth {
            dp_type: self.dp_type,
            length: self.raw.len(),
        }
    }
}

fn swap_value_order(dp_type: DpType, bytes: &[u8]) -> Vec<u8> {
    match dp_type {
        DpType::Value => bytes.iter().rev().copied().collect(),
        _ => bytes.to_vec(),
    }
}

fn bitmap_width(value: u32) -> usize {
    if value <= u32::from(u8::MAX) {
        layout::BITMAP_WIDTHS[0]
    } else if value <= u32::from(u16::MAX) {
        layout::BITMAP_WIDTHS[1]
    } else {
        layout::BITMAP_WIDTHS[2]
    }
}
