//! Tagged data point values.
//!
//! Each value is framed as a one-byte type tag, a big-endian 16-bit length
//! and `length` value bytes. Parsing only frames the bytes: the typed payload
//! (bool, unsigned value, string, enum, bitmap or raw bytes) is computed on
//! demand, so a value with an unsupported width still parses and only fails
//! when its payload is read.
//!
//! Integers of the `value` type travel big-endian and are kept byte-reversed
//! in `raw`; every other type keeps its wire bytes verbatim.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod value;
pub mod writer;

pub use error::{ErrorKind, TuyaDataError};
pub use parser::{parse_tuya_data, parse_tuya_data_list};
pub use value::{DpType, Payload, TuyaData};
pub use writer::write_tuya_data;
