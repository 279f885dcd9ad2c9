//! Data point command frames.
//!
//! A frame is a status byte, a transaction sequence number, a big-endian
//! data point id and one tagged value (see `tuya_data`). There is no frame
//! length: the frame ends where its tagged value ends, and whatever follows
//! is handed back to the caller.
//!
//! Offsets live in `layout`, bounds-checked access in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use error::TuyaCommandError;
pub use parser::{TuyaCommand, decode_tuya_command, parse_tuya_command};
pub use writer::write_tuya_command;
