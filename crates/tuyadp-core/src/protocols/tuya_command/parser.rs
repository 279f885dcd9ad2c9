use tracing::debug;

use super::error::TuyaCommandError;
use super::layout;
use super::reader::TuyaCommandReader;
use crate::protocols::tuya_data::{TuyaData, parse_tuya_data};

/// Data point command: a status byte, transaction sequence number, data
/// point id and exactly one tagged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuyaCommand {
    pub status: u8,
    pub tsn: u8,
    pub dp: u16,
    pub data: TuyaData,
}

impl TuyaCommand {
    pub fn new(status: u8, tsn: u8, dp: u16, data: TuyaData) -> Self {
        Self {
            status,
            tsn,
            dp,
            data,
        }
    }
}

/// Parse a command frame and return it with any bytes left after its data
/// point.
pub fn parse_tuya_command(payload: &[u8]) -> Result<(TuyaCommand, &[u8]), TuyaCommandError> {
    let reader = TuyaCommandReader::new(payload);
    reader.require_len(layout::HEADER_LEN)?;

    let status = reader.read_u8(layout::STATUS_OFFSET)?;
    let tsn = reader.read_u8(layout::TSN_OFFSET)?;
    let dp = reader.read_u16_be(layout::DP_RANGE.clone())?;
    let (data, rest) = parse_tuya_data(reader.data_block()?)?;

    Ok((
        TuyaCommand {
            status,
            tsn,
            dp,
            data,
        },
        rest,
    ))
}

/// Decode a command frame; bytes after the data point are ignored.
pub fn decode_tuya_command(payload: &[u8]) -> Result<TuyaCommand, TuyaCommandError> {
    let (command, rest) = parse_tuya_command(payload)?;
    if !rest.is_empty() {
        debug!(
            dp = command.dp,
            trailing = rest.len(),
            "ignoring bytes after data point"
        );
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::{TuyaCommand, decode_tuya_command, parse_tuya_command};
    use crate::protocols::tuya_command::error::TuyaCommandError;
    use crate::protocols::tuya_data::{DpType, ErrorKind, Payload, TuyaData, TuyaDataError};

    #[test]
    fn parse_valid_command() {
        let payload = b"\x00\x02\x00\x02\x02\x00\x04\x00\x00\x02\xdb";
        let (command, rest) = parse_tuya_command(payload).unwrap();
        assert!(rest.is_empty());
        assert_eq!(command.status, 0);
        assert_eq!(command.tsn, 2);
        assert_eq!(command.dp, 2);
        assert_eq!(command.data.dp_type(), DpType::Value);
        assert_eq!(command.data.payload().unwrap(), Payload::Value(731));
    }

    #[test]
    fn data_point_id_is_big_endian() {
        let payload = b"\x00\x01\x01\x10\x01\x00\x01\x01";
        let command = decode_tuya_command(payload).unwrap();
        assert_eq!(command.dp, 0x0110);
        assert_eq!(
            command,
            TuyaCommand::new(0, 1, 0x0110, TuyaData::new(DpType::Bool, vec![0x01]))
        );
    }

    #[test]
    fn trailing_bytes_are_returned() {
        let payload = b"\x00\x01\x00\x01\x04\x00\x01\x02\xaa\xbb";
        let (command, rest) = parse_tuya_command(payload).unwrap();
        assert_eq!(command.data.payload().unwrap(), Payload::Enum(2));
        assert_eq!(rest, b"\xaa\xbb");

        let decoded = decode_tuya_command(payload).unwrap();
        assert_eq!(decoded, command);
    }

    #[test]
    fn parse_short_header() {
        let err = parse_tuya_command(b"\x00\x01").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("payload too short"));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn parse_truncated_data_point() {
        let err = parse_tuya_command(b"\x00\x03\x00\x05\x02\x00\x08\x00\x00").unwrap_err();
        assert_eq!(
            err,
            TuyaCommandError::Data(TuyaDataError::TooShort {
                needed: 11,
                actual: 5
            })
        );
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn invalid_width_still_decodes() {
        let command = decode_tuya_command(b"\x00\x02\x00\x03\x05\x00\x03\x40\x31\x32").unwrap();
        assert_eq!(command.data.raw(), b"\x40\x31\x32");
        assert!(command.data.payload().is_err());
    }
}
