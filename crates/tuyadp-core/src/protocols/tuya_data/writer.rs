use super::error::TuyaDataError;
use super::layout;
use super::value::TuyaData;

/// Append the wire form of `data` (tag, big-endian length, value) to `out`.
///
/// # Errors
/// Returns `TooLong` when the value does not fit the 16-bit length field;
/// `out` is left untouched in that case.
pub fn write_tuya_data(data: &TuyaData, out: &mut Vec<u8>) -> Result<(), TuyaDataError> {
    let length = data.raw().len();
    if length > layout::MAX_VALUE_LEN {
        return Err(TuyaDataError::TooLong { length });
    }
    out.reserve(layout::HEADER_LEN + length);
    out.push(data.dp_type().into());
    out.extend_from_slice(&(length as u16).to_be_bytes());
    out.extend_from_slice(&data.wire_value());
    Ok(())
}

impl TuyaData {
    /// Wire form of this value.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TuyaDataError> {
        let mut out = Vec::new();
        write_tuya_data(self, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::write_tuya_data;
    use crate::protocols::tuya_data::error::{ErrorKind, TuyaDataError};
    use crate::protocols::tuya_data::parser::parse_tuya_data;
    use crate::protocols::tuya_data::value::{DpType, Payload, TuyaData};

    #[test]
    fn value_goes_back_to_big_endian() {
        let wire = b"\x02\x00\x04\x00\x00\x02\xdb";
        let (data, _) = parse_tuya_data(wire).unwrap();
        assert_eq!(data.to_bytes().unwrap(), wire.to_vec());
    }

    #[test]
    fn string_payload_encodes_with_length() {
        let data = TuyaData::from_payload(Payload::String("Tuya".to_string()));
        assert_eq!(data.to_bytes().unwrap(), b"\x03\x00\x04Tuya".to_vec());
    }

    #[test]
    fn write_appends_to_existing_buffer() {
        let mut out = vec![0xaa];
        write_tuya_data(&TuyaData::new(DpType::Enum, vec![0x02]), &mut out).unwrap();
        assert_eq!(out, vec![0xaa, 0x04, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn oversized_value_is_rejected() {
        let data = TuyaData::new(DpType::Raw, vec![0u8; 70_000]);
        let mut out = Vec::new();
        let err = write_tuya_data(&data, &mut out).unwrap_err();
        assert_eq!(err, TuyaDataError::TooLong { length: 70_000 });
        assert_eq!(err.kind(), ErrorKind::Unencodable);
        assert!(out.is_empty());
    }
}
