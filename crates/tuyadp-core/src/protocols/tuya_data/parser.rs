use super::error::TuyaDataError;
use super::reader::TuyaDataReader;
use super::value::TuyaData;

/// Parse one tagged value and return it with the unread tail of `payload`.
///
/// Parsing never interprets the value; see [`TuyaData::payload`].
pub fn parse_tuya_data(payload: &[u8]) -> Result<(TuyaData, &[u8]), TuyaDataError> {
    let mut reader = TuyaDataReader::new(payload);
    let (dp_type, length) = reader.read_header()?;
    let value = reader.read_value(length)?;
    Ok((TuyaData::from_wire(dp_type, value), reader.remainder()))
}

/// Parse consecutive tagged values until `payload` is exhausted.
pub fn parse_tuya_data_list(mut payload: &[u8]) -> Result<Vec<TuyaData>, TuyaDataError> {
    let mut values = Vec::new();
    while !payload.is_empty() {
        let (value, rest) = parse_tuya_data(payload)?;
        values.push(value);
        payload = rest;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::{parse_tuya_data, parse_tuya_data_list};
    use crate::protocols::tuya_data::error::{ErrorKind, TuyaDataError};
    use crate::protocols::tuya_data::value::{DpType, Payload};

    const EXTRA: &[u8] = b"extra data";

    fn with_extra(data: &[u8]) -> Vec<u8> {
        let mut buf = data.to_vec();
        buf.extend_from_slice(EXTRA);
        buf
    }

    #[test]
    fn parse_value() {
        let buf = with_extra(b"\x02\x00\x04\x00\x00\x02\xdb");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(u8::from(data.dp_type()), 2);
        assert_eq!(data.raw(), b"\xdb\x02\x00\x00");
        assert_eq!(data.payload().unwrap(), Payload::Value(731));
    }

    #[test]
    fn parse_bool() {
        let buf = with_extra(b"\x01\x00\x01\x00");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.dp_type(), DpType::Bool);
        assert_eq!(data.raw(), b"\x00");
        assert_eq!(data.payload().unwrap(), Payload::Bool(false));

        let buf = with_extra(b"\x01\x00\x01\x01");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.raw(), b"\x01");
        assert_eq!(data.payload().unwrap(), Payload::Bool(true));
    }

    #[test]
    fn parse_enum() {
        let buf = with_extra(b"\x04\x00\x01\x40");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.dp_type(), DpType::Enum);
        assert_eq!(data.raw(), b"\x40");
        assert_eq!(data.payload().unwrap(), Payload::Enum(0x40));
    }

    #[test]
    fn parse_string() {
        let buf = with_extra(b"\x03\x00\x04Tuya");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.dp_type(), DpType::String);
        assert_eq!(data.raw(), b"Tuya");
        assert_eq!(data.payload().unwrap(), Payload::String("Tuya".to_string()));
    }

    #[test]
    fn parse_bitmap() {
        let buf = with_extra(b"\x05\x00\x01\x40");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.dp_type(), DpType::Bitmap);
        assert_eq!(data.raw(), b"\x40");
        assert_eq!(data.payload().unwrap(), Payload::Bitmap(0x40));

        let (data, _) = parse_tuya_data(b"\x05\x00\x02\x40\x02").unwrap();
        assert_eq!(data.payload().unwrap(), Payload::Bitmap(0x4002));

        let (data, _) = parse_tuya_data(b"\x05\x00\x04\x40\x02\x80\x01").unwrap();
        assert_eq!(data.payload().unwrap(), Payload::Bitmap(0x4002_8001));
    }

    #[test]
    fn parse_bitmap_invalid_width() {
        let buf = with_extra(b"\x05\x00\x03\x40\x31\x32");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.raw(), b"\x40\x31\x32");

        let err = data.payload().unwrap_err();
        assert_eq!(
            err,
            TuyaDataError::InvalidWidth {
                dp_type: DpType::Bitmap,
                length: 3
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn parse_raw() {
        let buf = with_extra(b"\x00\x00\x03\x01\x02\x03");
        let (data, rest) = parse_tuya_data(&buf).unwrap();
        assert_eq!(rest, EXTRA);
        assert_eq!(data.dp_type(), DpType::Raw);
        assert_eq!(data.payload().unwrap(), Payload::Raw(vec![1, 2, 3]));
    }

    #[test]
    fn remainder_untouched_for_every_type() {
        for tag in 0u8..=5 {
            let buf = with_extra(&[tag, 0x00, 0x01, 0x01]);
            let (data, rest) = parse_tuya_data(&buf).unwrap();
            assert_eq!(rest, EXTRA, "tag {tag}");
            assert_eq!(data.raw(), &[0x01], "tag {tag}");
        }
    }

    #[test]
    fn empty_value_has_empty_remainder() {
        let (data, rest) = parse_tuya_data(b"\x00\x00\x00").unwrap();
        assert!(data.raw().is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn declared_length_exceeds_buffer() {
        let err = parse_tuya_data(b"\x02\x00\x04\x00\x00").unwrap_err();
        assert_eq!(
            err,
            TuyaDataError::TooShort {
                needed: 7,
                actual: 5
            }
        );
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn missing_header_is_too_short() {
        let err = parse_tuya_data(b"\x02").unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }

    #[test]
    fn parse_list_reads_consecutive_values() {
        let values = parse_tuya_data_list(b"\x01\x00\x01\x01\x03\x00\x02hi").unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].payload().unwrap(), Payload::Bool(true));
        assert_eq!(
            values[1].payload().unwrap(),
            Payload::String("hi".to_string())
        );
    }

    #[test]
    fn parse_list_fails_on_truncated_tail() {
        let err = parse_tuya_data_list(b"\x01\x00\x01\x01\x03\x00").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }
}
