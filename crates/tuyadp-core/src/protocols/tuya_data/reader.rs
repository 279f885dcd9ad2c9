use super::error::TuyaDataError;
use super::layout;
use crate::protocols::common::reader::ByteCursor;

pub struct TuyaDataReader<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> TuyaDataReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(payload),
        }
    }

    /// Read the type tag and the big-endian length that prefix every value.
    pub fn read_header(&mut self) -> Result<(u8, usize), TuyaDataError> {
        self.cursor.require(layout::HEADER_LEN)?;
        let dp_type = self.cursor.read_u8()?;
        let length = self.cursor.read_u16_be()?;
        Ok((dp_type, usize::from(length)))
    }

    pub fn read_value(&mut self, length: usize) -> Result<&'a [u8], TuyaDataError> {
        Ok(self.cursor.take(length)?)
    }

    pub fn remainder(&self) -> &'a [u8] {
        self.cursor.remainder()
    }
}

#[cfg(test)]
mod tests {
    use super::TuyaDataReader;
    use crate::protocols::tuya_data::error::TuyaDataError;

    #[test]
    fn header_reads_tag_and_length() {
        let payload = [0x03, 0x01, 0x02, 0xff];
        let mut reader = TuyaDataReader::new(&payload);
        assert_eq!(reader.read_header().unwrap(), (0x03, 0x0102));
        assert_eq!(reader.remainder(), &[0xff]);
    }

    #[test]
    fn header_too_short() {
        let payload = [0x03, 0x00];
        let mut reader = TuyaDataReader::new(&payload);
        let err = reader.read_header().unwrap_err();
        assert_eq!(
            err,
            TuyaDataError::TooShort {
                needed: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn empty_header_reports_full_header_length() {
        let mut reader = TuyaDataReader::new(&[]);
        let err = reader.read_header().unwrap_err();
        assert_eq!(
            err,
            TuyaDataError::TooShort {
                needed: 3,
                actual: 0
            }
        );
        assert!(reader.remainder().is_empty());
    }

    #[test]
    fn value_past_end_is_too_short() {
        let payload = [0x02, 0x00, 0x04, 0x00, 0x00];
        let mut reader = TuyaDataReader::new(&payload);
        let (_, length) = reader.read_header().unwrap();
        let err = reader.read_value(length).unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }
}
