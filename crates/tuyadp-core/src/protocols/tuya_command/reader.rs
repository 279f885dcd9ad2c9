use super::error::TuyaCommandError;
use super::layout;

pub struct TuyaCommandReader<'a> {
    payload: &'a [u8],
}

impl<'a> TuyaCommandReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), TuyaCommandError> {
        if self.payload.len() < needed {
            return Err(TuyaCommandError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, TuyaCommandError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(TuyaCommandError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, TuyaCommandError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(TuyaCommandError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], TuyaCommandError> {
        self.payload
            .get(range.clone())
            .ok_or(TuyaCommandError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    /// Bytes following the fixed header: the embedded data point and anything
    /// after it.
    pub fn data_block(&self) -> Result<&'a [u8], TuyaCommandError> {
        self.require_len(layout::HEADER_LEN)?;
        self.read_slice(layout::DATA_OFFSET..self.payload.len())
    }
}
