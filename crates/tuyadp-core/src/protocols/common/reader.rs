/// Shortfall reported when a read runs past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShortRead {
    pub needed: usize,
    pub actual: usize,
}

/// Forward-only cursor over a borrowed payload.
///
/// Every read is bounds-checked; the unread tail stays available through
/// `remainder` so callers can parse consecutive blocks from one buffer.
pub(crate) struct ByteCursor<'a> {
    payload: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload, pos: 0 }
    }

    pub fn require(&self, len: usize) -> Result<(), ShortRead> {
        let needed = self.pos.saturating_add(len);
        if self.payload.len() < needed {
            return Err(ShortRead {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], ShortRead> {
        self.require(len)?;
        let end = self.pos + len;
        let bytes = self.payload.get(self.pos..end).ok_or(ShortRead {
            needed: end,
            actual: self.payload.len(),
        })?;
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, ShortRead> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16_be(&mut self) -> Result<u16, ShortRead> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u16_le(&mut self) -> Result<u16, ShortRead> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, ShortRead> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn remainder(&self) -> &'a [u8] {
        self.payload.get(self.pos..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteCursor, ShortRead};

    #[test]
    fn take_advances_and_keeps_remainder() {
        let payload = [1, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&payload);
        assert_eq!(cursor.take(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.read_u8().unwrap(), 3);
        assert_eq!(cursor.remainder(), &[4, 5]);
    }

    #[test]
    fn short_read_reports_absolute_need() {
        let payload = [0u8; 3];
        let mut cursor = ByteCursor::new(&payload);
        cursor.read_u16_be().unwrap();
        let err = cursor.read_u16_be().unwrap_err();
        assert_eq!(
            err,
            ShortRead {
                needed: 4,
                actual: 3
            }
        );
        assert_eq!(cursor.remainder(), &[0]);
    }

    #[test]
    fn integer_reads_respect_byte_order() {
        let payload = [0x12, 0x34, 0x12, 0x34, 0x00, 0x00, 0x02, 0xdb];
        let mut cursor = ByteCursor::new(&payload);
        assert_eq!(cursor.read_u16_be().unwrap(), 0x1234);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x3412);
        assert_eq!(cursor.read_u32_be().unwrap(), 731);
        assert!(cursor.remainder().is_empty());
    }
}
