pub const HEADER_LEN: usize = 3;

pub const DP_TYPE_RAW: u8 = 0x00;
pub const DP_TYPE_BOOL: u8 = 0x01;
pub const DP_TYPE_VALUE: u8 = 0x02;
pub const DP_TYPE_STRING: u8 = 0x03;
pub const DP_TYPE_ENUM: u8 = 0x04;
pub const DP_TYPE_BITMAP: u8 = 0x05;

pub const BOOL_WIDTH: usize = 1;
pub const ENUM_WIDTH: usize = 1;
pub const VALUE_WIDTH: usize = 4;
pub const BITMAP_WIDTHS: [usize; 3] = [1, 2, 4];

pub const MAX_VALUE_LEN: usize = u16::MAX as usize;
