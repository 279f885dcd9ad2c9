pub const STATUS_OFFSET: usize = 0;
pub const TSN_OFFSET: usize = 1;
pub const DP_RANGE: std::ops::Range<usize> = 2..4;
pub const DATA_OFFSET: usize = 4;

pub const HEADER_LEN: usize = DATA_OFFSET;
