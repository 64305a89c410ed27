pub const SYMBOL_LEN: usize = 16;
pub const ORACLE_DECIMALS: u32 = 8;
