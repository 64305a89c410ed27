pub const BPS_DENOM: u64 = 10_000;

/// Working precision of normalized cube prices.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

pub const MAX_GUARDIANS: usize = 8;

pub use price_feeds::SYMBOL_LEN;
