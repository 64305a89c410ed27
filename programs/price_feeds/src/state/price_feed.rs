use anchor_lang::prelude::*;

use crate::{constants::SYMBOL_LEN, error::ErrorCode};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum FeedSource {
    /// Price is pushed by the feed updater.
    Manual,
    /// Price is pulled from a Pyth `PriceUpdateV2` account.
    Pyth,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct FeedParams {
    pub source: FeedSource,
    pub pyth_feed_id: [u8; 32],
    pub updater: Pubkey,
    pub max_staleness_sec: i64,
}

impl FeedParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.max_staleness_sec >= 0, ErrorCode::InvalidStaleness);
        if self.source == FeedSource::Pyth {
            require!(self.pyth_feed_id != [0u8; 32], ErrorCode::InvalidOracle);
        }
        Ok(())
    }
}

/// USD price of one symbol, 8 decimals.
#[account]
#[derive(InitSpace)]
pub struct PriceFeed {
    pub symbol: [u8; SYMBOL_LEN],
    pub params: FeedParams,
    pub price: u64,
    pub publish_time: i64,
    pub bump: u8,
}

impl PriceFeed {
    /// Latest usable price, or 0 when the feed has no price or has gone stale.
    pub fn price_at(&self, now: i64) -> u64 {
        if self.price == 0 {
            return 0;
        }
        let max_age = self.params.max_staleness_sec;
        if max_age > 0 {
            match now.checked_sub(self.publish_time) {
                Some(age) if age <= max_age => {}
                _ => return 0,
            }
        }
        self.price
    }

    pub fn symbol_str(&self) -> &str {
        let len = self
            .symbol
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(SYMBOL_LEN);
        std::str::from_utf8(&self.symbol[..len]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(price: u64, publish_time: i64, max_staleness_sec: i64) -> PriceFeed {
        PriceFeed {
            symbol: *b"BTC\0\0\0\0\0\0\0\0\0\0\0\0\0",
            params: FeedParams {
                source: FeedSource::Manual,
                pyth_feed_id: [0u8; 32],
                updater: Pubkey::default(),
                max_staleness_sec,
            },
            price,
            publish_time,
            bump: 255,
        }
    }

    #[test]
    fn test_price_at_fresh_and_stale() {
        let f = feed(50_000_00000000, 1_000, 60);
        assert_eq!(f.price_at(1_000), 50_000_00000000);
        assert_eq!(f.price_at(1_060), 50_000_00000000);
        assert_eq!(f.price_at(1_061), 0);
    }

    #[test]
    fn test_price_at_without_staleness_window() {
        let f = feed(7, 0, 0);
        assert_eq!(f.price_at(i64::MAX), 7);
    }

    #[test]
    fn test_price_at_zero_price_is_unavailable() {
        assert_eq!(feed(0, 1_000, 0).price_at(1_000), 0);
    }

    #[test]
    fn test_symbol_str() {
        assert_eq!(feed(1, 0, 0).symbol_str(), "BTC");
    }

    #[test]
    fn test_pyth_params_require_feed_id() {
        let mut params = feed(1, 0, 0).params;
        params.source = FeedSource::Pyth;
        assert!(params.validate().is_err());
        params.pyth_feed_id = [7u8; 32];
        assert!(params.validate().is_ok());
        params.max_staleness_sec = -1;
        assert!(params.validate().is_err());
    }
}
