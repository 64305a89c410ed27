use anchor_lang::prelude::*;

use crate::{
    constants::PRICE_SCALE,
    error::ErrorCode,
    helpers::{narrow_u128, wide_div, wide_product},
};

/// Oracle spot relative to the registration spot, 18 decimals.
pub fn spot_ratio(spot_price: u64, initial_spot_price: u64) -> Result<u128> {
    require!(spot_price > 0, ErrorCode::InvalidPrice);
    require!(initial_spot_price > 0, ErrorCode::InvalidPrice);

    let ratio = (spot_price as u128)
        .checked_mul(PRICE_SCALE)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / initial_spot_price as u128;
    require!(ratio > 0, ErrorCode::InvalidPrice);
    Ok(ratio)
}

/// Cube price of a token, 18 decimals.
///
/// With `s = spot / initial_spot` the long token is priced at `s^3` and the
/// inverse token at `1 / s^3`. Both start at exactly `1.0`.
pub fn normalized_price(spot_price: u64, initial_spot_price: u64, inverse: bool) -> Result<u128> {
    let ratio = spot_ratio(spot_price, initial_spot_price)?;
    let cubed = wide_product(&[ratio, ratio, ratio])?;

    let price = if inverse {
        let numerator = wide_product(&[PRICE_SCALE, PRICE_SCALE, PRICE_SCALE, PRICE_SCALE])?;
        numerator
            .checked_div(cubed)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
    } else {
        wide_div(cubed, PRICE_SCALE * PRICE_SCALE)?
    };

    let price = narrow_u128(price)?;
    require!(price > 0, ErrorCode::InvalidPrice);
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTC_20K: u64 = 20_000 * 100_000_000;

    #[test]
    fn test_price_is_one_at_registration() {
        assert_eq!(normalized_price(BTC_20K, BTC_20K, false).unwrap(), PRICE_SCALE);
        assert_eq!(normalized_price(BTC_20K, BTC_20K, true).unwrap(), PRICE_SCALE);
    }

    #[test]
    fn test_long_price_cubes_the_move() {
        let up = normalized_price(21_000 * 100_000_000, BTC_20K, false).unwrap();
        assert_eq!(up, 1_157_625_000_000_000_000);

        let down = normalized_price(10_000 * 100_000_000, BTC_20K, false).unwrap();
        assert_eq!(down, 125_000_000_000_000_000);
    }

    #[test]
    fn test_inverse_price_is_reciprocal_cube() {
        let down = normalized_price(10_000 * 100_000_000, BTC_20K, true).unwrap();
        assert_eq!(down, 8 * PRICE_SCALE);

        let long = normalized_price(21_000 * 100_000_000, BTC_20K, false).unwrap();
        let inverse = normalized_price(21_000 * 100_000_000, BTC_20K, true).unwrap();
        assert!(inverse < PRICE_SCALE);
        // long * inverse ~= 1.0^2, floored
        let product = long * inverse / PRICE_SCALE;
        assert!(product <= PRICE_SCALE && product > PRICE_SCALE - 1_000);
    }

    #[test]
    fn test_zero_spot_is_invalid() {
        assert!(normalized_price(0, BTC_20K, false).is_err());
        assert!(normalized_price(BTC_20K, 0, true).is_err());
    }

    #[test]
    fn test_tiny_ratio_rounds_to_invalid_price() {
        // s = 2e-7: s^3 is below one unit of precision.
        assert!(normalized_price(400_000, BTC_20K, false).is_err());
        // The same move is a huge but representable inverse price.
        assert_eq!(
            normalized_price(400_000, BTC_20K, true).unwrap(),
            125 * PRICE_SCALE * PRICE_SCALE
        );
    }

    #[test]
    fn test_extreme_rally_overflows() {
        assert!(normalized_price(u64::MAX, 1, false).is_err());
    }
}
