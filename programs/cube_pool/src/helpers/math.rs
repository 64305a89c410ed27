use anchor_lang::prelude::*;
use ruint::aliases::U256;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps(value: u64, bps: u16) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// `supply * price`, the equity a token contributes at `price`.
pub fn value_of(supply: u64, price: u128) -> Result<u128> {
    (supply as u128)
        .checked_mul(price)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Product of all factors, in 256 bits.
pub fn wide_product(factors: &[u128]) -> Result<U256> {
    factors.iter().try_fold(U256::from(1u64), |acc, f| {
        acc.checked_mul(U256::from(*f))
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    })
}

pub fn wide_div(numerator: U256, denominator: u128) -> Result<U256> {
    numerator
        .checked_div(U256::from(denominator))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn narrow_u128(value: U256) -> Result<u128> {
    u128::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn narrow_u64(value: U256) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}
