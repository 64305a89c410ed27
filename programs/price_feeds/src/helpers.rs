use anchor_lang::prelude::*;

use crate::{
    constants::{ORACLE_DECIMALS, SYMBOL_LEN},
    error::ErrorCode,
    state::FeedsConfig,
};

const PYTH_PUSH_ORACLE_PROGRAM_ID: Pubkey = pubkey!("pythWSnswVUd12oZpeFP8e9CVaEqJg25g1Vtc2biRsT");
const PRICE_UPDATE_V2_DISCRIMINATOR: [u8; 8] = [34, 241, 35, 99, 157, 126, 244, 205];

pub fn require_admin(authority: &Signer<'_>, config: &Account<FeedsConfig>) -> Result<()> {
    require_keys_eq!(authority.key(), config.admin, ErrorCode::Unauthorized);
    Ok(())
}

/// NUL-padded symbol. The padding is only unambiguous if the symbol itself
/// has no NUL byte, so PDA seeds from the raw string and from `symbol_str()`
/// always agree.
pub fn to_fixed_symbol(symbol: &str) -> Result<[u8; SYMBOL_LEN]> {
    let bytes = symbol.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= SYMBOL_LEN,
        ErrorCode::InvalidSymbolLength
    );
    require!(!bytes.contains(&0), ErrorCode::InvalidSymbolByte);

    let mut out = [0u8; SYMBOL_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Reads a verified Pyth push-oracle update and returns `(price, publish_time)`
/// with the price rescaled to 8 decimals.
pub fn read_pyth_price_update(
    price_update: &UncheckedAccount,
    expected_feed_id: &[u8; 32],
) -> Result<(u64, i64)> {
    require_keys_eq!(
        *price_update.owner,
        PYTH_PUSH_ORACLE_PROGRAM_ID,
        ErrorCode::InvalidOracle
    );

    let data = price_update
        .try_borrow_data()
        .map_err(|_| error!(ErrorCode::InvalidOracle))?;
    require!(
        data.len() >= PRICE_UPDATE_V2_DISCRIMINATOR.len(),
        ErrorCode::InvalidOracle
    );
    require!(
        data[..8] == PRICE_UPDATE_V2_DISCRIMINATOR,
        ErrorCode::InvalidOracle
    );

    let mut payload = &data[8..];
    let update = PriceUpdateV2Wire::deserialize(&mut payload)
        .map_err(|_| error!(ErrorCode::InvalidOracle))?;

    require!(
        matches!(update.verification_level, VerificationLevelWire::Full),
        ErrorCode::InvalidOracle
    );
    require!(
        update.price_message.feed_id == *expected_feed_id,
        ErrorCode::InvalidOracle
    );

    let price = scale_to_oracle_decimals(update.price_message.price, update.price_message.exponent)?;
    Ok((price, update.price_message.publish_time))
}

/// `price * 10^exponent`, expressed with `ORACLE_DECIMALS` decimals.
pub fn scale_to_oracle_decimals(price: i64, exponent: i32) -> Result<u64> {
    require!(price > 0, ErrorCode::InvalidPrice);
    let base = u128::try_from(price).map_err(|_| error!(ErrorCode::InvalidPrice))?;

    let shift = exponent
        .checked_add(ORACLE_DECIMALS as i32)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let scaled = if shift >= 0 {
        base.checked_mul(pow10_u128(shift as u32)?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
    } else {
        base.checked_div(pow10_u128(shift.unsigned_abs())?)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?
    };

    require!(scaled > 0, ErrorCode::InvalidPrice);
    u64::try_from(scaled).map_err(|_| error!(ErrorCode::MathOverflow))
}

fn pow10_u128(power: u32) -> Result<u128> {
    10_u128
        .checked_pow(power)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, PartialEq, Eq, Debug)]
enum VerificationLevelWire {
    Partial { num_signatures: u8 },
    Full,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceFeedMessageWire {
    feed_id: [u8; 32],
    price: i64,
    conf: u64,
    exponent: i32,
    publish_time: i64,
    prev_publish_time: i64,
    ema_price: i64,
    ema_conf: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug)]
struct PriceUpdateV2Wire {
    write_authority: Pubkey,
    verification_level: VerificationLevelWire,
    price_message: PriceFeedMessageWire,
    posted_slot: u64,
}
