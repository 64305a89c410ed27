use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, PRICE_SCALE},
    error::ErrorCode,
    helpers::{mul_bps, narrow_u128, narrow_u64, value_of, wide_div, wide_product},
    state::{CubeToken, EquityRefresh, Pool},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositOutcome {
    pub shares_out: u64,
    pub fee: u64,
    pub protocol_fee: u64,
    pub price: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawOutcome {
    pub amount_out: u64,
    pub gross_out: u64,
    pub fee: u64,
    pub protocol_fee: u64,
    pub price: u128,
}

/// Shares minted for `net_in` collateral. An empty pool mints 1:1.
pub fn shares_for_deposit(
    net_in: u64,
    total_equity: u128,
    price: u128,
    pool_balance: u64,
) -> Result<u64> {
    if pool_balance == 0 || total_equity == 0 {
        return Ok(net_in);
    }
    let per_price = wide_div(wide_product(&[net_in as u128, total_equity])?, price)?;
    narrow_u64(wide_div(per_price, pool_balance as u128)?)
}

/// Collateral owed for burning `shares_in`, before fees. Zero equity redeems 1:1.
pub fn collateral_for_shares(
    shares_in: u64,
    price: u128,
    pool_balance: u64,
    total_equity: u128,
) -> Result<u64> {
    if total_equity == 0 {
        return Ok(shares_in);
    }
    narrow_u64(wide_div(
        wide_product(&[price, shares_in as u128, pool_balance as u128])?,
        total_equity,
    )?)
}

/// Deposit `amount` of collateral into `token`.
///
/// Nothing is written to `pool` or `token` unless every check passes,
/// including the post-deposit caps.
pub fn apply_deposit(
    pool: &mut Pool,
    token: &mut CubeToken,
    amount: u64,
    spot_price: u64,
    now: i64,
) -> Result<DepositOutcome> {
    require!(token.added, ErrorCode::TokenNotRegistered);
    require!(!token.deposit_paused, ErrorCode::DepositsPaused);
    require!(amount > 0, ErrorCode::ZeroAmount);

    let refresh = pool.refresh_token_equity(token, spot_price)?;
    let price = refresh.price;

    let fee = mul_bps(amount, token.fee_bps)?;
    let protocol_fee = mul_bps(fee, pool.protocol_fee_bps)?;
    let net_in = amount
        .checked_sub(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let shares_out = shares_for_deposit(net_in, refresh.total_equity, price, pool.pool_balance)?;
    require!(shares_out > 0, ErrorCode::ZeroAmount);

    // The non-protocol part of the fee stays with share holders.
    let pool_balance = pool
        .pool_balance
        .checked_add(net_in)
        .and_then(|b| b.checked_add(fee - protocol_fee))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let accrued_fees = pool
        .accrued_fees
        .checked_add(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let total_supply = token
        .total_supply
        .checked_add(shares_out)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let total_equity = refresh
        .total_equity
        .checked_add(value_of(shares_out, price)?)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    if token.max_pool_share_bps > 0 {
        let token_share = wide_product(&[value_of(total_supply, price)?, BPS_DENOM as u128])?;
        let cap = wide_product(&[token.max_pool_share_bps as u128, total_equity])?;
        require!(token_share <= cap, ErrorCode::MaxPoolShareExceeded);
    }
    if pool.max_pool_balance > 0 {
        require!(
            pool_balance <= pool.max_pool_balance,
            ErrorCode::MaxPoolBalanceExceeded
        );
    }

    pool.commit_refresh(token, &refresh, now);
    pool.total_equity = total_equity;
    pool.pool_balance = pool_balance;
    pool.accrued_fees = accrued_fees;
    token.total_supply = total_supply;

    Ok(DepositOutcome {
        shares_out,
        fee,
        protocol_fee,
        price,
    })
}

/// Burn `shares_in` of `token` and compute the collateral to pay out.
///
/// The caller's own balance is checked by the instruction; here `shares_in`
/// is bounded by the tracked supply.
pub fn apply_withdraw(
    pool: &mut Pool,
    token: &mut CubeToken,
    shares_in: u64,
    spot_price: u64,
    now: i64,
) -> Result<WithdrawOutcome> {
    require!(token.added, ErrorCode::TokenNotRegistered);
    require!(!token.withdraw_paused, ErrorCode::WithdrawalsPaused);
    require!(shares_in > 0, ErrorCode::ZeroAmount);
    require!(
        shares_in <= token.total_supply,
        ErrorCode::InsufficientShares
    );

    let refresh = pool.refresh_token_equity(token, spot_price)?;
    let price = refresh.price;

    let gross_out =
        collateral_for_shares(shares_in, price, pool.pool_balance, refresh.total_equity)?;
    require!(gross_out > 0, ErrorCode::ZeroAmount);
    require!(
        pool.pool_balance >= gross_out,
        ErrorCode::InvalidPoolState
    );

    let total_equity = refresh
        .total_equity
        .checked_sub(value_of(shares_in, price)?)
        .ok_or_else(|| error!(ErrorCode::InvalidPoolState))?;

    let fee = mul_bps(gross_out, token.fee_bps)?;
    let protocol_fee = mul_bps(fee, pool.protocol_fee_bps)?;
    let amount_out = gross_out - fee;

    let pool_balance = pool.pool_balance - gross_out + (fee - protocol_fee);
    let accrued_fees = pool
        .accrued_fees
        .checked_add(protocol_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    pool.commit_refresh(token, &refresh, now);
    pool.total_equity = total_equity;
    pool.pool_balance = pool_balance;
    pool.accrued_fees = accrued_fees;
    token.total_supply -= shares_in;

    Ok(WithdrawOutcome {
        amount_out,
        gross_out,
        fee,
        protocol_fee,
        price,
    })
}

/// Refreshes `token` only if it has not been touched for `max_stale_secs`.
pub fn refresh_if_stale(
    pool: &mut Pool,
    token: &mut CubeToken,
    spot_price: u64,
    now: i64,
    max_stale_secs: i64,
) -> Result<Option<EquityRefresh>> {
    if !token.added || !token.is_stale(now, max_stale_secs)? {
        return Ok(None);
    }
    pool.update_token(token, spot_price, now).map(Some)
}

/// Collateral redeemable for one whole share (18 decimals), before fees.
pub fn quote_price(pool: &Pool, token: &CubeToken, spot_price: u64) -> Result<u128> {
    require!(token.added, ErrorCode::TokenNotRegistered);
    let refresh = pool.refresh_token_equity(token, spot_price)?;
    if refresh.total_equity == 0 {
        return Ok(PRICE_SCALE);
    }
    narrow_u128(wide_div(
        wide_product(&[refresh.price, pool.pool_balance as u128, PRICE_SCALE])?,
        refresh.total_equity,
    )?)
}

pub fn quote_deposit(
    pool: &Pool,
    token: &CubeToken,
    amount: u64,
    spot_price: u64,
    now: i64,
) -> Result<DepositOutcome> {
    apply_deposit(&mut pool.clone(), &mut token.clone(), amount, spot_price, now)
}

pub fn quote_withdraw(
    pool: &Pool,
    token: &CubeToken,
    shares_in: u64,
    spot_price: u64,
    now: i64,
) -> Result<WithdrawOutcome> {
    apply_withdraw(&mut pool.clone(), &mut token.clone(), shares_in, spot_price, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BTC_20K: u64 = 20_000 * 100_000_000;
    const BTC_21K: u64 = 21_000 * 100_000_000;
    const ONE: u64 = 1_000_000_000_000_000_000;

    fn pool(protocol_fee_bps: u16, max_pool_balance: u64) -> Pool {
        Pool {
            admin: Pubkey::new_unique(),
            collateral_mint: Pubkey::new_unique(),
            collateral_vault: Pubkey::new_unique(),
            guardian_set: Pubkey::new_unique(),
            pool_balance: 0,
            total_equity: 0,
            accrued_fees: 0,
            max_pool_balance,
            protocol_fee_bps,
            num_cube_tokens: 0,
            finalized: false,
            locked: false,
            created_at: 0,
            last_updated_at: 0,
            bump: 255,
            authority_bump: 254,
        }
    }

    fn cube_token(inverse: bool, fee_bps: u16, max_pool_share_bps: u16) -> CubeToken {
        let mut currency_key = [0u8; 16];
        currency_key[..3].copy_from_slice(b"BTC");
        CubeToken {
            pool: Pubkey::default(),
            share_mint: Pubkey::new_unique(),
            currency_key,
            inverse,
            index: inverse as u32,
            added: true,
            deposit_paused: false,
            withdraw_paused: false,
            price_update_paused: false,
            fee_bps,
            max_pool_share_bps,
            initial_spot_price: BTC_20K,
            last_price: PRICE_SCALE,
            last_updated: 0,
            total_supply: 0,
            bump: 255,
        }
    }

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error {other:?}"),
        }
    }

    fn assert_equity_matches(pool: &Pool, tokens: &[&CubeToken]) {
        let sum: u128 = tokens
            .iter()
            .map(|t| t.total_supply as u128 * t.last_price)
            .sum();
        assert_eq!(pool.total_equity, sum);
    }

    #[test]
    fn test_bootstrap_then_proportional_deposits() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);

        let first = apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 10).unwrap();
        assert_eq!(first.shares_out, ONE);
        assert_eq!(first.price, PRICE_SCALE);

        let second = apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 20).unwrap();
        assert_eq!(second.shares_out, ONE);

        assert_eq!(pool.pool_balance, 2 * ONE);
        assert_eq!(long.total_supply, 2 * ONE);
        assert_eq!(long.last_updated, 20);
        assert_equity_matches(&pool, &[&long]);
    }

    #[test]
    fn test_price_move_shifts_collateral_from_inverse_to_long() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        let mut inverse = cube_token(true, 0, 0);

        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();
        let inv = apply_deposit(&mut pool, &mut inverse, ONE, BTC_20K, 0).unwrap();
        assert_eq!(inv.shares_out, ONE);

        for token in [&mut long, &mut inverse] {
            refresh_if_stale(&mut pool, token, BTC_21K, 3_600, 60)
                .unwrap()
                .unwrap();
        }
        assert_eq!(long.last_price, 1_157_625_000_000_000_000);
        assert_eq!(inverse.last_price, 863_837_598_531_476_082);
        assert_equity_matches(&pool, &[&long, &inverse]);

        let out = apply_withdraw(&mut pool, &mut long, ONE, BTC_21K, 3_600).unwrap();
        assert_eq!(out.amount_out, 1_145_334_077_257_699_690);
        assert_eq!(pool.pool_balance, 854_665_922_742_300_310);
        assert_equity_matches(&pool, &[&long, &inverse]);

        let out = apply_withdraw(&mut pool, &mut inverse, ONE, BTC_21K, 3_600).unwrap();
        assert_eq!(out.amount_out, 854_665_922_742_300_310);
        assert_eq!(pool.pool_balance, 0);
        assert_eq!(pool.total_equity, 0);
    }

    #[test]
    fn test_round_trip_on_empty_pool_is_exact() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);

        let dep = apply_deposit(&mut pool, &mut long, 123_456_789, BTC_20K, 0).unwrap();
        let out = apply_withdraw(&mut pool, &mut long, dep.shares_out, BTC_20K, 0).unwrap();
        assert_eq!(out.amount_out, 123_456_789);
        assert_eq!(pool.pool_balance, 0);
        assert_eq!(pool.total_equity, 0);
        assert_eq!(long.total_supply, 0);
    }

    #[test]
    fn test_round_trip_on_active_pool_rounds_down() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        let mut inverse = cube_token(true, 0, 0);
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();
        apply_deposit(&mut pool, &mut inverse, ONE, BTC_20K, 0).unwrap();
        pool.update_token(&mut inverse, BTC_21K, 1).unwrap();

        let amount = 300_000_000_000_000_000;
        let dep = apply_deposit(&mut pool, &mut long, amount, BTC_21K, 1).unwrap();
        assert_eq!(dep.shares_out, 261_932_309_495_494_147);
        let out = apply_withdraw(&mut pool, &mut long, dep.shares_out, BTC_21K, 1).unwrap();
        assert!(out.amount_out <= amount);
        assert!(amount - out.amount_out <= 2);
    }

    #[test]
    fn test_fee_split_conserves_collateral() {
        let mut pool = pool(10_000, 0);
        let mut long = cube_token(false, 100, 0);

        let dep = apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();
        assert_eq!(dep.fee, 10_000_000_000_000_000);
        assert_eq!(dep.protocol_fee, dep.fee);
        assert_eq!(dep.shares_out, 990_000_000_000_000_000);
        assert_eq!(pool.pool_balance + pool.accrued_fees, ONE);

        let out = apply_withdraw(&mut pool, &mut long, dep.shares_out, BTC_20K, 0).unwrap();
        assert_eq!(out.gross_out, 990_000_000_000_000_000);
        assert_eq!(out.amount_out, 980_100_000_000_000_000);
        assert_eq!(pool.pool_balance, 0);
        assert_eq!(pool.accrued_fees, 19_900_000_000_000_000);
        assert_eq!(pool.accrued_fees, ONE - out.amount_out);
    }

    #[test]
    fn test_pool_keeps_non_protocol_fee() {
        let mut pool = pool(2_000, 0);
        let mut long = cube_token(false, 100, 0);

        let dep = apply_deposit(&mut pool, &mut long, 2 * ONE, BTC_20K, 0).unwrap();
        assert_eq!(dep.protocol_fee, 4_000_000_000_000_000);
        assert_eq!(pool.pool_balance, 1_996_000_000_000_000_000);
        assert_eq!(pool.pool_balance + pool.accrued_fees, 2 * ONE);
    }

    #[test]
    fn test_fees_never_enter_equity() {
        let mut pool = pool(5_000, 0);
        let mut long = cube_token(false, 300, 0);

        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();
        apply_deposit(&mut pool, &mut long, ONE / 3, BTC_21K, 5).unwrap();
        apply_withdraw(&mut pool, &mut long, ONE / 7, BTC_20K, 9).unwrap();

        assert!(pool.accrued_fees > 0);
        assert_equity_matches(&pool, &[&long]);
    }

    #[test]
    fn test_paused_flags_reject_without_mutation() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();

        long.deposit_paused = true;
        let (pool_before, token_before) = (pool.clone(), long.clone());
        let err = apply_deposit(&mut pool, &mut long, ONE, BTC_21K, 5).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::DepositsPaused));
        assert_eq!(pool, pool_before);
        assert_eq!(long, token_before);

        long.deposit_paused = false;
        long.withdraw_paused = true;
        let err = apply_withdraw(&mut pool, &mut long, ONE, BTC_21K, 5).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::WithdrawalsPaused));
        assert_eq!(pool, pool_before);
    }

    #[test]
    fn test_max_pool_share_reverts_whole_deposit() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 6_000);
        let mut inverse = cube_token(true, 0, 0);

        apply_deposit(&mut pool, &mut inverse, ONE, BTC_20K, 0).unwrap();
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();

        let (pool_before, token_before) = (pool.clone(), long.clone());
        let err = apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::MaxPoolShareExceeded));
        assert_eq!(pool, pool_before);
        assert_eq!(long, token_before);
    }

    #[test]
    fn test_max_pool_balance() {
        let mut pool = pool(2_000, 2 * ONE);
        let mut long = cube_token(false, 100, 0);

        let err = apply_deposit(&mut pool, &mut long, 2_030_000_000_000_000_000, BTC_20K, 0)
            .unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::MaxPoolBalanceExceeded));
        assert_eq!(pool.pool_balance, 0);

        apply_deposit(&mut pool, &mut long, 2 * ONE, BTC_20K, 0).unwrap();
        assert_eq!(pool.pool_balance, 1_996_000_000_000_000_000);
    }

    #[test]
    fn test_paused_price_updates_use_last_price() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 7).unwrap();

        long.price_update_paused = true;
        let dep = apply_deposit(&mut pool, &mut long, ONE, 0, 50).unwrap();
        assert_eq!(dep.price, PRICE_SCALE);
        assert_eq!(dep.shares_out, ONE);
        assert_eq!(long.last_updated, 7);

        long.price_update_paused = false;
        let before = pool.clone();
        let err = apply_deposit(&mut pool, &mut long, ONE, 0, 60).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::InvalidPrice));
        assert_eq!(pool, before);
    }

    #[test]
    fn test_withdraw_bounds() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();

        let err = apply_withdraw(&mut pool, &mut long, ONE + 1, BTC_20K, 0).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::InsufficientShares));
        let err = apply_withdraw(&mut pool, &mut long, 0, BTC_20K, 0).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::ZeroAmount));
    }

    #[test]
    fn test_unregistered_token_is_rejected() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        long.added = false;

        let err = apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::TokenNotRegistered));
        let err = quote_price(&pool, &long, BTC_20K).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::TokenNotRegistered));
    }

    #[test]
    fn test_refresh_if_stale_skips_fresh_tokens() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 0, 0);
        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 100).unwrap();

        assert!(refresh_if_stale(&mut pool, &mut long, BTC_21K, 130, 60)
            .unwrap()
            .is_none());
        assert_eq!(long.last_price, PRICE_SCALE);

        let refresh = refresh_if_stale(&mut pool, &mut long, BTC_21K, 160, 60)
            .unwrap()
            .unwrap();
        assert!(refresh.refreshed);
        assert_eq!(long.last_updated, 160);
        assert_eq!(pool.total_equity, ONE as u128 * 1_157_625_000_000_000_000);
    }

    #[test]
    fn test_quotes_do_not_mutate() {
        let mut pool = pool(0, 0);
        let mut long = cube_token(false, 100, 0);
        let mut inverse = cube_token(true, 0, 0);
        assert_eq!(quote_price(&pool, &long, BTC_20K).unwrap(), PRICE_SCALE);

        apply_deposit(&mut pool, &mut long, ONE, BTC_20K, 0).unwrap();
        apply_deposit(&mut pool, &mut inverse, ONE, BTC_20K, 0).unwrap();

        let before = (pool.clone(), long.clone());
        let quoted = quote_deposit(&pool, &long, ONE, BTC_21K, 1).unwrap();
        let quoted_price = quote_price(&pool, &long, BTC_21K).unwrap();
        assert_eq!((pool.clone(), long.clone()), before);
        assert!(quoted_price > PRICE_SCALE);

        let actual = apply_deposit(&mut pool, &mut long, ONE, BTC_21K, 1).unwrap();
        assert_eq!(actual, quoted);

        let quoted = quote_withdraw(&pool, &long, actual.shares_out, BTC_21K, 2).unwrap();
        let actual = apply_withdraw(&mut pool, &mut long, actual.shares_out, BTC_21K, 2).unwrap();
        assert_eq!(actual, quoted);
    }

    #[test]
    fn test_reentrancy_lock() {
        let mut pool = pool(0, 0);
        pool.lock().unwrap();
        let err = pool.lock().unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::Reentrancy));
        pool.unlock();
        pool.lock().unwrap();
    }

    #[derive(Clone, Debug)]
    enum Op {
        Deposit(usize, u64),
        Withdraw(usize, u16),
        Spot(u64),
        Update(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..2usize, 1..1_000_000_000u64).prop_map(|(t, a)| Op::Deposit(t, a)),
            (0..2usize, 1..=10_000u16).prop_map(|(t, f)| Op::Withdraw(t, f)),
            (2_000u64 * 100_000_000..200_000u64 * 100_000_000).prop_map(Op::Spot),
            (0..2usize).prop_map(Op::Update),
        ]
    }

    proptest! {
        #[test]
        fn prop_ledger_invariants_hold(
            fee_bps in 0..500u16,
            protocol_fee_bps in 0..=10_000u16,
            ops in prop::collection::vec(op_strategy(), 1..40),
        ) {
            let mut pool = pool(protocol_fee_bps, 0);
            let mut tokens = [cube_token(false, fee_bps, 0), cube_token(true, fee_bps, 0)];
            let mut spot = BTC_20K;
            let mut vault: u64 = 0;

            for (i, op) in ops.into_iter().enumerate() {
                let now = i as i64;
                let snapshot = (pool.clone(), tokens.clone());
                let result = match op {
                    Op::Deposit(t, amount) => apply_deposit(&mut pool, &mut tokens[t], amount, spot, now)
                        .map(|_| vault += amount),
                    Op::Withdraw(t, fraction) => {
                        let shares = (tokens[t].total_supply as u128 * fraction as u128 / 10_000) as u64;
                        apply_withdraw(&mut pool, &mut tokens[t], shares, spot, now)
                            .map(|out| vault -= out.amount_out)
                    }
                    Op::Spot(price) => {
                        spot = price;
                        Ok(())
                    }
                    Op::Update(t) => pool.update_token(&mut tokens[t], spot, now).map(|_| ()),
                };

                if let Err(err) = result {
                    let err_code = code(err);
                    prop_assert_ne!(err_code, u32::from(ErrorCode::InvalidPoolState));
                    prop_assert_ne!(err_code, u32::from(ErrorCode::MathOverflow));
                    prop_assert_eq!(&pool, &snapshot.0);
                    prop_assert_eq!(&tokens, &snapshot.1);
                }

                let sum: u128 = tokens.iter().map(|t| t.total_supply as u128 * t.last_price).sum();
                prop_assert_eq!(pool.total_equity, sum);
                prop_assert_eq!(vault, pool.pool_balance + pool.accrued_fees);
            }
        }
    }
}
