use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Must be owner or guardian")]
    NotOwnerOrGuardian,
    #[msg("Cube token not registered")]
    TokenNotRegistered,
    #[msg("Cube token already registered")]
    TokenAlreadyRegistered,
    #[msg("Deposits are paused")]
    DepositsPaused,
    #[msg("Withdrawals are paused")]
    WithdrawalsPaused,
    #[msg("Amount should be > 0")]
    ZeroAmount,
    #[msg("Zero address")]
    ZeroAddress,
    #[msg("Invalid price")]
    InvalidPrice,
    #[msg("Price feed does not match the cube token symbol")]
    InvalidPriceFeed,
    #[msg("Invalid symbol")]
    InvalidSymbol,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Max pool share exceeded")]
    MaxPoolShareExceeded,
    #[msg("Max pool balance exceeded")]
    MaxPoolBalanceExceeded,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Invalid pool state")]
    InvalidPoolState,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Reentrant call")]
    Reentrancy,
    #[msg("Pool is finalized")]
    Finalized,
    #[msg("Guardian set is full")]
    GuardianSetFull,
    #[msg("Guardian already exists")]
    GuardianAlreadyExists,
    #[msg("Guardian not found")]
    GuardianNotFound,
    #[msg("Invalid guardian set")]
    InvalidGuardianSet,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid cube token account")]
    InvalidCubeToken,
    #[msg("Max stale time should be >= 0")]
    InvalidStaleness,
    #[msg("Nothing to collect")]
    NothingToCollect,
}
