use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid symbol length")]
    InvalidSymbolLength,
    #[msg("Symbol must not contain NUL bytes")]
    InvalidSymbolByte,
    #[msg("Invalid staleness window")]
    InvalidStaleness,
    #[msg("Feed source does not accept this update")]
    WrongFeedSource,
    #[msg("Invalid oracle account")]
    InvalidOracle,
    #[msg("Invalid price")]
    InvalidPrice,
    #[msg("Oracle update is older than the stored price")]
    OutdatedUpdate,
    #[msg("Math overflow")]
    MathOverflow,
}
