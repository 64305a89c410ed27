use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{GuardianSet, Pool},
};

pub fn require_admin(admin: &Signer<'_>, pool: &Account<Pool>) -> Result<()> {
    require_keys_eq!(admin.key(), pool.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_owner_or_guardian(
    authority: &Signer<'_>,
    pool: &Account<Pool>,
    guardian_set: &Account<GuardianSet>,
) -> Result<()> {
    if authority.key() == pool.admin {
        return Ok(());
    }

    require!(
        guardian_set.is_guardian(&authority.key()),
        ErrorCode::NotOwnerOrGuardian
    );
    Ok(())
}
