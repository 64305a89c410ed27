pub mod add_guardian;
pub mod collect_fees;
pub mod configure_cube_token;
pub mod configure_pool;
pub mod deposit;
pub mod emergency_withdraw;
pub mod finalize;
pub mod initialize_pool;
pub mod quote;
pub mod refresh_stale;
pub mod register_cube_token;
pub mod remove_guardian;
pub mod set_paused;
pub mod transfer_admin;
pub mod update;
pub mod withdraw;

pub use add_guardian::*;
pub use collect_fees::*;
pub use configure_cube_token::*;
pub use configure_pool::*;
pub use deposit::*;
pub use emergency_withdraw::*;
pub use finalize::*;
pub use initialize_pool::*;
pub use quote::*;
pub use refresh_stale::*;
pub use register_cube_token::*;
pub use remove_guardian::*;
pub use set_paused::*;
pub use transfer_admin::*;
pub use update::*;
pub use withdraw::*;
