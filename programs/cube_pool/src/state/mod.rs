pub mod cube_token;
pub mod guardian_set;
pub mod pool;

pub use cube_token::*;
pub use guardian_set::*;
pub use pool::*;
