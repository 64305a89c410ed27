pub mod access;
pub mod accounting;
pub mod math;
pub mod pricing;
pub mod token;

pub use access::*;
pub use accounting::*;
pub use math::*;
pub use pricing::*;
pub use token::*;
