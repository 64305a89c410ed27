pub mod feeds_config;
pub mod price_feed;

pub use feeds_config::*;
pub use price_feed::*;
