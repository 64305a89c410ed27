pub mod add_feed;
pub mod initialize_registry;
pub mod post_price;
pub mod set_admin;
pub mod sync_pyth_price;
pub mod update_feed;

pub use add_feed::*;
pub use initialize_registry::*;
pub use post_price::*;
pub use set_admin::*;
pub use sync_pyth_price::*;
pub use update_feed::*;
