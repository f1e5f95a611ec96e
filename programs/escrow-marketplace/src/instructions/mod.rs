pub mod initialize_marketplace;
pub mod create_listing;
pub mod purchase;
pub mod cancel_listing;

pub use initialize_marketplace::*;
pub use create_listing::*;
pub use purchase::*;
pub use cancel_listing::*;
