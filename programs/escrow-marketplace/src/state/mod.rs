pub mod listing;
pub mod marketplace;

pub use listing::*;
pub use marketplace::*;
