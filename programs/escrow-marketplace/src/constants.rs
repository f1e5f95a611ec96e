// Seeds
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const LISTING_SEED: &[u8] = b"listing";

// Fee arithmetic
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;

// The marketplace name doubles as a PDA seed, so it must stay short
pub const MAX_NAME_LEN: usize = 32;
