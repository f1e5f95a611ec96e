use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Fee exceeds 10000 basis points")]
    InvalidFee,

    #[msg("Marketplace name must be 1-32 bytes")]
    NameTooLong,

    #[msg("Listing price must be greater than zero")]
    InvalidPrice,

    #[msg("Seller does not hold the asset")]
    InsufficientAssetBalance,

    #[msg("Buyer cannot cover the listing price")]
    InsufficientFunds,

    #[msg("Only the listing owner may cancel")]
    NotOwner,

    #[msg("Custody vault does not hold the asset")]
    VaultEmpty,

    #[msg("Listing does not exist")]
    ListingNotFound,

    #[msg("Math overflow")]
    MathOverflow,
}
