use anchor_lang::prelude::*;

#[account]
pub struct Listing {
    pub owner: Pubkey,       // 32 bytes - the lister; only signer allowed to cancel
    pub asset_mint: Pubkey,  // 32 bytes - mint of the escrowed asset
    pub marketplace: Pubkey, // 32 bytes - owning marketplace
    pub price: u64,          // 8 bytes - asking price in lamports
    pub bump: u8,            // 1 byte
}

impl Listing {
    pub const SIZE: usize = 32 + 32 + 32 + 8 + 1;
}
