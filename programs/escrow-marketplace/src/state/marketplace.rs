use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS, MAX_NAME_LEN};
use crate::errors::MarketplaceError;

#[account]
pub struct Marketplace {
    pub admin: Pubkey,      // 32 bytes - creating/controlling identity
    pub fee_bps: u16,       // 2 bytes - marketplace fee (basis points)
    pub bump: u8,           // 1 byte
    pub treasury_bump: u8,  // 1 byte - bump of the derived treasury PDA
    pub name: String,       // 4 + 32 bytes - immutable, part of the PDA seed
}

impl Marketplace {
    pub const SIZE: usize = 32 + 2 + 1 + 1 + 4 + MAX_NAME_LEN;

    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.len() <= MAX_NAME_LEN
    }

    pub fn is_valid_fee(fee_bps: u16) -> bool {
        fee_bps <= MAX_FEE_BPS
    }

    /// Splits a listing price into (seller_share, fee). The fee is floored,
    /// so any truncated remainder stays with the seller and the two parts
    /// always sum back to the price.
    pub fn split_price(&self, price: u64) -> Result<(u64, u64)> {
        let fee = price
            .checked_mul(self.fee_bps as u64)
            .ok_or(MarketplaceError::MathOverflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(MarketplaceError::MathOverflow)?;

        let seller_share = price
            .checked_sub(fee)
            .ok_or(MarketplaceError::MathOverflow)?;

        Ok((seller_share, fee))
    }
}
