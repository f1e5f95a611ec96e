use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("5L3hhkPjUXDp2GZYgzumvVLHBNVEnCsCbdfAyLirM5DD");

#[program]
pub mod escrow_marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        name: String,
        fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx, name, fee_bps)
    }

    pub fn create_listing(ctx: Context<CreateListing>, price: u64) -> Result<()> {
        instructions::create_listing::create_listing(ctx, price)
    }

    pub fn purchase(ctx: Context<Purchase>) -> Result<()> {
        instructions::purchase::purchase(ctx)
    }

    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        instructions::cancel_listing::cancel_listing(ctx)
    }
}

#[cfg(test)]
mod tests;
