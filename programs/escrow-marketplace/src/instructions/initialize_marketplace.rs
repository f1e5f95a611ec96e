use anchor_lang::prelude::*;

use crate::constants::{MARKETPLACE_SEED, TREASURY_SEED};
use crate::errors::MarketplaceError;
use crate::state::Marketplace;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [MARKETPLACE_SEED, name.as_bytes()],
        bump,
        space = 8 + Marketplace::SIZE,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        seeds = [TREASURY_SEED, marketplace.key().as_ref()],
        bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(
    ctx: Context<InitializeMarketplace>,
    name: String,
    fee_bps: u16,
) -> Result<()> {
    require!(
        Marketplace::is_valid_name(&name),
        MarketplaceError::NameTooLong
    );
    require!(
        Marketplace::is_valid_fee(fee_bps),
        MarketplaceError::InvalidFee
    );

    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.admin = ctx.accounts.admin.key();
    marketplace.fee_bps = fee_bps;
    marketplace.bump = ctx.bumps.marketplace;
    marketplace.treasury_bump = ctx.bumps.treasury;
    marketplace.name = name.clone();

    emit!(MarketplaceInitialized {
        admin: marketplace.admin,
        treasury: ctx.accounts.treasury.key(),
        name,
        fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace initialized with {}bps fee", fee_bps);

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub name: String,
    pub fee_bps: u16,
    pub timestamp: i64,
}
