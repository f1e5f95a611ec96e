use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED};
use crate::errors::MarketplaceError;
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
pub struct CreateListing<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.name.as_bytes()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    pub asset_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = owner,
        constraint = owner_ata.amount >= 1 @ MarketplaceError::InsufficientAssetBalance,
    )]
    pub owner_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = owner,
        seeds = [LISTING_SEED, marketplace.key().as_ref(), asset_mint.key().as_ref()],
        bump,
        space = 8 + Listing::SIZE,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = asset_mint,
        associated_token::authority = listing,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn create_listing(ctx: Context<CreateListing>, price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);

    let listing = &mut ctx.accounts.listing;
    listing.owner = ctx.accounts.owner.key();
    listing.asset_mint = ctx.accounts.asset_mint.key();
    listing.marketplace = ctx.accounts.marketplace.key();
    listing.price = price;
    listing.bump = ctx.bumps.listing;

    // Move the single asset unit into program custody
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.owner_ata.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        1,
        ctx.accounts.asset_mint.decimals,
    )?;

    emit!(ListingCreated {
        owner: ctx.accounts.owner.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        marketplace: ctx.accounts.marketplace.key(),
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Listing created for mint {} at {} lamports",
        ctx.accounts.asset_mint.key(),
        price
    );

    Ok(())
}

#[event]
pub struct ListingCreated {
    pub owner: Pubkey,
    pub asset_mint: Pubkey,
    pub marketplace: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}
