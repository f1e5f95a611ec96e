use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED};
use crate::errors::MarketplaceError;
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.name.as_bytes()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(address = listing.asset_mint)]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = asset_mint,
        associated_token::authority = owner,
    )]
    pub owner_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = listing,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        close = owner,
        has_one = marketplace,
        constraint = listing.owner == owner.key() @ MarketplaceError::NotOwner,
        seeds = [LISTING_SEED, marketplace.key().as_ref(), asset_mint.key().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
    // Return the escrowed unit to the owner, the listing PDA signing for its vault
    let marketplace_key = ctx.accounts.marketplace.key();
    let asset_mint_key = ctx.accounts.asset_mint.key();
    let seeds = &[
        LISTING_SEED,
        marketplace_key.as_ref(),
        asset_mint_key.as_ref(),
        &[ctx.accounts.listing.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
                to: ctx.accounts.owner_ata.to_account_info(),
                authority: ctx.accounts.listing.to_account_info(),
            },
            signer_seeds,
        ),
        1,
        ctx.accounts.asset_mint.decimals,
    )?;

    // Vault rent returns to the owner; the listing closes to the owner on exit
    close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.owner.to_account_info(),
            authority: ctx.accounts.listing.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(ListingCancelled {
        owner: ctx.accounts.owner.key(),
        asset_mint: asset_mint_key,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Listing cancelled for mint {}", asset_mint_key);

    Ok(())
}

#[event]
pub struct ListingCancelled {
    pub owner: Pubkey,
    pub asset_mint: Pubkey,
    pub timestamp: i64,
}
