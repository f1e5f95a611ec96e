use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::constants::{LISTING_SEED, MARKETPLACE_SEED, TREASURY_SEED};
use crate::errors::MarketplaceError;
use crate::state::{Listing, Marketplace};

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: matched against the listing record; receives payment and rent refunds
    #[account(mut, address = listing.owner)]
    pub seller: UncheckedAccount<'info>,

    #[account(address = listing.asset_mint)]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.name.as_bytes()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = asset_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = listing,
        constraint = vault.amount == 1 @ MarketplaceError::VaultEmpty,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        close = seller,
        has_one = marketplace,
        seeds = [LISTING_SEED, marketplace.key().as_ref(), asset_mint.key().as_ref()],
        bump = listing.bump,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, marketplace.key().as_ref()],
        bump = marketplace.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn purchase(ctx: Context<Purchase>) -> Result<()> {
    let price = ctx.accounts.listing.price;
    let (seller_share, fee) = ctx.accounts.marketplace.split_price(price)?;

    require!(
        ctx.accounts.buyer.lamports() >= price,
        MarketplaceError::InsufficientFunds
    );

    // Pay the seller
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        seller_share,
    )?;

    // Pay the marketplace treasury
    if fee > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    // Release the asset to the buyer, the listing PDA signing for its vault
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
                to: ctx.accounts.buyer_ata.to_account_info(),
                authority: ctx.accounts.listing.to_account_info(),
            },
            signer_seeds,
        ),
        1,
        ctx.accounts.asset_mint.decimals,
    )?;

    // The vault cannot be closed with a `close` constraint, so close it
    // through the token program; rent goes back to the seller who funded it.
    // The listing account itself closes to the seller on exit.
    close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.vault.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: ctx.accounts.listing.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(ListingSold {
        buyer: ctx.accounts.buyer.key(),
        seller: ctx.accounts.seller.key(),
        asset_mint: asset_mint_key,
        price,
        seller_share,
        fee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Listing sold for {} lamports ({} fee)", price, fee);

    Ok(())
}

#[event]
pub struct ListingSold {
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub asset_mint: Pubkey,
    pub price: u64,
    pub seller_share: u64,
    pub fee: u64,
    pub timestamp: i64,
}
