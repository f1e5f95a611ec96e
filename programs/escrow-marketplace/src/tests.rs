use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;
use crate::state::{Listing, Marketplace};

fn marketplace_with_fee(fee_bps: u16) -> Marketplace {
    Marketplace {
        admin: Pubkey::new_unique(),
        fee_bps,
        bump: 255,
        treasury_bump: 254,
        name: "Test3 Marketplace".to_string(),
    }
}

#[test]
fn test_marketplace_size() {
    // 32 admin + 2 fee_bps + 1 bump + 1 treasury_bump + (4 + 32) name
    assert_eq!(Marketplace::SIZE, 32 + 2 + 1 + 1 + 4 + MAX_NAME_LEN);
    assert_eq!(Marketplace::SIZE, 72);
}

#[test]
fn test_listing_size() {
    // 32 owner + 32 asset_mint + 32 marketplace + 8 price + 1 bump
    assert_eq!(Listing::SIZE, 105);
}

#[test]
fn test_fee_split_observed_scenario() {
    // 0.005 SOL listing at 2 bps
    let marketplace = marketplace_with_fee(2);
    let (seller_share, fee) = marketplace.split_price(5_000_000).unwrap();
    assert_eq!(fee, 1_000);
    assert_eq!(seller_share, 4_999_000);
}

#[test]
fn test_fee_split_conserves_price() {
    for fee_bps in [0u16, 1, 2, 250, 9_999, 10_000] {
        let marketplace = marketplace_with_fee(fee_bps);
        for price in [1u64, 999, 5_000_000, 1_000_000_000] {
            let (seller_share, fee) = marketplace.split_price(price).unwrap();
            assert_eq!(seller_share + fee, price);
        }
    }
}

#[test]
fn test_fee_floor_favors_seller() {
    // 999 * 250 / 10_000 = 24.975, truncated to 24
    let marketplace = marketplace_with_fee(250);
    let (seller_share, fee) = marketplace.split_price(999).unwrap();
    assert_eq!(fee, 24);
    assert_eq!(seller_share, 975);
}

#[test]
fn test_fee_split_extremes() {
    let free = marketplace_with_fee(0);
    assert_eq!(free.split_price(5_000_000).unwrap(), (5_000_000, 0));

    let all_fee = marketplace_with_fee(10_000);
    assert_eq!(all_fee.split_price(5_000_000).unwrap(), (0, 5_000_000));
}

#[test]
fn test_fee_split_overflow() {
    let marketplace = marketplace_with_fee(10_000);
    assert!(marketplace.split_price(u64::MAX).is_err());
}

#[test]
fn test_name_validation() {
    assert!(Marketplace::is_valid_name("Test3 Marketplace"));
    assert!(!Marketplace::is_valid_name(""));
    assert!(Marketplace::is_valid_name(&"A".repeat(MAX_NAME_LEN)));
    assert!(!Marketplace::is_valid_name(&"A".repeat(MAX_NAME_LEN + 1)));
}

#[test]
fn test_fee_validation() {
    assert!(Marketplace::is_valid_fee(0));
    assert!(Marketplace::is_valid_fee(2));
    assert!(Marketplace::is_valid_fee(10_000));
    assert!(!Marketplace::is_valid_fee(10_001));
}

#[test]
fn test_listing_record() {
    let owner = Pubkey::new_unique();
    let marketplace = Pubkey::new_unique();
    let listing = Listing {
        owner,
        asset_mint: Pubkey::new_unique(),
        marketplace,
        price: 5_000_000,
        bump: 255,
    };

    assert_eq!(listing.owner, owner);
    assert_eq!(listing.marketplace, marketplace);
    assert!(listing.price > 0);
}
