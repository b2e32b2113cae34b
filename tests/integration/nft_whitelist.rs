/// NFT deposits checked against the live whitelist registry.
use crate::utils::{constants::*, Launchpad};
use soroban_sdk::{testutils::Address as _, token, Address};
use token_sale::{Error as SaleError, LockPool};

#[test]
fn test_nft_cap_moves_with_the_token() {
    let lp = Launchpad::new();
    let sale_id = lp.create_sale();

    let carol = lp.staker(sale_id, LockPool::Short, 0, NFT_CAP);
    let erin = lp.staker(sale_id, LockPool::Short, 0, NFT_CAP);
    let nft = lp.nft_collection(&carol);
    lp.whitelist.add_whitelist(&nft);
    lp.sale.create_nft_allocation(&sale_id, &nft);

    lp.set_time(SALE_START);
    lp.sale.deposit_with_nft(&sale_id, &carol, &nft, &15_000_000);

    token::Client::new(&lp.env, &nft).transfer(&carol, &erin, &1);
    assert_eq!(
        lp.sale.try_deposit_with_nft(&sale_id, &carol, &nft, &1),
        Err(Ok(SaleError::NotNftOwner))
    );

    lp.sale.deposit_with_nft(&sale_id, &erin, &nft, &5_000_000);
    assert_eq!(
        lp.sale.try_deposit_with_nft(&sale_id, &erin, &nft, &1),
        Err(Ok(SaleError::InsufficientAllocation))
    );
    assert_eq!(
        lp.sale.get_nft_allocation(&sale_id, &nft).unwrap().used_amount,
        NFT_CAP
    );
    assert_eq!(lp.sale.get_contribution(&sale_id, &carol), 15_000_000);
    assert_eq!(lp.sale.get_contribution(&sale_id, &erin), 5_000_000);
}

#[test]
fn test_delisted_collection_stops_deposits() {
    let lp = Launchpad::new();
    let sale_id = lp.create_sale();
    let holder = lp.staker(sale_id, LockPool::Short, 0, NFT_CAP);
    let nft = lp.nft_collection(&holder);
    lp.whitelist.add_whitelist(&nft);
    lp.sale.create_nft_allocation(&sale_id, &nft);

    lp.set_time(SALE_START);
    lp.sale.deposit_with_nft(&sale_id, &holder, &nft, &1_000_000);

    lp.whitelist.remove_whitelist(&nft);
    assert_eq!(
        lp.sale.try_deposit_with_nft(&sale_id, &holder, &nft, &1_000_000),
        Err(Ok(SaleError::NotWhitelisted))
    );
    assert_eq!(lp.payment.balance(&holder), NFT_CAP - 1_000_000);
}

#[test]
fn test_unlisted_collection_is_rejected() {
    let lp = Launchpad::new();
    let sale_id = lp.create_sale();
    let holder = lp.staker(sale_id, LockPool::Short, 0, NFT_CAP);
    let nft = lp.nft_collection(&holder);
    lp.sale.create_nft_allocation(&sale_id, &nft);

    lp.set_time(SALE_START);
    assert_eq!(
        lp.sale.try_deposit_with_nft(&sale_id, &holder, &nft, &1_000_000),
        Err(Ok(SaleError::NotWhitelisted))
    );
    assert!(!lp.whitelist.is_whitelisted(&nft));
    assert_eq!(lp.sale.get_total_raised(&sale_id), 0);
}

#[test]
fn test_registry_owner_handover() {
    let lp = Launchpad::new();
    let curator = Address::generate(&lp.env);
    lp.whitelist.update_owner(&curator);
    assert_eq!(lp.whitelist.get_owner(), curator);

    let nft = lp.nft_collection(&curator);
    lp.whitelist.add_whitelist(&nft);
    assert!(lp.whitelist.is_whitelisted(&nft));
}
