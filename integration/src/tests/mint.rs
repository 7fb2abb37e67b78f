//! Tests of the public mint path: pricing, per-tx limits, owner-only dev
//! minting, & the supply cap

use alloy::primitives::U256;
use eyre::{ensure, Result};

use crate::{
    test_args::TestArgs,
    utils::{assert_reverts, send_tx},
};

/// Public mints must pay the configured price per token
pub(crate) async fn test_public_mint(args: TestArgs) -> Result<()> {
    let owner_nft = args.owner_nft()?;
    send_tx(owner_nft.setPublicSaleState(true)).await?;

    let price = owner_nft.price().call().await?;
    let supply_before = owner_nft.totalSupply().call().await?;

    let user_nft = args.user_nft(0)?;
    assert_reverts(user_nft.mint(U256::from(1)), "minting with no value").await?;

    send_tx(user_nft.mint(U256::from(1)).value(price)).await?;

    let supply_after = owner_nft.totalSupply().call().await?;
    ensure!(
        supply_after == supply_before + U256::from(1),
        "expected supply to grow by 1, got {supply_before} -> {supply_after}",
    );
    Ok(())
}

/// The per-transaction quantity bounds are enforced
pub(crate) async fn test_mint_limits(args: TestArgs) -> Result<()> {
    let owner_nft = args.owner_nft()?;
    send_tx(owner_nft.setPublicSaleState(true)).await?;

    let price = owner_nft.price().call().await?;
    let max_per_tx = owner_nft.maxMintAmountPerTx().call().await?;
    let supply_before = owner_nft.totalSupply().call().await?;

    let user_nft = args.user_nft(0)?;

    let over_max = max_per_tx + U256::from(1);
    assert_reverts(
        user_nft.mint(over_max).value(price * over_max),
        "minting over the per-tx maximum",
    )
    .await?;

    assert_reverts(user_nft.mint(U256::ZERO), "minting zero tokens").await?;

    // The maximum quantity itself mints fine
    send_tx(user_nft.mint(max_per_tx).value(price * max_per_tx)).await?;

    let supply_after = owner_nft.totalSupply().call().await?;
    ensure!(
        supply_after == supply_before + max_per_tx,
        "expected supply to grow by {max_per_tx}, got {supply_before} -> {supply_after}",
    );
    Ok(())
}

/// Only the owner may dev-mint
pub(crate) async fn test_dev_mint(args: TestArgs) -> Result<()> {
    let owner_nft = args.owner_nft()?;
    let recipient = args.user_addr(0);

    let user_nft = args.user_nft(0)?;
    assert_reverts(
        user_nft.devMint(recipient, U256::from(1)),
        "dev-minting as non-owner",
    )
    .await?;

    let supply_before = owner_nft.totalSupply().call().await?;
    send_tx(owner_nft.devMint(recipient, U256::from(2))).await?;

    let supply_after = owner_nft.totalSupply().call().await?;
    ensure!(
        supply_after == supply_before + U256::from(2),
        "expected supply to grow by 2, got {supply_before} -> {supply_after}",
    );
    Ok(())
}

/// Minting past the collection's supply cap is impossible.
///
/// This test exhausts the remaining supply, so it runs last.
pub(crate) async fn test_sell_out(args: TestArgs) -> Result<()> {
    let owner_nft = args.owner_nft()?;
    send_tx(owner_nft.setPublicSaleState(true)).await?;

    let max_supply = owner_nft.maxSupply().call().await?;
    let supply = owner_nft.totalSupply().call().await?;
    ensure!(supply <= max_supply, "supply already exceeds the cap");

    let remaining = max_supply - supply;
    if !remaining.is_zero() {
        send_tx(owner_nft.devMint(args.user_addr(0), remaining)).await?;
    }

    let supply_after = owner_nft.totalSupply().call().await?;
    ensure!(supply_after == max_supply, "collection did not sell out");

    assert_reverts(
        owner_nft.devMint(args.user_addr(0), U256::from(1)),
        "dev-minting past the supply cap",
    )
    .await?;

    let price = owner_nft.price().call().await?;
    let user_nft = args.user_nft(0)?;
    assert_reverts(
        user_nft.mint(U256::from(1)).value(price),
        "public-minting past the supply cap",
    )
    .await?;

    Ok(())
}
