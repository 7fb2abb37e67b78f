//! Implementations of the deploy, signing, & admin scripts

use std::{path::Path, str::FromStr};

use allowlist::{
    issuer::issue_bundle,
    storage::{remove_stale_bundle, write_bundle},
};
use alloy::{
    network::TransactionBuilder, primitives::Address, providers::Provider,
    rpc::types::TransactionRequest, signers::local::PrivateKeySigner,
};
use tracing::info;

use crate::{
    cli::{
        DeployArgs, SalePhase, SetBaseUriArgs, SetSaleStateArgs, SetSignerArgs, SignAllowlistArgs,
    },
    constants::NFT_CONTRACT_KEY,
    errors::ScriptError,
    solidity::Erc721WL,
    utils::{
        parse_addr_from_deployments_file, read_artifact_bytecode, read_roster,
        write_deployed_address, Wallet,
    },
};

/// Deploy the NFT contract and record its address in the deployments file
pub async fn deploy_nft(
    args: DeployArgs,
    client: Wallet,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let bytecode = read_artifact_bytecode(&args.artifact)?;

    let tx = TransactionRequest::default().with_deploy_code(bytecode);
    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("no contract address in receipt".to_string())
    })?;

    info!("NFT contract deployed at {address:#x}");
    write_deployed_address(deployments_path, NFT_CONTRACT_KEY, address)
}

/// Issue the allowlist signature bundle for the given roster.
///
/// Ordering matters here: the stale artifact is removed before any signing
/// happens, and the bundle is written exactly once at the end, so an aborted
/// run leaves no artifact rather than a partial one.
pub fn sign_allowlist(args: SignAllowlistArgs, priv_key: &str) -> Result<(), ScriptError> {
    let signer =
        PrivateKeySigner::from_str(priv_key).map_err(|e| ScriptError::Signing(e.to_string()))?;
    let roster = read_roster(&args.roster)?;

    let bundle_path = Path::new(&args.bundle);
    remove_stale_bundle(bundle_path)?;

    let bundle = issue_bundle(&signer, &roster, args.spots)?;
    write_bundle(bundle_path, &bundle)?;

    info!(
        "issued {} tickets for {} addresses as {:#x} > {}",
        bundle.num_tickets(),
        bundle.num_addresses(),
        signer.address(),
        args.bundle,
    );
    Ok(())
}

/// Enable or disable one of the contract's sale phases
pub async fn set_sale_state(
    args: SetSaleStateArgs,
    client: Wallet,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let nft = nft_from_deployments(client, deployments_path)?;

    let pending = match args.phase {
        SalePhase::Presale => nft.setPresaleState(args.active).send().await,
        SalePhase::Public => nft.setPublicSaleState(args.active).send().await,
    }
    .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    pending
        .watch()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Set the contract's base token URI
pub async fn set_base_uri(
    args: SetBaseUriArgs,
    client: Wallet,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let nft = nft_from_deployments(client, deployments_path)?;

    nft.setBaseURI(args.uri)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .watch()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Set the address whose allowlist signatures the contract trusts
pub async fn set_signer(
    args: SetSignerArgs,
    client: Wallet,
    deployments_path: &str,
) -> Result<(), ScriptError> {
    let signer_address = Address::from_str(&args.signer)
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    let nft = nft_from_deployments(client, deployments_path)?;

    nft.setSigner(signer_address)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .watch()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(())
}

/// Instantiate the NFT contract at the address recorded in the deployments
/// file
fn nft_from_deployments(
    client: Wallet,
    deployments_path: &str,
) -> Result<crate::solidity::NftContract, ScriptError> {
    let address = parse_addr_from_deployments_file(deployments_path, NFT_CONTRACT_KEY)?;
    Ok(Erc721WL::new(address, client))
}
