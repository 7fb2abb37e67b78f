//! Defines the arguments passed to each integration test

use allowlist::{
    storage::read_bundle,
    types::{ClaimTicket, SignatureBundle},
};
use alloy::{
    primitives::Address,
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::{eyre, Result};
use scripts::{
    constants::NFT_CONTRACT_KEY,
    solidity::{Erc721WL, NftContract},
    utils::parse_addr_from_deployments_file,
};
use std::{path::Path, str::FromStr};

use crate::cli::Cli;

/// The arguments provided to each integration test
#[derive(Clone)]
pub(crate) struct TestArgs {
    /// The allowlist signature bundle issued by the owner key
    pub bundle: SignatureBundle,
    /// The contract owner & allowlist issuer
    pub owner: PrivateKeySigner,
    /// The allowlisted test users
    pub users: Vec<PrivateKeySigner>,
    /// The address of the deployed NFT contract
    pub nft_address: Address,
    /// The devnet RPC URL
    pub rpc_url: String,
}

impl TestArgs {
    /// Build the test args from the CLI arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let nft_address = parse_addr_from_deployments_file(&cli.deployments_file, NFT_CONTRACT_KEY)?;
        let bundle = read_bundle(Path::new(&cli.bundle_file))?;

        let owner = PrivateKeySigner::from_str(&cli.priv_key)?;
        let users = cli
            .user_pkeys
            .iter()
            .map(|pkey| PrivateKeySigner::from_str(pkey).map_err(Into::into))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            bundle,
            owner,
            users,
            nft_address,
            rpc_url: cli.rpc_url.clone(),
        })
    }

    /// The address whose signatures the contract should trust
    pub fn issuer(&self) -> Address {
        self.owner.address()
    }

    /// The number of allowlisted test users
    pub fn num_users(&self) -> usize {
        self.users.len()
    }

    /// The address of the given test user
    pub fn user_addr(&self, i: usize) -> Address {
        self.users[i].address()
    }

    /// The bundle tickets issued to the given test user
    pub fn user_tickets(&self, i: usize) -> Result<&[ClaimTicket]> {
        let addr = self.user_addr(i);
        self.bundle
            .tickets(&addr)
            .ok_or_else(|| eyre!("no tickets in bundle for {addr}"))
    }

    /// An NFT contract instance sending transactions as the owner
    pub fn owner_nft(&self) -> Result<NftContract> {
        self.nft_client(self.owner.clone())
    }

    /// An NFT contract instance sending transactions as the given test user
    pub fn user_nft(&self, i: usize) -> Result<NftContract> {
        self.nft_client(self.users[i].clone())
    }

    /// Create an NFT contract instance signing with the given key
    fn nft_client(&self, signer: PrivateKeySigner) -> Result<NftContract> {
        let url = Url::parse(&self.rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(signer)
            .with_simple_nonce_management()
            .connect_http(url);

        Ok(Erc721WL::new(self.nft_address, DynProvider::new(provider)))
    }
}
