//! Definition of the CLI arguments for the integration tests

use clap::Parser;

use crate::constants::{DEFAULT_OWNER_PKEY, DEFAULT_RPC_URL, DEFAULT_USER_PKEYS};

/// CLI tool for running integration tests against a running devnet node.
///
/// Assumes the NFT contract has already been deployed and the allowlist
/// bundle has already been issued by the owner key.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Optional filter; only tests whose name contains this string run
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Path to the file containing contract deployment info
    #[arg(short, long, default_value = "deployments.json")]
    pub(crate) deployments_file: String,

    /// Path to the allowlist signature bundle artifact
    #[arg(short, long, default_value = "whitelist.json")]
    pub(crate) bundle_file: String,

    /// Private key of the contract owner & allowlist issuer, defaults to the
    /// first default devnet account
    #[arg(short, long, default_value = DEFAULT_OWNER_PKEY)]
    pub(crate) priv_key: String,

    /// Private keys of the allowlisted test users, default to pre-funded
    /// devnet accounts
    #[arg(short, long, num_args = 1.., default_values = DEFAULT_USER_PKEYS)]
    pub(crate) user_pkeys: Vec<String>,

    /// Devnet RPC URL
    #[arg(short, long, default_value = DEFAULT_RPC_URL)]
    pub(crate) rpc_url: String,
}
