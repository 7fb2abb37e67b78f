//! Definitions of CLI arguments and commands for the deploy & signing
//! scripts

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    commands::{deploy_nft, set_base_uri, set_sale_state, set_signer, sign_allowlist},
    constants::{
        DEFAULT_BUNDLE_PATH, DEFAULT_DEPLOYMENTS_PATH, DEFAULT_RPC_URL, DEFAULT_SPOTS_PER_ADDRESS,
    },
    errors::ScriptError,
    utils::Wallet,
};

/// The CLI for the contract management scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer / allowlist issuer
    // TODO: Better key management
    #[arg(short, long)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the file recording deployed contract addresses
    #[arg(long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the CLI
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the NFT contract
    Deploy(DeployArgs),
    /// Issue the allowlist signature bundle
    SignAllowlist(SignAllowlistArgs),
    /// Enable or disable a sale phase
    SetSaleState(SetSaleStateArgs),
    /// Set the contract's base token URI
    SetBaseUri(SetBaseUriArgs),
    /// Set the trusted allowlist signer
    SetSigner(SetSignerArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: Wallet,
        priv_key: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy_nft(args, client, deployments_path).await,
            Command::SignAllowlist(args) => sign_allowlist(args, priv_key),
            Command::SetSaleState(args) => set_sale_state(args, client, deployments_path).await,
            Command::SetBaseUri(args) => set_base_uri(args, client, deployments_path).await,
            Command::SetSigner(args) => set_signer(args, client, deployments_path).await,
        }
    }
}

/// Deploy the NFT contract from a compiled artifact and record its address
/// in the deployments file
#[derive(Args)]
pub struct DeployArgs {
    /// Path to the compiled contract artifact containing the deployable
    /// bytecode
    #[arg(short, long)]
    pub artifact: String,
}

/// Issue a signature bundle for an allowlist roster.
///
/// The issuer key is the CLI private key; any stale bundle at the output
/// path is removed before signing begins, and the new bundle is written in a
/// single batch write once every spot has been signed.
#[derive(Args)]
pub struct SignAllowlistArgs {
    /// Path to a JSON array of allowlisted addresses, in issuance order
    #[arg(long)]
    pub roster: String,

    /// Number of claim spots issued to each address
    #[arg(long, default_value_t = DEFAULT_SPOTS_PER_ADDRESS)]
    pub spots: u64,

    /// Output path of the bundle artifact
    #[arg(long, default_value = DEFAULT_BUNDLE_PATH)]
    pub bundle: String,
}

/// Enable or disable one of the contract's sale phases
#[derive(Args)]
pub struct SetSaleStateArgs {
    /// The sale phase to change
    #[arg(long)]
    pub phase: SalePhase,

    /// Whether the phase should be active
    #[arg(long, action = clap::ArgAction::Set)]
    pub active: bool,
}

/// The sale phases the contract can be in
#[derive(ValueEnum, Copy, Clone)]
pub enum SalePhase {
    /// The signature-gated presale
    Presale,
    /// The open public sale
    Public,
}

/// Set the contract's base token URI (e.g. to reveal the final art)
#[derive(Args)]
pub struct SetBaseUriArgs {
    /// The new base URI
    #[arg(short, long)]
    pub uri: String,
}

/// Set the address whose allowlist signatures the contract trusts
#[derive(Args)]
pub struct SetSignerArgs {
    /// The issuer address, in hex
    #[arg(short, long)]
    pub signer: String,
}
