//! Constants used in the integration tests

/// The default hostport that the devnet node runs on
pub(crate) const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default private key of the contract owner, the first pre-funded
/// account on a default Anvil/Hardhat devnet
pub(crate) const DEFAULT_OWNER_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default private keys of the allowlisted test users, the second &
/// third pre-funded devnet accounts
pub(crate) const DEFAULT_USER_PKEYS: [&str; 2] = [
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
];

/// The number of claim groups configured on the contract before allowlist
/// minting
pub(crate) const CLAIM_GROUPS: u64 = 10_000;

/// The base URI pointed at the revealed art during the reveal test
pub(crate) const REVEALED_BASE_URI: &str = "ipfs://path_to_art_ipfs/";
