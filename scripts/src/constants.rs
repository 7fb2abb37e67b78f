//! Constants used in the deploy & signing scripts

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The NFT contract key in the `deployments.json` file
pub const NFT_CONTRACT_KEY: &str = "nft_contract";

/// The default path of the `deployments.json` file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default path of the signature bundle artifact
pub const DEFAULT_BUNDLE_PATH: &str = "whitelist.json";

/// The default number of claim spots issued to each allowlisted address
pub const DEFAULT_SPOTS_PER_ADDRESS: u64 = 3;

/// The default RPC URL of a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The key under which a compiled artifact stores its bytecode
pub const ARTIFACT_BYTECODE_KEY: &str = "bytecode";

/// The nested key under which foundry-style artifacts store the bytecode
/// hex string
pub const ARTIFACT_OBJECT_KEY: &str = "object";
