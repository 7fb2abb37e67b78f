//! Definitions of errors that can occur during the execution of the contract
//! management scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use allowlist::errors::AllowlistError;

/// Errors that can occur during the execution of the contract management
/// scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error reading an input file (roster, deployments, artifact)
    ReadFile(String),
    /// Error writing an output file (deployments, bundle)
    WriteFile(String),
    /// Invalid signing configuration (empty roster, zero spots, duplicates)
    InvalidConfiguration(String),
    /// Error producing an allowlist signature
    Signing(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => {
                write!(f, "error initializing client: {}", s)
            }
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::InvalidConfiguration(s) => {
                write!(f, "invalid configuration: {}", s)
            }
            ScriptError::Signing(s) => write!(f, "error signing: {}", s),
        }
    }
}

impl Error for ScriptError {}

impl From<AllowlistError> for ScriptError {
    fn from(err: AllowlistError) -> Self {
        match err {
            AllowlistError::EmptyRoster
            | AllowlistError::InvalidSpotCount
            | AllowlistError::DuplicateAddress(_) => {
                ScriptError::InvalidConfiguration(err.to_string())
            }
            AllowlistError::Signing(_) | AllowlistError::MalformedSignature(_) => {
                ScriptError::Signing(err.to_string())
            }
            AllowlistError::ReadBundle(_) => ScriptError::ReadFile(err.to_string()),
            AllowlistError::WriteBundle(_) => ScriptError::WriteFile(err.to_string()),
        }
    }
}
