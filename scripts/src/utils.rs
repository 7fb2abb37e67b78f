//! Utilities for the deploy & signing scripts

use std::{fs, path::Path, str::FromStr};

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes},
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde_json::Value;

use crate::{
    constants::{ARTIFACT_BYTECODE_KEY, ARTIFACT_OBJECT_KEY, DEPLOYMENTS_KEY},
    errors::ScriptError,
};

/// The type-erased provider used throughout the scripts
pub type Wallet = DynProvider<Ethereum>;

/// Sets up an RPC client signing with the given private key
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<Wallet, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_simple_nonce_management()
        .connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Parse a JSON file into a [`Value`]
fn get_json_from_file(file_path: &str) -> Result<Value, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    serde_json::from_str(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Parse a deployed contract's address from the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    let addr_str = parsed_json[DEPLOYMENTS_KEY][contract_key]
        .as_str()
        .ok_or_else(|| {
            ScriptError::ReadFile(format!(
                "could not find `{contract_key}` in deployments file"
            ))
        })?;

    Address::from_str(addr_str).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Write a deployed contract's address to the deployments file, creating the
/// file if it does not yet exist
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    let mut parsed_json = if Path::new(file_path).exists() {
        get_json_from_file(file_path)?
    } else {
        Value::Object(Default::default())
    };

    parsed_json[DEPLOYMENTS_KEY][contract_key] = Value::String(format!("{address:#x}"));

    let pretty = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    fs::write(file_path, pretty).map_err(|e| ScriptError::WriteFile(e.to_string()))
}

/// Read the deployable bytecode from a compiled contract artifact.
///
/// Accepts both hardhat-style artifacts, where `bytecode` is a hex string,
/// and foundry-style artifacts, where it is an object with an `object` field.
pub fn read_artifact_bytecode(file_path: &str) -> Result<Bytes, ScriptError> {
    let artifact = get_json_from_file(file_path)?;

    let bytecode = &artifact[ARTIFACT_BYTECODE_KEY];
    let hex_str = bytecode
        .as_str()
        .or_else(|| bytecode[ARTIFACT_OBJECT_KEY].as_str())
        .ok_or_else(|| {
            ScriptError::ArtifactParsing("could not find bytecode in artifact".to_string())
        })?;

    Bytes::from_str(hex_str).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Read an ordered roster of addresses from a JSON array file
pub fn read_roster(file_path: &str) -> Result<Vec<Address>, ScriptError> {
    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    let raw: Vec<String> =
        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    raw.iter()
        .map(|s| Address::from_str(s).map_err(|e| ScriptError::ReadFile(e.to_string())))
        .collect()
}
