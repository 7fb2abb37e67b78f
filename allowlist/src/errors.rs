//! Definitions of errors that can occur while issuing or verifying allowlist
//! signatures

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::primitives::Address;

/// Errors that can occur while issuing, verifying, or persisting an
/// allowlist signature bundle
#[derive(Debug)]
pub enum AllowlistError {
    /// The roster of allowlisted addresses is empty
    EmptyRoster,
    /// The configured number of claim spots per address is zero
    InvalidSpotCount,
    /// The roster contains the same address more than once
    DuplicateAddress(Address),
    /// A ticket's signature is not a well-formed 65-byte ECDSA signature
    MalformedSignature(String),
    /// Error producing or recovering a signature
    Signing(String),
    /// Error reading the bundle artifact
    ReadBundle(String),
    /// Error writing the bundle artifact
    WriteBundle(String),
}

impl Display for AllowlistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AllowlistError::EmptyRoster => write!(f, "allowlist roster is empty"),
            AllowlistError::InvalidSpotCount => {
                write!(f, "spots per address must be at least 1")
            }
            AllowlistError::DuplicateAddress(a) => {
                write!(f, "duplicate address in roster: {a}")
            }
            AllowlistError::MalformedSignature(s) => {
                write!(f, "malformed ticket signature: {}", s)
            }
            AllowlistError::Signing(s) => write!(f, "error signing payload: {}", s),
            AllowlistError::ReadBundle(s) => write!(f, "error reading bundle: {}", s),
            AllowlistError::WriteBundle(s) => write!(f, "error writing bundle: {}", s),
        }
    }
}

impl Error for AllowlistError {}
