//! Issuance, verification, & persistence of signed allowlist claims for the
//! NFT minting contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod errors;
pub mod issuer;
pub mod storage;
pub mod types;
