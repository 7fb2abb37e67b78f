//! Scripts for deploying and administering the NFT minting contracts, and
//! for issuing allowlist signature bundles.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod solidity;
pub mod utils;
