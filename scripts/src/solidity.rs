//! Solidity bindings for the NFT minting contract surface driven by the
//! scripts & integration tests

use alloy::{network::Ethereum, sol};

use crate::utils::Wallet;

/// An NFT contract instance with default generics
pub type NftContract = Erc721WLInstance<Wallet, Ethereum>;

sol! {
    #[allow(missing_docs, clippy::missing_docs_in_private_items)]
    #[sol(rpc)]
    interface Erc721WL {
        function mint(uint256 quantity) external payable;
        function devMint(address recipient, uint256 quantity) external payable;
        function allowlistMint(bytes[] calldata signatures, uint256[] calldata spotIds) external payable;

        function setPresaleState(bool state) external;
        function setPublicSaleState(bool state) external;
        function setSigner(address signer) external;
        function setClaimGroups(uint256 numGroups) external;
        function setBaseURI(string calldata baseURI) external;

        function tokenURI(uint256 tokenId) external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function maxSupply() external view returns (uint256);
        function price() external view returns (uint256);
        function maxMintAmountPerTx() external view returns (uint256);
        function presaleActive() external view returns (bool);
        function publicSaleActive() external view returns (bool);
    }
}

pub use Erc721WL::*;
