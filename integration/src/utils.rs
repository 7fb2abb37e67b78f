//! Utilities for sending transactions & asserting on their outcomes

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::Ethereum,
    rpc::types::TransactionReceipt,
};
use eyre::{ensure, Result};
use scripts::utils::Wallet;

/// The call builder type for the tests
pub(crate) type TestCallBuilder<'a, C> = CallBuilder<&'a Wallet, C, Ethereum>;

/// Send a transaction and wait for it to be mined successfully
pub(crate) async fn send_tx<C: CallDecoder>(
    tx: TestCallBuilder<'_, C>,
) -> Result<TransactionReceipt> {
    let receipt = tx.send().await?.get_receipt().await?;
    ensure!(receipt.status(), "transaction reverted on-chain");
    Ok(receipt)
}

/// Assert that sending the transaction fails
pub(crate) async fn assert_reverts<C: CallDecoder>(
    tx: TestCallBuilder<'_, C>,
    msg: &str,
) -> Result<()> {
    ensure!(
        tx.send().await.is_err(),
        "expected transaction to revert, but it succeeded: {}",
        msg,
    );
    Ok(())
}
