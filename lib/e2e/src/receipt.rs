use alloy::{
    network::ReceiptResponse, primitives::Address,
    rpc::types::TransactionReceipt,
};
use eyre::ContextCompat;

/// Extension trait to recover the address of a deployed contract.
pub trait Ext {
    /// Returns the address of the deployed contract.
    ///
    /// # Errors
    ///
    /// May fail if there's no contract address.
    fn address(&self) -> eyre::Result<Address>;
}

impl Ext for TransactionReceipt {
    fn address(&self) -> eyre::Result<Address> {
        self.contract_address().context("should contain contract address")
    }
}

/// Deployments through `cargo stylus` report the address next to the
/// receipt, since the receipt of a `StylusDeployer` call has none.
impl Ext for (TransactionReceipt, Address) {
    fn address(&self) -> eyre::Result<Address> {
        Ok(self.1)
    }
}
