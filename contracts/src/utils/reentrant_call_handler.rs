//! Raw contract calls that stay sound when the `reentrant` feature is on.
//!
//! With `reentrant` enabled, the storage cache has to be flushed before
//! control is handed to another contract, since that contract may call back
//! and observe (or change) slots this contract still holds cached. Without
//! the feature the call is made as is.
//!
//! See [`RawCall::flush_storage_cache`] for the details of the cache.
//!
//! [`RawCall::flush_storage_cache`]: stylus_sdk::call::RawCall::flush_storage_cache

use alloy_primitives::Address;
use stylus_sdk::{call::RawCall, ArbResult};

/// Extension of [`RawCall`] used for every low-level call issued by the
/// vault, e.g. the optional-return token calls in
/// [`crate::token::erc20::utils::SafeErc20`].
pub trait ReentrantCallHandler {
    /// Calls `contract` with `call_data`, flushing the storage cache first
    /// when the `reentrant` feature is enabled.
    ///
    /// # Arguments
    ///
    /// * `self` - Configured raw call.
    /// * `contract` - Address of the called contract.
    /// * `call_data` - ABI encoded call data.
    ///
    /// # Errors
    ///
    /// * Returns the revert data of `contract` when the call fails.
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult;
}

impl ReentrantCallHandler for RawCall {
    fn call_with_reentrant_handling(
        self,
        contract: Address,
        call_data: &[u8],
    ) -> ArbResult {
        #[cfg(feature = "reentrant")]
        unsafe {
            self.flush_storage_cache().call(contract, call_data)
        }
        #[cfg(not(feature = "reentrant"))]
        {
            self.call(contract, call_data)
        }
    }
}
