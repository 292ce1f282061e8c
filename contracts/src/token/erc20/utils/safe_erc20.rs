//! Wrappers around ERC-20 operations that throw on failure (when the token
//! contract returns false).
//!
//! Tokens that return no value (and instead revert or throw on failure) are
//! also supported, non-reverting calls are assumed to be successful. Bridged
//! assets such as USDT-style tokens rely on this.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
pub use sol::*;
use stylus_sdk::{
    call::{MethodError, RawCall},
    prelude::*,
    types::AddressVM,
};

use crate::{token::erc20::abi::Erc20Abi, utils::ReentrantCallHandler};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// An operation with an ERC-20 token failed.
        ///
        /// * `token` - Address of the ERC-20 token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error SafeErc20FailedOperation(address token);
    }
}

/// A [`SafeErc20`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// An operation with an ERC-20 token failed.
    SafeErc20FailedOperation(SafeErc20FailedOperation),
}

impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// State of a [`SafeErc20`] helper. Holds no data, it only scopes the
/// token calls issued by the embedding contract.
#[storage]
pub struct SafeErc20 {}

/// Token operations a vault performs on its underlying asset.
pub trait ISafeErc20 {
    /// The error type associated to this trait implementation.
    type Error: Into<Vec<u8>>;

    /// Transfers `value` amount of `token` from the calling contract to
    /// `to`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the call reverts or it returns something other than
    ///   `true`.
    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Transfers `value` amount of `token` from `from` to `to`, spending the
    /// calling contract's allowance.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `from` - Account to transfer tokens from.
    /// * `to` - Account to transfer tokens to.
    /// * `value` - Number of tokens to transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the call reverts or it returns something other than
    ///   `true`.
    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// Sets the calling contract's allowance toward `spender` to `value`.
    ///
    /// Tokens that refuse to change a non-zero allowance to another non-zero
    /// value (e.g. USDT) are handled by resetting the allowance to zero and
    /// retrying.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - Address of the ERC-20 token contract.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Allowance granted to `spender`.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract or the retried approval fails as well.
    fn force_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error>;
}

impl ISafeErc20 for SafeErc20 {
    type Error = Error;

    fn safe_transfer(
        &mut self,
        token: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = Erc20Abi::transferCall { to, value };

        Self::call_optional_return(token, &call)
    }

    fn safe_transfer_from(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let call = Erc20Abi::transferFromCall { from, to, value };

        Self::call_optional_return(token, &call)
    }

    fn force_approve(
        &mut self,
        token: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        let approve_call = Erc20Abi::approveCall { spender, value };

        if Self::call_optional_return(token, &approve_call).is_ok() {
            return Ok(());
        }

        let reset_approval_call =
            Erc20Abi::approveCall { spender, value: U256::ZERO };
        Self::call_optional_return(token, &reset_approval_call)?;
        Self::call_optional_return(token, &approve_call)
    }
}

impl SafeErc20 {
    /// Imitates a Stylus high-level call, relaxing the requirement on the
    /// return value: if data is returned, it must not be `false`, otherwise
    /// calls are assumed to be successful.
    ///
    /// # Arguments
    ///
    /// * `token` - Address of the ERC-20 token contract.
    /// * `call` - [`Erc20Abi`] call that implements [`SolCall`] trait.
    ///
    /// # Errors
    ///
    /// * [`Error::SafeErc20FailedOperation`] - If the `token` address is not
    ///   a contract, the call reverts or it returns something other than
    ///   `true`.
    fn call_optional_return(
        token: Address,
        call: &impl SolCall,
    ) -> Result<(), Error> {
        if !Address::has_code(&token) {
            return Err(SafeErc20FailedOperation { token }.into());
        }

        match RawCall::new()
            .limit_return_data(0, 32)
            .call_with_reentrant_handling(token, &call.abi_encode())
        {
            Ok(data) if data.is_empty() || Self::encodes_true(&data) => Ok(()),
            _ => Err(SafeErc20FailedOperation { token }.into()),
        }
    }

    /// Returns true if a slice of bytes is an ABI encoded `true` value.
    fn encodes_true(data: &[u8]) -> bool {
        data.split_last().is_some_and(|(last, rest)| {
            *last == 1 && rest.iter().all(|&byte| byte == 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SafeErc20;

    #[test]
    fn encodes_true_rejects_empty_slice() {
        assert!(!SafeErc20::encodes_true(&[]));
    }

    #[test]
    fn encodes_true_rejects_false() {
        assert!(!SafeErc20::encodes_true(&[0]));
        assert!(!SafeErc20::encodes_true(&[0; 32]));
    }

    #[test]
    fn encodes_true_accepts_padded_true() {
        assert!(SafeErc20::encodes_true(&[1]));
        let mut word = [0; 32];
        word[31] = 1;
        assert!(SafeErc20::encodes_true(&word));
    }

    #[test]
    fn encodes_true_rejects_dirty_padding() {
        assert!(!SafeErc20::encodes_true(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]));
    }

    #[test]
    fn encodes_true_rejects_other_values() {
        assert!(!SafeErc20::encodes_true(&[2]));
        assert!(!SafeErc20::encodes_true(&[0, 0, 0, 0xff]));
    }
}
