//! Solidity interfaces of the ERC-20 tokens a vault talks to.
//!
//! Defined with [`sol`], they only build and decode call data, which is then
//! sent with [`stylus_sdk::call::RawCall`].

#![allow(missing_docs)]
#![cfg_attr(coverage_nightly, coverage(off))]

use alloy_sol_types::sol;

sol! {
    /// Calls of the ERC-20 token whose return value is optional.
    interface Erc20Abi {
        function approve(address spender, uint256 value) external returns (bool);
        function transfer(address to, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
    }
}

sol! {
    /// ERC-20 Metadata extension interface.
    interface Erc20MetadataAbi {
        function decimals() external view returns (uint8);
    }
}
