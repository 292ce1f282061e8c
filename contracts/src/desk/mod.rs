//! Interface of a Crayon lending desk.
//!
//! A desk is a lending market for a single ERC-20 asset. Lenders supply the
//! asset through `deposit`, which pulls it with `transferFrom`, and take it
//! back through `withdraw`. `balanceOf` reports a lender's claim, principal
//! plus accrued interest, in asset units.
#![allow(missing_docs)]
#![cfg_attr(coverage_nightly, coverage(off))]

use alloy_sol_types::sol;

sol! {
    /// Crayon lending desk, as seen by a lender.
    interface IDesk {
        function token() external view returns (address);
        function deposit(uint256 amount) external;
        function withdraw(uint256 amount) external;
        function balanceOf(address account) external view returns (uint256);
    }
}
