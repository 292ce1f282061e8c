//! Minimal Crayon lending desk.
//!
//! Lenders supply the desk token and get a claim on the desk equal to the
//! amount supplied, plus whatever interest was accrued to them with
//! [`DeskMock::accrue`].
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use crayon_stylus::token::erc20::utils::{safe_erc20, ISafeErc20, SafeErc20};
use stylus_sdk::{
    call::MethodError,
    contract, evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageMap, StorageU256},
};

pub use sol::*;
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `lender` supplies `amount` tokens to the desk.
        #[allow(missing_docs)]
        event Supplied(address indexed lender, uint256 amount);

        /// Emitted when `lender` takes `amount` tokens out of the desk.
        #[allow(missing_docs)]
        event Withdrawn(address indexed lender, uint256 amount);

        /// Emitted when `amount` of interest is credited to `lender`.
        #[allow(missing_docs)]
        event Accrued(address indexed lender, uint256 amount);
    }

    sol! {
        /// `lender` tried to take out more than its claim on the desk.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error DeskInsufficientBalance(address lender, uint256 balance, uint256 needed);
    }
}

/// A [`DeskMock`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The lender's claim is too small.
    InsufficientBalance(DeskInsufficientBalance),
    /// Error type from [`SafeErc20`] contract [`safe_erc20::Error`].
    SafeErc20(safe_erc20::Error),
}

impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

#[entrypoint]
#[storage]
struct DeskMock {
    token: StorageAddress,
    balances: StorageMap<Address, StorageU256>,
    safe_erc20: SafeErc20,
}

#[public]
impl DeskMock {
    #[constructor]
    fn constructor(&mut self, token: Address) {
        self.token.set(token);
    }

    fn token(&self) -> Address {
        self.token.get()
    }

    fn deposit(&mut self, amount: U256) -> Result<(), Error> {
        let lender = msg::sender();
        let token = self.token.get();
        self.safe_erc20.safe_transfer_from(
            token,
            lender,
            contract::address(),
            amount,
        )?;

        let balance = self.balances.get(lender);
        self.balances.setter(lender).set(balance + amount);

        evm::log(Supplied { lender, amount });
        Ok(())
    }

    fn withdraw(&mut self, amount: U256) -> Result<(), Error> {
        let lender = msg::sender();
        let balance = self.balances.get(lender);
        if balance < amount {
            return Err(Error::InsufficientBalance(DeskInsufficientBalance {
                lender,
                balance,
                needed: amount,
            }));
        }
        self.balances.setter(lender).set(balance - amount);

        let token = self.token.get();
        self.safe_erc20.safe_transfer(token, lender, amount)?;

        evm::log(Withdrawn { lender, amount });
        Ok(())
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    /// Credits `amount` of interest to `lender`. The tokens backing it must
    /// already be held by the desk.
    fn accrue(&mut self, lender: Address, amount: U256) {
        let balance = self.balances.get(lender);
        self.balances.setter(lender).set(balance + amount);

        evm::log(Accrued { lender, amount });
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use crayon_stylus::token::erc20::{self, Erc20, IErc20};
    use motsu::prelude::*;
    use stylus_sdk::prelude::*;

    use super::{DeskInsufficientBalance, DeskMock, Error};

    #[storage]
    struct Token {
        #[borrow]
        erc20: Erc20,
    }

    unsafe impl TopLevelStorage for Token {}

    #[public]
    #[inherit(Erc20)]
    impl Token {
        fn mint(
            &mut self,
            account: Address,
            value: U256,
        ) -> Result<(), erc20::Error> {
            self.erc20._mint(account, value)
        }
    }

    const FUNDS: U256 = uint!(1_000_U256);

    fn setup(
        desk: &Contract<DeskMock>,
        token: &Contract<Token>,
        lender: Address,
    ) {
        desk.sender(lender).constructor(token.address());
        token.sender(lender).mint(lender, FUNDS).expect("should mint");
        token
            .sender(lender)
            .erc20
            .approve(desk.address(), U256::MAX)
            .expect("should approve the desk");
    }

    #[motsu::test]
    fn supplies_and_withdraws(
        desk: Contract<DeskMock>,
        token: Contract<Token>,
        alice: Address,
    ) {
        setup(&desk, &token, alice);
        let amount = uint!(400_U256);

        desk.sender(alice).deposit(amount).expect("should supply");
        assert_eq!(desk.sender(alice).balance_of(alice), amount);
        assert_eq!(token.sender(alice).erc20.balance_of(desk.address()), amount);

        desk.sender(alice).withdraw(amount).expect("should withdraw");
        assert_eq!(desk.sender(alice).balance_of(alice), U256::ZERO);
        assert_eq!(token.sender(alice).erc20.balance_of(alice), FUNDS);
    }

    #[motsu::test]
    fn accrued_interest_can_be_withdrawn(
        desk: Contract<DeskMock>,
        token: Contract<Token>,
        alice: Address,
        bob: Address,
    ) {
        setup(&desk, &token, alice);
        let amount = uint!(400_U256);
        let interest = uint!(40_U256);

        desk.sender(alice).deposit(amount).expect("should supply");
        token.sender(bob).mint(desk.address(), interest).expect("should mint");
        desk.sender(bob).accrue(alice, interest);

        assert_eq!(desk.sender(alice).balance_of(alice), amount + interest);
        desk.sender(alice)
            .withdraw(amount + interest)
            .expect("should withdraw with interest");
        assert_eq!(token.sender(alice).erc20.balance_of(alice), FUNDS + interest);
    }

    #[motsu::test]
    fn withdraw_errors_insufficient_balance(
        desk: Contract<DeskMock>,
        token: Contract<Token>,
        alice: Address,
    ) {
        setup(&desk, &token, alice);
        let amount = uint!(400_U256);
        desk.sender(alice).deposit(amount).expect("should supply");

        let err = desk
            .sender(alice)
            .withdraw(amount + U256::ONE)
            .expect_err("should not withdraw more than supplied");

        assert!(matches!(
            err,
            Error::InsufficientBalance(DeskInsufficientBalance {
                lender,
                balance,
                needed,
            }) if lender == alice && balance == amount && needed == amount + U256::ONE
        ));
    }

    #[motsu::test]
    fn deposit_errors_without_allowance(
        desk: Contract<DeskMock>,
        token: Contract<Token>,
        alice: Address,
    ) {
        setup(&desk, &token, alice);
        token
            .sender(alice)
            .erc20
            .approve(desk.address(), U256::ZERO)
            .expect("should reset the allowance");

        let err = desk
            .sender(alice)
            .deposit(U256::ONE)
            .expect_err("should not pull tokens without allowance");

        assert!(matches!(err, Error::SafeErc20(_)));
    }
}
