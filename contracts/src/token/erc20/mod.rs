//! ERC-20 accounting of vault shares.
//!
//! Functions revert instead of returning `false` on failure, and approvals
//! only emit [`Approval`] when set explicitly, never when an allowance is
//! consumed by [`IErc20::transfer_from`].
use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageMap, StorageU256},
};

pub mod abi;
pub mod extensions;
pub mod utils;

pub use sol::*;
#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `value` shares move from `from` to `to`, including
        /// mints from and burns to the zero address.
        #[allow(missing_docs)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        /// Emitted when `owner` sets the share allowance of `spender`.
        #[allow(missing_docs)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }

    sol! {
        /// `sender` holds `balance` shares, less than the `needed` amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidSender(address sender);
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidReceiver(address receiver);
        /// `spender` may move `allowance` shares of the owner, less than
        /// the `needed` amount.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidSpender(address spender);
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC20InvalidApprover(address approver);
    }
}

/// Failures of share transfers and approvals, encoded as [ERC-6093] errors.
///
/// [ERC-6093]: https://eips.ethereum.org/EIPS/eip-6093
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The sending account holds too few shares.
    InsufficientBalance(ERC20InsufficientBalance),
    /// Shares sent from the zero address.
    InvalidSender(ERC20InvalidSender),
    /// Shares sent to the zero address.
    InvalidReceiver(ERC20InvalidReceiver),
    /// The spender's allowance does not cover the move.
    InsufficientAllowance(ERC20InsufficientAllowance),
    /// Approval of the zero address.
    InvalidSpender(ERC20InvalidSpender),
    /// Approval on behalf of the zero address.
    InvalidApprover(ERC20InvalidApprover),
}

impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// Share balances, allowances and supply of a vault.
#[storage]
pub struct Erc20 {
    pub(crate) balances: StorageMap<Address, StorageU256>,
    /// Owner to spender to allowance.
    pub(crate) allowances:
        StorageMap<Address, StorageMap<Address, StorageU256>>,
    pub(crate) total_supply: StorageU256,
}

/// ERC-20 surface of the vault shares.
pub trait IErc20 {
    /// Revert data of a failed call.
    type Error: Into<Vec<u8>>;

    /// Returns the number of shares in existence.
    fn total_supply(&self) -> U256;

    /// Returns the shares held by `account`.
    fn balance_of(&self, account: Address) -> U256;

    /// Moves `value` shares from the caller to `to`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`Error::InsufficientBalance`] - If the caller holds less than
    ///   `value`.
    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Returns the shares `spender` may still move on behalf of `owner`.
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Lets `spender` move up to `value` of the caller's shares, replacing
    /// any previous allowance. The vault spends the same allowance when
    /// `spender` withdraws or redeems on the caller's behalf.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSpender`] - If `spender` is [`Address::ZERO`].
    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;

    /// Moves `value` shares from `from` to `to` out of the caller's
    /// allowance. An allowance of `U256::MAX` is never decreased.
    ///
    /// # Errors
    ///
    /// * [`Error::InsufficientAllowance`] - If the allowance is below
    ///   `value`.
    /// * [`Error::InvalidSender`] - If `from` is [`Address::ZERO`].
    /// * [`Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`Error::InsufficientBalance`] - If `from` holds less than `value`.
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error>;
}

#[public]
impl IErc20 for Erc20 {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let from = msg::sender();
        self._transfer(from, to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(owner).get(spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let owner = msg::sender();
        self._approve(owner, spender, value, true)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        let spender = msg::sender();
        self._spend_allowance(from, spender, value)?;
        self._transfer(from, to, value)?;
        Ok(true)
    }
}

impl Erc20 {
    /// Sets the allowance of `spender` over `owner`'s shares, logging
    /// [`Approval`] only when `emit_event` is set.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - If `owner` is [`Address::ZERO`].
    /// * [`Error::InvalidSpender`] - If `spender` is [`Address::ZERO`].
    pub fn _approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        emit_event: bool,
    ) -> Result<bool, Error> {
        if owner.is_zero() {
            return Err(Error::InvalidApprover(ERC20InvalidApprover {
                approver: Address::ZERO,
            }));
        }

        if spender.is_zero() {
            return Err(Error::InvalidSpender(ERC20InvalidSpender {
                spender: Address::ZERO,
            }));
        }

        self.allowances.setter(owner).insert(spender, value);
        if emit_event {
            evm::log(Approval { owner, spender, value });
        }
        Ok(true)
    }

    /// Moves `value` shares between two non-zero accounts.
    pub fn _transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Error> {
        if from.is_zero() {
            return Err(Error::InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        if to.is_zero() {
            return Err(Error::InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }

        self._update(from, to, value)
    }

    /// Issues `value` new shares to `account`.
    ///
    /// # Panics
    ///
    /// * If the total supply exceeds `U256::MAX`.
    pub fn _mint(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::InvalidReceiver(ERC20InvalidReceiver {
                receiver: Address::ZERO,
            }));
        }
        self._update(Address::ZERO, account, value)
    }

    /// Burns `value` shares of `account`.
    pub fn _burn(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Error> {
        if account.is_zero() {
            return Err(Error::InvalidSender(ERC20InvalidSender {
                sender: Address::ZERO,
            }));
        }
        self._update(account, Address::ZERO, value)
    }

    /// Moves `value` shares from `from` to `to`, where the zero address on
    /// either side mints or burns. Every balance change goes through here
    /// and logs a single [`Transfer`].
    ///
    /// # Panics
    ///
    /// * If the total supply exceeds `U256::MAX` while minting.
    pub fn _update(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Error> {
        if from.is_zero() {
            let total_supply = self
                .total_supply()
                .checked_add(value)
                .expect("should not exceed `U256::MAX` for `total_supply`");
            self.total_supply.set(total_supply);
        } else {
            let from_balance = self.balances.get(from);
            if from_balance < value {
                return Err(Error::InsufficientBalance(
                    ERC20InsufficientBalance {
                        sender: from,
                        balance: from_balance,
                        needed: value,
                    },
                ));
            }
            // `value` <= `from_balance` <= `total_supply`.
            self.balances.setter(from).set(from_balance - value);
        }

        if to.is_zero() {
            let total_supply = self.total_supply();
            self.total_supply.set(total_supply - value);
        } else {
            let balance_to = self.balances.get(to);
            // `balance_to` + `value` <= `total_supply`.
            self.balances.setter(to).set(balance_to + value);
        }

        evm::log(Transfer { from, to, value });

        Ok(())
    }

    /// Takes `value` out of the allowance of `spender` over `owner`'s
    /// shares, leaving `U256::MAX` untouched and without logging
    /// [`Approval`].
    pub fn _spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), Error> {
        let current_allowance = self.allowance(owner, spender);
        if current_allowance == U256::MAX {
            return Ok(());
        }

        if current_allowance < value {
            return Err(Error::InsufficientAllowance(
                ERC20InsufficientAllowance {
                    spender,
                    allowance: current_allowance,
                    needed: value,
                },
            ));
        }

        self._approve(owner, spender, current_allowance - value, false)?;
        Ok(())
    }
}
