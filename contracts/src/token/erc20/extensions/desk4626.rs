//! ERC-4626 vault that lends every deposited asset to a Crayon lending desk.
//!
//! The vault is a lender of a single desk. Assets deposited into the vault
//! are supplied to the desk right away, and assets leaving the vault are
//! pulled back from it, so the vault never holds idle assets.
//! [`IErc4626::total_assets`] is the vault's claim on the desk, interest
//! included, and shares appreciate as the desk accrues interest.
//!
//! Shares have the decimals of the asset, and an empty vault exchanges them
//! one for one.
//!
//! Rounding always favors the vault: [`IErc4626::preview_mint`] and
//! [`IErc4626::preview_withdraw`] round up, every other quote rounds down.
//!
//! [ERC-4626]: https://eips.ethereum.org/EIPS/eip-4626
use alloc::vec::Vec;

use alloy_primitives::{Address, U256, U8};
use alloy_sol_types::SolCall;
use stylus_sdk::{
    call::{MethodError, RawCall},
    contract, evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageU8},
    types::AddressVM,
};

use crate::{
    desk::IDesk,
    token::erc20::{
        self,
        abi::Erc20MetadataAbi,
        extensions::metadata::DEFAULT_DECIMALS,
        utils::{
            safe_erc20::{self, ISafeErc20},
            SafeErc20,
        },
        Erc20, IErc20,
    },
    utils::{
        math::{Math, Rounding},
        ReentrantCallHandler,
    },
};

pub use sol::*;
#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `sender` deposits `assets` and `owner` receives
        /// `shares` in exchange.
        #[allow(missing_docs)]
        event Deposit(
            address indexed sender,
            address indexed owner,
            uint256 assets,
            uint256 shares
        );

        /// Emitted when `sender` burns `shares` of `owner` and `receiver`
        /// gets `assets` in exchange.
        #[allow(missing_docs)]
        event Withdraw(
            address indexed sender,
            address indexed receiver,
            address indexed owner,
            uint256 assets,
            uint256 shares
        );
    }

    sol! {
        /// Indicates an attempt to deposit more assets than the max amount
        /// for `receiver`.
        ///
        /// * `receiver` - Address that would receive the shares.
        /// * `assets` - Requested amount of assets.
        /// * `max` - Maximum depositable amount of assets.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC4626ExceededMaxDeposit(address receiver, uint256 assets, uint256 max);

        /// Indicates an attempt to mint more shares than the max amount for
        /// `receiver`.
        ///
        /// * `receiver` - Address that would receive the shares.
        /// * `shares` - Requested amount of shares.
        /// * `max` - Maximum mintable amount of shares.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC4626ExceededMaxMint(address receiver, uint256 shares, uint256 max);

        /// Indicates an attempt to withdraw more assets than the max amount
        /// for `owner`.
        ///
        /// * `owner` - Address whose shares would be burnt.
        /// * `assets` - Requested amount of assets.
        /// * `max` - Maximum withdrawable amount of assets.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC4626ExceededMaxWithdraw(address owner, uint256 assets, uint256 max);

        /// Indicates an attempt to redeem more shares than the max amount
        /// for `owner`.
        ///
        /// * `owner` - Address whose shares would be burnt.
        /// * `shares` - Requested amount of shares.
        /// * `max` - Maximum redeemable amount of shares.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC4626ExceededMaxRedeem(address owner, uint256 shares, uint256 max);

        /// The vault was constructed with a desk that is not a contract or
        /// that reports no token.
        ///
        /// * `desk` - Address of the rejected desk.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error Desk4626InvalidDesk(address desk);

        /// A call to the desk reverted or returned malformed data.
        ///
        /// * `desk` - Address of the desk.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error Desk4626FailedDeskOperation(address desk);
    }
}

/// A [`Desk4626`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Indicates an attempt to deposit more assets than the max amount for
    /// `receiver`.
    ExceededMaxDeposit(ERC4626ExceededMaxDeposit),
    /// Indicates an attempt to mint more shares than the max amount for
    /// `receiver`.
    ExceededMaxMint(ERC4626ExceededMaxMint),
    /// Indicates an attempt to withdraw more assets than the max amount for
    /// `owner`.
    ExceededMaxWithdraw(ERC4626ExceededMaxWithdraw),
    /// Indicates an attempt to redeem more shares than the max amount for
    /// `owner`.
    ExceededMaxRedeem(ERC4626ExceededMaxRedeem),
    /// The desk is not a contract or reports no token.
    InvalidDesk(Desk4626InvalidDesk),
    /// A call to the desk failed.
    FailedDeskOperation(Desk4626FailedDeskOperation),
    /// Error type from [`Erc20`] contract [`erc20::Error`].
    Erc20(erc20::Error),
    /// Error type from [`SafeErc20`] contract [`safe_erc20::Error`].
    SafeErc20(safe_erc20::Error),
}

impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// State of a [`Desk4626`] vault.
#[storage]
pub struct Desk4626 {
    /// Lending desk the assets are supplied to.
    pub(crate) desk: StorageAddress,
    /// Token of the desk, cached at construction.
    pub(crate) asset: StorageAddress,
    /// Decimals of [`Self::asset`].
    pub(crate) underlying_decimals: StorageU8,
    /// Token calls tolerating missing return values.
    pub(crate) safe_erc20: SafeErc20,
}

/// ERC-4626 "Tokenized Vault Standard", as defined in [ERC-4626].
///
/// Functions that read the share token take it as an explicit argument, the
/// vault does not own it.
///
/// [ERC-4626]: https://eips.ethereum.org/EIPS/eip-4626
pub trait IErc4626 {
    /// The error type associated to this trait implementation.
    type Error: Into<Vec<u8>>;

    /// Returns the address of the underlying token used for the vault for
    /// accounting, depositing, and withdrawing.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    fn asset(&self) -> Address;

    /// Returns the total amount of the underlying asset that is managed by
    /// the vault, i.e. the vault's balance in the desk.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn total_assets(&self) -> Result<U256, Self::Error>;

    /// Returns the amount of shares that the vault would exchange for the
    /// amount of `assets` provided, in an ideal scenario where all the
    /// conditions are met.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `assets` - Amount of the underlying asset.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn convert_to_shares(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Returns the amount of assets that the vault would exchange for the
    /// amount of `shares` provided, in an ideal scenario where all the
    /// conditions are met.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `shares` - Amount of shares.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn convert_to_assets(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Returns the maximum amount of the underlying asset that can be
    /// deposited into the vault for the `receiver`. The desk takes any
    /// amount, so this is always [`U256::MAX`].
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `receiver` - Account that would receive the shares.
    fn max_deposit(&self, receiver: Address) -> U256;

    /// Simulates the effects of a deposit at the current block.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `assets` - Amount of the underlying asset to deposit.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn preview_deposit(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Deposits exactly `assets` of the underlying token and mints shares
    /// to `receiver`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `assets` - Amount of the underlying asset to deposit.
    /// * `receiver` - Account receiving the shares.
    /// * `erc20` - Write access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::ExceededMaxDeposit`] - If `assets` exceeds
    ///   [`Self::max_deposit`].
    /// * [`Error::SafeErc20`] - If the assets cannot be pulled from the
    ///   caller.
    /// * [`Error::FailedDeskOperation`] - If the desk refuses the supply.
    /// * [`Error::Erc20`] - If `receiver` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] from [`Address::ZERO`] to `receiver`.
    /// * [`Deposit`].
    fn deposit(
        &mut self,
        assets: U256,
        receiver: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error>;

    /// Returns the maximum amount of shares that can be minted for the
    /// `receiver`. Always [`U256::MAX`].
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `receiver` - Account that would receive the shares.
    fn max_mint(&self, receiver: Address) -> U256;

    /// Simulates the effects of a mint at the current block. Rounds up.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `shares` - Amount of shares to mint.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn preview_mint(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Mints exactly `shares` to `receiver` by depositing the amount of
    /// underlying tokens returned by [`Self::preview_mint`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `shares` - Amount of shares to mint.
    /// * `receiver` - Account receiving the shares.
    /// * `erc20` - Write access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::ExceededMaxMint`] - If `shares` exceeds
    ///   [`Self::max_mint`].
    /// * [`Error::SafeErc20`] - If the assets cannot be pulled from the
    ///   caller.
    /// * [`Error::FailedDeskOperation`] - If the desk refuses the supply.
    /// * [`Error::Erc20`] - If `receiver` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] from [`Address::ZERO`] to `receiver`.
    /// * [`Deposit`].
    fn mint(
        &mut self,
        shares: U256,
        receiver: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error>;

    /// Returns the maximum amount of the underlying asset that can be
    /// withdrawn from the `owner` balance in the vault.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `owner` - Account owning the shares.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn max_withdraw(
        &self,
        owner: Address,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Simulates the effects of a withdrawal at the current block. Rounds
    /// up.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `assets` - Amount of the underlying asset to withdraw.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn preview_withdraw(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Burns shares from `owner` and sends exactly `assets` of the
    /// underlying token to `receiver`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `assets` - Amount of the underlying asset to withdraw.
    /// * `receiver` - Account receiving the assets.
    /// * `owner` - Account owning the burnt shares.
    /// * `erc20` - Write access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::ExceededMaxWithdraw`] - If `assets` exceeds
    ///   [`Self::max_withdraw`].
    /// * [`Error::Erc20`] - If the caller is not `owner` and lacks the share
    ///   allowance.
    /// * [`Error::FailedDeskOperation`] - If the desk does not release the
    ///   assets.
    /// * [`Error::SafeErc20`] - If the assets cannot be sent to `receiver`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] from `owner` to [`Address::ZERO`].
    /// * [`Withdraw`].
    fn withdraw(
        &mut self,
        assets: U256,
        receiver: Address,
        owner: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error>;

    /// Returns the maximum amount of vault shares that can be redeemed from
    /// the `owner` balance in the vault.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `owner` - Account owning the shares.
    /// * `erc20` - Read access to the share token.
    fn max_redeem(&self, owner: Address, erc20: &Erc20) -> U256;

    /// Simulates the effects of a redemption at the current block.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `shares` - Amount of shares to redeem.
    /// * `erc20` - Read access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::FailedDeskOperation`] - If the desk cannot report the
    ///   balance.
    fn preview_redeem(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error>;

    /// Burns exactly `shares` from `owner` and sends the corresponding
    /// assets to `receiver`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `shares` - Amount of shares to redeem.
    /// * `receiver` - Account receiving the assets.
    /// * `owner` - Account owning the burnt shares.
    /// * `erc20` - Write access to the share token.
    ///
    /// # Errors
    ///
    /// * [`Error::ExceededMaxRedeem`] - If `shares` exceeds
    ///   [`Self::max_redeem`].
    /// * [`Error::Erc20`] - If the caller is not `owner` and lacks the share
    ///   allowance.
    /// * [`Error::FailedDeskOperation`] - If the desk does not release the
    ///   assets.
    /// * [`Error::SafeErc20`] - If the assets cannot be sent to `receiver`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] from `owner` to [`Address::ZERO`].
    /// * [`Withdraw`].
    fn redeem(
        &mut self,
        shares: U256,
        receiver: Address,
        owner: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error>;
}

impl Desk4626 {
    /// Binds the vault to `desk` and approves the desk to pull the vault's
    /// assets. Meant to be called once from the constructor of the
    /// embedding contract.
    ///
    /// The asset decimals are read from the token's optional `decimals()`,
    /// and default to [`DEFAULT_DECIMALS`] when the token does not answer.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `desk` - Address of the Crayon lending desk.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidDesk`] - If `desk` has no code or its `token()` is
    ///   unreadable or [`Address::ZERO`].
    /// * [`Error::SafeErc20`] - If the asset refuses the approval.
    pub fn constructor(&mut self, desk: Address) -> Result<(), Error> {
        let invalid_desk = || Error::InvalidDesk(Desk4626InvalidDesk { desk });

        if !Address::has_code(&desk) {
            return Err(invalid_desk());
        }

        let call = IDesk::tokenCall {};
        let data = RawCall::new_static()
            .call_with_reentrant_handling(desk, &call.abi_encode())
            .map_err(|_| invalid_desk())?;
        let asset = IDesk::tokenCall::abi_decode_returns(&data, true)
            .map_err(|_| invalid_desk())?
            ._0;
        if asset.is_zero() {
            return Err(invalid_desk());
        }

        let decimals =
            Self::try_get_asset_decimals(asset).unwrap_or(DEFAULT_DECIMALS);

        self.desk.set(desk);
        self.asset.set(asset);
        self.underlying_decimals.set(U8::from(decimals));

        self.safe_erc20.force_approve(asset, desk, U256::MAX)?;
        Ok(())
    }

    /// Returns the lending desk the vault supplies its assets to.
    #[must_use]
    pub fn desk(&self) -> Address {
        self.desk.get()
    }

    /// Returns the decimals of the vault shares, the same as the asset's.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.underlying_decimals.get().to::<u8>()
    }

    /// Reads `decimals()` of `asset`, if it answers with a value that fits
    /// into `u8`.
    fn try_get_asset_decimals(asset: Address) -> Option<u8> {
        let data = RawCall::new_static()
            .limit_return_data(0, 32)
            .call_with_reentrant_handling(
                asset,
                &Erc20MetadataAbi::decimalsCall {}.abi_encode(),
            )
            .ok()?;
        Erc20MetadataAbi::decimalsCall::abi_decode_returns(&data, true)
            .ok()
            .map(|decimals| decimals._0)
    }

    /// Amount of shares `assets` is worth.
    ///
    /// An empty vault, or a vault whose desk balance is gone, exchanges one
    /// share per asset unit.
    fn to_shares(
        &self,
        assets: U256,
        rounding: Rounding,
        erc20: &Erc20,
    ) -> Result<U256, Error> {
        let total_supply = erc20.total_supply();
        if total_supply.is_zero() {
            return Ok(assets);
        }

        let total_assets = self.total_assets()?;
        if total_assets.is_zero() {
            return Ok(assets);
        }

        Ok(assets.mul_div(total_supply, total_assets, rounding))
    }

    /// Amount of assets `shares` are worth. Zero for an empty vault.
    fn to_assets(
        &self,
        shares: U256,
        rounding: Rounding,
        erc20: &Erc20,
    ) -> Result<U256, Error> {
        let total_supply = erc20.total_supply();
        if total_supply.is_zero() {
            return Ok(U256::ZERO);
        }

        let total_assets = self.total_assets()?;
        Ok(shares.mul_div(total_assets, total_supply, rounding))
    }

    /// Sends `call` to the desk.
    fn call_desk(&self, call: &impl SolCall) -> Result<Vec<u8>, Error> {
        let desk = self.desk();
        RawCall::new()
            .call_with_reentrant_handling(desk, &call.abi_encode())
            .map_err(|_| {
                Error::FailedDeskOperation(Desk4626FailedDeskOperation {
                    desk,
                })
            })
    }

    /// Pulls `assets` from `caller`, supplies them to the desk and mints
    /// `shares` to `receiver`.
    fn _deposit(
        &mut self,
        caller: Address,
        receiver: Address,
        assets: U256,
        shares: U256,
        erc20: &mut Erc20,
    ) -> Result<(), Error> {
        let asset = self.asset();
        self.safe_erc20.safe_transfer_from(
            asset,
            caller,
            contract::address(),
            assets,
        )?;
        self.call_desk(&IDesk::depositCall { amount: assets })?;

        erc20._mint(receiver, shares)?;

        #[cfg(feature = "debug")]
        stylus_sdk::console!(
            "deposit: receiver={receiver} assets={assets} shares={shares}"
        );

        evm::log(Deposit { sender: caller, owner: receiver, assets, shares });

        Ok(())
    }

    /// Burns `shares` of `owner`, pulls `assets` back from the desk and
    /// sends them to `receiver`.
    fn _withdraw(
        &mut self,
        caller: Address,
        receiver: Address,
        owner: Address,
        assets: U256,
        shares: U256,
        erc20: &mut Erc20,
    ) -> Result<(), Error> {
        if caller != owner {
            erc20._spend_allowance(owner, caller, shares)?;
        }

        erc20._burn(owner, shares)?;

        self.call_desk(&IDesk::withdrawCall { amount: assets })?;
        let asset = self.asset();
        self.safe_erc20.safe_transfer(asset, receiver, assets)?;

        #[cfg(feature = "debug")]
        stylus_sdk::console!(
            "withdraw: owner={owner} assets={assets} shares={shares}"
        );

        evm::log(Withdraw { sender: caller, receiver, owner, assets, shares });

        Ok(())
    }
}

impl IErc4626 for Desk4626 {
    type Error = Error;

    fn asset(&self) -> Address {
        self.asset.get()
    }

    fn total_assets(&self) -> Result<U256, Self::Error> {
        let desk = self.desk();
        let failed = || {
            Error::FailedDeskOperation(Desk4626FailedDeskOperation { desk })
        };

        let call = IDesk::balanceOfCall { account: contract::address() };
        let data = RawCall::new_static()
            .call_with_reentrant_handling(desk, &call.abi_encode())
            .map_err(|_| failed())?;
        let balance = IDesk::balanceOfCall::abi_decode_returns(&data, true)
            .map_err(|_| failed())?;
        Ok(balance._0)
    }

    fn convert_to_shares(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        self.to_shares(assets, Rounding::Floor, erc20)
    }

    fn convert_to_assets(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        self.to_assets(shares, Rounding::Floor, erc20)
    }

    fn max_deposit(&self, _receiver: Address) -> U256 {
        U256::MAX
    }

    fn preview_deposit(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        self.to_shares(assets, Rounding::Floor, erc20)
    }

    fn deposit(
        &mut self,
        assets: U256,
        receiver: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error> {
        let max_assets = self.max_deposit(receiver);
        if assets > max_assets {
            return Err(Error::ExceededMaxDeposit(ERC4626ExceededMaxDeposit {
                receiver,
                assets,
                max: max_assets,
            }));
        }

        let shares = self.preview_deposit(assets, erc20)?;
        self._deposit(msg::sender(), receiver, assets, shares, erc20)?;
        Ok(shares)
    }

    fn max_mint(&self, _receiver: Address) -> U256 {
        U256::MAX
    }

    fn preview_mint(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        if erc20.total_supply().is_zero() {
            return Ok(shares);
        }
        self.to_assets(shares, Rounding::Ceil, erc20)
    }

    fn mint(
        &mut self,
        shares: U256,
        receiver: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error> {
        let max_shares = self.max_mint(receiver);
        if shares > max_shares {
            return Err(Error::ExceededMaxMint(ERC4626ExceededMaxMint {
                receiver,
                shares,
                max: max_shares,
            }));
        }

        let assets = self.preview_mint(shares, erc20)?;
        self._deposit(msg::sender(), receiver, assets, shares, erc20)?;
        Ok(assets)
    }

    fn max_withdraw(
        &self,
        owner: Address,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        self.to_assets(erc20.balance_of(owner), Rounding::Floor, erc20)
    }

    fn preview_withdraw(
        &self,
        assets: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        if erc20.total_supply().is_zero() {
            return Ok(U256::ZERO);
        }
        self.to_shares(assets, Rounding::Ceil, erc20)
    }

    fn withdraw(
        &mut self,
        assets: U256,
        receiver: Address,
        owner: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error> {
        let max_assets = self.max_withdraw(owner, erc20)?;
        if assets > max_assets {
            return Err(Error::ExceededMaxWithdraw(
                ERC4626ExceededMaxWithdraw { owner, assets, max: max_assets },
            ));
        }

        let shares = self.preview_withdraw(assets, erc20)?;
        self._withdraw(msg::sender(), receiver, owner, assets, shares, erc20)?;
        Ok(shares)
    }

    fn max_redeem(&self, owner: Address, erc20: &Erc20) -> U256 {
        erc20.balance_of(owner)
    }

    fn preview_redeem(
        &self,
        shares: U256,
        erc20: &Erc20,
    ) -> Result<U256, Self::Error> {
        self.to_assets(shares, Rounding::Floor, erc20)
    }

    fn redeem(
        &mut self,
        shares: U256,
        receiver: Address,
        owner: Address,
        erc20: &mut Erc20,
    ) -> Result<U256, Self::Error> {
        let max_shares = self.max_redeem(owner, erc20);
        if shares > max_shares {
            return Err(Error::ExceededMaxRedeem(ERC4626ExceededMaxRedeem {
                owner,
                shares,
                max: max_shares,
            }));
        }

        let assets = self.preview_redeem(shares, erc20)?;
        self._withdraw(msg::sender(), receiver, owner, assets, shares, erc20)?;
        Ok(assets)
    }
}
