//! Crayon Desk vault: an ERC-4626 vault whose assets are lent to a Crayon
//! lending desk.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::string::String;

use alloy_primitives::{Address, U256};
use crayon_stylus::token::erc20::{
    extensions::{desk4626::Error, Desk4626, Erc20Metadata, IErc4626},
    Erc20,
};
use stylus_sdk::{msg, prelude::*};

#[entrypoint]
#[storage]
struct Desk4626Vault {
    #[borrow]
    erc20: Erc20,
    #[borrow]
    metadata: Erc20Metadata,
    desk4626: Desk4626,
}

#[public]
#[inherit(Erc20, Erc20Metadata)]
impl Desk4626Vault {
    #[constructor]
    fn constructor(
        &mut self,
        desk: Address,
        symbol: String,
        name: String,
    ) -> Result<(), Error> {
        self.metadata.constructor(name, symbol);
        self.desk4626.constructor(desk)
    }

    fn decimals(&self) -> u8 {
        self.desk4626.decimals()
    }

    fn desk(&self) -> Address {
        self.desk4626.desk()
    }

    fn asset(&self) -> Address {
        self.desk4626.asset()
    }

    fn total_assets(&self) -> Result<U256, Error> {
        self.desk4626.total_assets()
    }

    fn convert_to_shares(&self, assets: U256) -> Result<U256, Error> {
        self.desk4626.convert_to_shares(assets, &self.erc20)
    }

    fn convert_to_assets(&self, shares: U256) -> Result<U256, Error> {
        self.desk4626.convert_to_assets(shares, &self.erc20)
    }

    fn max_deposit(&self, receiver: Address) -> U256 {
        self.desk4626.max_deposit(receiver)
    }

    fn preview_deposit(&self, assets: U256) -> Result<U256, Error> {
        self.desk4626.preview_deposit(assets, &self.erc20)
    }

    fn deposit(
        &mut self,
        assets: U256,
        receiver: Address,
    ) -> Result<U256, Error> {
        self.desk4626.deposit(assets, receiver, &mut self.erc20)
    }

    #[selector(name = "deposit")]
    fn deposit_for_sender(&mut self, assets: U256) -> Result<U256, Error> {
        self.desk4626.deposit(assets, msg::sender(), &mut self.erc20)
    }

    fn max_mint(&self, receiver: Address) -> U256 {
        self.desk4626.max_mint(receiver)
    }

    fn preview_mint(&self, shares: U256) -> Result<U256, Error> {
        self.desk4626.preview_mint(shares, &self.erc20)
    }

    fn mint(
        &mut self,
        shares: U256,
        receiver: Address,
    ) -> Result<U256, Error> {
        self.desk4626.mint(shares, receiver, &mut self.erc20)
    }

    #[selector(name = "mint")]
    fn mint_for_sender(&mut self, shares: U256) -> Result<U256, Error> {
        self.desk4626.mint(shares, msg::sender(), &mut self.erc20)
    }

    fn max_withdraw(&self, owner: Address) -> Result<U256, Error> {
        self.desk4626.max_withdraw(owner, &self.erc20)
    }

    fn preview_withdraw(&self, assets: U256) -> Result<U256, Error> {
        self.desk4626.preview_withdraw(assets, &self.erc20)
    }

    fn withdraw(
        &mut self,
        assets: U256,
        receiver: Address,
        owner: Address,
    ) -> Result<U256, Error> {
        self.desk4626.withdraw(assets, receiver, owner, &mut self.erc20)
    }

    #[selector(name = "withdraw")]
    fn withdraw_for_sender(&mut self, assets: U256) -> Result<U256, Error> {
        let sender = msg::sender();
        self.desk4626.withdraw(assets, sender, sender, &mut self.erc20)
    }

    fn max_redeem(&self, owner: Address) -> U256 {
        self.desk4626.max_redeem(owner, &self.erc20)
    }

    fn preview_redeem(&self, shares: U256) -> Result<U256, Error> {
        self.desk4626.preview_redeem(shares, &self.erc20)
    }

    fn redeem(
        &mut self,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> Result<U256, Error> {
        self.desk4626.redeem(shares, receiver, owner, &mut self.erc20)
    }

    #[selector(name = "redeem")]
    fn redeem_for_sender(&mut self, shares: U256) -> Result<U256, Error> {
        let sender = msg::sender();
        self.desk4626.redeem(shares, sender, sender, &mut self.erc20)
    }
}
