//! Mintable ERC-20 with configurable decimals.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::string::String;

use alloy_primitives::{Address, U256, U8};
use crayon_stylus::token::erc20::{self, extensions::Erc20Metadata, Erc20};
use stylus_sdk::{prelude::*, storage::StorageU8};

#[entrypoint]
#[storage]
struct Erc20Mock {
    #[borrow]
    erc20: Erc20,
    #[borrow]
    metadata: Erc20Metadata,
    decimals: StorageU8,
}

#[public]
#[inherit(Erc20, Erc20Metadata)]
impl Erc20Mock {
    #[constructor]
    fn constructor(&mut self, name: String, symbol: String, decimals: u8) {
        self.metadata.constructor(name, symbol);
        self.decimals.set(U8::from(decimals));
    }

    fn decimals(&self) -> u8 {
        self.decimals.get().to::<u8>()
    }

    /// Anyone can mint, the token only exists for tests.
    fn mint(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), erc20::Error> {
        self.erc20._mint(account, value)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use crayon_stylus::token::erc20::{
        self, extensions::IErc20Metadata, IErc20,
    };
    use motsu::prelude::*;

    use super::Erc20Mock;

    #[motsu::test]
    fn constructs_with_decimals(contract: Contract<Erc20Mock>, alice: Address) {
        contract.sender(alice).constructor(
            "Wrapped BTC".into(),
            "WBTC".into(),
            8,
        );

        assert_eq!(contract.sender(alice).decimals(), 8);
        assert_eq!(contract.sender(alice).metadata.symbol(), "WBTC");
    }

    #[motsu::test]
    fn mints_to_anyone(
        contract: Contract<Erc20Mock>,
        alice: Address,
        bob: Address,
    ) {
        let value = uint!(1000_U256);
        contract.sender(alice).mint(bob, value).expect("should mint");

        assert_eq!(contract.sender(alice).erc20.balance_of(bob), value);
        assert_eq!(contract.sender(alice).erc20.total_supply(), value);
    }

    #[motsu::test]
    fn mint_errors_invalid_receiver(
        contract: Contract<Erc20Mock>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            .mint(Address::ZERO, U256::ONE)
            .expect_err("should not mint to the zero address");

        assert!(matches!(err, erc20::Error::InvalidReceiver(_)));
    }
}
