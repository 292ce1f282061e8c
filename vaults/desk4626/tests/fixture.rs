#![allow(dead_code)]
//! Per-token deployment of a vault, its desk and its asset.
use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use e2e::{constructor, watch, Account, ReceiptExt};
use eyre::{Context, ContextCompat};
use serde::Deserialize;

use crate::abi::Erc20Mock;

const DESKS: &str = include_str!("desks.json");

const ERC20_MOCK: &str = "mocks/erc20-mock";
const DESK_MOCK: &str = "mocks/desk-mock";

/// A token entry of `desks.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct DeskToken {
    /// Token name.
    pub name: String,
    /// Token decimals.
    pub decimals: u8,
    /// Whole tokens minted to the holder.
    pub supply: u64,
}

/// Reads the entry of `symbol` in `desks.json`.
pub fn desk_token(symbol: &str) -> eyre::Result<DeskToken> {
    let desks: HashMap<String, DeskToken> =
        serde_json::from_str(DESKS).wrap_err("failed to parse desks.json")?;
    desks
        .get(symbol)
        .cloned()
        .with_context(|| format!("no `{symbol}` entry in desks.json"))
}

/// A vault deployed over a fresh desk for one of the fixture tokens.
pub struct Fixture {
    /// Token config the fixture was built from.
    pub config: DeskToken,
    /// Upper-case token symbol.
    pub symbol: String,
    /// Asset of the desk.
    pub token: Address,
    /// Crayon desk mock.
    pub desk: Address,
    /// The vault under test.
    pub vault: Address,
}

impl Fixture {
    /// Deploys the `symbol` token, a desk lending it and a vault on top,
    /// then splits the holder's supply between `lenders`.
    ///
    /// The holder is a fresh account standing in for a whale of the real
    /// token.
    pub async fn deploy(
        symbol: &str,
        admin: &Account,
        lenders: &[&Account],
    ) -> eyre::Result<Self> {
        let config = desk_token(symbol)?;
        let symbol = symbol.to_uppercase();

        let token = admin
            .as_deployer()
            .in_package(ERC20_MOCK)
            .with_constructor(constructor!(
                config.name.clone(),
                symbol.clone(),
                config.decimals
            ))
            .deploy()
            .await?
            .address()?;

        let holder = Account::new().await?;
        let supply = units(config.decimals, config.supply);
        let asset = Erc20Mock::new(token, &admin.wallet);
        watch!(asset.mint(holder.address(), supply))?;

        let share = supply / U256::from(lenders.len());
        let asset = Erc20Mock::new(token, &holder.wallet);
        for lender in lenders {
            watch!(asset.transfer(lender.address(), share))?;
        }

        let desk = admin
            .as_deployer()
            .in_package(DESK_MOCK)
            .with_constructor(constructor!(token))
            .deploy()
            .await?
            .address()?;

        let vault = admin
            .as_deployer()
            .with_constructor(constructor!(
                desk,
                format!("xc{symbol}"),
                format!("Crayon {symbol}")
            ))
            .deploy()
            .await?
            .address()?;

        Ok(Self { config, symbol, token, desk, vault })
    }

    /// `amount` whole tokens, in asset units.
    pub fn units(&self, amount: u64) -> U256 {
        units(self.config.decimals, amount)
    }
}

fn units(decimals: u8, amount: u64) -> U256 {
    U256::from(amount) * U256::from(10).pow(U256::from(decimals))
}
