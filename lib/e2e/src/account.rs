use std::str::FromStr;

use alloy::{
    network::TransactionBuilder,
    primitives::{uint, Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use eyre::Context;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    deploy::Deployer,
    system::{provider, Wallet},
};

/// Prefunded key of the nitro dev node.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
/// 0.1 ETH.
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// Type that corresponds to a test account.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: Wallet,
}

impl Account {
    /// Create a new account with a default funding of
    /// [`DEFAULT_FUNDING_ETH`].
    ///
    /// # Errors
    ///
    /// May fail if funding the newly created account fails.
    pub async fn new() -> eyre::Result<Self> {
        AccountFactory::create().await
    }

    /// Get a hex-encoded String representing this account's private key.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        self.wallet.client().transport().url()
    }

    /// Create a configurable smart contract deployer on behalf of this
    /// account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url().to_string(), self.pk())
    }

    /// Get gas token balance.
    ///
    /// # Errors
    ///
    /// May fail if the node can't be reached.
    pub async fn balance(&self) -> eyre::Result<U256> {
        self.wallet
            .get_balance(self.address())
            .await
            .wrap_err("should get balance")
    }

    /// Send `value` of gas token to `to`.
    ///
    /// # Errors
    ///
    /// May fail if the transfer is not included.
    pub async fn send_value(&self, to: Address, value: U256) -> eyre::Result<()> {
        send_value(&self.wallet, self.address(), to, value).await
    }
}

async fn send_value(
    wallet: &Wallet,
    from: Address,
    to: Address,
    value: U256,
) -> eyre::Result<()> {
    let tx = TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(value);

    wallet
        .send_transaction(tx)
        .await?
        .watch()
        .await
        .wrap_err_with(|| format!("funds were not sent to {to}"))?;

    Ok(())
}

/// A unit struct used as a synchronization mechanism in
/// [`SYNC_ACCOUNT_FACTORY`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// All accounts are funded from a single master wallet, so their
        /// creation must be serialized (otherwise the nonce will be too low).
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create a new account and fund it from the master wallet.
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is not set or if funding the newly created
    /// account fails.
    async fn create() -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let master = PrivateKeySigner::from_str(MASTER_PRIVATE_KEY)
            .wrap_err("failed to create master signer")?;
        let master_address = master.address();
        let master_wallet = provider(master)?;

        send_value(
            &master_wallet,
            master_address,
            signer.address(),
            DEFAULT_FUNDING_ETH,
        )
        .await
        .wrap_err("account's wallet wasn't funded")?;

        let wallet = provider(signer.clone())?;
        Ok(Account { signer, wallet })
    }
}
