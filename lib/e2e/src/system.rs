use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill,
            NonceFiller, WalletFiller,
        },
        Identity, ProviderBuilder, RootProvider,
    },
    signers::local::PrivateKeySigner,
    transports::http::{reqwest::Url, Client, Http},
};
use eyre::Context;

use crate::environment::{env, RPC_URL};

/// Convenience type alias that represents an Ethereum wallet.
pub type Wallet = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<
                GasFiller,
                JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>,
            >,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Http<Client>>,
    Http<Client>,
    Ethereum,
>;

/// Returns the rpc endpoint configured through `RPC_URL`.
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    env(RPC_URL)?.parse().wrap_err("failed to parse RPC_URL into a URL")
}

/// Creates a wallet that signs with `signer` and talks to `RPC_URL`.
///
/// # Errors
///
/// May fail if `RPC_URL` is missing or malformed.
pub fn provider(signer: PrivateKeySigner) -> eyre::Result<Wallet> {
    Ok(ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(rpc_url()?))
}
