//! End-to-end testing harness for the Crayon Desk vault.
//!
//! Tests run against a nitro dev node reachable at `RPC_URL`. Contracts are
//! deployed with `cargo stylus deploy`, constructors go through the
//! `StylusDeployer` at `DEPLOYER_ADDRESS`.
mod account;
mod constructor;
mod deploy;
mod environment;
mod error;
mod event;
mod receipt;
mod system;

pub use account::Account;
pub use constructor::{AbiArg, Constructor};
pub use deploy::{Deployer, StylusDeployerError};
pub use e2e_proc::test;
pub use environment::get_workspace_root;
pub use error::Revert;
pub use event::Ext as EventExt;
pub use receipt::Ext as ReceiptExt;
pub use system::{provider, Wallet};

/// Sends the transaction built by `$e` and returns the pending transaction.
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Sends the transaction built by `$e` and waits for it to be included,
/// returning its hash.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $e.send().await?.watch().await
    };
}

/// Sends the transaction built by `$e` and returns its receipt.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $e.send().await?.get_receipt().await
    };
}
