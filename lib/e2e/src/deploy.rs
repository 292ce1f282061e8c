use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    str::FromStr,
};

use alloy::{
    consensus::Transaction,
    hex::{self, ToHexExt},
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    sol,
    sol_types::SolError,
};
use eyre::{Context, ContextCompat};
use regex::Regex;

use crate::{
    constructor::Constructor,
    environment::{env, get_workspace_root, DEPLOYER_ADDRESS},
    system::{provider, Wallet},
};

sol! {
    error ContractInitializationError(address contract);
    error ProgramUpToDate();
}

/// The `StylusDeployer` reverted while running a contract's constructor.
#[derive(Debug)]
pub struct StylusDeployerError {
    /// Deployed contract address.
    pub contract_address: Address,
    /// Hex encoded revert data.
    pub revert_data: String,
}

impl StylusDeployerError {
    /// Downcasts an [`eyre::Report`] into a [`StylusDeployerError`].
    #[must_use]
    pub fn from_report(report: &eyre::Report) -> Option<&Self> {
        report.downcast_ref::<StylusDeployerError>()
    }
}

impl std::fmt::Display for StylusDeployerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.revert_data)
    }
}

impl std::error::Error for StylusDeployerError {}

/// Deploys the `#[entrypoint]` contract of a workspace crate with
/// `cargo stylus deploy`.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    package_dir: Option<PathBuf>,
    ctr: Option<Constructor>,
}

impl Deployer {
    /// Creates a deployer that signs with `private_key`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self { rpc_url, private_key, package_dir: None, ctr: None }
    }

    /// Deploy the crate at `package`, relative to the workspace root,
    /// instead of the crate running the tests.
    #[must_use]
    pub fn in_package(mut self, package: impl AsRef<Path>) -> Self {
        self.package_dir = Some(PathBuf::from(package.as_ref()));
        self
    }

    /// Run the contract's constructor with `ctr` through the
    /// `StylusDeployer`.
    #[must_use]
    pub fn with_constructor(mut self, ctr: Constructor) -> Self {
        self.ctr = Some(ctr);
        self
    }

    /// Deploy and activate the contract.
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - `cargo stylus` is not installed or the crate doesn't build.
    /// - `DEPLOYER_ADDRESS` is not set while a constructor is configured.
    /// - The constructor reverts, see [`StylusDeployerError`].
    pub async fn deploy(self) -> eyre::Result<(TransactionReceipt, Address)> {
        let mut command = Command::new("cargo");
        command
            .args(["stylus", "deploy"])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .arg("--no-verify");

        if let Some(package) = &self.package_dir {
            command.current_dir(get_workspace_root()?.join(package));
        }

        if let Some(ctr) = &self.ctr {
            let deployer_address = env(DEPLOYER_ADDRESS)?;
            command
                .args(["--experimental-deployer-address", &deployer_address])
                .arg("--experimental-constructor-args")
                .args(&ctr.args);
        }

        let output = command
            .output()
            .wrap_err("failed to execute `cargo stylus deploy` command")?;

        if output.status.success() {
            self.receipt_from_stdout(&output).await
        } else {
            self.parse_deployment_error(&output).await
        }
    }

    fn wallet(&self) -> eyre::Result<Wallet> {
        let signer = self
            .private_key
            .parse::<PrivateKeySigner>()
            .wrap_err("failed to parse private key")?;
        provider(signer)
    }

    async fn fetch_receipt(
        &self,
        tx_hash: TxHash,
    ) -> eyre::Result<TransactionReceipt> {
        self.wallet()?
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| eyre::eyre!("RPC error: {e}"))?
            .context("transaction receipt not found")
    }

    /// Workarounds for how the nitro-testnode reports deployment failures.
    async fn parse_deployment_error(
        &self,
        output: &Output,
    ) -> eyre::Result<(TransactionReceipt, Address)> {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let revert_data_regex =
            Regex::new(r#"data: Some\(String\("0x([a-fA-F0-9]+)"\)\)"#)
                .wrap_err("failed to create revert data regex")?;

        if let Some(hex_str) =
            revert_data_regex.captures(&stderr).and_then(|cap| cap.get(1))
        {
            let hex_str = hex_str.as_str();
            let data = hex::decode(hex_str)
                .wrap_err_with(|| format!("failed to decode hex: {hex_str}"))?;
            let selector = data.get(..4).unwrap_or_default();

            if selector == ContractInitializationError::SELECTOR {
                let err = ContractInitializationError::abi_decode(&data, false)
                    .wrap_err("failed to decode ContractInitializationError")?;
                return Err(eyre::Report::new(StylusDeployerError {
                    contract_address: err.contract,
                    revert_data: hex_str.to_string(),
                }));
            }

            // The activation estimate fails with `ProgramUpToDate` when the
            // same wasm was already activated, stdout still has the
            // deployment.
            if selector == ProgramUpToDate::SELECTOR {
                return self.receipt_from_stdout(output).await;
            }

            eyre::bail!(hex_str.to_string());
        }

        let activation_error_regex = Regex::new(
            r"activate tx reverted (?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]+)",
        )
        .wrap_err("failed to create activation error regex")?;

        if let Some(tx_hash) =
            activation_error_regex.captures(&stderr).and_then(|cap| cap.get(1))
        {
            let tx_hash = TxHash::from_str(tx_hash.as_str())
                .wrap_err("failed to parse transaction hash")?;

            let tx = self
                .wallet()?
                .get_transaction_by_hash(tx_hash)
                .await
                .map_err(|e| eyre::eyre!("RPC error: {e}"))?
                .context("transaction not found")?;
            let input = tx.input().encode_hex();

            // The activation call takes the program address as its only
            // argument.
            let contract_addr_regex =
                Regex::new(r"[a-fA-F0-9]{8}0+([a-fA-F0-9]{40})$")
                    .wrap_err("failed to create contract addr regex")?;
            let contract_addr = contract_addr_regex
                .captures(&input)
                .and_then(|cap| cap.get(1))
                .with_context(|| {
                    format!("no contract address found in input {input}")
                })?
                .as_str();
            let contract_address = Address::from_str(contract_addr)
                .wrap_err_with(|| {
                    format!("failed to parse contract address {contract_addr}")
                })?;

            let receipt = self.fetch_receipt(tx_hash).await?;
            return Ok((receipt, contract_address));
        }

        Err(eyre::eyre!("deployment failed: {stderr}"))
    }

    async fn receipt_from_stdout(
        &self,
        output: &Output,
    ) -> eyre::Result<(TransactionReceipt, Address)> {
        let stdout = String::from_utf8_lossy(&output.stdout);

        let tx_hash_regex = Regex::new(r"0x[a-fA-F0-9]{64}")
            .wrap_err("failed to create tx hash regex")?;

        // `cargo stylus deploy` colors the address with ANSI escape codes.
        let contract_addr_regex = Regex::new(
            r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
        )
        .wrap_err("failed to create contract addr regex")?;

        let tx_hash = tx_hash_regex
            .find(&stdout)
            .with_context(|| {
                format!("no transaction hash found in output {stdout}")
            })?
            .as_str();
        let tx_hash = TxHash::from_str(tx_hash)
            .wrap_err("failed to parse transaction hash")?;

        let contract_addr = contract_addr_regex
            .captures(&stdout)
            .and_then(|cap| cap.get(1))
            .with_context(|| {
                format!("no contract address found in output {stdout}")
            })?
            .as_str();
        let contract_address =
            Address::from_str(contract_addr).wrap_err_with(|| {
                format!("failed to parse contract address {contract_addr}")
            })?;

        let receipt = self.fetch_receipt(tx_hash).await?;
        Ok((receipt, contract_address))
    }
}
