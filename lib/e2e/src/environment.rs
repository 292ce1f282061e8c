use std::path::PathBuf;

use eyre::{Context, ContextCompat};

/// Name of the environment variable holding the node's rpc endpoint.
pub(crate) const RPC_URL: &str = "RPC_URL";

/// Name of the environment variable holding the `StylusDeployer` address.
pub(crate) const DEPLOYER_ADDRESS: &str = "DEPLOYER_ADDRESS";

/// Load the `name` environment variable.
pub(crate) fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Returns the root of the cargo workspace this harness lives in.
///
/// # Errors
///
/// May fail if the harness was moved out of `<root>/lib/e2e`.
pub fn get_workspace_root() -> eyre::Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .ancestors()
        .nth(2)
        .context("`e2e` should live two levels below the workspace root")?;
    Ok(root.to_path_buf())
}
