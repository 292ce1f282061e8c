//! Common extensions to the ERC-20 standard.
pub mod desk4626;
pub mod metadata;

pub use desk4626::{Desk4626, IErc4626};
pub use metadata::{Erc20Metadata, IErc20Metadata};
