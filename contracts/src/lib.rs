/*!
# Crayon Contracts for Stylus

Building blocks of the Crayon Desk vault, written in Rust for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).

The centerpiece is [`token::erc20::extensions::Desk4626`], an [ERC-4626]
tokenized vault that supplies every deposited asset to a Crayon lending desk
and issues shares that track the vault's claim on that desk.

## Usage

Add `crayon-stylus` to your `Cargo.toml`:

```toml
[dependencies]
crayon-stylus = { path = "../contracts" }
```

and compose the vault with an ERC-20 share token:

```rust,ignore
use crayon_stylus::token::erc20::{
    extensions::{Desk4626, Erc20Metadata},
    Erc20,
};

#[entrypoint]
#[storage]
struct Vault {
    #[borrow]
    erc20: Erc20,
    #[borrow]
    metadata: Erc20Metadata,
    desk4626: Desk4626,
}
```

[ERC-4626]: https://eips.ethereum.org/EIPS/eip-4626
*/

#![allow(
    clippy::module_name_repetitions,
    clippy::used_underscore_items,
    clippy::used_underscore_binding
)]
#![cfg_attr(not(any(test, feature = "std", feature = "export-abi")), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod desk;
pub mod token;
pub mod utils;
