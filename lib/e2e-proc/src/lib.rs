//! Procedural macros of the `e2e` harness.
use proc_macro::TokenStream;


/// Defines an end-to-end test that injects freshly funded accounts through
/// its arguments.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn deposits(alice: Account) -> eyre::Result<()> {
///     let vault = Desk4626::new(vault_addr, &alice.wallet);
///     let _ = watch!(vault.deposit_0(assets, alice.address()))?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr, input)
}
