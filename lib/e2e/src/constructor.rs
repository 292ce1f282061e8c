use alloy::primitives::{Address, U256};

/// Arguments of a contract constructor, in the textual form accepted by
/// `cargo stylus deploy --experimental-constructor-args`.
#[derive(Clone, Debug, Default)]
pub struct Constructor {
    /// Constructor arguments, in declaration order.
    pub args: Vec<String>,
}

/// A value that can be passed as a constructor argument.
pub trait AbiArg {
    /// Renders `self` the way `cargo stylus` parses it.
    fn to_arg(&self) -> String;
}

macro_rules! impl_abi_arg {
    ($($ty:ty),* $(,)?) => {$(
        impl AbiArg for $ty {
            fn to_arg(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_abi_arg!(U256, u8, u64, String, &str, Address);

/// Builds a [`Constructor`] out of its arguments.
///
/// ```rust,ignore
/// let ctr = e2e::constructor!(desk, "xcUSDC", "Crayon USDC");
/// ```
#[macro_export]
macro_rules! constructor {
    () => {
        $crate::Constructor::default()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Constructor {
            args: vec![$($crate::AbiArg::to_arg(&$arg)),+],
        }
    };
}
