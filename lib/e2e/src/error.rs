use alloy::sol_types::SolError;

/// Extension trait for asserting that a call reverted with a given Solidity
/// error.
pub trait Revert<E> {
    /// Checks that `Self` corresponds to the typed abi-encoded error
    /// `expected`.
    fn reverted_with(&self, expected: E) -> bool;
}

impl<E: SolError> Revert<E> for alloy::contract::Error {
    fn reverted_with(&self, expected: E) -> bool {
        let Self::TransportError(e) = self else {
            return false;
        };

        //  ErrorResp(
        //      ErrorPayload {
        //          code: 3,
        //          message: "execution reverted",
        //          data: Some(RawValue("0x...")),
        //      },
        //  )
        let Some(raw_value) =
            e.as_error_resp().and_then(|payload| payload.data.clone())
        else {
            return false;
        };
        let actual = raw_value.get().trim_matches('"').trim_start_matches("0x");
        let expected = alloy::hex::encode(expected.abi_encode());
        expected == actual
    }
}

impl<E: SolError> Revert<E> for eyre::Report {
    fn reverted_with(&self, expected: E) -> bool {
        if let Some(err) = self.downcast_ref::<alloy::contract::Error>() {
            return err.reverted_with(expected);
        }

        // Errors that went through the `StylusDeployer` or a pending
        // transaction only carry the revert data in their message.
        let err_string = format!("{self:#?}");
        let expected = alloy::hex::encode(expected.abi_encode());
        err_string.contains(&expected)
    }
}
