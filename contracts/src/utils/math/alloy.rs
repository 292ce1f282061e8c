//! Fixed-point helpers for [`U256`] used by the vault's share accounting.
use alloy_primitives::{U256, U512};

/// Trait for standard math utilities missing in `alloy_primitives`.
pub trait Math {
    /// Calculates `self * y / denominator` with full precision, following
    /// the selected `rounding` direction.
    ///
    /// # Arguments
    ///
    /// * `self` - first factor.
    /// * `y` - second factor.
    /// * `denominator` - denominator of the division.
    /// * `rounding` - rounding direction of the quotient.
    ///
    /// # Panics
    ///
    /// * If `denominator` is zero.
    /// * If the quotient does not fit into [`U256`].
    #[must_use]
    fn mul_div(self, y: Self, denominator: Self, rounding: Rounding) -> Self;
}

/// Rounding direction of a division.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Rounding toward negative infinity.
    Floor,
    /// Rounding toward positive infinity.
    Ceil,
}

impl Math for U256 {
    fn mul_div(self, y: Self, denominator: Self, rounding: Rounding) -> Self {
        assert!(
            !denominator.is_zero(),
            "division by U256::ZERO in `Math::mul_div`"
        );

        let prod = U512::from(self)
            .checked_mul(U512::from(y))
            .expect("should not panic with `U256` * `U256`");
        let denominator = U512::from(denominator);

        let quotient = prod / denominator;
        let quotient = match rounding {
            Rounding::Ceil if !(prod % denominator).is_zero() => {
                quotient + U512::ONE
            }
            _ => quotient,
        };

        assert!(
            quotient <= U512::from(U256::MAX),
            "should fit into `U256` in `Math::mul_div`"
        );
        U256::from(quotient)
    }
}
