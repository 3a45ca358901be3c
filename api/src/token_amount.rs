//! Fixed-decimal display of on-chain token amounts.

use std::fmt;

use alloy_primitives::U256;

/// An on-chain integer amount tagged with its token's decimal scale.
///
/// The amount stays integral in the token's smallest unit; formatting never
/// goes through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    base_units: U256,
    decimals: u8,
}

impl TokenAmount {
    /// Wraps a raw on-chain value (the token's smallest unit).
    pub fn from_base_units(base_units: U256, decimals: u8) -> Self {
        Self {
            base_units,
            decimals,
        }
    }

    /// Converts a whole-token count into base units.
    ///
    /// # Example
    /// ```
    /// use api::token_amount::TokenAmount;
    ///
    /// let amount = TokenAmount::from_whole(3, 6);
    /// assert_eq!(amount.to_string(), "3.000000");
    /// ```
    pub fn from_whole(whole: u64, decimals: u8) -> Self {
        let scale = U256::from(10u8).pow(U256::from(decimals));
        Self {
            base_units: U256::from(whole) * scale,
            decimals,
        }
    }

    /// Returns the raw amount in the token's smallest unit.
    pub fn base_units(&self) -> U256 {
        self.base_units
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Formats the amount at its full fixed scale, e.g. `"1.500000"` for
/// 1 500 000 base units at 6 decimals.
impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "{}", self.base_units);
        }

        let divisor = U256::from(10u8).pow(U256::from(self.decimals));
        let major = self.base_units / divisor;
        let minor = self.base_units % divisor;

        write!(
            f,
            "{}.{:0>width$}",
            major,
            minor.to_string(),
            width = self.decimals as usize
        )
    }
}
