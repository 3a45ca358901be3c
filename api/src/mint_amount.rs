//! The user-entered mint amount and its validation rule.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use thiserror::Error;

/// Exclusive upper bound on a mint amount.
pub const MINT_AMOUNT_LIMIT: u8 = 10;

/// An error that can occur when parsing a string into a [`MintAmount`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMintAmountError {
    /// The input is not a whole number (e.g. "abc", "3.5", "").
    #[error("mint amount must be a whole number")]
    NotAWholeNumber,
    /// The input is a whole number outside `[0, 10)`.
    #[error("mint amount must be at least 0 and less than {MINT_AMOUNT_LIMIT}")]
    OutOfRange,
}

/// A validated mint amount: a whole number in `[0, 10)`.
///
/// Invalid input never produces a `MintAmount`; the caller keeps whatever
/// value it had before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MintAmount(u8);

impl MintAmount {
    pub fn new(value: u8) -> Result<Self, ParseMintAmountError> {
        if value < MINT_AMOUNT_LIMIT {
            Ok(Self(value))
        } else {
            Err(ParseMintAmountError::OutOfRange)
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Scales the whole-number amount to contract base units.
    pub fn to_base_units(&self, decimals: u8) -> U256 {
        U256::from(self.0) * U256::from(10u8).pow(U256::from(decimals))
    }
}

impl FromStr for MintAmount {
    type Err = ParseMintAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParseMintAmountError::NotAWholeNumber)?;
        if !(0..i64::from(MINT_AMOUNT_LIMIT)).contains(&value) {
            return Err(ParseMintAmountError::OutOfRange);
        }
        Ok(Self(value as u8))
    }
}

impl fmt::Display for MintAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_amount_in_range() {
        for n in 0..MINT_AMOUNT_LIMIT {
            let parsed: MintAmount = n.to_string().parse().unwrap();
            assert_eq!(parsed.get(), n);
        }
    }

    #[test]
    fn rejects_out_of_range_amounts() {
        assert_eq!(
            "10".parse::<MintAmount>(),
            Err(ParseMintAmountError::OutOfRange)
        );
        assert_eq!(
            "-1".parse::<MintAmount>(),
            Err(ParseMintAmountError::OutOfRange)
        );
        assert_eq!(
            "255".parse::<MintAmount>(),
            Err(ParseMintAmountError::OutOfRange)
        );
    }

    #[test]
    fn rejects_non_integer_input() {
        for input in ["3.5", "abc", "", "1e2", "0x3"] {
            assert_eq!(
                input.parse::<MintAmount>(),
                Err(ParseMintAmountError::NotAWholeNumber),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(" 7 ".parse::<MintAmount>().unwrap().get(), 7);
    }

    #[test]
    fn scales_to_base_units() {
        let amount: MintAmount = "7".parse().unwrap();
        assert_eq!(amount.to_base_units(6), U256::from(7_000_000u64));
        assert_eq!(amount.to_base_units(0), U256::from(7u64));
    }
}
