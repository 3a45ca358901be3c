//! The fixed set of contracts the front-end is wired to.

use alloy_primitives::{address, Address, U256};

/// Decimal scale of the buy token (the token spent to mint).
pub const BUY_TOKEN_DECIMALS: u8 = 6;

/// Decimal scale of the mint token (the token received).
pub const MINT_TOKEN_DECIMALS: u8 = 9;

/// Decimal scale applied to a user-entered mint amount before it is passed
/// to the mint contract, which denominates `mint(amount)` in buy-token base
/// units.
pub const MINT_AMOUNT_DECIMALS: u8 = BUY_TOKEN_DECIMALS;

/// The allowance submitted by the approve step: 10^29 buy-token base units,
/// large enough that one approval outlives any realistic sequence of mints.
pub fn infinite_allowance() -> U256 {
    U256::from(10u8).pow(U256::from(29u8))
}

/// A token contract address together with its fixed decimal scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenConfig {
    pub address: Address,
    pub decimals: u8,
}

/// Addresses of the three contracts the workflow talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    pub buy_token: TokenConfig,
    pub mint_token: TokenConfig,
    /// The mint contract, which is also the spender the buy-token allowance
    /// is granted to.
    pub minter: Address,
}

impl Deployment {
    /// The testnet deployment this front-end ships against.
    pub const TESTNET: Deployment = Deployment {
        buy_token: TokenConfig {
            address: address!("5E9E06d8f09c2F0bAF2FCEA7b75a1435fAdf4D83"),
            decimals: BUY_TOKEN_DECIMALS,
        },
        mint_token: TokenConfig {
            address: address!("4C9657ed39d4773f2f270A761ed356cb8a6Bb07E"),
            decimals: MINT_TOKEN_DECIMALS,
        },
        minter: address!("A3198B4e339EA2FfCaeD864Bd0A2996cdCA2c7a8"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_allowance_is_ten_to_the_29() {
        let expected: U256 = "100000000000000000000000000000".parse().unwrap();
        assert_eq!(infinite_allowance(), expected);
    }
}
