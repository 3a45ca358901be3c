//! Chain access for the token mint front-end.
//!
//! The UI never talks to the network directly: every read and every signed
//! transaction goes through the [`provider::WalletProvider`] trait, and the
//! [`workflow::MintWorkflow`] orchestrates the connect → approve-or-mint
//! interaction on top of it. Handing the provider in explicitly (instead of
//! reaching for an ambient global) is what lets the whole workflow run
//! against the in-memory provider in [`test_utils`].

pub mod deployment;
pub mod erc20;
pub mod error;
pub mod mint_amount;
pub mod provider;
pub mod test_utils;
pub mod token_amount;
pub mod workflow;

pub use deployment::Deployment;
pub use error::WalletError;
pub use mint_amount::{MintAmount, ParseMintAmountError};
pub use provider::WalletProvider;
pub use token_amount::TokenAmount;
pub use workflow::{Balances, MintWorkflow};
