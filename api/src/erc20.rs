//! Typed handles over the token and mint contracts.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::{sol, SolCall};

use crate::error::WalletError;
use crate::provider::WalletProvider;

sol! {
    /// The slice of the ERC-20 interface the workflow touches.
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    /// The mint contract's single entry point.
    interface IMinter {
        function mint(uint256 amount) external;
    }
}

/// An ERC-20 token at a fixed address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Erc20 {
    pub address: Address,
}

impl Erc20 {
    pub async fn balance_of(
        &self,
        provider: &dyn WalletProvider,
        owner: Address,
    ) -> Result<U256, WalletError> {
        let data = IERC20::balanceOfCall { account: owner }.abi_encode();
        let raw = provider.call(self.address, Bytes::from(data)).await?;
        let ret = IERC20::balanceOfCall::abi_decode_returns(&raw, true)?;
        Ok(ret._0)
    }

    pub async fn allowance(
        &self,
        provider: &dyn WalletProvider,
        owner: Address,
        spender: Address,
    ) -> Result<U256, WalletError> {
        let data = IERC20::allowanceCall { owner, spender }.abi_encode();
        let raw = provider.call(self.address, Bytes::from(data)).await?;
        let ret = IERC20::allowanceCall::abi_decode_returns(&raw, true)?;
        Ok(ret._0)
    }

    pub async fn approve(
        &self,
        provider: &dyn WalletProvider,
        spender: Address,
        amount: U256,
    ) -> Result<TxHash, WalletError> {
        let data = IERC20::approveCall { spender, amount }.abi_encode();
        provider.send_transaction(self.address, Bytes::from(data)).await
    }
}

/// The mint contract at a fixed address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Minter {
    pub address: Address,
}

impl Minter {
    pub async fn mint(
        &self,
        provider: &dyn WalletProvider,
        base_units: U256,
    ) -> Result<TxHash, WalletError> {
        let data = IMinter::mintCall { amount: base_units }.abi_encode();
        provider.send_transaction(self.address, Bytes::from(data)).await
    }
}
