//! A deterministic in-memory wallet provider for exercising the workflow
//! without a node.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::{Address, Bytes, TxHash, B256, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;

use crate::deployment::Deployment;
use crate::erc20::{IERC20, IMinter};
use crate::error::WalletError;
use crate::provider::WalletProvider;

/// A transaction recorded by the mock provider, in submission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentTransaction {
    pub to: Address,
    pub data: Bytes,
}

#[derive(Default)]
struct MockState {
    authorized: Vec<Address>,
    connectable: Vec<Address>,
    deny_connection: bool,
    fail_reads: bool,
    fail_transactions: bool,
    balances: HashMap<(Address, Address), U256>,
    allowances: HashMap<(Address, Address, Address), U256>,
    transactions: Vec<SentTransaction>,
    next_tx: u64,
}

/// An in-memory [`WalletProvider`] that keeps token balances and allowances
/// in hash maps and interprets the calldata the workflow produces.
///
/// A confirmed `approve` records the allowance; a confirmed `mint` credits
/// the sender's mint-token balance with the submitted base units.
pub struct MockWalletProvider {
    deployment: Deployment,
    state: Mutex<MockState>,
}

impl MockWalletProvider {
    pub fn new(deployment: Deployment) -> Self {
        Self {
            deployment,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Makes `account` show up in the non-intrusive account listing.
    pub fn authorize(&self, account: Address) {
        self.state.lock().unwrap().authorized.push(account);
    }

    /// Makes `account` available to an authorization request.
    pub fn allow_connection(&self, account: Address) {
        self.state.lock().unwrap().connectable.push(account);
    }

    /// Simulates the user rejecting the authorization prompt.
    pub fn deny_connection(&self, deny: bool) {
        self.state.lock().unwrap().deny_connection = deny;
    }

    /// Makes every read-only call fail.
    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    /// Makes every submitted transaction fail.
    pub fn fail_transactions(&self, fail: bool) {
        self.state.lock().unwrap().fail_transactions = fail;
    }

    pub fn set_balance(&self, token: Address, owner: Address, amount: U256) {
        self.state
            .lock()
            .unwrap()
            .balances
            .insert((token, owner), amount);
    }

    pub fn set_allowance(&self, token: Address, owner: Address, spender: Address, amount: U256) {
        self.state
            .lock()
            .unwrap()
            .allowances
            .insert((token, owner, spender), amount);
    }

    pub fn sent_transactions(&self) -> Vec<SentTransaction> {
        self.state.lock().unwrap().transactions.clone()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(self.state.lock().unwrap().authorized.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut state = self.state.lock().unwrap();
        if state.deny_connection {
            return Err(WalletError::Simulated("authorization rejected"));
        }
        // Authorization promotes the connectable accounts, like a wallet
        // prompt that was accepted.
        let granted = state.connectable.clone();
        for account in &granted {
            if !state.authorized.contains(account) {
                state.authorized.push(*account);
            }
        }
        Ok(granted)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        let state = self.state.lock().unwrap();
        if state.fail_reads {
            return Err(WalletError::Simulated("read failure"));
        }
        if data.len() >= 4 {
            if data[..4] == IERC20::balanceOfCall::SELECTOR {
                let call = IERC20::balanceOfCall::abi_decode(&data, true)?;
                let balance = state
                    .balances
                    .get(&(to, call.account))
                    .copied()
                    .unwrap_or_default();
                return Ok(Bytes::from(IERC20::balanceOfCall::abi_encode_returns(&(
                    balance,
                ))));
            }
            if data[..4] == IERC20::allowanceCall::SELECTOR {
                let call = IERC20::allowanceCall::abi_decode(&data, true)?;
                let allowance = state
                    .allowances
                    .get(&(to, call.owner, call.spender))
                    .copied()
                    .unwrap_or_default();
                return Ok(Bytes::from(IERC20::allowanceCall::abi_encode_returns(&(
                    allowance,
                ))));
            }
        }
        Err(WalletError::Simulated("unsupported call"))
    }

    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, WalletError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_transactions {
            return Err(WalletError::Simulated("transaction rejected"));
        }
        let sender = state
            .authorized
            .first()
            .copied()
            .ok_or(WalletError::NoAuthorizedAccount)?;

        if data.len() >= 4 {
            if data[..4] == IERC20::approveCall::SELECTOR {
                let call = IERC20::approveCall::abi_decode(&data, true)?;
                state
                    .allowances
                    .insert((to, sender, call.spender), call.amount);
            } else if data[..4] == IMinter::mintCall::SELECTOR {
                let call = IMinter::mintCall::abi_decode(&data, true)?;
                let balance = state
                    .balances
                    .entry((self.deployment.mint_token.address, sender))
                    .or_default();
                *balance += call.amount;
            }
        }

        state.transactions.push(SentTransaction { to, data });
        state.next_tx += 1;
        Ok(B256::from(U256::from(state.next_tx)))
    }
}
