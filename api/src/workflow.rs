//! Orchestration of the connect → approve-or-mint interaction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, TxHash, U256};
use tracing::{info, warn};

use crate::deployment::{self, Deployment};
use crate::erc20::{Erc20, Minter};
use crate::error::WalletError;
use crate::mint_amount::MintAmount;
use crate::provider::WalletProvider;
use crate::token_amount::TokenAmount;

/// The two balances shown on the mint screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    pub mint_token: TokenAmount,
    pub buy_token: TokenAmount,
}

/// Drives the wallet mint workflow against an injected provider.
///
/// One submission may be outstanding at a time: `approve` and `mint` hold an
/// internal guard for the duration of the transaction, and a second call
/// while one is in flight returns [`WalletError::SubmissionPending`].
pub struct MintWorkflow {
    provider: Arc<dyn WalletProvider>,
    deployment: Deployment,
    submitting: AtomicBool,
}

impl MintWorkflow {
    pub fn new(provider: Arc<dyn WalletProvider>, deployment: Deployment) -> Self {
        Self {
            provider,
            deployment,
            submitting: AtomicBool::new(false),
        }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// True exactly while an approve or mint transaction is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Non-intrusive connection check: returns the first already-authorized
    /// account, if any. Never prompts.
    pub async fn authorized_account(&self) -> Result<Option<Address>, WalletError> {
        let accounts = self.provider.authorized_accounts().await?;
        match accounts.first() {
            Some(account) => {
                info!("found an authorized account: {account}");
                Ok(Some(*account))
            }
            None => {
                info!("no authorized account found");
                Ok(None)
            }
        }
    }

    /// Requests wallet authorization and returns the first granted account.
    /// May prompt the user.
    pub async fn connect(&self) -> Result<Address, WalletError> {
        let accounts = self.provider.request_accounts().await?;
        let account = accounts
            .first()
            .copied()
            .ok_or(WalletError::NoAuthorizedAccount)?;
        info!("connected account: {account}");
        Ok(account)
    }

    /// Reads both token balances for `account`.
    pub async fn balances(&self, account: Address) -> Result<Balances, WalletError> {
        let mint_token = Erc20 {
            address: self.deployment.mint_token.address,
        };
        let buy_token = Erc20 {
            address: self.deployment.buy_token.address,
        };
        let mint_units = mint_token.balance_of(self.provider.as_ref(), account).await?;
        let buy_units = buy_token.balance_of(self.provider.as_ref(), account).await?;
        Ok(Balances {
            mint_token: TokenAmount::from_base_units(
                mint_units,
                self.deployment.mint_token.decimals,
            ),
            buy_token: TokenAmount::from_base_units(buy_units, self.deployment.buy_token.decimals),
        })
    }

    /// True iff the mint contract holds a nonzero allowance on the buy
    /// token. Any failure reads as `false`, which sends the user back
    /// through the approve step instead of offering a mint that would
    /// revert.
    pub async fn is_approved(&self, account: Address) -> bool {
        let buy_token = Erc20 {
            address: self.deployment.buy_token.address,
        };
        match buy_token
            .allowance(self.provider.as_ref(), account, self.deployment.minter)
            .await
        {
            Ok(allowance) => allowance > U256::ZERO,
            Err(err) => {
                warn!("allowance read failed: {err}");
                false
            }
        }
    }

    /// Submits the effectively-infinite approval for the mint contract and
    /// awaits one confirmation.
    pub async fn approve(&self) -> Result<TxHash, WalletError> {
        let _guard = self.begin_submission()?;
        let buy_token = Erc20 {
            address: self.deployment.buy_token.address,
        };
        let hash = buy_token
            .approve(
                self.provider.as_ref(),
                self.deployment.minter,
                deployment::infinite_allowance(),
            )
            .await?;
        info!("mined approval transaction {hash}");
        Ok(hash)
    }

    /// Submits a mint for the validated amount and awaits one confirmation.
    ///
    /// The whole-number amount is scaled by
    /// [`deployment::MINT_AMOUNT_DECIMALS`] before submission.
    pub async fn mint(&self, amount: MintAmount) -> Result<TxHash, WalletError> {
        let _guard = self.begin_submission()?;
        let minter = Minter {
            address: self.deployment.minter,
        };
        let base_units = amount.to_base_units(deployment::MINT_AMOUNT_DECIMALS);
        let hash = minter.mint(self.provider.as_ref(), base_units).await?;
        info!("mined mint transaction {hash}");
        Ok(hash)
    }

    fn begin_submission(&self) -> Result<SubmissionGuard<'_>, WalletError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(WalletError::SubmissionPending);
        }
        Ok(SubmissionGuard {
            flag: &self.submitting,
        })
    }
}

/// Clears the submission flag when a submission ends, whether it succeeded
/// or failed.
struct SubmissionGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
