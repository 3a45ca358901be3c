//! The wallet-provider seam between the UI and the chain.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::eth::request::{TransactionInput, TransactionRequest};
use alloy::transports::http::reqwest::Client;
use alloy::transports::http::Http;
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use url::Url;

use crate::error::WalletError;

/// Environment variable naming the JSON-RPC endpoint.
pub const RPC_URL_ENV: &str = "TOKEN_MINT_RPC_URL";

/// Environment variable holding the hex-encoded signer key.
pub const SIGNER_KEY_ENV: &str = "TOKEN_MINT_SIGNER_KEY";

const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// What the workflow needs from a wallet: account discovery, authorization,
/// read-only contract calls, and signed transaction submission.
///
/// Implementations are handed in explicitly wherever chain access happens,
/// so the same workflow runs unchanged against the in-memory provider in
/// [`crate::test_utils`].
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Lists the accounts that are already authorized, without prompting.
    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Requests account authorization. May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Executes a read-only contract call and returns the raw return data.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError>;

    /// Signs and submits a transaction, waits for one confirmation, and
    /// returns its hash. A mined-but-reverted transaction is an error.
    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, WalletError>;
}

/// A [`WalletProvider`] over an HTTP JSON-RPC endpoint with a local signer,
/// the native analog of a browser-injected wallet.
pub struct HttpWalletProvider<P> {
    provider: P,
    signer_address: Address,
}

/// Connects to `rpc_url` and signs with `signer_key`.
pub fn connect(rpc_url: &str, signer_key: &str) -> Result<Arc<dyn WalletProvider>, WalletError> {
    let signer: PrivateKeySigner = signer_key.trim().parse()?;
    let signer_address = signer.address();
    let wallet = EthereumWallet::from(signer);
    let url = Url::parse(rpc_url)?;
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);
    Ok(Arc::new(HttpWalletProvider {
        provider,
        signer_address,
    }))
}

/// Builds the wallet provider from the process environment.
///
/// Returns `Ok(None)` when no signer key is configured; the UI treats that
/// the same way a browser page treats a missing wallet extension.
pub fn provider_from_env() -> Result<Option<Arc<dyn WalletProvider>>, WalletError> {
    let Ok(signer_key) = std::env::var(SIGNER_KEY_ENV) else {
        return Ok(None);
    };
    let rpc_url = std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    Ok(Some(connect(&rpc_url, &signer_key)?))
}

#[async_trait]
impl<P> WalletProvider for HttpWalletProvider<P>
where
    P: Provider<Http<Client>> + Send + Sync,
{
    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(self.provider.get_accounts().await?)
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        // Node-managed accounts take precedence; otherwise authorization
        // adopts the local signer.
        let mut accounts = self.provider.get_accounts().await?;
        if accounts.is_empty() {
            accounts.push(self.signer_address);
        }
        Ok(accounts)
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, WalletError> {
        let input = TransactionInput::new(data);
        let tx = TransactionRequest::default().to(to).input(input);
        Ok(self.provider.call(&tx).await?)
    }

    async fn send_transaction(&self, to: Address, data: Bytes) -> Result<TxHash, WalletError> {
        let input = TransactionInput::new(data);
        let tx = TransactionRequest::default()
            .from(self.signer_address)
            .to(to)
            .input(input);
        let receipt = self.provider.send_transaction(tx).await?.get_receipt().await?;
        if !receipt.status() {
            return Err(WalletError::TransactionFailed(receipt.transaction_hash));
        }
        Ok(receipt.transaction_hash)
    }
}
