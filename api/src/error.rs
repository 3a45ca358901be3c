use alloy::providers::PendingTransactionError;
use alloy::rpc::json_rpc;
use alloy::transports::TransportErrorKind;
use alloy_primitives::TxHash;
use thiserror::Error;

/// Errors surfaced by the wallet provider and the mint workflow.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet granted no account when authorization was requested.
    #[error("the wallet returned no authorized account")]
    NoAuthorizedAccount,

    /// An approve or mint transaction is already outstanding.
    #[error("a transaction is already being processed")]
    SubmissionPending,

    /// The transaction was mined but reverted.
    #[error("transaction {0} was reverted on chain")]
    TransactionFailed(TxHash),

    /// RPC error
    #[error(transparent)]
    Rpc(#[from] json_rpc::RpcError<TransportErrorKind>),

    /// Waiting for a confirmation failed
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),

    /// ABI encoding/decoding error
    #[error(transparent)]
    Abi(#[from] alloy_sol_types::Error),

    /// The configured signer key could not be parsed
    #[error(transparent)]
    InvalidSignerKey(#[from] alloy_signer_local::LocalSignerError),

    /// URL parsing error
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    /// Failure injected by the in-memory test provider.
    #[error("simulated provider failure: {0}")]
    Simulated(&'static str),
}
