use thiserror::Error;

/// Ledger chain operation errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("no ledger wallet available")]
    NoWallet,

    #[error("user rejected the request")]
    UserRejected,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("block reference expired before submission")]
    Expired,

    /// Inconclusive: the transaction was submitted and may still be
    /// included after this error is returned.
    #[error("confirmation timed out for {signature}; the transfer may still be included")]
    ConfirmationTimeout { signature: String },

    #[error("transaction failed on chain: {0}")]
    TransactionFailed(String),

    #[error("wallet error: {0}")]
    Wallet(String),

    #[error("rpc error: {0}")]
    Rpc(String),
}
