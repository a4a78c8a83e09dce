use thiserror::Error;

/// EVM chain operation errors.
#[derive(Debug, Error)]
pub enum EvmError {
    #[error("no EVM wallet provider available")]
    NoProvider,

    #[error("user rejected the request")]
    UserRejected,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("transaction reverted: {0}")]
    Reverted(String),
}
