use thiserror::Error;

use crate::types::WalletKind;

/// The unified failure vocabulary every send attempt resolves into.
///
/// Validation entries (`InvalidAddress`, `InvalidAmount`,
/// `WrongChainSelected`, `AlreadyInProgress`, `NotConnected`) are
/// produced before any external call. Adapter entries (`UserRejected`,
/// `Provider`, `Expired`, `ConfirmationTimeout`) are mapped at the
/// orchestrator boundary and never escape as raw errors.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("no {0} wallet found")]
    NoWalletFound(WalletKind),

    #[error("no wallet selected")]
    NoWalletSelected,

    #[error("wallet not connected")]
    NotConnected,

    #[error("already connected")]
    AlreadyConnected,

    #[error("user rejected the request")]
    UserRejected,

    #[error("invalid recipient address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("intent targets the {intent} chain but the connected wallet is {connected}")]
    WrongChainSelected {
        intent: WalletKind,
        connected: WalletKind,
    },

    #[error("another operation is already in progress")]
    AlreadyInProgress,

    #[error("no staged transfer to confirm")]
    NothingStaged,

    #[error("provider error: {0}")]
    Provider(String),

    /// Inconclusive: the transfer may still land on-chain after this is
    /// returned. Never auto-retried, never re-signed.
    #[error("confirmation timed out for {tx_id}; the transfer may still land on-chain")]
    ConfirmationTimeout { tx_id: String },

    #[error("block reference expired before submission")]
    Expired,
}

impl From<chain_evm::EvmError> for TransferError {
    fn from(e: chain_evm::EvmError) -> Self {
        use chain_evm::EvmError;
        match e {
            EvmError::NoProvider => TransferError::NoWalletFound(WalletKind::Evm),
            EvmError::UserRejected => TransferError::UserRejected,
            EvmError::InvalidAddress(detail) => TransferError::InvalidAddress(detail),
            EvmError::InvalidAmount(detail) => TransferError::InvalidAmount(detail),
            EvmError::Provider(detail) => TransferError::Provider(detail),
            EvmError::Reverted(tx_hash) => {
                TransferError::Provider(format!("transaction reverted: {tx_hash}"))
            }
        }
    }
}

impl From<chain_sol::SolError> for TransferError {
    fn from(e: chain_sol::SolError) -> Self {
        use chain_sol::SolError;
        match e {
            SolError::NoWallet => TransferError::NoWalletFound(WalletKind::Ledger),
            SolError::UserRejected => TransferError::UserRejected,
            SolError::InvalidAddress(detail) => TransferError::InvalidAddress(detail),
            SolError::InvalidAmount(detail) => TransferError::InvalidAmount(detail),
            SolError::Expired => TransferError::Expired,
            SolError::ConfirmationTimeout { signature } => {
                TransferError::ConfirmationTimeout { tx_id: signature }
            }
            SolError::TransactionFailed(detail) => {
                TransferError::Provider(format!("transaction failed on chain: {detail}"))
            }
            SolError::Wallet(detail) | SolError::Rpc(detail) => TransferError::Provider(detail),
        }
    }
}
