//! The injected ledger wallet and the network RPC boundaries.
//!
//! The wallet extension owns the keys and signs; the RPC node owns the
//! chain view. The adapter depends only on these two narrow traits, so
//! tests substitute recording doubles and hosts wrap their transports.

use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by the wallet extension.
#[derive(Debug, Error)]
pub enum WalletFailure {
    /// The user dismissed the wallet prompt.
    #[error("request rejected by user")]
    Rejected,

    /// The wallet is gone (extension removed or locked mid-session).
    #[error("wallet unavailable")]
    Unavailable,

    #[error("{0}")]
    Other(String),
}

/// Failures reported by the RPC node.
#[derive(Debug, Error)]
pub enum RpcFailure {
    /// The referenced blockhash fell out of the validity window before
    /// the transaction reached the network.
    #[error("block reference expired")]
    BlockhashExpired,

    #[error("{0}")]
    Node(String),
}

/// Network view of a submitted signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureStatus {
    /// Not seen by the network yet.
    Unknown,
    /// Seen, not yet at the confirmed commitment level.
    Processed,
    Confirmed,
    /// Included but failed execution.
    Failed(String),
}

/// Capability interface over the injected wallet extension.
///
/// Both methods are user-interactive suspension points with no timeout
/// imposed here.
#[async_trait]
pub trait LedgerWallet: Send + Sync {
    /// Request a connection; returns the wallet's public key.
    async fn connect(&self) -> Result<[u8; 32], WalletFailure>;

    /// Ask the wallet to sign a serialized transfer message.
    async fn sign_transfer(&self, message: &[u8]) -> Result<[u8; 64], WalletFailure>;
}

/// Capability interface over the network RPC node.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// The most recent block reference, valid for a bounded window.
    async fn latest_blockhash(&self) -> Result<[u8; 32], RpcFailure>;

    /// Submit a signed transaction envelope; returns its signature
    /// string.
    async fn send_transaction(&self, raw_tx: &[u8]) -> Result<String, RpcFailure>;

    /// Look up the confirmation status of a submitted signature.
    async fn signature_status(&self, signature: &str) -> Result<SignatureStatus, RpcFailure>;
}
