//! The injected EVM wallet provider boundary.
//!
//! Browser wallets expose a duck-typed `request({method, params})`
//! object. The adapter depends only on this narrow trait, so tests
//! substitute recording doubles and hosts wrap whatever transport they
//! have (an extension bridge, a JSON-RPC client).

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// One `request` invocation: an RPC method name plus JSON params.
#[derive(Debug, Clone)]
pub struct ProviderCall {
    pub method: &'static str,
    pub params: Value,
}

impl ProviderCall {
    pub fn new(method: &'static str, params: Value) -> Self {
        Self { method, params }
    }
}

/// Failures the provider itself reports.
#[derive(Debug, Error)]
pub enum ProviderFailure {
    /// The user dismissed the wallet prompt.
    #[error("request rejected by user")]
    Rejected,

    /// The provider is gone (extension removed or locked mid-session).
    #[error("provider unavailable")]
    Unavailable,

    #[error("{0}")]
    Other(String),
}

/// Inclusion receipt for a submitted transaction.
#[derive(Debug, Clone, Copy)]
pub struct TxReceipt {
    /// `true` when the transaction executed successfully, `false` on
    /// revert.
    pub status: bool,
}

/// Capability interface over an injected account-chain provider.
///
/// Both methods are user-interactive or network suspension points with
/// no timeout imposed here; the wallet UI may block indefinitely.
#[async_trait]
pub trait EvmProvider: Send + Sync {
    /// Perform a `request({method, params})` call against the wallet.
    async fn request(&self, call: ProviderCall) -> Result<Value, ProviderFailure>;

    /// Await the inclusion receipt for a submitted transaction.
    ///
    /// `None` means the provider gave up waiting without observing
    /// inclusion; the submission itself still stands.
    async fn await_receipt(&self, tx_hash: &str) -> Result<Option<TxReceipt>, ProviderFailure>;
}
