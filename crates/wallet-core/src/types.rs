use serde::{Deserialize, Serialize};

use crate::error::TransferError;

/// The two structurally different chains a wallet can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletKind {
    /// Account chain: per-address balances, debit/credit transfers.
    Evm,
    /// Instruction chain: transfers are instructions bound to a recent
    /// block reference that expires if not submitted promptly.
    Ledger,
}

impl WalletKind {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WalletKind::Evm => "EVM",
            WalletKind::Ledger => "ledger",
        }
    }
}

impl std::fmt::Display for WalletKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Connection lifecycle, owned exclusively by the wallet selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting { kind: WalletKind },
    Connected { address: String, kind: WalletKind },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }
}

/// A chain-agnostic transfer request from the UI.
///
/// Created fresh per send. The amount stays a decimal string until the
/// chain adapter scales it with exact integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferIntent {
    pub recipient: String,
    pub amount: String,
    pub chain: WalletKind,
}

impl TransferIntent {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>, chain: WalletKind) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
            chain,
        }
    }
}

/// Terminal outcome of one send attempt. Immutable once produced.
///
/// `dust` carries the sub-unit remainder the ledger chain's floor
/// conversion dropped; it is always `None` on the account chain, whose
/// conversion is exact or rejected.
#[derive(Debug)]
pub enum TransferResult {
    /// Submitted and accepted, but inclusion was not observed.
    Submitted { tx_id: String, dust: Option<String> },
    Confirmed { tx_id: String, dust: Option<String> },
    Failed { reason: TransferError },
}

impl TransferResult {
    pub fn tx_id(&self) -> Option<&str> {
        match self {
            TransferResult::Submitted { tx_id, .. } | TransferResult::Confirmed { tx_id, .. } => {
                Some(tx_id)
            }
            TransferResult::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TransferResult::Failed { .. })
    }
}
