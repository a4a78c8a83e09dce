//! The wallet selection and connection state machine.
//!
//! `Disconnected → Connecting → Connected`, back to `Disconnected` on
//! explicit disconnect or connect failure. The machine owns the
//! `ConnectionState` exclusively; the orchestrator reads it and drives
//! transitions but never mutates it directly.
//!
//! Switching wallet kinds requires passing through `Disconnected`: a
//! select while connecting or connected is rejected, not queued, which
//! keeps duplicate extension prompts from ever opening.

use crate::error::TransferError;
use crate::types::{ConnectionState, WalletKind};

pub struct WalletSelector {
    selected: Option<WalletKind>,
    state: ConnectionState,
}

impl WalletSelector {
    pub fn new() -> Self {
        Self {
            selected: None,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<WalletKind> {
        self.selected
    }

    /// The kind of the currently connected wallet, if any.
    pub fn connected_kind(&self) -> Option<WalletKind> {
        match &self.state {
            ConnectionState::Connected { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The connected address, if any.
    pub fn connected_address(&self) -> Option<&str> {
        match &self.state {
            ConnectionState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Choose which wallet the next connect targets.
    ///
    /// Only accepted while disconnected.
    pub fn select(&mut self, kind: WalletKind) -> Result<(), TransferError> {
        match self.state {
            ConnectionState::Disconnected => {
                self.selected = Some(kind);
                Ok(())
            }
            ConnectionState::Connecting { .. } => Err(TransferError::AlreadyInProgress),
            ConnectionState::Connected { .. } => Err(TransferError::AlreadyConnected),
        }
    }

    /// Enter `Connecting` for the selected kind.
    ///
    /// A second attempt while one is underway is rejected outright
    /// rather than queued.
    pub fn begin_connect(&mut self) -> Result<WalletKind, TransferError> {
        match self.state {
            ConnectionState::Disconnected => {
                let kind = self.selected.ok_or(TransferError::NoWalletSelected)?;
                self.state = ConnectionState::Connecting { kind };
                Ok(kind)
            }
            ConnectionState::Connecting { .. } => Err(TransferError::AlreadyInProgress),
            ConnectionState::Connected { .. } => Err(TransferError::AlreadyConnected),
        }
    }

    /// Record a successful adapter connect.
    pub fn complete_connect(&mut self, address: String) {
        if let ConnectionState::Connecting { kind } = self.state {
            self.state = ConnectionState::Connected { address, kind };
        }
    }

    /// Revert a failed connect attempt.
    pub fn fail_connect(&mut self) {
        if matches!(self.state, ConnectionState::Connecting { .. }) {
            self.state = ConnectionState::Disconnected;
        }
    }

    /// Clear local connection state.
    ///
    /// Local only: neither wallet API offers an extension-level
    /// revocation to call, so none is attempted.
    pub fn disconnect(&mut self) {
        self.selected = None;
        self.state = ConnectionState::Disconnected;
    }
}

impl Default for WalletSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected_with_no_selection() {
        let selector = WalletSelector::new();
        assert_eq!(*selector.state(), ConnectionState::Disconnected);
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn select_then_connect_then_complete() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Evm).unwrap();

        let kind = selector.begin_connect().unwrap();
        assert_eq!(kind, WalletKind::Evm);
        assert_eq!(
            *selector.state(),
            ConnectionState::Connecting { kind: WalletKind::Evm }
        );

        selector.complete_connect("0xabc".into());
        assert_eq!(selector.connected_kind(), Some(WalletKind::Evm));
        assert_eq!(selector.connected_address(), Some("0xabc"));
    }

    #[test]
    fn connect_without_selection_fails() {
        let mut selector = WalletSelector::new();
        assert!(matches!(
            selector.begin_connect(),
            Err(TransferError::NoWalletSelected)
        ));
    }

    #[test]
    fn second_connect_while_connecting_is_rejected() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Ledger).unwrap();
        selector.begin_connect().unwrap();

        assert!(matches!(
            selector.begin_connect(),
            Err(TransferError::AlreadyInProgress)
        ));
    }

    #[test]
    fn select_while_connecting_is_rejected() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Evm).unwrap();
        selector.begin_connect().unwrap();

        assert!(matches!(
            selector.select(WalletKind::Ledger),
            Err(TransferError::AlreadyInProgress)
        ));
    }

    #[test]
    fn select_while_connected_is_rejected() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Evm).unwrap();
        selector.begin_connect().unwrap();
        selector.complete_connect("0xabc".into());

        assert!(matches!(
            selector.select(WalletKind::Ledger),
            Err(TransferError::AlreadyConnected)
        ));
    }

    #[test]
    fn failed_connect_reverts_to_disconnected() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Evm).unwrap();
        selector.begin_connect().unwrap();
        selector.fail_connect();

        assert_eq!(*selector.state(), ConnectionState::Disconnected);
        // The selection survives, so the user can retry.
        assert_eq!(selector.selected(), Some(WalletKind::Evm));
    }

    #[test]
    fn switching_kinds_requires_disconnect_first() {
        let mut selector = WalletSelector::new();
        selector.select(WalletKind::Evm).unwrap();
        selector.begin_connect().unwrap();
        selector.complete_connect("0xabc".into());

        selector.disconnect();
        assert_eq!(*selector.state(), ConnectionState::Disconnected);
        assert_eq!(selector.selected(), None);

        selector.select(WalletKind::Ledger).unwrap();
        assert_eq!(selector.selected(), Some(WalletKind::Ledger));
    }
}
