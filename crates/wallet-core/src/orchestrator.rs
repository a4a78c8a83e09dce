//! The transaction orchestrator.
//!
//! Owns the selector, the chain adapters, the status channel, and the
//! single active-intent slot. One instance per UI surface; there are no
//! ambient globals, so two orchestrators never share state.
//!
//! A submit runs a fixed guard chain before any adapter is touched:
//! in-flight slot, connection, non-empty fields, chain match. A
//! cross-chain intent is a hard failure, never silently redirected.
//! The orchestrator itself never retries anything; the only retry loop
//! in the system is the ledger adapter's confirmation polling, which
//! never re-signs.

use tokio::sync::watch;
use tracing::info;

use chain_evm::{EvmAdapter, EvmProvider};
use chain_sol::{LedgerAdapter, LedgerRpc, LedgerWallet};

use crate::error::TransferError;
use crate::selector::WalletSelector;
use crate::status::StatusReporter;
use crate::types::{ConnectionState, TransferIntent, TransferResult, WalletKind};

pub struct Orchestrator<E, W, R>
where
    E: EvmProvider,
    W: LedgerWallet,
    R: LedgerRpc,
{
    selector: WalletSelector,
    evm: Option<EvmAdapter<E>>,
    ledger: Option<LedgerAdapter<W, R>>,
    status: StatusReporter,
    staged: Option<TransferIntent>,
    /// The exclusive active-intent slot. `&mut self` already forbids
    /// overlapping submits; this flag additionally catches a submit
    /// future dropped mid-await, which leaves the slot held until
    /// `disconnect` releases it.
    in_flight: bool,
}

impl<E, W, R> Orchestrator<E, W, R>
where
    E: EvmProvider,
    W: LedgerWallet,
    R: LedgerRpc,
{
    /// Build an orchestrator over whichever wallets the host found
    /// injected. A missing adapter makes its kind unselectable.
    pub fn new(evm: Option<EvmAdapter<E>>, ledger: Option<LedgerAdapter<W, R>>) -> Self {
        Self {
            selector: WalletSelector::new(),
            evm,
            ledger,
            status: StatusReporter::new(),
            staged: None,
            in_flight: false,
        }
    }

    pub fn connection(&self) -> &ConnectionState {
        self.selector.state()
    }

    /// A receiver for the UI to watch status lines on.
    pub fn subscribe_status(&self) -> watch::Receiver<String> {
        self.status.subscribe()
    }

    pub fn latest_status(&self) -> String {
        self.status.latest()
    }

    /// Choose which wallet the next connect targets.
    ///
    /// Fails with `NoWalletFound` when that wallet was never injected,
    /// before any state transition happens.
    pub fn select_wallet(&mut self, kind: WalletKind) -> Result<(), TransferError> {
        let available = match kind {
            WalletKind::Evm => self.evm.is_some(),
            WalletKind::Ledger => self.ledger.is_some(),
        };
        if !available {
            return Err(TransferError::NoWalletFound(kind));
        }
        self.selector.select(kind)
    }

    /// Connect the selected wallet.
    ///
    /// Idempotent while connected: returns the cached address without
    /// prompting. A second call while one is underway is rejected.
    pub async fn connect(&mut self) -> Result<String, TransferError> {
        if let Some(address) = self.selector.connected_address() {
            return Ok(address.to_string());
        }

        let kind = self.selector.begin_connect()?;
        self.status.set("Connecting to wallet...");

        let connected = match kind {
            WalletKind::Evm => match self.evm.as_mut() {
                Some(adapter) => adapter.connect().await.map_err(TransferError::from),
                None => Err(TransferError::NoWalletFound(kind)),
            },
            WalletKind::Ledger => match self.ledger.as_mut() {
                Some(adapter) => adapter.connect().await.map_err(TransferError::from),
                None => Err(TransferError::NoWalletFound(kind)),
            },
        };

        match connected {
            Ok(address) => {
                self.selector.complete_connect(address.clone());
                self.status.set(format!("Connected: {address}"));
                Ok(address)
            }
            Err(reason) => {
                self.selector.fail_connect();
                self.status.set(format!("Failed to connect wallet: {reason}"));
                Err(reason)
            }
        }
    }

    /// Drop all local connection state.
    ///
    /// Local only: neither wallet API offers revocation, so none is
    /// attempted. Also discards any staged intent and releases the
    /// active-intent slot.
    pub fn disconnect(&mut self) {
        self.selector.disconnect();
        if let Some(adapter) = &mut self.evm {
            adapter.reset();
        }
        if let Some(adapter) = &mut self.ledger {
            adapter.reset();
        }
        self.staged = None;
        self.in_flight = false;
        self.status.set("Wallet disconnected.");
    }

    /// Run one transfer to its terminal state.
    ///
    /// Always resolves to a `TransferResult` plus a final status line;
    /// failures never escape as raw errors.
    pub async fn submit(&mut self, intent: TransferIntent) -> TransferResult {
        if self.in_flight {
            return self.fail(TransferError::AlreadyInProgress);
        }

        let connected = match self.selector.connected_kind() {
            Some(kind) => kind,
            None => return self.fail(TransferError::NotConnected),
        };

        if intent.recipient.trim().is_empty() {
            return self.fail(TransferError::InvalidAddress("recipient is empty".into()));
        }
        if intent.amount.trim().is_empty() {
            return self.fail(TransferError::InvalidAmount("amount is empty".into()));
        }
        if intent.chain != connected {
            return self.fail(TransferError::WrongChainSelected {
                intent: intent.chain,
                connected,
            });
        }

        self.in_flight = true;
        info!(chain = %connected, recipient = %intent.recipient, "dispatching transfer");
        self.status.set("Sending transaction...");

        let outcome = match connected {
            WalletKind::Evm => self.submit_evm(&intent).await,
            WalletKind::Ledger => self.submit_ledger(&intent).await,
        };
        self.in_flight = false;

        match outcome {
            Ok(result) => {
                self.finish(connected, &result);
                result
            }
            Err(reason) => self.fail(reason),
        }
    }

    /// Park an intent for a later, explicitly confirmed execution.
    ///
    /// Nothing is validated or signed yet; `confirm_staged` re-runs the
    /// full guard chain against the connection state current at that
    /// moment, so a stale intent can never ride an old validation.
    pub fn stage(&mut self, intent: TransferIntent) {
        self.status.set("Ready to execute. Confirm to send.");
        self.staged = Some(intent);
    }

    pub fn staged(&self) -> Option<&TransferIntent> {
        self.staged.as_ref()
    }

    /// Execute the staged intent, re-validating it first.
    pub async fn confirm_staged(&mut self) -> TransferResult {
        match self.staged.take() {
            Some(intent) => self.submit(intent).await,
            None => self.fail(TransferError::NothingStaged),
        }
    }

    /// Drop the staged intent without executing it.
    pub fn discard_staged(&mut self) -> Option<TransferIntent> {
        self.staged.take()
    }

    async fn submit_evm(&mut self, intent: &TransferIntent) -> Result<TransferResult, TransferError> {
        let adapter = self
            .evm
            .as_mut()
            .ok_or(TransferError::NoWalletFound(WalletKind::Evm))?;
        let status = &self.status;

        let transfer = adapter
            .send_transfer(&intent.recipient, &intent.amount, &|line| status.set(line))
            .await?;

        Ok(if transfer.confirmed {
            TransferResult::Confirmed {
                tx_id: transfer.tx_hash,
                dust: None,
            }
        } else {
            TransferResult::Submitted {
                tx_id: transfer.tx_hash,
                dust: None,
            }
        })
    }

    async fn submit_ledger(
        &mut self,
        intent: &TransferIntent,
    ) -> Result<TransferResult, TransferError> {
        let adapter = self
            .ledger
            .as_mut()
            .ok_or(TransferError::NoWalletFound(WalletKind::Ledger))?;
        let status = &self.status;

        let transfer = adapter
            .send_transfer(&intent.recipient, &intent.amount, &|line| status.set(line))
            .await?;

        // The ledger adapter only returns once confirmation was
        // observed; an unobserved transfer surfaces as a timeout error.
        Ok(TransferResult::Confirmed {
            tx_id: transfer.signature,
            dust: transfer.dust,
        })
    }

    fn fail(&self, reason: TransferError) -> TransferResult {
        self.status.set(format!("Transaction failed: {reason}"));
        TransferResult::Failed { reason }
    }

    fn finish(&self, kind: WalletKind, result: &TransferResult) {
        match result {
            TransferResult::Confirmed { tx_id, .. } => match kind {
                WalletKind::Evm => self.status.set(format!("Transaction confirmed! Hash: {tx_id}")),
                WalletKind::Ledger => self
                    .status
                    .set(format!("Transaction confirmed! Signature: {tx_id}")),
            },
            TransferResult::Submitted { .. } => self
                .status
                .set("Transaction sent, but no confirmation received."),
            TransferResult::Failed { .. } => {}
        }
    }
}
