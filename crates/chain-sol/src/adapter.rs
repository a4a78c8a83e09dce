//! Connect and send-transfer lifecycle for the ledger chain.
//!
//! The send path is ordering-sensitive: the blockhash is fetched
//! immediately before the signature request, because a hash fetched
//! early can expire while the user stares at the wallet prompt. An
//! expired hash at submission time is a terminal `Expired` failure,
//! never a silent re-sign.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::address::{decode_pubkey, encode_pubkey};
use crate::error::SolError;
use crate::provider::{LedgerRpc, LedgerWallet, RpcFailure, SignatureStatus, WalletFailure};
use crate::transaction::{assemble_signed, TransferMessage};
use crate::units::parse_sol_amount;

/// Callback for intermediate lifecycle status lines.
pub type Progress<'a> = &'a (dyn Fn(&str) + Send + Sync);

/// Bounded confirmation polling: `attempts` status lookups, doubling
/// the delay between them from `initial_delay` up to `max_delay`.
///
/// This is the only timeout in the system; connect and sign wait
/// indefinitely on the user.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmPolicy {
    pub attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            attempts: 8,
            initial_delay: Duration::from_millis(400),
            max_delay: Duration::from_millis(6400),
        }
    }
}

/// Outcome of a confirmed send: the signature, plus any sub-lamport
/// dust the amount conversion floored away.
#[derive(Debug, Clone)]
pub struct SolTransfer {
    pub signature: String,
    pub dust: Option<String>,
}

/// Adapter over the injected ledger wallet and an RPC node.
pub struct LedgerAdapter<W: LedgerWallet, R: LedgerRpc> {
    wallet: W,
    rpc: R,
    policy: ConfirmPolicy,
    pubkey: Option<[u8; 32]>,
}

impl<W: LedgerWallet, R: LedgerRpc> LedgerAdapter<W, R> {
    pub fn new(wallet: W, rpc: R) -> Self {
        Self::with_policy(wallet, rpc, ConfirmPolicy::default())
    }

    pub fn with_policy(wallet: W, rpc: R, policy: ConfirmPolicy) -> Self {
        Self {
            wallet,
            rpc,
            policy,
            pubkey: None,
        }
    }

    /// The connected public key as an address string, if any.
    pub fn address(&self) -> Option<String> {
        self.pubkey.as_ref().map(encode_pubkey)
    }

    /// Forget the cached public key. The next connect re-prompts.
    pub fn reset(&mut self) {
        self.pubkey = None;
    }

    /// Request a wallet connection.
    ///
    /// Idempotent: when already connected, returns the cached key
    /// without opening another wallet prompt.
    pub async fn connect(&mut self) -> Result<String, SolError> {
        if let Some(key) = &self.pubkey {
            return Ok(encode_pubkey(key));
        }

        let key = self.wallet.connect().await.map_err(map_wallet)?;
        let address = encode_pubkey(&key);
        info!(address = %address, "ledger wallet connected");
        self.pubkey = Some(key);
        Ok(address)
    }

    /// Send a native transfer and drive it to its terminal state.
    ///
    /// Returns `ConfirmationTimeout` when polling exhausts its
    /// attempts; that outcome is inconclusive, the transfer may still
    /// be included afterwards, and nothing here will re-sign.
    pub async fn send_transfer(
        &mut self,
        recipient: &str,
        amount: &str,
        progress: Progress<'_>,
    ) -> Result<SolTransfer, SolError> {
        let from = self
            .pubkey
            .ok_or_else(|| SolError::Wallet("transfer requested before connect".into()))?;

        let to = decode_pubkey(recipient)?;
        let parsed = parse_sol_amount(amount)?;
        if let Some(dust) = &parsed.dust {
            warn!(lamports = parsed.lamports, dust = %dust, "amount floored");
            progress(&format!(
                "Amount floored to {} lamports ({dust} dropped)",
                parsed.lamports
            ));
        }

        // Fetch the block reference only now, right before the wallet
        // prompt opens.
        let blockhash = self.rpc.latest_blockhash().await.map_err(map_rpc)?;
        let message = TransferMessage::new(from, to, parsed.lamports, blockhash).serialize();

        let signature = self.wallet.sign_transfer(&message).await.map_err(map_wallet)?;
        let raw_tx = assemble_signed(&message, &signature);

        let sig = self.rpc.send_transaction(&raw_tx).await.map_err(map_rpc)?;
        info!(signature = %sig, lamports = parsed.lamports, "transfer submitted");
        progress(&format!("Transaction sent! Signature: {sig}"));
        progress("Awaiting confirmation...");

        self.await_confirmation(sig, parsed.dust).await
    }

    async fn await_confirmation(
        &self,
        signature: String,
        dust: Option<String>,
    ) -> Result<SolTransfer, SolError> {
        let mut delay = self.policy.initial_delay;

        for attempt in 1..=self.policy.attempts {
            match self.rpc.signature_status(&signature).await {
                Ok(SignatureStatus::Confirmed) => {
                    info!(signature = %signature, attempt, "transfer confirmed");
                    return Ok(SolTransfer { signature, dust });
                }
                Ok(SignatureStatus::Failed(detail)) => {
                    return Err(SolError::TransactionFailed(detail));
                }
                Ok(SignatureStatus::Unknown | SignatureStatus::Processed) => {}
                // A flaky status lookup is not evidence of failure;
                // spend an attempt and keep polling.
                Err(e) => warn!(signature = %signature, attempt, error = %e, "status lookup failed"),
            }

            if attempt < self.policy.attempts {
                sleep(delay).await;
                delay = (delay * 2).min(self.policy.max_delay);
            }
        }

        warn!(signature = %signature, "confirmation polling exhausted");
        Err(SolError::ConfirmationTimeout { signature })
    }
}

fn map_wallet(failure: WalletFailure) -> SolError {
    match failure {
        WalletFailure::Rejected => SolError::UserRejected,
        WalletFailure::Unavailable => SolError::NoWallet,
        WalletFailure::Other(detail) => SolError::Wallet(detail),
    }
}

fn map_rpc(failure: RpcFailure) -> SolError {
    match failure {
        RpcFailure::BlockhashExpired => SolError::Expired,
        RpcFailure::Node(detail) => SolError::Rpc(detail),
    }
}
