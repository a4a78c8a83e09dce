//! Connect and send-transfer lifecycle against an injected provider.

use alloy_primitives::U256;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::address::validate_recipient;
use crate::error::EvmError;
use crate::provider::{EvmProvider, ProviderCall, ProviderFailure};
use crate::units::{parse_units, ETH_DECIMALS};

/// Callback for intermediate lifecycle status lines.
pub type Progress<'a> = &'a (dyn Fn(&str) + Send + Sync);

/// Outcome of a completed send: the transaction hash, and whether the
/// network reported inclusion before the provider stopped waiting.
#[derive(Debug, Clone)]
pub struct EvmTransfer {
    pub tx_hash: String,
    pub confirmed: bool,
}

/// Adapter over an injected account-chain wallet provider.
pub struct EvmAdapter<P: EvmProvider> {
    provider: P,
    address: Option<String>,
}

impl<P: EvmProvider> EvmAdapter<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            address: None,
        }
    }

    /// The connected account, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Forget the cached account. The next connect re-prompts.
    pub fn reset(&mut self) {
        self.address = None;
    }

    /// Request account access from the wallet.
    ///
    /// Idempotent: when already connected, returns the cached address
    /// without opening another wallet prompt.
    pub async fn connect(&mut self) -> Result<String, EvmError> {
        if let Some(addr) = &self.address {
            return Ok(addr.clone());
        }

        let accounts = self
            .provider
            .request(ProviderCall::new("eth_requestAccounts", json!([])))
            .await
            .map_err(map_failure)?;

        let address = first_account(&accounts)
            .ok_or_else(|| EvmError::Provider("provider returned no accounts".into()))?;

        info!(address = %address, "EVM wallet connected");
        self.address = Some(address.clone());
        Ok(address)
    }

    /// Send a native-asset transfer and drive it to its terminal state.
    ///
    /// Validates the recipient and converts the amount exactly before
    /// the wallet is prompted. The sign step and the receipt wait are
    /// both unbounded suspension points.
    pub async fn send_transfer(
        &mut self,
        recipient: &str,
        amount: &str,
        progress: Progress<'_>,
    ) -> Result<EvmTransfer, EvmError> {
        let from = self
            .address
            .clone()
            .ok_or_else(|| EvmError::Provider("transfer requested before connect".into()))?;

        validate_recipient(recipient)?;
        let wei = parse_units(amount, ETH_DECIMALS)?;
        if wei.is_zero() {
            return Err(EvmError::InvalidAmount(
                "amount must be greater than zero".into(),
            ));
        }

        let params = json!([{
            "from": from,
            "to": recipient,
            "value": hex_quantity(wei),
        }]);

        let result = self
            .provider
            .request(ProviderCall::new("eth_sendTransaction", params))
            .await
            .map_err(map_failure)?;

        let tx_hash = result
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| EvmError::Provider("malformed transaction hash".into()))?;

        info!(tx_hash = %tx_hash, value = %wei, "transfer submitted");
        progress(&format!("Transaction sent! Hash: {tx_hash}"));

        match self
            .provider
            .await_receipt(&tx_hash)
            .await
            .map_err(map_failure)?
        {
            Some(receipt) if receipt.status => Ok(EvmTransfer {
                tx_hash,
                confirmed: true,
            }),
            Some(_) => Err(EvmError::Reverted(tx_hash)),
            None => {
                warn!(tx_hash = %tx_hash, "no receipt observed; submission stands");
                Ok(EvmTransfer {
                    tx_hash,
                    confirmed: false,
                })
            }
        }
    }
}

/// Wei as the 0x-prefixed minimal hex quantity the RPC expects.
fn hex_quantity(wei: U256) -> String {
    format!("0x{wei:x}")
}

fn first_account(accounts: &Value) -> Option<String> {
    accounts
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_owned)
}

fn map_failure(failure: ProviderFailure) -> EvmError {
    match failure {
        ProviderFailure::Rejected => EvmError::UserRejected,
        ProviderFailure::Unavailable => EvmError::NoProvider,
        ProviderFailure::Other(detail) => EvmError::Provider(detail),
    }
}
