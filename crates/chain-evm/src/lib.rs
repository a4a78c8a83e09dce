//! EVM account-chain support for the wallet orchestrator.
//!
//! This crate provides:
//! - Recipient address validation with EIP-55 mixed-case checksums
//! - Exact decimal-string to wei conversion over 256-bit integers
//! - The `EvmProvider` capability trait modeling an injected
//!   `request({method, params})`-style wallet provider
//! - The connect/send adapter driving the provider through the
//!   sign/submit/confirm lifecycle

pub mod adapter;
pub mod address;
pub mod error;
pub mod provider;
pub mod units;

pub use adapter::{EvmAdapter, EvmTransfer};
pub use address::validate_recipient;
pub use error::EvmError;
pub use provider::{EvmProvider, ProviderCall, ProviderFailure, TxReceipt};
pub use units::{format_units, parse_units, ETH_DECIMALS};
