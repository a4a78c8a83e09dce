//! Ledger-chain (Solana-style) support for the wallet orchestrator.
//!
//! The wallet extension holds the keys here; this crate builds the
//! unsigned transfer message, hands it out for signature, and drives
//! submission and confirmation. The legacy transaction wire format is
//! implemented by hand — `solana-sdk` drags in 200+ transitive
//! dependencies for what is a few dozen lines of compact binary layout.

pub mod adapter;
pub mod address;
pub mod error;
pub mod provider;
pub mod transaction;
pub mod units;

pub use adapter::{ConfirmPolicy, LedgerAdapter, SolTransfer};
pub use address::{decode_pubkey, encode_pubkey, validate_recipient};
pub use error::SolError;
pub use provider::{LedgerRpc, LedgerWallet, RpcFailure, SignatureStatus, WalletFailure};
pub use transaction::{assemble_signed, TransferMessage, SYSTEM_PROGRAM_ID};
pub use units::{format_lamports, parse_sol_amount, LamportAmount, LAMPORTS_PER_SOL};
