//! Multi-chain wallet transaction orchestration.
//!
//! One unified connect → compose → sign → confirm flow over two
//! structurally different chains: an EVM-style account chain and a
//! Solana-style instruction chain, each reached through whichever
//! wallet extension the user has injected. The host UI hands in a
//! chain-agnostic [`TransferIntent`] and watches one status channel;
//! everything chain-specific lives behind the adapter crates.
//!
//! ```no_run
//! # use wallet_core::*;
//! # async fn example<E, W, R>(evm: EvmAdapter<E>) -> TransferResult
//! # where E: EvmProvider, W: LedgerWallet, R: LedgerRpc {
//! let mut orchestrator = Orchestrator::<E, W, R>::new(Some(evm), None);
//! orchestrator.select_wallet(WalletKind::Evm).unwrap();
//! orchestrator.connect().await.unwrap();
//!
//! let intent = TransferIntent::new("0x5aAe…", "1.25", WalletKind::Evm);
//! orchestrator.submit(intent).await
//! # }
//! ```

pub mod error;
pub mod orchestrator;
pub mod selector;
pub mod status;
pub mod types;

pub use error::TransferError;
pub use orchestrator::Orchestrator;
pub use selector::WalletSelector;
pub use status::StatusReporter;
pub use types::{ConnectionState, TransferIntent, TransferResult, WalletKind};

// The adapter layer, re-exported so hosts depend on one crate.
pub use chain_evm::{EvmAdapter, EvmProvider};
pub use chain_sol::{ConfirmPolicy, LedgerAdapter, LedgerRpc, LedgerWallet};
