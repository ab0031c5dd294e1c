//! Application layer that drives a wallet from a stream of operations.
//!
//! `WalletEngine` applies operations either one after another or as
//! independent `tokio` tasks sharing the same wallet.

pub mod engine;
