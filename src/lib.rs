//! solscan - Terminal wallet explorer for Solana
//!
//! Looks up an account's SOL balance, SPL token holdings and recent
//! transactions over JSON-RPC, and keeps a history of searched and
//! favorited addresses.

pub mod address;
pub mod app;
pub mod config;
pub mod network;
pub mod rpc;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use address::AccountAddress;
pub use app::{App, NavLink, Screen, WalletResult};
pub use config::Config;
pub use network::{configure, EndpointConfig, Network};
pub use rpc::{QueryClient, QueryError, WalletSnapshot};
pub use store::AddressStore;
