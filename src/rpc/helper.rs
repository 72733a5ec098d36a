use crate::network::Network;

// ============================================================================
// Constants
// ============================================================================

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// SPL Token program; token accounts are looked up under this owner program
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// How many recent signatures are requested (and kept) per address
pub const SIGNATURE_LIMIT: usize = 10;

const EXPLORER_BASE: &str = "https://solscan.io";

// ============================================================================
// Helper Functions
// ============================================================================

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Scale a raw integer token amount (decimal string) by its mint decimals
pub fn raw_amount_to_ui(amount: &str, decimals: u8) -> Option<f64> {
    let raw: u128 = amount.trim().parse().ok()?;
    Some(raw as f64 / 10f64.powi(decimals as i32))
}

fn cluster_suffix(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "",
        Network::Devnet => "?cluster=devnet",
    }
}

/// Block explorer page for a transaction signature
pub fn explorer_tx_url(signature: &str, network: Network) -> String {
    format!("{EXPLORER_BASE}/tx/{signature}{}", cluster_suffix(network))
}

/// Block explorer page for an account
pub fn explorer_account_url(address: &str, network: Network) -> String {
    format!("{EXPLORER_BASE}/account/{address}{}", cluster_suffix(network))
}
