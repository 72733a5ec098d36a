use serde::{Deserialize, Serialize};

use super::helper::{explorer_tx_url, lamports_to_sol, raw_amount_to_ui};
use crate::address::AccountAddress;
use crate::network::Network;

// ============================================================================
// Wire Schemas
// ============================================================================

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: serde_json::Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

/// `error` member of a JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

/// `getBalance` result
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub value: u64,
}

/// `getTokenAccountsByOwner` result
#[derive(Debug, Clone, Deserialize)]
pub struct TokenAccountsResponse {
    #[serde(default)]
    pub value: Option<Vec<KeyedTokenAccount>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyedTokenAccount {
    pub pubkey: String,
    pub account: TokenAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenAccount {
    pub data: ParsedAccountData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedAccountData {
    pub parsed: ParsedTokenAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedTokenAccount {
    pub info: TokenAccountInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountInfo {
    pub mint: String,
    pub token_amount: UiTokenAmount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    pub amount: String,
    pub decimals: u8,
    #[serde(default)]
    pub ui_amount: Option<f64>,
}

/// One entry of the `getSignaturesForAddress` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureEntry {
    pub signature: String,
    #[serde(default)]
    pub slot: u64,
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

// ============================================================================
// View Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceRecord {
    pub lamports: u64,
    pub sol: f64,
}

impl BalanceRecord {
    pub fn from_lamports(lamports: u64) -> Self {
        Self {
            lamports,
            sol: lamports_to_sol(lamports),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolding {
    pub mint: AccountAddress,
    pub amount: f64,
    pub decimals: u8,
}

impl TokenHolding {
    /// Normalize a parsed token account. `uiAmount` wins; when the endpoint
    /// leaves it null the raw amount is scaled by `decimals`.
    pub fn from_keyed(keyed: KeyedTokenAccount) -> Result<Self, String> {
        let info = keyed.account.data.parsed.info;
        let mint = AccountAddress::parse(&info.mint)
            .map_err(|_| format!("token account {} has an empty mint", keyed.pubkey))?;

        let token_amount = info.token_amount;
        let amount = match token_amount.ui_amount {
            Some(ui) => ui,
            None => raw_amount_to_ui(&token_amount.amount, token_amount.decimals).ok_or_else(
                || {
                    format!(
                        "token account {} has a non-numeric amount {:?}",
                        keyed.pubkey, token_amount.amount
                    )
                },
            )?,
        };

        Ok(Self {
            mint,
            amount,
            decimals: token_amount.decimals,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSummary {
    pub signature: String,
    pub slot: u64,
    /// Unix seconds; `None` while the transaction is not yet in a block
    pub block_time: Option<i64>,
    pub success: bool,
    pub confirmation_status: Option<String>,
}

impl TransactionSummary {
    pub fn is_pending(&self) -> bool {
        self.block_time.is_none()
    }

    pub fn explorer_url(&self, network: Network) -> String {
        explorer_tx_url(&self.signature, network)
    }
}

impl From<SignatureEntry> for TransactionSummary {
    fn from(entry: SignatureEntry) -> Self {
        Self {
            signature: entry.signature,
            slot: entry.slot,
            block_time: entry.block_time,
            success: entry.err.is_none(),
            confirmation_status: entry.confirmation_status,
        }
    }
}

/// Everything `search` returns for one address. Produced whole or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSnapshot {
    pub address: AccountAddress,
    pub network: Network,
    pub balance: BalanceRecord,
    pub tokens: Vec<TokenHolding>,
    pub transactions: Vec<TransactionSummary>,
}
