mod error;
mod helper;
mod transport;
mod types;

pub use error::QueryError;
pub use helper::{
    explorer_account_url, explorer_tx_url, lamports_to_sol, LAMPORTS_PER_SOL, SIGNATURE_LIMIT,
    TOKEN_PROGRAM_ID,
};
pub use transport::{HttpTransport, RpcTransport, DEFAULT_TIMEOUT};
pub use types::*;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::address::AccountAddress;
use crate::network::EndpointConfig;

/// Ledger query client. Every call goes to the endpoint; nothing is cached
/// and nothing is retried.
pub struct QueryClient<T = HttpTransport> {
    endpoint: EndpointConfig,
    transport: T,
}

impl QueryClient<HttpTransport> {
    pub fn new(endpoint: EndpointConfig, timeout: Duration) -> Result<Self, QueryError> {
        Ok(Self::with_transport(endpoint, HttpTransport::new(timeout)?))
    }
}

impl<T: RpcTransport> QueryClient<T> {
    pub fn with_transport(endpoint: EndpointConfig, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Issue one JSON-RPC call and decode `result` into the method's schema.
    /// An `error` member wins over everything else in the body.
    async fn call<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R, QueryError> {
        let request = RpcRequest::new(method, params);
        debug!(method, url = %self.endpoint.url, "rpc request");

        let mut body = self.transport.post(&self.endpoint.url, &request).await?;

        if let Some(error) = body.get_mut("error").map(Value::take) {
            if !error.is_null() {
                let err = match serde_json::from_value::<RpcErrorObject>(error.clone()) {
                    Ok(obj) => QueryError::Remote {
                        code: obj.code,
                        message: obj.message,
                    },
                    Err(_) => QueryError::Remote {
                        code: None,
                        message: error
                            .as_str()
                            .map(str::to_string)
                            .unwrap_or_else(|| error.to_string()),
                    },
                };
                warn!(method, error = %err, "rpc error");
                return Err(err);
            }
        }

        let result = body
            .get_mut("result")
            .map(Value::take)
            .ok_or_else(|| QueryError::malformed(method, "neither result nor error present"))?;

        serde_json::from_value(result).map_err(|e| QueryError::malformed(method, e.to_string()))
    }

    /// Native balance of `address`, converted from lamports
    pub async fn fetch_balance(&self, address: &AccountAddress) -> Result<BalanceRecord, QueryError> {
        let response: BalanceResponse = self.call("getBalance", json!([address.as_str()])).await?;
        Ok(BalanceRecord::from_lamports(response.value))
    }

    /// Non-empty SPL token holdings of `address`, in endpoint order
    pub async fn fetch_token_holdings(
        &self,
        address: &AccountAddress,
    ) -> Result<Vec<TokenHolding>, QueryError> {
        const METHOD: &str = "getTokenAccountsByOwner";

        let response: TokenAccountsResponse = self
            .call(
                METHOD,
                json!([
                    address.as_str(),
                    { "programId": TOKEN_PROGRAM_ID },
                    { "encoding": "jsonParsed" },
                ]),
            )
            .await?;

        let mut holdings = Vec::new();
        for keyed in response.value.unwrap_or_default() {
            let holding =
                TokenHolding::from_keyed(keyed).map_err(|e| QueryError::malformed(METHOD, e))?;
            if holding.amount > 0.0 {
                holdings.push(holding);
            }
        }

        Ok(holdings)
    }

    /// Up to `SIGNATURE_LIMIT` most recent transactions, newest first
    pub async fn fetch_recent_transactions(
        &self,
        address: &AccountAddress,
    ) -> Result<Vec<TransactionSummary>, QueryError> {
        let entries: Vec<SignatureEntry> = self
            .call(
                "getSignaturesForAddress",
                json!([address.as_str(), { "limit": SIGNATURE_LIMIT }]),
            )
            .await?;

        Ok(entries
            .into_iter()
            .take(SIGNATURE_LIMIT)
            .map(TransactionSummary::from)
            .collect())
    }

    /// Parse `input` and fetch everything shown for an address
    pub async fn search(&self, input: &str) -> Result<WalletSnapshot, QueryError> {
        let address = AccountAddress::parse(input)?;
        self.search_address(address).await
    }

    /// Run the three queries together. The first failure drops the other
    /// in-flight requests and is returned; no partial snapshot is built.
    pub async fn search_address(
        &self,
        address: AccountAddress,
    ) -> Result<WalletSnapshot, QueryError> {
        debug!(%address, network = %self.endpoint.network, "search");

        let (balance, tokens, transactions) = tokio::try_join!(
            self.fetch_balance(&address),
            self.fetch_token_holdings(&address),
            self.fetch_recent_transactions(&address),
        )?;

        Ok(WalletSnapshot {
            address,
            network: self.endpoint.network,
            balance,
            tokens,
            transactions,
        })
    }
}
