use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::error::QueryError;
use super::types::RpcRequest;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Carries one JSON-RPC request to an endpoint and hands back the decoded body.
///
/// Implementations must not look at the JSON-RPC `error`/`result` members;
/// that is the Query Client's job.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn post(&self, url: &str, request: &RpcRequest<'_>)
        -> Result<serde_json::Value, QueryError>;
}

/// HTTPS POST transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, QueryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(
        &self,
        url: &str,
        request: &RpcRequest<'_>,
    ) -> Result<serde_json::Value, QueryError> {
        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(method = request.method, %status, len = bytes.len(), "rpc response");

        // A JSON body is authoritative whatever the status says
        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => {
                Err(QueryError::Transport(format!("HTTP {status} from {url}")))
            }
            Err(e) => Err(QueryError::malformed(
                request.method,
                format!("body is not JSON: {e}"),
            )),
        }
    }
}
