// Default reqwest-backed JSON transport
// Author: kelexine (https://github.com/kelexine)

use super::{HttpJsonClient, JsonResponse};
use crate::error::Result;
use crate::utils::logging::redact_key;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// `HttpJsonClient` implementation over a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestJsonClient {
    http_client: Client,
}

impl ReqwestJsonClient {
    /// Create a client with the given request timeout.
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpJsonClient for ReqwestJsonClient {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<JsonResponse> {
        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let data = serde_json::from_str(&body).ok();

        debug!(
            "POST {} returned status {}",
            redact_key(url),
            status.as_u16()
        );

        Ok(JsonResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        })
    }
}
