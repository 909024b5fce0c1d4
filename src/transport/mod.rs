//! HTTP transport abstraction for the recognize call.
//!
//! The adapter never talks to reqwest directly. It goes through the
//! `HttpJsonClient` capability so hosts can inject their own transport and
//! tests can script responses without a network.
//!
//! # Submodules
//!
//! - `client`: Default reqwest-backed implementation.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

mod client;

pub use client::ReqwestJsonClient;

/// Outcome of a single POST, successful at the transport level.
///
/// Non-2xx statuses are reported here through `ok`/`status` rather than as
/// errors; `Err` from the client is reserved for transport-level failures
/// (connect, TLS, timeout).
#[derive(Debug, Clone)]
pub struct JsonResponse {
    /// Whether the status code is in the 2xx range.
    pub ok: bool,

    /// HTTP status code.
    pub status: u16,

    /// Response body parsed as JSON, `None` when the body is empty or not
    /// valid JSON.
    pub data: Option<Value>,
}

/// A POST-with-JSON-body capability.
#[async_trait]
pub trait HttpJsonClient: Send + Sync {
    /// POST `payload` to `url` with a JSON content type and return the
    /// response envelope.
    async fn post_json(&self, url: &str, payload: &Value) -> Result<JsonResponse>;
}
