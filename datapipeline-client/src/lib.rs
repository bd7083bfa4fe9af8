//! Data Pipeline HTTP Client
//!
//! A typed client binding for the AWS Data Pipeline JSON protocol.
//!
//! Every operation is a stateless round trip: serialize the typed request,
//! POST it to the regional endpoint with a SigV4 signature, and decode the
//! response body into the typed response. Pagination, retry and backoff are
//! left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use datapipeline_client::{Credentials, DataPipelineClient, Region};
//! use datapipeline_client::dto::pipeline::CreatePipelineRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DataPipelineClient::new(
//!         Credentials::new("AKID...", "secret..."),
//!         Region::us_west_2(),
//!     );
//!
//!     let created = client.create_pipeline(CreatePipelineRequest {
//!         name: "clickstream-import".to_string(),
//!         unique_id: "clickstream-import-2026-01".to_string(),
//!         description: None,
//!     }).await?;
//!
//!     println!("Created pipeline: {}", created.pipeline_id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod objects;
mod pipelines;
mod sign;
mod tasks;

// Re-export commonly used types
pub use config::{Credentials, Region};
pub use datapipeline_core::dto;
pub use error::{ClientError, Result};

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Service namespace prefix of the `X-Amz-Target` header
const TARGET_PREFIX: &str = "DataPipeline";

/// Typed client for the Data Pipeline service
///
/// The client owns its credential, region and HTTP transport; it holds no
/// mutable state between calls, so one instance may be shared and used
/// concurrently from any number of tasks.
#[derive(Debug, Clone)]
pub struct DataPipelineClient {
    /// Signing credential
    credentials: Credentials,
    /// Target region and endpoint
    region: Region,
    /// HTTP client instance
    client: Client,
}

/// Fixed shape of the service's non-200 error body
///
/// `__type` is a namespaced identifier such as
/// `com.amazon.coral.validate#ValidationException`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "__type")]
    error_type: String,
    #[serde(default)]
    message: String,
}

impl DataPipelineClient {
    /// Create a new client for the given credential and region
    pub fn new(credentials: Credentials, region: Region) -> Self {
        Self {
            credentials,
            region,
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use datapipeline_client::{Credentials, DataPipelineClient, Region};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = DataPipelineClient::with_http_client(
    ///     Credentials::new("AKID...", "secret..."),
    ///     Region::us_west_2(),
    ///     http_client,
    /// );
    /// ```
    pub fn with_http_client(credentials: Credentials, region: Region, client: Client) -> Self {
        Self {
            credentials,
            region,
            client,
        }
    }

    /// Get the region this client targets
    pub fn region(&self) -> &Region {
        &self.region
    }

    // =============================================================================
    // Call Plumbing
    // =============================================================================

    /// Serialize a request, dispatch it, and decode the typed response
    pub(crate) async fn call<Req, Resp>(&self, action: &str, req: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(req).map_err(ClientError::Serialize)?;
        let response = self.dispatch(action, body).await?;
        serde_json::from_slice(&response).map_err(ClientError::Deserialize)
    }

    /// Serialize a request and dispatch it, discarding the response payload
    ///
    /// For operations whose success response carries no meaningful fields.
    pub(crate) async fn call_no_output<Req>(&self, action: &str, req: &Req) -> Result<()>
    where
        Req: Serialize,
    {
        let body = serde_json::to_vec(req).map_err(ClientError::Serialize)?;
        self.dispatch(action, body).await?;
        Ok(())
    }

    /// Sign and send one request, returning the raw response body
    ///
    /// HTTP 200 returns the body unaltered; any other status becomes a
    /// structured error via [`Self::build_error`].
    async fn dispatch(&self, action: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let target = format!("{TARGET_PREFIX}.{action}");
        let signed = sign::sign(
            &self.credentials,
            self.region.name(),
            self.region.host(),
            &target,
            Utc::now(),
            &body,
        );

        debug!(action, endpoint = self.region.endpoint(), "dispatching");

        let response = self
            .client
            .post(self.region.endpoint())
            .header("Content-Type", sign::CONTENT_TYPE)
            .header("X-Amz-Date", &signed.amz_date)
            .header("X-Amz-Target", &target)
            .header("Authorization", &signed.authorization)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(action, status = status.as_u16(), "response received");

        if status != StatusCode::OK {
            return Err(Self::build_error(status, &bytes));
        }
        Ok(bytes.to_vec())
    }

    /// Translate a non-200 response into a [`ClientError`]
    fn build_error(status: StatusCode, body: &[u8]) -> ClientError {
        let status_text = status.canonical_reason().unwrap_or("").to_string();

        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                // Only the part after the first '#' is the short code.
                let code = match envelope.error_type.split_once('#') {
                    Some((_, short)) => short.to_string(),
                    None => envelope.error_type,
                };
                ClientError::Service {
                    status: status.as_u16(),
                    status_text,
                    code,
                    message: envelope.message,
                }
            }
            Err(_) => ClientError::MalformedErrorBody {
                status: status.as_u16(),
                status_text,
            },
        }
    }
}
