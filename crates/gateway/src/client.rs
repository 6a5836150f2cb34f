//! HTTP transport for the inference gateway.

use crate::wire::{InferenceRequest, InferenceResponse};
use anyhow::Result;
use reqwest::{
    Method,
    header::{self, HeaderMap},
};

/// The inference transport seam.
///
/// The translation core depends only on this shape; tests script it with
/// canned responses. Implementations own no retry policy; a failed call
/// surfaces to the caller with episode state and history untouched, so the
/// same turn can be re-issued.
pub trait Inference {
    /// Perform one inference call.
    fn infer(
        &self,
        request: &InferenceRequest,
    ) -> impl Future<Output = Result<InferenceResponse>> + Send;
}

/// HTTP client for a remote inference gateway.
#[derive(Clone)]
pub struct Gateway {
    /// The HTTP client.
    client: reqwest::Client,

    /// The request headers.
    headers: HeaderMap,

    /// The inference endpoint URL.
    endpoint: String,
}

impl Gateway {
    /// Create a gateway client against the given base URL.
    pub fn http(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: format!("{}/inference", base_url.trim_end_matches('/')),
        })
    }

    /// The resolved inference endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Inference for Gateway {
    async fn infer(&self, request: &InferenceRequest) -> Result<InferenceResponse> {
        tracing::debug!("request: {}", serde_json::to_string(request)?);
        let text = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?
            .text()
            .await?;

        tracing::debug!("response: {text}");
        serde_json::from_str(&text).map_err(Into::into)
    }
}
