use crate::request::{HttpRequest, Method};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use std::time::Duration;

const LOG_TARGET: &str = "transport";

/// Shown when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "No results!";

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("http error {0}: {1}")]
    Status(u16, String),

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// The text surfaced to the user for this failure.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            FALLBACK_MESSAGE.to_owned()
        } else {
            msg
        }
    }
}

/// Executes one request and yields the raw response body.
///
/// Exactly one attempt is made per call. Implementations are not expected to
/// be abortable; superseded responses are dropped by the caller.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<String, TransportError>>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Applies a client-level timeout. No timeout is set by default.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<String, TransportError>> {
        let this = self.clone();
        async move {
            let url = request.url()?;
            tracing::debug!(
                target: LOG_TARGET,
                provider = %request.provider,
                host = url.host_str().unwrap_or_default(),
                "sending request"
            );

            let mut builder = match request.method {
                Method::Get => this.client.get(url),
                Method::Post => this.client.post(url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(*name, value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| {
                tracing::warn!(target: LOG_TARGET, provider = %request.provider, error = %e, "request failed");
                TransportError::Http(e)
            })?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                tracing::warn!(
                    target: LOG_TARGET,
                    provider = %request.provider,
                    status = status.as_u16(),
                    "vendor returned error status"
                );
                return Err(TransportError::Status(status.as_u16(), error_text));
            }

            let body = response.text().await?;
            tracing::trace!(target: LOG_TARGET, provider = %request.provider, bytes = body.len(), "response received");
            Ok(body)
        }
        .boxed()
    }
}
