use std::future::Future;

use bytes::Bytes;

/// Status and fully-buffered body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed to fetch a feed page.
/// Implementations own their connection pooling, redirect following and
/// timeouts. Non-2xx responses are returned as `Ok`; the caller decides what
/// counts as a failure.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - In-memory clients for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET request and buffer the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed (DNS failure,
    /// connection refused, reset while reading the body, etc.).
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = std::result::Result<HttpResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use std::time::Duration;

    use super::*;
    use crate::error::{FetchError, Result};

    const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            Self::build(None)
        }

        /// Create a client whose requests fail after `timeout`.
        pub fn with_timeout(timeout: Duration) -> Result<Self> {
            Self::build(Some(timeout))
        }

        /// Wrap an already-configured reqwest client.
        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }

        fn build(timeout: Option<Duration>) -> Result<Self> {
            let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            let client = builder.build().map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<HttpResponse, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
