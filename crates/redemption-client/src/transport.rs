use async_trait::async_trait;
use thiserror::Error;

/// Method and headers for one outbound request. All data travels in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method, e.g. `POST`.
    pub method: String,
    /// Header name/value pairs, sent in order.
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// A body-less POST carrying only a `User-Agent` header.
    pub fn post(user_agent: &str) -> Self {
        Self {
            method: "POST".to_string(),
            headers: vec![("User-Agent".to_string(), user_agent.to_string())],
        }
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body returned by a transport, passed to callers unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    status: u16,
    body: String,
}

impl TransportResponse {
    /// Builds a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The request descriptor could not be turned into a request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Sends one request and yields the response. Retries and timeouts are the
/// implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` to `url`.
    async fn send(
        &self,
        url: &str,
        request: &RequestDescriptor,
    ) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wraps a preconfigured `reqwest` client (proxies, timeouts, TLS).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        request: &RequestDescriptor,
    ) -> Result<TransportResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|err| TransportError::InvalidRequest(err.to_string()))?;
        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse::new(status, body))
    }
}
