use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::transport::{HttpTransport, Transport};

/// Production tracking host.
pub const DEFAULT_HOSTNAME: &str = "tracking.myunidays.com";

/// URL scheme for constructed endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS (default).
    #[default]
    Https,
}

impl Protocol {
    /// Scheme text as used in URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint settings; every field has a default so partial config files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    /// Tracking host, without scheme or path.
    pub hostname: String,
    /// URL scheme.
    pub protocol: Protocol,
    /// Appends `&Test=True` to every URL when set.
    pub test_mode: bool,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            protocol: Protocol::Https,
            test_mode: false,
        }
    }
}

/// Full client configuration: endpoint settings plus the transport.
#[derive(Clone)]
pub struct ClientConfig {
    /// Where and how URLs are built.
    pub endpoint: EndpointSettings,
    /// Transport used by `record_redemption`.
    pub transport: Arc<dyn Transport>,
}

impl ClientConfig {
    /// Default endpoint settings with a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: EndpointSettings::default(),
            transport,
        }
    }

    /// Replaces the endpoint settings.
    pub fn endpoint(mut self, endpoint: EndpointSettings) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Enables or disables test mode.
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.endpoint.test_mode = enabled;
        self
    }

    /// Overrides the tracking host.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.endpoint.hostname = hostname.into();
        self
    }

    /// Overrides the URL scheme.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.endpoint.protocol = protocol;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.endpoint.hostname.is_empty() {
            return Err(ClientError::InvalidArgument("hostname"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_transport(Arc::new(HttpTransport::default()))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
