use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use redemption_canonical::SigningKey;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::query::{sign_query_string, to_query_string, TrackingIdentity};
use crate::record::RedemptionRecord;
use crate::transport::{RequestDescriptor, TransportError, TransportResponse};

/// `User-Agent` sent with every server-to-server POST.
pub const USER_AGENT: &str = concat!("UNiDAYS Rust tracking SDK v", env!("CARGO_PKG_VERSION"));

/// Trailing marker for non-production traffic. Always the last segment.
const TEST_MARKER: &str = "&Test=True";

/// Response future returned by [`RedemptionClient::record_redemption`].
pub type PendingResponse =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'static>>;

/// Tracking endpoint variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Server-to-server POST.
    Server,
    /// Image beacon.
    Pixel,
    /// Script tag.
    Script,
}

impl Endpoint {
    /// Path on the tracking host.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Server => "/perks/redemption/v1.2",
            Endpoint::Pixel => "/perks/redemption/v1.2.gif",
            Endpoint::Script => "/perks/redemption/v1.2.js",
        }
    }
}

/// Builds redemption URLs and records redemptions for one transaction.
///
/// Operations take `&self` and never mutate the client, so a single instance
/// can be shared across tasks. Secrets are passed per call and dropped (and
/// zeroed) before the call returns.
#[derive(Debug, Clone)]
pub struct RedemptionClient {
    identity: TrackingIdentity,
    config: ClientConfig,
}

impl RedemptionClient {
    /// Creates a client; every identity field must be non-empty.
    pub fn new(
        partner_id: impl Into<String>,
        transaction_id: impl Into<String>,
        currency: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let identity = TrackingIdentity::new(partner_id, transaction_id, currency)?;
        config.validate()?;
        Ok(Self { identity, config })
    }

    /// Creates a client with the default configuration and HTTP transport.
    pub fn with_defaults(
        partner_id: impl Into<String>,
        transaction_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::new(partner_id, transaction_id, currency, ClientConfig::default())
    }

    /// Identity bound to this client.
    pub fn identity(&self) -> &TrackingIdentity {
        &self.identity
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Unsigned canonical query string for `record`.
    pub fn to_query_string(&self, record: &RedemptionRecord) -> Result<String, ClientError> {
        to_query_string(&self.identity, record)
    }

    /// Pixel URL without a signature.
    pub fn unsigned_pixel_url(&self, record: &RedemptionRecord) -> Result<String, ClientError> {
        self.build_url(Endpoint::Pixel, record, None)
    }

    /// Pixel URL signed with the base64 `secret`.
    pub fn signed_pixel_url(
        &self,
        record: &RedemptionRecord,
        secret: &str,
    ) -> Result<String, ClientError> {
        self.build_url(Endpoint::Pixel, record, Some(secret))
    }

    /// Script URL signed with the base64 `secret`.
    pub fn tracking_script_url(
        &self,
        record: &RedemptionRecord,
        secret: &str,
    ) -> Result<String, ClientError> {
        self.build_url(Endpoint::Script, record, Some(secret))
    }

    /// Signed server URL, as posted to by [`record_redemption`](Self::record_redemption).
    pub fn server_url(&self, record: &RedemptionRecord, secret: &str) -> Result<String, ClientError> {
        self.build_url(Endpoint::Server, record, Some(secret))
    }

    /// Posts a signed redemption through the configured transport.
    ///
    /// Argument, key, and encoding errors are returned immediately, before any
    /// I/O. The returned future resolves to the transport's response or error
    /// unchanged; non-2xx statuses are not treated as errors here.
    pub fn record_redemption(
        &self,
        record: &RedemptionRecord,
        secret: &str,
    ) -> Result<PendingResponse, ClientError> {
        let url = self.server_url(record, secret)?;
        let request = RequestDescriptor::post(USER_AGENT);
        let transport = Arc::clone(&self.config.transport);
        debug!(
            partner_id = %self.identity.partner_id(),
            path = Endpoint::Server.path(),
            test_mode = self.config.endpoint.test_mode,
            "posting redemption"
        );

        Ok(Box::pin(async move {
            let response = transport.send(&url, &request).await?;
            debug!(status = response.status(), "redemption post completed");
            Ok::<_, TransportError>(response)
        }))
    }

    fn build_url(
        &self,
        endpoint: Endpoint,
        record: &RedemptionRecord,
        secret: Option<&str>,
    ) -> Result<String, ClientError> {
        let mut query = to_query_string(&self.identity, record)?;
        if let Some(secret) = secret {
            let key = SigningKey::from_base64(secret)?;
            query = sign_query_string(&query, &key);
        }
        let settings = &self.config.endpoint;
        if settings.test_mode {
            query.push_str(TEST_MARKER);
        }
        debug!(
            partner_id = %self.identity.partner_id(),
            path = endpoint.path(),
            signed = secret.is_some(),
            test_mode = settings.test_mode,
            "built redemption url"
        );
        Ok(format!(
            "{}://{}{}{}",
            settings.protocol,
            settings.hostname,
            endpoint.path(),
            query
        ))
    }
}
