//! Client for recording discount-code redemptions with the tracking service.
//!
//! This crate provides:
//! - The redemption record and its canonical, fixed-order query string
//! - Signed and unsigned pixel, script, and server URLs
//! - A server-to-server POST through a pluggable [`Transport`]
//!
//! Core invariants:
//! - The signature covers the whole unsigned query, leading `?` included
//! - Test mode only ever appends `&Test=True` as the final segment
//! - Secrets are supplied per call and never stored on the client
//!
//! ## Quick Start
//!
//! ```rust
//! use redemption_client::{ClientConfig, RedemptionClient, RedemptionRecord};
//!
//! let client = RedemptionClient::new(
//!     "partnerId",
//!     "order-1234",
//!     "GBP",
//!     ClientConfig::default().test_mode(true),
//! )?;
//!
//! let record = RedemptionRecord {
//!     order_total: Some(209.0),
//!     code: Some("ABC123".into()),
//!     ..Default::default()
//! };
//!
//! let url = client.signed_pixel_url(&record, "c2VjcmV0")?;
//! assert!(url.starts_with("https://tracking.myunidays.com/perks/redemption/v1.2.gif?PartnerId=partnerId"));
//! assert!(url.ends_with("&Test=True"));
//! # Ok::<(), redemption_client::ClientError>(())
//! ```

#![deny(missing_docs)]

/// Redemption client and endpoint variants.
pub mod client;
/// Client configuration and defaults.
pub mod config;
/// Error types for client operations.
pub mod errors;
/// Canonical query-string serialization and signing.
pub mod query;
/// Redemption record value object.
pub mod record;
/// Transport collaborator and the default HTTP implementation.
pub mod transport;

pub use client::{Endpoint, PendingResponse, RedemptionClient, USER_AGENT};
pub use config::{ClientConfig, EndpointSettings, Protocol, DEFAULT_HOSTNAME};
pub use errors::ClientError;
pub use query::{sign_query_string, to_query_string, TrackingIdentity};
pub use record::RedemptionRecord;
pub use transport::{
    HttpTransport, RequestDescriptor, Transport, TransportError, TransportResponse,
};
