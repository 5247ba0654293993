//! Canonical encoding and signing primitives for redemption tracking.
//!
//! Every byte that participates in a redemption signature is produced by this
//! crate: scalar values are percent-encoded with lowercase escapes, amounts are
//! fixed at two decimal places, and signatures are base64 HMAC-SHA512 digests.
//! The receiving server recomputes the same digest, so any deviation in
//! encoding yields a rejected event.
//!
#![deny(missing_docs)]

/// Standalone "codeless" hash validation.
pub mod codeless;
/// Query value encoders (strings and two-decimal amounts).
pub mod encoding;
/// Secret key handling.
pub mod key;
/// HMAC-SHA512 signing.
pub mod signature;
/// Validation errors raised by canonical primitives.
pub mod validation;

pub use codeless::CodelessValidator;
pub use encoding::{encode_number, encode_string, parse_amount};
pub use key::SigningKey;
pub use signature::{sign, Signature};
pub use validation::ValidationError;
