use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha512;

use crate::key::SigningKey;

type HmacSha512 = Hmac<Sha512>;

/// Base64 (standard, padded) HMAC-SHA512 digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Returns the base64 text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes `base64(HMAC-SHA512(key, payload))`.
pub fn sign(payload: &[u8], key: &SigningKey) -> Signature {
    let mut mac =
        HmacSha512::new_from_slice(key.expose()).expect("HMAC accepts keys of any length");
    mac.update(payload);
    Signature(STANDARD.encode(mac.finalize().into_bytes()))
}
