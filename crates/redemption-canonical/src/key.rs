use std::fmt;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use zeroize::Zeroize;

use crate::validation::ValidationError;

/// Standard alphabet; tolerates secrets pasted without trailing `=`.
const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Raw HMAC key bytes, zeroed on drop.
///
/// There is no `Display` impl and `Debug` is redacted, so a key cannot leak
/// through logs or error messages.
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Wraps already-decoded key bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, ValidationError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        Ok(Self { bytes })
    }

    /// Decodes a base64 secret as issued to partners.
    pub fn from_base64(secret: &str) -> Result<Self, ValidationError> {
        let bytes = SECRET_ENGINE.decode(secret.trim())?;
        Self::from_bytes(bytes)
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
