use subtle::ConstantTimeEq;

use crate::encoding::encode_string;
use crate::key::SigningKey;
use crate::signature::{sign, Signature};
use crate::validation::ValidationError;

/// Verifies codeless student hashes (`ud_s` / `ud_t`) against a shared secret.
///
/// Unlike the redemption client, the key is bound once at construction and
/// held for the validator's lifetime.
#[derive(Debug)]
pub struct CodelessValidator {
    key: SigningKey,
}

impl CodelessValidator {
    /// Creates a validator from a base64 shared secret.
    pub fn new(secret: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            key: SigningKey::from_base64(secret)?,
        })
    }

    /// Signs `?ud_s=<student_id>&ud_t=<timestamp>`.
    pub fn hash(&self, student_id: &str, timestamp: &str) -> Signature {
        let query = format!(
            "?ud_s={}&ud_t={}",
            encode_string(student_id),
            encode_string(timestamp)
        );
        sign(query.as_bytes(), &self.key)
    }

    /// Returns true when `candidate` matches the recomputed hash.
    pub fn validate(&self, student_id: &str, timestamp: &str, candidate: &str) -> bool {
        let expected = self.hash(student_id, timestamp);
        expected.as_str().as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}
