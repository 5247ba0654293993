use thiserror::Error;

/// Validation errors for canonical primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When text supplied for an amount does not parse as a number.
    #[error("'{value}' is not a number")]
    NotNumeric {
        /// Offending value.
        value: String,
    },
    /// When an amount is NaN or infinite.
    #[error("{value} is not a finite amount")]
    NonFinite {
        /// Offending value.
        value: String,
    },
    /// When a secret is not valid base64.
    #[error("secret is not valid base64: {0}")]
    InvalidKey(#[from] base64::DecodeError),
    /// When a secret decodes to zero bytes.
    #[error("secret is empty")]
    EmptyKey,
}
