use redemption_canonical::ValidationError;
use thiserror::Error;

/// Client error types.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required argument was missing or empty.
    #[error("{0} is missing or empty")]
    InvalidArgument(&'static str),
    /// A record field could not be encoded into the query string.
    #[error("{field} could not be encoded: {source}")]
    Encoding {
        /// Query key of the offending field.
        field: &'static str,
        /// Underlying encoding failure.
        #[source]
        source: ValidationError,
    },
    /// The per-call secret could not be decoded.
    #[error("invalid signing key: {0}")]
    Key(#[from] ValidationError),
}
