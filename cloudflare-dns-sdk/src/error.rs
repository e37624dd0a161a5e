//! Error types
//!
//! Two layers, mirroring where a failure is detected:
//! - [`ValidationError`]: the caller built a request the API would reject. Raised
//!   synchronously before anything is sent, never retried.
//! - [`ApiError`]: the transport or the remote API failed.
//!
//! [`Error`] unifies both for the client methods.

use serde::Serialize;
use thiserror::Error;

/// A record or batch request failed local validation.
///
/// Only the first violation is reported; validation stops there.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ValidationError {
    /// A mandatory field is absent, empty, or whitespace-only.
    #[error("Required field '{field}' is missing or blank")]
    RequiredFieldMissing {
        /// Dotted path of the field (e.g. `data.tag`).
        field: String,
    },

    /// A numeric value lies outside its documented bounds.
    #[error("Field '{field}' is out of range: {detail}")]
    OutOfRange {
        /// Dotted path of the field.
        field: String,
        /// The accepted range and the rejected value.
        detail: String,
    },

    /// A string could not be parsed into one of the known enum members.
    #[error("Invalid value '{value}' for '{field}'")]
    InvalidEnumValue {
        /// Name of the enum-typed field.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// The `data` payload does not have the shape the record type expects.
    #[error("Field '{field}' expects {expected} data, got {found}")]
    TypeMismatch {
        /// Dotted path of the field.
        field: String,
        /// Record type the payload should belong to.
        expected: String,
        /// Record type the payload actually belongs to.
        found: String,
    },

    /// A zone or record identifier is malformed.
    #[error("Invalid identifier for '{field}': '{value}'")]
    InvalidIdentifier {
        /// Which identifier was rejected.
        field: String,
        /// The rejected input.
        value: String,
    },

    /// A batch item references a different zone than the batch itself.
    #[error("Record '{record_id}' belongs to zone '{found}', batch targets zone '{expected}'")]
    ZoneMismatch {
        /// Identifier of the offending batch item.
        record_id: String,
        /// Zone of the batch.
        expected: String,
        /// Zone named by the item.
        found: String,
    },
}

impl ValidationError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }

    pub(crate) fn out_of_range(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// A transport-level or remote API failure.
///
/// Cloudflare error codes from an unsuccessful response envelope are mapped onto
/// these variants; anything unmapped lands in [`Unknown`](Self::Unknown).
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// Connection-level failure, or an HTTP 502/503/504 from the edge.
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// HTTP 429.
    #[error("Rate limited{}", .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimited {
        /// Value of the `Retry-After` header, in seconds.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The API token is missing, malformed, or lacks access.
    #[error("Invalid credentials{}", .raw_message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    InvalidCredentials {
        /// Message returned by the API.
        raw_message: Option<String>,
    },

    /// The API rejected a request field.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Which field the API complained about.
        param: String,
        /// Message returned by the API.
        detail: String,
    },

    /// A conflicting record already exists.
    #[error("Record '{record_name}' already exists")]
    RecordExists {
        /// Name of the record being written.
        record_name: String,
        /// Message returned by the API.
        raw_message: Option<String>,
    },

    /// The record does not exist.
    #[error("Record '{record_id}' not found")]
    RecordNotFound {
        /// Identifier that was looked up.
        record_id: String,
        /// Message returned by the API.
        raw_message: Option<String>,
    },

    /// The zone's record quota is exhausted.
    #[error("Quota exceeded")]
    QuotaExceeded {
        /// Message returned by the API.
        raw_message: Option<String>,
    },

    /// The zone does not exist or is not routable for this token.
    #[error("Zone '{zone_id}' not found")]
    ZoneNotFound {
        /// Zone identifier used in the request path.
        zone_id: String,
        /// Message returned by the API.
        raw_message: Option<String>,
    },

    /// The response body was not a valid API envelope.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An error code not mapped to any other variant.
    #[error("{raw_message}")]
    Unknown {
        /// Numeric Cloudflare error code, as a string.
        raw_code: Option<String>,
        /// Message returned by the API.
        raw_message: String,
    },
}

impl ApiError {
    /// Whether the failure is caused by the request itself (bad input, missing
    /// resource, permissions) rather than by the environment.
    ///
    /// `true` maps to `warn` level logging, `false` to `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::QuotaExceeded { .. }
                | Self::ZoneNotFound { .. }
        )
    }

    /// Whether repeating the same request later may succeed.
    ///
    /// This crate does not retry on its own; callers can use this to decide.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Any error returned by the client.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "error")]
pub enum Error {
    /// The request was rejected before being sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport or the remote API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The client could not be configured (missing token, TLS backend failure).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// See [`ApiError::is_expected`]. Validation failures are always expected.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::Config(_) => false,
        }
    }
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
