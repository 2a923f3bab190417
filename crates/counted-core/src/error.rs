//! Shared error type across counted crates.

use thiserror::Error;

/// Stable error codes (safe to match on or log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Nothing registered under the resolved metric name.
    MissingCounter,
    /// The name is taken by a metric that is not a counter.
    NotACounter,
    /// Metadata document failed to parse or validate.
    InvalidMetadata,
    /// Unsupported metadata document version.
    UnsupportedVersion,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingCounter => "MISSING_COUNTER",
            ErrorCode::NotACounter => "NOT_A_COUNTER",
            ErrorCode::InvalidMetadata => "INVALID_METADATA",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CountedError>;

/// Unified error type used by core and interceptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountedError {
    #[error("no counter with name [{name}] found in registry")]
    MissingCounter { name: String },
    #[error("metric [{name}] is registered as a {found}, not a counter")]
    NotACounter { name: String, found: &'static str },
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("unsupported metadata version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CountedError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CountedError::MissingCounter { .. } => ErrorCode::MissingCounter,
            CountedError::NotACounter { .. } => ErrorCode::NotACounter,
            CountedError::InvalidMetadata(_) => ErrorCode::InvalidMetadata,
            CountedError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            CountedError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// True when the registry does not hold the counter the metadata promises.
    /// These are never retried internally.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CountedError::MissingCounter { .. } | CountedError::NotACounter { .. }
        )
    }

    /// The metric name involved, if any.
    pub fn metric_name(&self) -> Option<&str> {
        match self {
            CountedError::MissingCounter { name } | CountedError::NotACounter { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}
