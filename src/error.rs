//! Error types for contacts-to-bbdb.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the remote contacts service.
#[derive(Error, Debug)]
pub enum ContactsApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Response body larger than accepted
    #[error("Response exceeds {limit} bytes")]
    ResponseTooLarge { limit: u64 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// No home directory to derive default paths from
    #[error("Cannot determine home directory for default {0}")]
    NoHomeDir(String),
}

/// Reasons a postal address is left out of a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Fewer than three usable lines
    #[error("incomplete address {raw:?}")]
    Incomplete { raw: String },

    /// The second line is not `City[, State] PostalCode`
    #[error("unable to read address {line:?}")]
    UnreadableCityLine { line: String },
}

/// Errors that abort an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Fetching the contact feed failed
    #[error("Contact feed failed: {0}")]
    Feed(#[from] ContactsApiError),

    /// Writing the BBDB file failed
    #[error("Failed to write BBDB output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ContactsApiError
pub type ContactsApiResult<T> = Result<T, ContactsApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with AddressError
pub type AddressResult<T> = Result<T, AddressError>;

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactsApiError::NotFound("photo".to_string());
        assert_eq!(err.to_string(), "Resource not found: photo");

        let err = ConfigError::MissingVar("CONTACTS_API_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACTS_API_TOKEN"
        );

        let err = AddressError::UnreadableCityLine {
            line: "Somewhere".to_string(),
        };
        assert_eq!(err.to_string(), "unable to read address \"Somewhere\"");
    }

    #[test]
    fn test_api_error_variants() {
        let err = ContactsApiError::ApiError {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_response_too_large_display() {
        let err = ContactsApiError::ResponseTooLarge { limit: 1024 };
        assert_eq!(err.to_string(), "Response exceeds 1024 bytes");
    }

    #[test]
    fn test_export_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ExportError = io.into();
        assert!(err.to_string().contains("disk full"));
    }
}
