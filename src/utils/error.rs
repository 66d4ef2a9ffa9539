use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("{field} {value} is out of range, expected a value between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Geocoding provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// Display is the provider's own message, unmodified.
    #[error("{message}")]
    ProviderRejected { code: i64, message: String },

    #[error("Coordinates resolve to a location outside the permitted region ({country})")]
    OutsideRegion { country: String },

    #[error("No usable administrative label in the provider response")]
    UnresolvableLocation,

    #[error("Validation error on {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Email already exists: {email}")]
    EmailTaken { email: String },

    #[error("User with ID: {id} not found")]
    UserNotFound { id: u64 },

    #[error("Configuration error on {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    ProviderUnavailable,
    ProviderRejected,
    OutsideRegion,
    UnresolvableLocation,
    Validation,
    EmailTaken,
    UserNotFound,
    Config,
    Io,
}

impl SignupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignupError::OutOfRange { .. } => ErrorKind::OutOfRange,
            SignupError::ProviderUnavailable { .. } => ErrorKind::ProviderUnavailable,
            SignupError::ProviderRejected { .. } => ErrorKind::ProviderRejected,
            SignupError::OutsideRegion { .. } => ErrorKind::OutsideRegion,
            SignupError::UnresolvableLocation => ErrorKind::UnresolvableLocation,
            SignupError::ValidationError { .. } => ErrorKind::Validation,
            SignupError::EmailTaken { .. } => ErrorKind::EmailTaken,
            SignupError::UserNotFound { .. } => ErrorKind::UserNotFound,
            SignupError::ConfigError { .. } => ErrorKind::Config,
            SignupError::IoError(_) => ErrorKind::Io,
        }
    }

    /// HTTP status an outer request layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::OutOfRange
            | ErrorKind::OutsideRegion
            | ErrorKind::UnresolvableLocation
            | ErrorKind::Validation => 400,
            ErrorKind::UserNotFound => 404,
            ErrorKind::EmailTaken => 409,
            ErrorKind::ProviderRejected => 502,
            ErrorKind::ProviderUnavailable => 503,
            ErrorKind::Config | ErrorKind::Io => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        SignupError::ProviderUnavailable {
            message: message.into(),
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        SignupError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(field: &str, message: impl Into<String>) -> Self {
        SignupError::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SignupError {
    fn from(err: reqwest::Error) -> Self {
        // request URLs carry the API key
        let err = err.without_url();
        let reason = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else if err.is_decode() {
            "response body could not be decoded"
        } else {
            "request failed"
        };
        SignupError::unavailable(format!("{}: {}", reason, err))
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_rejected_displays_message_verbatim() {
        let err = SignupError::ProviderRejected {
            code: 401,
            message: "invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "invalid API key");
        assert_eq!(err.kind(), ErrorKind::ProviderRejected);
    }

    #[test]
    fn test_status_codes() {
        let out_of_range = SignupError::OutOfRange {
            field: "latitude",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(out_of_range.status_code(), 400);
        assert!(out_of_range.is_client_error());

        let outside = SignupError::OutsideRegion {
            country: "United States".to_string(),
        };
        assert_eq!(outside.status_code(), 400);

        assert_eq!(SignupError::unavailable("down").status_code(), 503);
        assert!(!SignupError::unavailable("down").is_client_error());
        assert_eq!(
            SignupError::EmailTaken {
                email: "a@b.io".to_string()
            }
            .status_code(),
            409
        );
        assert_eq!(SignupError::UserNotFound { id: 7 }.status_code(), 404);
    }
}
