//! # Application Error Types
//!
//! Errors raised by the app layer and the single error shape handed to the
//! presentation layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  ServiceError (HTTP)  ──┐                                               │
//! │  ConfigError          ──┼──► ApiError { code, message, fields } ──► UI  │
//! │  CoreError (domain)   ──┘                                               │
//! │                                                                         │
//! │  • Validation errors carry one entry per failing field (inline)         │
//! │  • Fetch / upload failures become a toast; stores keep last good state  │
//! │  • Nothing here is fatal: every error is recoverable by the user        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! What the presentation layer receives when a command fails:
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "1 field(s) failed validation",
//!   "fields": [{ "field": "email", "message": "email has invalid format: Invalid email format" }]
//! }
//! ```

use serde::Serialize;
use shopfront_core::{CoreError, FormErrors, ValidationError};
use thiserror::Error;

// =============================================================================
// Service Error
// =============================================================================

/// Failures of the external HTTP services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure (DNS, TLS, timeout, connection reset).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The body did not match the expected shape.
    #[error("Unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The upload service accepted the files but returned no location.
    #[error("Upload returned no file location")]
    EmptyUpload,
}

/// Result type alias for service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Error
// =============================================================================

/// Error codes for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed; `fields` says where.
    ValidationError,

    /// Catalog could not be loaded.
    FetchFailed,

    /// Avatar upload failed.
    UploadFailed,

    /// Account creation failed.
    RegistrationFailed,

    /// A domain rule refused the operation (e.g. checkout transition).
    BusinessLogic,

    /// Configuration could not be loaded.
    ConfigError,

    /// Anything else.
    Internal,
}

/// One inline form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for FieldMessage {
    fn from(err: &ValidationError) -> Self {
        FieldMessage {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages for form validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldMessage>,
}

/// Result type alias for commands.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Catalog fetch failure. Detail goes to the log, not to the shopper.
    pub fn fetch(err: &ServiceError) -> Self {
        tracing::error!(error = %err, "Catalog fetch failed");
        ApiError::new(ErrorCode::FetchFailed, "Could not load products")
    }

    pub fn upload(err: &ServiceError) -> Self {
        tracing::error!(error = %err, "Avatar upload failed");
        ApiError::new(ErrorCode::UploadFailed, "Could not upload the avatar")
    }

    pub fn registration(err: &ServiceError) -> Self {
        tracing::error!(error = %err, "Account creation failed");
        ApiError::new(ErrorCode::RegistrationFailed, "Could not create the account")
    }

    /// Message shown inline next to `field`, if any.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            fields: vec![FieldMessage::from(&err)],
        }
    }
}

impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            fields: errors.0.iter().map(FieldMessage::from).collect(),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::Form(errors) => ApiError::from(errors),
            CoreError::UnknownStep(_) => ApiError::validation(err.to_string()),
            CoreError::InvalidStepTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "Configuration error");
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::CheckoutStage;

    #[test]
    fn test_form_errors_keep_field_messages() {
        let errors = FormErrors(vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::Required {
                field: "avatar".to_string(),
            },
        ]);
        let api = ApiError::from(CoreError::Form(errors));

        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(api.field_message("name"), Some("name is required"));
        assert_eq!(api.field_message("avatar"), Some("avatar is required"));
        assert_eq!(api.field_message("email"), None);
    }

    #[test]
    fn test_transition_error_is_business_logic() {
        let api = ApiError::from(CoreError::InvalidStepTransition {
            from: CheckoutStage::Shipping,
            to: CheckoutStage::Complete,
        });
        assert_eq!(api.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ServiceError::Status {
            method: "GET",
            url: "https://api.test/products".to_string(),
            status: 503,
        };
        let json = serde_json::to_value(ApiError::fetch(&err)).unwrap();

        assert_eq!(json["code"], "FETCH_FAILED");
        assert_eq!(json["message"], "Could not load products");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_status_error_message() {
        let err = ServiceError::Status {
            method: "POST",
            url: "https://api.test/users".to_string(),
            status: 400,
        };
        assert_eq!(
            err.to_string(),
            "POST https://api.test/users returned HTTP 400"
        );
    }
}
