//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                      │
//! │  ├── CoreError        - Domain rule violations                          │
//! │  ├── FormErrors       - Every failing field of one form submission      │
//! │  └── ValidationError  - One input validation failure                    │
//! │                                                                         │
//! │  storefront app errors (separate crate)                                 │
//! │  ├── ServiceError     - HTTP wrapper failures                           │
//! │  └── ApiError         - What the presentation layer sees                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::checkout::CheckoutStage;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A checkout step ordinal outside the wizard.
    #[error("Unknown checkout step: {0}")]
    UnknownStep(u8),

    /// The transition table does not allow moving between these stages.
    ///
    /// Only raised by the checked transitions (`transition_to`, `advance`,
    /// `back`). `set_step` never produces it.
    #[error("Cannot move checkout from {from:?} to {to:?}")]
    InvalidStepTransition {
        from: CheckoutStage,
        to: CheckoutStage,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A whole form failed validation.
    #[error(transparent)]
    Form(#[from] FormErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed email, non-numeric page).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// All field errors collected from one form submission.
///
/// Forms report every failing field at once so each input can show its own
/// message; a non-empty `FormErrors` blocks submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FormErrors(pub Vec<ValidationError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    /// First error reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
