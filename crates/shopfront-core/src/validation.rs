//! # Validation Module
//!
//! Input validation for forms and view parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                  │
//! │  └── Immediate per-keystroke feedback                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Per-field rules (required, email shape)                            │
//! │  └── View parameters (page >= 1, numeric text)                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API                                                   │
//! │  └── Uniqueness, account policy                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{FormErrors, ValidationError};
use crate::types::RegistrationForm;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address as typed, without trimming.
///
/// ## Rules
/// - Must not be empty
/// - No whitespace anywhere, including leading or trailing
/// - Some `@` with text before it, then a `.` after it with text on both
///   sides (`local@domain.tld`; the local part may itself contain `@`)
///
/// ```rust
/// use shopfront_core::validation::validate_email;
///
/// assert!(validate_email("ada@example.com").is_ok());
/// assert!(validate_email("ada@example").is_err());
/// assert!(validate_email("ada@example.com ").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "Invalid email format".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    // The first '@' past index 0 leaves the most room for the domain.
    let at = email
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '@')
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;

    let domain = &email[at + 1..];
    let has_dotted_domain = domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len());
    if !has_dotted_domain {
        return Err(invalid());
    }

    Ok(())
}

/// Validates the registration dialog and collects every failing field.
///
/// ## Rules
/// - `email`: required, email shape
/// - `name`: required
/// - `password`: required
/// - `avatar`: at least one file selected
pub fn validate_registration(form: &RegistrationForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if let Err(e) = validate_email(&form.email) {
        errors.push(e);
    }
    if let Err(e) = validate_required("name", &form.name) {
        errors.push(e);
    }
    if form.password.is_empty() {
        errors.push(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    if form.avatar_files.is_empty() {
        errors.push(ValidationError::Required {
            field: "avatar".to_string(),
        });
    }

    errors.into_result()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a 1-based page number.
///
/// Page 0 is rejected, not clamped.
pub fn validate_page(page: u32) -> ValidationResult<()> {
    if page < 1 {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}

/// Parses a non-negative integer from text input (query strings, form fields).
pub fn parse_u32(field: &str, raw: &str) -> ValidationResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("expected a whole number, got '{}'", raw.trim()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AvatarFile;

    fn avatar() -> AvatarFile {
        AvatarFile {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@mail.com").is_ok());
        assert!(validate_email("a.b@c.d.e").is_ok());

        assert!(matches!(
            validate_email(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_email("john").is_err());
        assert!(validate_email("@mail.com").is_err());
        assert!(validate_email("john@.com").is_err());
        assert!(validate_email("john@mail.").is_err());
        assert!(validate_email("jo hn@mail.com").is_err());
        assert!(validate_email("ada@x.com ").is_err());
        assert!(validate_email(" ada@x.com").is_err());
        assert!(validate_email("@a@b.c").is_ok());
        assert!(validate_email("a@@b.c").is_ok());
        assert!(validate_email("a@b@.c").is_ok());
        assert!(validate_email("a@.c").is_err());
    }

    #[test]
    fn test_validate_registration_collects_all_fields() {
        let errors = validate_registration(&RegistrationForm::default()).unwrap_err();

        assert_eq!(errors.0.len(), 4);
        for field in ["email", "name", "password", "avatar"] {
            assert!(errors.for_field(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn test_validate_registration_ok() {
        let form = RegistrationForm {
            email: "john@mail.com".to_string(),
            name: "John".to_string(),
            password: "changeme".to_string(),
            avatar_files: vec![avatar()],
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let form = RegistrationForm {
            email: "not-an-email".to_string(),
            name: "John".to_string(),
            password: "changeme".to_string(),
            avatar_files: vec![avatar()],
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert!(matches!(
            errors.for_field("email"),
            Some(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(u32::MAX).is_ok());
        assert!(validate_page(0).is_err());
    }

    #[test]
    fn test_parse_u32() {
        assert_eq!(parse_u32("page", " 3 ").unwrap(), 3);
        assert!(parse_u32("page", "2.5").is_err());
        assert!(parse_u32("page", "-1").is_err());
        assert!(parse_u32("limit", "ten").is_err());
    }
}
