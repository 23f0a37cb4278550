//! # Domain Types
//!
//! Core records used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  price (Money)  │   │  image          │   │  email          │       │
//! │  │  images         │   └─────────────────┘   │  avatar         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────┐        │
//! │  │  SortDirection  │   │  RegistrationForm ──► UserRegister   │        │
//! │  │  Asc | Desc     │   │  (form input)         (API payload)  │        │
//! │  └─────────────────┘   └──────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are immutable once fetched. Reordering the catalog moves whole
//! records around; it never edits one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{FormErrors, ValidationError};
use crate::money::Money;

pub type ProductId = i64;
pub type CategoryId = i64;
pub type UserId = i64;

// =============================================================================
// Category
// =============================================================================

/// A product category. Referenced by products, not managed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Category artwork URL (may be empty).
    #[serde(default)]
    pub image: String,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Image URLs; the first one is the card image.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Image shown on the product card.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// =============================================================================
// Sort Direction
// =============================================================================

/// Direction for ordering the catalog by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!("expected 'asc' or 'desc', got '{}'", other),
            }),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Stored location of the avatar image.
    pub avatar: String,
}

/// Account creation payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

impl fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegister")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("avatar", &self.avatar)
            .finish()
    }
}

// =============================================================================
// Registration Form
// =============================================================================

/// A file picked in the registration dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Raw input of the registration dialog.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub name: String,
    pub password: String,
    pub avatar_files: Vec<AvatarFile>,
}

impl RegistrationForm {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), FormErrors> {
        crate::validation::validate_registration(self)
    }

    /// Builds the API payload once the avatar has been stored.
    pub fn into_register(self, avatar: String) -> UserRegister {
        UserRegister {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            avatar,
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("avatar_files", &self.avatar_files.len())
            .finish()
    }
}
