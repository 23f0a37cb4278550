//! # shopfront-core: Pure Storefront Logic
//!
//! This crate holds everything the storefront computes, as plain data and
//! pure functions. The application crate owns the state containers and the
//! network; this crate only decides what the state means.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (web frontend)                  │   │
//! │  │    Header ──► Product List ──► Register Dialog ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            apps/storefront (stores, services, commands)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   types    catalog    view     checkout   theme   navigation    │   │
//! │  │   money    error      validation                                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Product, Category, User, ...)
//! - [`money`] - Integer money
//! - [`catalog`] - Fetched catalog plus price ordering
//! - [`view`] - Category filter and pagination window
//! - [`checkout`] - Checkout wizard stages and field groups
//! - [`theme`] - Light/dark palettes
//! - [`navigation`] - Routes and the header model
//! - [`validation`] - Form and input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::view::{product_page, CategoryFilter, Pagination};
//!
//! let page = product_page(&[], &CategoryFilter::All, Pagination::new(1, 12).unwrap());
//! assert!(page.items.is_empty());
//! assert_eq!(page.page_count, 0);
//! ```

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod navigation;
pub mod theme;
pub mod types;
pub mod validation;
pub mod view;

pub use catalog::Catalog;
pub use checkout::{CheckoutStage, CheckoutState};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use money::Money;
pub use navigation::{HeaderModel, Route};
pub use theme::{ThemeMode, ThemeOptions};
pub use types::*;
pub use view::{CategoryFilter, Pagination, ProductPage};

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 12;
