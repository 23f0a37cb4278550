//! # Services Module
//!
//! The storefront's outside world, each behind a trait so stores and
//! commands can be exercised with in-memory fakes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Service Seams                                        │
//! │                                                                         │
//! │  Trait              HTTP / local implementation    Endpoint             │
//! │  ─────              ───────────────────────────    ────────             │
//! │  CatalogService     ApiClient                      GET  /products       │
//! │  FileUploader       ApiClient                      POST /files/upload   │
//! │  UserDirectory      ApiClient                      POST /users          │
//! │  Notifier           TracingNotifier                (toast → log)        │
//! │  Navigator          RouteHistory                   (in-memory history)  │
//! │                                                                         │
//! │  Every HTTP call carries an X-Request-Id header (UUID v4).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod http;
mod navigation;
mod notify;
mod upload;
mod users;

pub use catalog::CatalogService;
pub use http::{ApiClient, REQUEST_ID_HEADER};
pub use navigation::{Navigator, RouteHistory};
pub use notify::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use upload::FileUploader;
pub use users::UserDirectory;

#[cfg(test)]
pub(crate) mod testing;
