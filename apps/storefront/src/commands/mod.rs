//! # Commands Module
//!
//! Everything the presentation layer can ask the storefront to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Product list: fetch, sort, filter, page
//! ├── header.rs    ◄─── Header model, logout, theme switch
//! ├── register.rs  ◄─── Registration dialog submit
//! └── checkout.rs  ◄─── Checkout wizard steps and field groups
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event ──► command(stores..., services..., args)                     │
//! │                   │                                                     │
//! │                   ├── validate input (shopfront-core)                   │
//! │                   ├── call services (await, no lock held)               │
//! │                   ├── mutate stores (with_*_mut, atomic)                │
//! │                   └── return response DTO or ApiError (serde → JSON)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the stores and services it needs.

pub mod checkout;
pub mod header;
pub mod product;
pub mod register;
