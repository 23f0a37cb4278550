//! # State Module
//!
//! The storefront's stores. Each one owns a single concern behind its own
//! lock, so commands declare exactly what they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ ProductStore │  │ SessionStore │  │CheckoutStore │  │ ThemeState │  │
//! │  │              │  │              │  │              │  │            │  │
//! │  │  Catalog     │  │  Option<User>│  │CheckoutState │  │ ThemeMode  │  │
//! │  │  in_flight   │  │  logged_in_at│  │              │  │            │  │
//! │  │  last_error  │  │              │  │              │  │            │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Every store is Arc<Mutex<T>>; clones share the same state           │
//! │  • with_*/with_*_mut run a closure under the lock (atomic mutation)    │
//! │  • No lock is held across an .await                                    │
//! │  • A poisoned lock is recovered: every mutation leaves valid state     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod checkout;
mod product;
mod session;
mod theme;

pub use checkout::CheckoutStore;
pub use product::{ProductState, ProductStore};
pub use session::{Session, SessionStore};
pub use theme::ThemeState;
