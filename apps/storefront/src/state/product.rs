//! # Product State
//!
//! The fetched catalog and the price order applied to it.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    fetch_all_products                                   │
//! │                                                                         │
//! │   in_flight += 1 (guard)                                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   service.fetch_products().await      ◄── no lock held here             │
//! │        │                                                                │
//! │        ├── Ok(products) ──► catalog.replace(products)                   │
//! │        │                    (recorded sort order re-applied)            │
//! │        │                    last_error = None, fetched_at = now         │
//! │        │                                                                │
//! │        ├── Err(e) ────────► catalog untouched, last_error = e           │
//! │        │                                                                │
//! │        └── future dropped ► catalog untouched                           │
//! │                                                                         │
//! │   in_flight -= 1 (guard drop, on every path)                            │
//! │                                                                         │
//! │   Overlapping fetches are not coalesced: the last one to complete wins. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use shopfront_core::view::product_page;
use shopfront_core::{
    Catalog, Category, CategoryFilter, Pagination, Product, ProductPage, SortDirection,
};
use tracing::{debug, info, warn};

use crate::error::ServiceResult;
use crate::services::CatalogService;

/// Everything the product store tracks.
#[derive(Debug, Default)]
pub struct ProductState {
    pub catalog: Catalog,
    /// Fetches started and not yet finished or dropped.
    pub in_flight: usize,
    /// Message of the most recent failed fetch, cleared by a successful one.
    pub last_error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Shared product store. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    state: Arc<Mutex<ProductState>>,
}

/// Keeps `in_flight` honest when a fetch future is dropped mid-flight.
struct PendingFetch {
    store: ProductStore,
}

impl PendingFetch {
    fn start(store: &ProductStore) -> Self {
        store.with_state_mut(|state| state.in_flight += 1);
        PendingFetch {
            store: store.clone(),
        }
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        self.store
            .with_state_mut(|state| state.in_flight = state.in_flight.saturating_sub(1));
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the store.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductState) -> R,
    {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Executes a function with write access to the store.
    pub fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductState) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// Read access to the catalog alone.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        self.with_state(|state| f(&state.catalog))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces the catalog with whatever `service` returns.
    ///
    /// Returns the number of products stored. On failure the previous catalog
    /// is kept and the error is both recorded and returned.
    pub async fn fetch_all_products(&self, service: &dyn CatalogService) -> ServiceResult<usize> {
        let _pending = PendingFetch::start(self);
        debug!("Fetching products");

        let result = service.fetch_products().await;

        self.with_state_mut(|state| match result {
            Ok(products) => {
                let count = products.len();
                state.catalog.replace(products);
                state.last_error = None;
                state.fetched_at = Some(Utc::now());
                info!(count, sort = ?state.catalog.sort_order(), "Product catalog replaced");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Product fetch failed, keeping previous catalog");
                state.last_error = Some(e.to_string());
                Err(e)
            }
        })
    }

    /// Orders the catalog by price and remembers the order for later fetches.
    pub fn sort_products_by_price(&self, direction: SortDirection) {
        self.with_state_mut(|state| {
            state.catalog.sort_by_price(direction);
            debug!(%direction, count = state.catalog.len(), "Catalog sorted by price");
        });
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the displayed catalog.
    pub fn products(&self) -> Vec<Product> {
        self.with_catalog(|catalog| catalog.products().to_vec())
    }

    pub fn len(&self) -> usize {
        self.with_catalog(Catalog::len)
    }

    pub fn is_empty(&self) -> bool {
        self.with_catalog(Catalog::is_empty)
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(|state| state.in_flight > 0)
    }

    pub fn last_error(&self) -> Option<String> {
        self.with_state(|state| state.last_error.clone())
    }

    pub fn sort_order(&self) -> Option<SortDirection> {
        self.with_catalog(Catalog::sort_order)
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.with_state(|state| state.fetched_at)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        self.with_catalog(|catalog| catalog.categories().into_iter().cloned().collect())
    }

    /// One page of the displayed catalog after the category filter.
    pub fn page(&self, filter: &CategoryFilter, pagination: Pagination) -> ProductPage {
        self.with_catalog(|catalog| product_page(catalog.products(), filter, pagination))
    }
}
