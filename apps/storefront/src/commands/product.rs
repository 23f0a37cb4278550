//! # Product Commands
//!
//! The product list screen: load, sort, filter by category, and page.
//!
//! ## Product List Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product List Screen                                  │
//! │                                                                         │
//! │  mount ──► load_product_list() ──► fetch_all_products                   │
//! │                                    + configured default sort            │
//! │                                                                         │
//! │  [Price ▲▼] ──► sort_products("asc" | "desc")     (store-wide)          │
//! │                                                                         │
//! │  [Category ▾] [< 1 2 3 >] ──► get_product_page(filter, page, limit)     │
//! │                               (view-local, pure, nothing stored)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{Category, CategoryFilter, Pagination, ProductPage, SortDirection};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::services::{CatalogService, Notification, Notifier};
use crate::state::ProductStore;

/// Toast shown when the catalog cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Could not load products. Please try again.";

/// What the product list renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub page: ProductPage,
    pub categories: Vec<Category>,
    pub sort: Option<SortDirection>,
    pub loading: bool,
}

/// Fetches the catalog and applies `default_sort` if no order is set yet.
///
/// ## Returns
/// Number of products loaded. On failure the previous catalog stays and an
/// error toast is sent.
pub async fn load_product_list(
    products: &ProductStore,
    catalog: &dyn CatalogService,
    notifier: &dyn Notifier,
    default_sort: Option<SortDirection>,
) -> ApiResult<usize> {
    debug!("load_product_list command");

    if let (Some(direction), None) = (default_sort, products.sort_order()) {
        products.sort_products_by_price(direction);
    }

    products.fetch_all_products(catalog).await.map_err(|e| {
        notifier.notify(Notification::error(FETCH_FAILED_MESSAGE));
        ApiError::fetch(&e)
    })
}

/// Orders the whole catalog by price.
///
/// ## Arguments
/// * `direction` - `"asc"` or `"desc"` (case-insensitive)
pub fn sort_products(products: &ProductStore, direction: &str) -> ApiResult<SortDirection> {
    debug!(direction, "sort_products command");
    let direction: SortDirection = direction.parse()?;
    products.sort_products_by_price(direction);
    Ok(direction)
}

/// One page of the catalog for the selected category.
pub fn get_product_page(
    products: &ProductStore,
    filter: CategoryFilter,
    page: u32,
    limit: u32,
) -> ApiResult<ProductListResponse> {
    debug!(%filter, page, limit, "get_product_page command");
    let pagination = Pagination::new(page, limit)?;
    Ok(list_response(products, &filter, pagination))
}

/// Same as [`get_product_page`] with every argument as raw text
/// (e.g. `?category=all&page=2&limit=12`).
pub fn get_product_page_from_query(
    products: &ProductStore,
    category: &str,
    page: &str,
    limit: &str,
) -> ApiResult<ProductListResponse> {
    debug!(category, page, limit, "get_product_page_from_query command");
    let filter: CategoryFilter = category.parse()?;
    let pagination = Pagination::from_query(page, limit)?;
    Ok(list_response(products, &filter, pagination))
}

fn list_response(
    products: &ProductStore,
    filter: &CategoryFilter,
    pagination: Pagination,
) -> ProductListResponse {
    ProductListResponse {
        page: products.page(filter, pagination),
        categories: products.categories(),
        sort: products.sort_order(),
        loading: products.is_loading(),
    }
}
