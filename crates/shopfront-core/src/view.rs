//! # Derived View
//!
//! Category filter and pagination window over the catalog. Everything here is
//! a pure function of its arguments; nothing is stored.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog.products()  ──►  filter_by_category  ──►  paginate  ──► page   │
//! │  (sorted)                 (All | Category(id))     [start, end)         │
//! │                                                                         │
//! │  start = (page - 1) * limit                                             │
//! │  end   = page * limit        clipped to the filtered length             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edge Cases
//! - `limit == 0`: every page is empty
//! - `page == 0`: rejected when building [`Pagination`]
//! - index arithmetic that overflows `usize`: the page is empty

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{CategoryId, Product};
use crate::validation::{parse_u32, validate_page, ValidationResult};

// =============================================================================
// Category Filter
// =============================================================================

/// Which category the product list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products whose category id matches.
    Category(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => product.category.id == *id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<CategoryId>()
            .map(CategoryFilter::Category)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("expected 'all' or a category id, got '{}'", s),
            })
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Builds a window; `page` must be at least 1, `limit` may be 0.
    pub fn new(page: u32, limit: u32) -> ValidationResult<Self> {
        validate_page(page)?;
        Ok(Pagination { page, limit })
    }

    /// Builds a window from text input such as query-string values.
    pub fn from_query(page: &str, limit: &str) -> ValidationResult<Self> {
        Self::new(parse_u32("page", page)?, parse_u32("limit", limit)?)
    }

    /// First page with the given size.
    pub fn first(limit: u32) -> Self {
        Pagination { page: 1, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The `[start, end)` index range, or `None` if it does not fit in `usize`.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        let limit = usize::try_from(self.limit).ok()?;
        let page = usize::try_from(self.page).ok()?;
        let start = (page - 1).checked_mul(limit)?;
        let end = page.checked_mul(limit)?;
        Some((start, end))
    }
}

// =============================================================================
// View Functions
// =============================================================================

/// Keeps the products in the selected category, order preserved.
pub fn filter_by_category<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Returns the `[start, end)` window of `items`, clipped to its length.
pub fn paginate<T>(items: &[T], pagination: Pagination) -> &[T] {
    match pagination.bounds() {
        Some((start, end)) if start < items.len() => &items[start..end.min(items.len())],
        _ => &[],
    }
}

/// One page of the product list plus the numbers a pager needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub page: u32,
    pub limit: u32,
    /// Products left after the category filter, across all pages.
    pub total_filtered: usize,
    /// Number of non-empty pages (0 when `limit` is 0).
    pub page_count: usize,
}

/// Filters by category, then cuts out the requested page.
pub fn product_page(
    products: &[Product],
    filter: &CategoryFilter,
    pagination: Pagination,
) -> ProductPage {
    let filtered = filter_by_category(products, filter);
    let items = paginate(&filtered, pagination)
        .iter()
        .map(|p| (*p).clone())
        .collect();

    let page_count = match pagination.limit() as usize {
        0 => 0,
        limit => filtered.len().div_ceil(limit),
    };

    ProductPage {
        items,
        page: pagination.page(),
        limit: pagination.limit(),
        total_filtered: filtered.len(),
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Category;

    fn product(id: i64, price_cents: i64, category_id: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: String::new(),
            category: Category {
                id: category_id,
                name: String::new(),
                image: String::new(),
            },
            images: Vec::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_then_first_page() {
        // category "a" = 1, "b" = 2
        let products = vec![product(1, 30, 1), product(2, 10, 2), product(3, 10, 1)];

        let filtered = filter_by_category(&products, &CategoryFilter::Category(1));
        assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        let page = product_page(
            &products,
            &CategoryFilter::Category(1),
            Pagination::new(1, 1).unwrap(),
        );
        assert_eq!(ids(&page.items), vec![1]);
        assert_eq!(page.total_filtered, 2);
        assert_eq!(page.page_count, 2);
    }

    #[test]
    fn test_all_keeps_everything() {
        let products = vec![product(1, 30, 1), product(2, 10, 2)];
        let page = product_page(&products, &CategoryFilter::All, Pagination::first(10));
        assert_eq!(ids(&page.items), vec![1, 2]);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_zero_limit_is_always_empty() {
        let products: Vec<Product> = (1..=5).map(|i| product(i, 100, 1)).collect();
        for page in [1, 2, 100, u32::MAX] {
            let p = Pagination::new(page, 0).unwrap();
            assert!(paginate(&products, p).is_empty());
            let view = product_page(&products, &CategoryFilter::All, p);
            assert!(view.items.is_empty());
            assert_eq!(view.page_count, 0);
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(matches!(
            Pagination::new(0, 10),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_query() {
        let p = Pagination::from_query("2", "12").unwrap();
        assert_eq!((p.page(), p.limit()), (2, 12));
        assert!(Pagination::from_query("1.5", "12").is_err());
        assert!(Pagination::from_query("0", "12").is_err());
        assert!(Pagination::from_query("1", "-3").is_err());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = [1, 2, 3];
        let p = Pagination::new(u32::MAX, u32::MAX).unwrap();
        assert!(paginate(&items, p).is_empty());
    }

    #[test]
    fn test_window_is_contiguous_bounded_and_clipped() {
        let items: Vec<u32> = (0..23).collect();
        for limit in 1..=8u32 {
            for page in 1..=10u32 {
                let window = paginate(&items, Pagination::new(page, limit).unwrap());
                let start = ((page - 1) * limit) as usize;

                assert!(window.len() <= limit as usize);
                if start >= items.len() {
                    assert!(window.is_empty());
                } else {
                    assert_eq!(window, &items[start..start + window.len()]);
                    assert_eq!(window.len(), (limit as usize).min(items.len() - start));
                }
            }
        }
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("4".parse::<CategoryFilter>().unwrap(), CategoryFilter::Category(4));
        assert!("shoes".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Category(4).to_string(), "4");
    }
}
