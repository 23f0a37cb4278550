//! # Catalog
//!
//! The fetched product list together with the price order the shopper
//! picked.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetched (as the service returned it)      order (None | Asc | Desc)    │
//! │            │                                        │                   │
//! │            └──────────────► stable sort ◄───────────┘                   │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                        products()  (what views read)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The displayed list is always recomputed from `fetched` and `order`, never
//! from the previous displayed list. Two consequences:
//! - products with equal prices stay in fetch order whatever sequence of
//!   sorts was applied;
//! - sorting before the first fetch completes is not lost, the order is
//!   applied as soon as products arrive.

use crate::types::{Category, Product, SortDirection};

/// Fetched products plus the current price order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    fetched: Vec<Product>,
    order: Option<SortDirection>,
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog with no order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fetched products, keeping the current order.
    pub fn replace(&mut self, fetched: Vec<Product>) {
        self.fetched = fetched;
        self.rebuild();
    }

    /// Orders the catalog by price.
    pub fn sort_by_price(&mut self, direction: SortDirection) {
        self.order = Some(direction);
        self.rebuild();
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products exactly as the service returned them.
    pub fn fetched(&self) -> &[Product] {
        &self.fetched
    }

    pub fn sort_order(&self) -> Option<SortDirection> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order, for a category selector.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for product in &self.fetched {
            if !seen.iter().any(|c| c.id == product.category.id) {
                seen.push(&product.category);
            }
        }
        seen
    }

    fn rebuild(&mut self) {
        self.products = match self.order {
            Some(direction) => sorted_by_price(&self.fetched, direction),
            None => self.fetched.clone(),
        };
    }
}

/// Returns the products ordered by price; equal prices keep their input order.
pub fn sorted_by_price(products: &[Product], direction: SortDirection) -> Vec<Product> {
    let mut sorted = products.to_vec();
    // slice::sort_by is a stable sort
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortDirection::Desc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, price_cents: i64, category_id: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: String::new(),
            category: Category {
                id: category_id,
                name: format!("Category {}", category_id),
                image: String::new(),
            },
            images: Vec::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_unsorted_catalog_keeps_fetch_order() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 30, 1), product(2, 10, 2)]);
        assert_eq!(ids(catalog.products()), vec![1, 2]);
        assert_eq!(catalog.sort_order(), None);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![
            product(1, 30, 1),
            product(2, 10, 2),
            product(3, 10, 1),
            product(4, 20, 1),
            product(5, 10, 2),
        ]);

        catalog.sort_by_price(SortDirection::Asc);
        assert_eq!(ids(catalog.products()), vec![2, 3, 5, 4, 1]);

        catalog.sort_by_price(SortDirection::Desc);
        assert_eq!(ids(catalog.products()), vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_desc_reverses_asc_for_distinct_prices() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![
            product(1, 500, 1),
            product(2, 100, 1),
            product(3, 300, 2),
            product(4, 200, 2),
        ]);

        catalog.sort_by_price(SortDirection::Asc);
        let mut ascending = ids(catalog.products());
        catalog.sort_by_price(SortDirection::Desc);
        ascending.reverse();

        assert_eq!(ids(catalog.products()), ascending);
    }

    #[test]
    fn test_sort_before_fetch_applies_on_arrival() {
        let mut catalog = Catalog::new();
        catalog.sort_by_price(SortDirection::Asc);
        assert!(catalog.is_empty());

        catalog.replace(vec![product(1, 30, 1), product(2, 10, 2)]);
        assert_eq!(ids(catalog.products()), vec![2, 1]);
        assert_eq!(ids(catalog.fetched()), vec![1, 2]);
    }

    #[test]
    fn test_sorting_does_not_edit_records() {
        let fetched = vec![product(1, 30, 1), product(2, 10, 2)];
        let mut catalog = Catalog::new();
        catalog.replace(fetched.clone());
        catalog.sort_by_price(SortDirection::Desc);

        for p in catalog.products() {
            assert!(fetched.contains(p));
        }
    }

    #[test]
    fn test_categories_distinct_in_first_seen_order() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product(1, 1, 7), product(2, 1, 3), product(3, 1, 7)]);

        let categories: Vec<i64> = catalog.categories().iter().map(|c| c.id).collect();
        assert_eq!(categories, vec![7, 3]);
    }
}
