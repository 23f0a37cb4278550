//! Product catalog service.
//!
//! Wire format of `GET /products`:
//! ```json
//! [{
//!   "id": 4,
//!   "title": "Handmade Fresh Table",
//!   "price": 687,
//!   "description": "Andy shoes are designed to keeping in...",
//!   "images": ["https://placeimg.com/640/480/any"],
//!   "category": { "id": 5, "name": "Others", "image": "https://placeimg.com/640/480/any" }
//! }]
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use shopfront_core::{Category, CategoryId, Money, Product, ProductId};
use tracing::info;

use super::http::ApiClient;
use crate::error::{ServiceError, ServiceResult};

/// Source of the product catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetches every product, in the order the service returns them.
    async fn fetch_products(&self) -> ServiceResult<Vec<Product>>;
}

#[async_trait]
impl CatalogService for ApiClient {
    async fn fetch_products(&self) -> ServiceResult<Vec<Product>> {
        let url = self.url("/products");
        let dtos: Vec<ProductDto> = self.send_json("GET", &url, self.http().get(&url)).await?;

        let products = dtos
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| ServiceError::Decode {
                url: url.clone(),
                reason,
            })?;

        info!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}

// =============================================================================
// Wire DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
struct CategoryDto {
    id: CategoryId,
    name: String,
    #[serde(default)]
    image: String,
}

#[derive(Debug, Deserialize)]
struct ProductDto {
    id: ProductId,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    images: Vec<String>,
    category: CategoryDto,
}

impl TryFrom<ProductDto> for Product {
    type Error = String;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let price = price_to_money(dto.price)
            .ok_or_else(|| format!("product {} has invalid price {}", dto.id, dto.price))?;

        Ok(Product {
            id: dto.id,
            name: dto.title,
            price,
            description: dto.description,
            category: Category {
                id: dto.category.id,
                name: dto.category.name,
                image: dto.category.image,
            },
            images: dto.images.iter().filter_map(|raw| clean_image_url(raw)).collect(),
        })
    }
}

/// Decimal dollars to cents; `None` for negative or non-finite values.
fn price_to_money(price: f64) -> Option<Money> {
    if !price.is_finite() || price < 0.0 || price > (i64::MAX / 100) as f64 {
        return None;
    }
    Some(Money::from_cents((price * 100.0).round() as i64))
}

/// Some image entries arrive JSON-encoded, e.g. `["https://..."]` as one string.
fn clean_image_url(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_matches(|c| c == '[' || c == ']' || c == '"').trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
