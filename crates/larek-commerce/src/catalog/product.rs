//! Product type as served by the storefront API.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are never modified after they are fetched. A `price` of `None`
/// marks a product that is shown but not for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Full description.
    pub description: String,
    /// Image path, relative to the content CDN.
    pub image: String,
    /// Display title.
    pub title: String,
    /// Category label (e.g. "софт-скил").
    pub category: String,
    /// Price, or `None` when the product is priceless.
    pub price: Option<f64>,
}

impl Product {
    /// Create a product with an empty description and image.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            image: String::new(),
            title: title.into(),
            category: category.into(),
            price,
        }
    }

    /// Check if the product can be bought.
    pub fn is_for_sale(&self) -> bool {
        self.price.is_some()
    }

    /// Price used in sums: priceless products count as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Resolve the image path against the content CDN base URL.
    pub fn image_url(&self, cdn_url: &str) -> String {
        if self.image.starts_with("http://") || self.image.starts_with("https://") {
            return self.image.clone();
        }
        format!(
            "{}/{}",
            cdn_url.trim_end_matches('/'),
            self.image.trim_start_matches('/')
        )
    }
}
