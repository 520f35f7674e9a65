//! Cart of products chosen for purchase.

use crate::catalog::Product;
use crate::ids::ProductId;

/// A shopping cart.
///
/// Holds each product at most once, in the order it was added. There is no
/// per-item quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// Returns `false` without changing the cart if a product with the same
    /// id is already in it.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove the product with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|p| &p.id != id);
        self.items.len() < len_before
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is in the cart afterwards.
    pub fn toggle(&mut self, product: Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Ids of the items, in insertion order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    /// Items that have no price.
    pub fn unpriced_items(&self) -> impl Iterator<Item = &Product> {
        self.items.iter().filter(|p| !p.is_for_sale())
    }

    /// Number of distinct items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of item prices; priceless items count as zero.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::price_or_zero).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
