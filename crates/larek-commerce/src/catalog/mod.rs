//! Product catalog module.
//!
//! Contains the product type and the in-memory catalog model.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
