//! Storefront data layer for the web-larek shop.
//!
//! - **Catalog**: products as served by the API, plus the product open for
//!   detail display
//! - **Cart**: distinct products picked for purchase
//! - **Checkout**: buyer form with validation, the step-by-step checkout
//!   flow, and orders
//! - **Gateway**: typed access to `GET /product/` and `POST /order/`
//!
//! # Example
//!
//! ```rust,ignore
//! use larek_commerce::prelude::*;
//! use larek_data::RestApi;
//!
//! let mut store = Storefront::new(RestApi::new("https://larek-api.nomoreparties.co/api/weblarek"));
//! store.load_catalog().await?;
//!
//! store.add_to_cart(&ProductId::new("854cef69-976d-4c2a-a18c-2aa45046c390"));
//!
//! let buyer = store.buyer_mut();
//! buyer.set_payment(PaymentMethod::Card);
//! buyer.set_address("Moscow, Lenina 1");
//! buyer.set_email("shopper@example.com");
//!
//! let confirmation = store.place_order().await?;
//! println!("Order {} for {}", confirmation.id, confirmation.total);
//! ```

pub mod api;
pub mod error;
pub mod ids;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod storefront;

pub use api::LarekApi;
pub use error::CommerceError;
pub use ids::*;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{LarekApi, ProductList};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::Cart;

    // Checkout
    pub use crate::checkout::{
        Buyer, BuyerData, BuyerField, CheckoutFlow, CheckoutStep, Order, OrderConfirmation,
        PaymentMethod, ValidationErrors,
    };
}
