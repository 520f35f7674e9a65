//! A single shopper session over the storefront API.

use larek_data::Api;
use tracing::{debug, info, instrument, warn};

use crate::api::LarekApi;
use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::checkout::{Buyer, CheckoutFlow, CheckoutStep, Order, OrderConfirmation};
use crate::ids::ProductId;
use crate::CommerceError;

/// Catalog, cart, buyer form and checkout position for one shopper, plus the
/// gateway they are loaded from and submitted to.
#[derive(Debug)]
pub struct Storefront<A> {
    api: LarekApi<A>,
    catalog: Catalog,
    cart: Cart,
    buyer: Buyer,
    flow: CheckoutFlow,
}

impl<A: Api> Storefront<A> {
    /// Start an empty session.
    pub fn new(api: A) -> Self {
        Self {
            api: LarekApi::new(api),
            catalog: Catalog::new(),
            cart: Cart::new(),
            buyer: Buyer::new(),
            flow: CheckoutFlow::new(),
        }
    }

    pub fn api(&self) -> &LarekApi<A> {
        &self.api
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn buyer(&self) -> &Buyer {
        &self.buyer
    }

    pub fn buyer_mut(&mut self) -> &mut Buyer {
        &mut self.buyer
    }

    pub fn flow(&self) -> &CheckoutFlow {
        &self.flow
    }

    /// Fetch the catalog and replace the local copy.
    ///
    /// On failure the catalog is left empty and the error is returned.
    #[instrument(skip(self))]
    pub async fn load_catalog(&mut self) -> Result<&[Product], CommerceError> {
        match self.api.fetch_catalog().await {
            Ok(products) => {
                self.catalog.replace_all(products);
                Ok(self.catalog.all())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load catalog");
                self.catalog.clear();
                Err(e)
            }
        }
    }

    /// Put the catalog product with `id` into the cart.
    ///
    /// Returns `false` when the id is unknown or already in the cart.
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        match self.catalog.find_by_id(id) {
            Some(product) => {
                let added = self.cart.add(product.clone());
                debug!(product_id = %id, added, "Add to cart");
                added
            }
            None => {
                debug!(product_id = %id, "Unknown product");
                false
            }
        }
    }

    /// Remove `id` from the cart.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    /// Move the checkout one step forward.
    pub fn advance_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        let step = self.flow.advance(&self.cart, &self.buyer)?;
        debug!(step = step.as_str(), "Checkout advanced");
        Ok(step)
    }

    /// Move the checkout one step back.
    pub fn back_checkout(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.flow.go_back()
    }

    /// Compose and submit the order.
    ///
    /// On success the cart and buyer are cleared and the checkout returns to
    /// the cart. On failure nothing is changed, so the order can be retried.
    #[instrument(skip(self), fields(items = self.cart.count()))]
    pub async fn place_order(&mut self) -> Result<OrderConfirmation, CommerceError> {
        let order = Order::compose(&self.cart, &self.buyer)?;

        match self.api.submit_order(&order).await {
            Ok(confirmation) => {
                info!(order_id = %confirmation.id, total = confirmation.total, "Order confirmed");
                self.cart.clear();
                self.buyer.clear();
                self.flow.reset();
                Ok(confirmation)
            }
            Err(e) => {
                warn!(error = %e, "Order submission failed");
                Err(e)
            }
        }
    }
}
