//! Order types.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{Buyer, PaymentMethod};
use crate::ids::{OrderId, ProductId};
use crate::CommerceError;

/// An order as submitted to `POST /order/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub payment: PaymentMethod,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Product ids in cart order.
    pub items: Vec<ProductId>,
    pub total: f64,
}

impl Order {
    /// Build an order from the cart and the buyer form.
    ///
    /// Refuses an empty cart, a cart holding products that are not for sale,
    /// and an incomplete buyer form, in that order.
    pub fn compose(cart: &Cart, buyer: &Buyer) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let unpriced: Vec<ProductId> = cart.unpriced_items().map(|p| p.id.clone()).collect();
        if !unpriced.is_empty() {
            return Err(CommerceError::NotForSale(unpriced));
        }

        let errors = buyer.validate();
        let payment = match buyer.payment() {
            Some(payment) if errors.is_empty() => payment,
            _ => return Err(CommerceError::Validation(errors)),
        };

        Ok(Self {
            payment,
            email: buyer.email().trim().to_string(),
            phone: buyer.phone().trim().to_string(),
            address: buyer.address().trim().to_string(),
            items: cart.product_ids(),
            total: cart.total(),
        })
    }
}

/// Server acknowledgement of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub total: f64,
}
