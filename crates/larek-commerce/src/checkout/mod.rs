//! Checkout module.
//!
//! Contains the buyer form model, its validation, the checkout step flow, and
//! the order payload.

mod buyer;
mod flow;
mod order;
mod validation;

pub use buyer::{Buyer, BuyerData, PaymentMethod};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{Order, OrderConfirmation};
pub use validation::{BuyerField, ValidationErrors};
