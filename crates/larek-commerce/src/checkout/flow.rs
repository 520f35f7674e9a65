//! Checkout flow state machine.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::{Buyer, BuyerField};
use crate::CommerceError;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Cart review.
    #[default]
    Cart,
    /// Payment method and delivery address.
    Delivery,
    /// Email and phone.
    Contacts,
    /// Everything collected, the order can be submitted.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Delivery => "delivery",
            CheckoutStep::Contacts => "contacts",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Delivery => "Delivery",
            CheckoutStep::Contacts => "Contacts",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Delivery => 2,
            CheckoutStep::Contacts => 3,
            CheckoutStep::Complete => 4,
        }
    }

    /// Buyer fields collected at this step.
    pub fn fields(&self) -> &'static [BuyerField] {
        match self {
            CheckoutStep::Delivery => &[BuyerField::Payment, BuyerField::Address],
            CheckoutStep::Contacts => &[BuyerField::Email, BuyerField::Phone],
            CheckoutStep::Cart | CheckoutStep::Complete => &[],
        }
    }

    fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Cart => Some(CheckoutStep::Delivery),
            CheckoutStep::Delivery => Some(CheckoutStep::Contacts),
            CheckoutStep::Contacts => Some(CheckoutStep::Complete),
            CheckoutStep::Complete => None,
        }
    }

    fn prev(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Cart => None,
            CheckoutStep::Delivery => Some(CheckoutStep::Cart),
            CheckoutStep::Contacts => Some(CheckoutStep::Delivery),
            CheckoutStep::Complete => Some(CheckoutStep::Contacts),
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Checkout flow state.
///
/// Only tracks the current step; the data itself lives in [`Cart`] and
/// [`Buyer`], which are passed in whenever a gate has to be checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
}

impl CheckoutFlow {
    /// Create a flow positioned at the cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check the gate for leaving the current step.
    pub fn check(&self, cart: &Cart, buyer: &Buyer) -> Result<(), CommerceError> {
        match self.step {
            CheckoutStep::Cart => {
                if cart.is_empty() {
                    return Err(CommerceError::EmptyCart);
                }
                let unpriced: Vec<_> = cart.unpriced_items().map(|p| p.id.clone()).collect();
                if !unpriced.is_empty() {
                    return Err(CommerceError::NotForSale(unpriced));
                }
                Ok(())
            }
            CheckoutStep::Delivery | CheckoutStep::Contacts => {
                let errors = buyer.validate_step(self.step);
                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(CommerceError::Validation(errors))
                }
            }
            CheckoutStep::Complete => Err(self.no_transition("after")),
        }
    }

    /// Whether [`advance`](Self::advance) would succeed.
    pub fn can_advance(&self, cart: &Cart, buyer: &Buyer) -> bool {
        self.check(cart, buyer).is_ok()
    }

    /// Advance to the next step.
    pub fn advance(&mut self, cart: &Cart, buyer: &Buyer) -> Result<CheckoutStep, CommerceError> {
        self.check(cart, buyer)?;
        let next = self.step.next().ok_or_else(|| self.no_transition("after"))?;
        self.step = next;
        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = self.step.prev().ok_or_else(|| self.no_transition("before"))?;
        self.step = prev;
        Ok(prev)
    }

    /// Return to the cart.
    pub fn reset(&mut self) {
        self.step = CheckoutStep::Cart;
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 4.0) * 100.0) as u8
    }

    fn no_transition(&self, direction: &str) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            direction: direction.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::PaymentMethod;

    fn priced_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::new("1", "Mind Cache", "soft-skill", Some(750.0)));
        cart
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Cart);
        assert!(!flow.is_complete());
        assert_eq!(flow.progress_percent(), 25);
    }

    #[test]
    fn test_empty_cart_blocks_checkout() {
        let mut flow = CheckoutFlow::new();
        let err = flow.advance(&Cart::new(), &Buyer::new()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
        assert_eq!(flow.step(), CheckoutStep::Cart);
    }

    #[test]
    fn test_unpriced_item_blocks_checkout() {
        let mut cart = priced_cart();
        cart.add(Product::new("2", "Priceless", "other", None));

        let mut flow = CheckoutFlow::new();
        match flow.advance(&cart, &Buyer::new()) {
            Err(CommerceError::NotForSale(ids)) => assert_eq!(ids, vec!["2"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_checkout_requires_step_data() {
        let cart = priced_cart();
        let mut buyer = Buyer::new();
        let mut flow = CheckoutFlow::new();

        assert_eq!(flow.advance(&cart, &buyer).unwrap(), CheckoutStep::Delivery);

        // Contacts are not needed yet, but delivery data is.
        buyer.set_email("a@b.com");
        match flow.advance(&cart, &buyer) {
            Err(CommerceError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(BuyerField::Payment));
                assert!(errors.contains(BuyerField::Address));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        buyer.set_payment(PaymentMethod::Card);
        buyer.set_address("Moscow");
        assert!(flow.can_advance(&cart, &buyer));
        assert_eq!(flow.advance(&cart, &buyer).unwrap(), CheckoutStep::Contacts);
        assert_eq!(flow.advance(&cart, &buyer).unwrap(), CheckoutStep::Complete);
        assert!(flow.is_complete());
        assert_eq!(flow.progress_percent(), 100);
    }

    #[test]
    fn test_cannot_advance_past_complete() {
        let cart = priced_cart();
        let mut buyer = Buyer::new();
        buyer.set_payment(PaymentMethod::Cash);
        buyer.set_address("x");
        buyer.set_phone("123");

        let mut flow = CheckoutFlow::new();
        for _ in 0..3 {
            flow.advance(&cart, &buyer).unwrap();
        }
        let err = flow.advance(&cart, &buyer).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCheckoutTransition { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid checkout transition: no step after complete"
        );
    }

    #[test]
    fn test_checkout_go_back_and_reset() {
        let cart = priced_cart();
        let mut flow = CheckoutFlow::new();

        let err = flow.go_back().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid checkout transition: no step before cart"
        );

        flow.advance(&cart, &Buyer::new()).unwrap();
        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Cart);

        flow.advance(&cart, &Buyer::new()).unwrap();
        flow.reset();
        assert_eq!(flow.step(), CheckoutStep::Cart);
    }

    #[test]
    fn test_step_fields() {
        assert_eq!(
            CheckoutStep::Delivery.fields(),
            &[BuyerField::Payment, BuyerField::Address]
        );
        assert!(CheckoutStep::Cart.fields().is_empty());
        assert_eq!(CheckoutStep::Contacts.to_string(), "Contacts");
    }
}
