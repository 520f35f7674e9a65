//! Buyer checkout form model.

use serde::{Deserialize, Serialize};

use crate::checkout::{BuyerField, CheckoutStep, ValidationErrors};

/// How the buyer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Online, by card.
    Card,
    /// Cash on delivery.
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Online",
            PaymentMethod::Cash => "On delivery",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "card" => Some(PaymentMethod::Card),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

/// Snapshot of the buyer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerData {
    pub payment: Option<PaymentMethod>,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// The checkout form data for the current session.
///
/// Setters never validate. Call [`Buyer::validate`] (or the per-step variant)
/// before moving on; it returns every problem as data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buyer {
    payment: Option<PaymentMethod>,
    address: String,
    email: String,
    phone: String,
}

impl Buyer {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment(&mut self, payment: impl Into<Option<PaymentMethod>>) {
        self.payment = payment.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Copy of all fields.
    pub fn data(&self) -> BuyerData {
        BuyerData {
            payment: self.payment,
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Validate the whole form.
    ///
    /// Email and phone are reported together: either one satisfies the
    /// contact requirement.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.payment.is_none() {
            errors.add(BuyerField::Payment);
        }

        if is_blank(&self.address) {
            errors.add(BuyerField::Address);
        }

        if is_blank(&self.email) && is_blank(&self.phone) {
            errors.add(BuyerField::Email);
            errors.add(BuyerField::Phone);
        }

        errors
    }

    /// Validate only the fields collected at `step`.
    pub fn validate_step(&self, step: CheckoutStep) -> ValidationErrors {
        self.validate().retain_fields(step.fields())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn is_step_valid(&self, step: CheckoutStep) -> bool {
        self.validate_step(step).is_empty()
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
