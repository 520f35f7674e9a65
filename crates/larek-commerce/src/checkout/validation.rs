//! Field-level validation results for the buyer form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyerField {
    Payment,
    Address,
    Email,
    Phone,
}

impl BuyerField {
    pub const ALL: [BuyerField; 4] = [
        BuyerField::Payment,
        BuyerField::Address,
        BuyerField::Email,
        BuyerField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerField::Payment => "payment",
            BuyerField::Address => "address",
            BuyerField::Email => "email",
            BuyerField::Phone => "phone",
        }
    }

    /// Message shown when this field fails validation.
    pub fn error_message(&self) -> &'static str {
        match self {
            BuyerField::Payment => "Payment method is not selected",
            BuyerField::Address => "Delivery address is not specified",
            BuyerField::Email => "Enter an email",
            BuyerField::Phone => "Enter a phone number",
        }
    }
}

impl fmt::Display for BuyerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors keyed by form field. Empty means the data is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<BuyerField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the standard message for `field`.
    pub fn add(&mut self, field: BuyerField) {
        self.0.insert(field, field.error_message().to_string());
    }

    pub fn get(&self, field: BuyerField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BuyerField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with errors, in form order.
    pub fn fields(&self) -> impl Iterator<Item = BuyerField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BuyerField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Keep only errors for `fields`.
    pub fn retain_fields(mut self, fields: &[BuyerField]) -> Self {
        self.0.retain(|f, _| fields.contains(f));
        self
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
