//! Value objects for the selection domain.

use serde::{Deserialize, Serialize};

use crate::checkout::Price;

/// ISO-style country code as returned by the commerce backend (e.g. "TW").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a country code from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Subdivision (state/province/region) code within a country (e.g. "TW-TPE").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubdivisionCode(String);

impl SubdivisionCode {
    /// Creates a subdivision code from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubdivisionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SubdivisionCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for SubdivisionCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl AsRef<str> for SubdivisionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a shipping option, issued by the commerce backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingOptionId(String);

impl ShippingOptionId {
    /// Creates a shipping option id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShippingOptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShippingOptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ShippingOptionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ShippingOptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A selectable location (country or subdivision).
///
/// Produced from the ordered code → name pairs returned by the backend;
/// list order is the backend's insertion order and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    /// Backend code used as the selection value.
    pub code: String,

    /// Human-readable name shown to the user.
    pub display_name: String,
}

impl LocationOption {
    /// Creates a location option.
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

/// A shipping rate offered for the selected destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Backend identifier used as the selection value.
    pub id: ShippingOptionId,

    /// Human-readable description of the option.
    pub description: String,

    /// Backend-formatted price for the option.
    pub price: Price,
}

impl ShippingOption {
    /// Creates a shipping option.
    pub fn new(
        id: impl Into<ShippingOptionId>,
        description: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            price,
        }
    }

    /// Display label combining the description and backend-formatted price.
    pub fn label(&self) -> String {
        format!("{} - ({})", self.description, self.price)
    }
}
