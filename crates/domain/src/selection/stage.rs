//! Lookup stages of the cascading selection chain.

use serde::{Deserialize, Serialize};

/// The three dependent lookup stages of the cascade.
///
/// Stage order:
/// ```text
/// Countries ──► Subdivisions ──► ShippingOptions
/// ```
///
/// Each stage is keyed by the output of the stages upstream of it; changing
/// an upstream selection invalidates every stage downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupStage {
    /// Shippable countries, keyed by the checkout session id.
    Countries,

    /// Subdivisions of the selected country.
    Subdivisions,

    /// Shipping options for the selected (country, subdivision) pair.
    ShippingOptions,
}

impl LookupStage {
    /// Returns the stage directly downstream of this one, if any.
    pub fn downstream(&self) -> Option<LookupStage> {
        match self {
            LookupStage::Countries => Some(LookupStage::Subdivisions),
            LookupStage::Subdivisions => Some(LookupStage::ShippingOptions),
            LookupStage::ShippingOptions => None,
        }
    }

    /// Returns the stage name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStage::Countries => "Countries",
            LookupStage::Subdivisions => "Subdivisions",
            LookupStage::ShippingOptions => "ShippingOptions",
        }
    }
}

impl std::fmt::Display for LookupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
