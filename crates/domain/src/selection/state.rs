//! Selection state snapshot.

use serde::{Deserialize, Serialize};

use super::value_objects::{CountryCode, ShippingOptionId, SubdivisionCode};

/// The currently selected shipping destination and option.
///
/// `subdivision` is meaningful only relative to the current `country`, and
/// `shipping_option` only relative to the `(country, subdivision)` pair.
/// The form reducer maintains these invariants by clearing downstream
/// fields whenever an upstream field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Selected shipping country, if any.
    pub country: Option<CountryCode>,

    /// Selected subdivision of the country, if any.
    pub subdivision: Option<SubdivisionCode>,

    /// Selected shipping option for the destination, if any.
    pub shipping_option: Option<ShippingOptionId>,
}

impl SelectionState {
    /// Returns true if all three fields are selected.
    pub fn is_complete(&self) -> bool {
        self.country.is_some() && self.subdivision.is_some() && self.shipping_option.is_some()
    }
}
