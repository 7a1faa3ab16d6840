//! Submission payload assembled from the form.

use common::CheckoutId;
use serde::{Deserialize, Serialize};

use super::state::SelectionState;

/// Free-text address fields collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Street address.
    pub street: String,

    /// Postal code.
    pub postal_code: String,
}

/// The payload handed to the caller on submit: the current selections
/// merged with the free-text address fields.
///
/// Completeness validation beyond required-field markers is owned upstream,
/// so unselected fields pass through as None.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSubmission {
    /// The session this submission belongs to.
    pub checkout_id: CheckoutId,

    /// Free-text address fields.
    pub address: AddressFields,

    /// The destination and shipping-option selections.
    pub selection: SelectionState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::value_objects::CountryCode;

    #[test]
    fn test_serialization_roundtrip() {
        let submission = CheckoutSubmission {
            checkout_id: CheckoutId::new("chkt_1"),
            address: AddressFields {
                first_name: "Mei".to_string(),
                last_name: "Lin".to_string(),
                phone: "0912345678".to_string(),
                email: "mei@example.com".to_string(),
                street: "1 Main St".to_string(),
                postal_code: "100".to_string(),
            },
            selection: SelectionState {
                country: Some(CountryCode::new("TW")),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&submission).unwrap();
        let deserialized: CheckoutSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(submission, deserialized);
    }
}
