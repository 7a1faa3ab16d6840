//! Checkout session wire shapes supplied by the commerce backend.

use common::CheckoutId;
use serde::{Deserialize, Serialize};

/// A backend-formatted price.
///
/// Amount formatting (currency symbol, separators) is owned by the commerce
/// service; this library carries the display string and never computes or
/// reformats amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Display string including the currency symbol (e.g. "$10.00").
    pub formatted_with_symbol: String,
}

impl Price {
    /// Creates a price from a backend-formatted display string.
    pub fn new(formatted: impl Into<String>) -> Self {
        Self {
            formatted_with_symbol: formatted.into(),
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted_with_symbol)
    }
}

/// A line item in the session's live snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name.
    pub name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Backend-computed total for this line.
    pub line_total: Price,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, quantity: u32, line_total: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            line_total,
        }
    }
}

/// Live totals for an in-progress checkout, recomputed server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSnapshot {
    /// Items currently in the checkout.
    pub line_items: Vec<LineItem>,

    /// Backend-computed subtotal across all line items.
    pub subtotal: Price,
}

/// An in-progress checkout session issued by the commerce backend.
///
/// Immutable from this library's perspective; owned by the caller and
/// passed in when available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Opaque session token.
    pub id: CheckoutId,

    /// Live snapshot of items and totals.
    pub live: LiveSnapshot,
}

impl CheckoutSession {
    /// Creates a checkout session from a token and its live snapshot.
    pub fn new(id: impl Into<CheckoutId>, live: LiveSnapshot) -> Self {
        Self {
            id: id.into(),
            live,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_display_uses_backend_string() {
        let price = Price::new("$12.34");
        assert_eq!(price.to_string(), "$12.34");
        assert_eq!(Price::new("NT$100").to_string(), "NT$100");
    }

    #[test]
    fn line_item_construction() {
        let item = LineItem::new("Mug", 2, Price::new("$10.00"));
        assert_eq!(item.name, "Mug");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total.formatted_with_symbol, "$10.00");
    }

    #[test]
    fn session_deserializes_from_wire_shape() {
        let json = r#"{
            "id": "chkt_9QeLa9ZnwN7PMw",
            "live": {
                "line_items": [
                    {"name": "Mug", "quantity": 2, "line_total": {"formatted_with_symbol": "$10.00"}}
                ],
                "subtotal": {"formatted_with_symbol": "$10.00"}
            }
        }"#;

        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id.as_str(), "chkt_9QeLa9ZnwN7PMw");
        assert_eq!(session.live.line_items.len(), 1);
        assert_eq!(session.live.line_items[0].name, "Mug");
        assert_eq!(session.live.subtotal.formatted_with_symbol, "$10.00");
    }

    #[test]
    fn session_serialization_roundtrip() {
        let session = CheckoutSession::new(
            "chkt_abc",
            LiveSnapshot {
                line_items: vec![LineItem::new("Mug", 2, Price::new("$10.00"))],
                subtotal: Price::new("$10.00"),
            },
        );

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: CheckoutSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
