//! Order review view — line items and subtotal formatted for display.

use domain::CheckoutSession;

/// Label for the summary row.
pub const SUBTOTAL_LABEL: &str = "總金額";

/// Prefix for the per-line quantity label.
pub const QUANTITY_LABEL_PREFIX: &str = "數量: ";

/// A display row for one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLine {
    /// Product name.
    pub name: String,

    /// Quantity label (e.g. "數量: 2").
    pub quantity_label: String,

    /// Backend-formatted line total.
    pub formatted_line_total: String,
}

/// The single summary row closing the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Summary label.
    pub label: String,

    /// Backend-formatted subtotal.
    pub formatted_subtotal: String,
}

/// A display-ready order review: one row per line item plus one summary
/// row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReview {
    /// Line rows in snapshot order.
    pub lines: Vec<ReviewLine>,

    /// Subtotal summary row.
    pub summary: ReviewSummary,
}

/// Projects a checkout session's live snapshot into review rows.
///
/// Pure and deterministic: the same session always projects to the same
/// review, and the session is not mutated. Price strings pass through
/// verbatim from the backend.
pub fn project(session: &CheckoutSession) -> OrderReview {
    let lines = session
        .live
        .line_items
        .iter()
        .map(|item| ReviewLine {
            name: item.name.clone(),
            quantity_label: format!("{QUANTITY_LABEL_PREFIX}{}", item.quantity),
            formatted_line_total: item.line_total.formatted_with_symbol.clone(),
        })
        .collect();

    OrderReview {
        lines,
        summary: ReviewSummary {
            label: SUBTOTAL_LABEL.to_string(),
            formatted_subtotal: session.live.subtotal.formatted_with_symbol.clone(),
        },
    }
}
