//! Display-ready projections of checkout data.
//!
//! The query side of the checkout form: pure transforms from
//! commerce-backend snapshots into rows ready for rendering. No network
//! access, no mutation — a projection of the same input always yields the
//! same output.

pub mod views;

pub use views::order_review::{self, OrderReview, ReviewLine, ReviewSummary};
