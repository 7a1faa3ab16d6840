//! Shared identifier types for the checkout cascade.

mod types;

pub use types::{CheckoutId, RequestSeq};
