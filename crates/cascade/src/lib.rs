//! Cascading selection resolver for the checkout form.
//!
//! This crate keeps the shipping country, subdivision, and shipping-option
//! selections consistent as upstream values change. It composes three
//! dependent lookups against the commerce backend:
//! 1. Shippable countries (keyed by the checkout session id)
//! 2. Subdivisions of the selected country
//! 3. Shipping options for the selected (country, subdivision) pair
//!
//! Changing an upstream selection invalidates all downstream state and
//! re-triggers the downstream lookups; responses to superseded lookups are
//! discarded via sequence numbers.

pub mod error;
pub mod resolver;
pub mod services;

pub use error::{BackendError, CascadeError};
pub use resolver::CascadeResolver;
pub use services::{
    CheckoutService, InMemoryCheckoutService, InMemoryLocaleService, LocaleService,
};
