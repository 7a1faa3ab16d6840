//! Domain layer for the checkout cascade.
//!
//! This crate provides the core domain model including:
//! - Checkout session wire shapes supplied by the commerce backend
//! - Selection value objects (countries, subdivisions, shipping options)
//! - The tagged `SelectionEvent` enum for form mutations
//! - The `SelectionForm` reducer with a single mutation entry point

pub mod checkout;
pub mod selection;

pub use checkout::{CheckoutSession, LineItem, LiveSnapshot, Price};
pub use selection::{
    AddressFields, CheckoutSubmission, CountryCode, LocationOption, LookupFailure, LookupStage,
    SelectionError, SelectionEvent, SelectionForm, SelectionState, ShippingOption,
    ShippingOptionId, SubdivisionCode,
};
