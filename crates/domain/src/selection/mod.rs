//! Selection form state and events for the checkout cascade.

mod events;
mod form;
mod stage;
mod state;
mod submission;
mod value_objects;

pub use events::{
    CountriesResolvedData, CountrySelectedData, LookupFailedData, LookupStartedData,
    SelectionEvent, SessionReadyData, ShippingOptionSelectedData, ShippingOptionsResolvedData,
    SubdivisionSelectedData, SubdivisionsResolvedData,
};
pub use form::{LookupFailure, SelectionForm};
pub use stage::LookupStage;
pub use state::SelectionState;
pub use submission::{AddressFields, CheckoutSubmission};
pub use value_objects::{
    CountryCode, LocationOption, ShippingOption, ShippingOptionId, SubdivisionCode,
};

use thiserror::Error;

/// Errors that can occur when applying user selections to the form.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// No checkout session has been made available yet.
    #[error("No checkout session is available")]
    SessionNotReady,

    /// The country code is not in the current country list.
    #[error("Unknown shipping country: {code}")]
    UnknownCountry { code: String },

    /// The subdivision code is not in the current subdivision list.
    #[error("Unknown subdivision: {code}")]
    UnknownSubdivision { code: String },

    /// The shipping option id is not in the current option list.
    #[error("Unknown shipping option: {id}")]
    UnknownShippingOption { id: String },
}
