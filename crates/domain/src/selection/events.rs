//! Selection form events.

use chrono::{DateTime, Utc};
use common::{CheckoutId, RequestSeq};
use serde::{Deserialize, Serialize};

use super::stage::LookupStage;
use super::value_objects::{
    CountryCode, LocationOption, ShippingOption, ShippingOptionId, SubdivisionCode,
};

/// Events consumed by the selection form reducer.
///
/// Lookup results carry the sequence number of the request that produced
/// them; the reducer discards results whose sequence has been superseded
/// by a newer request for the same stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SelectionEvent {
    /// A checkout session became available; the form resets for it.
    SessionReady(SessionReadyData),

    /// A lookup was issued for a stage.
    LookupStarted(LookupStartedData),

    /// The shippable country list was resolved.
    CountriesResolved(CountriesResolvedData),

    /// The shipping country was selected by the user.
    CountrySelected(CountrySelectedData),

    /// The subdivision list for the selected country was resolved.
    SubdivisionsResolved(SubdivisionsResolvedData),

    /// The subdivision was selected by the user.
    SubdivisionSelected(SubdivisionSelectedData),

    /// The shipping option list for the destination was resolved.
    ShippingOptionsResolved(ShippingOptionsResolvedData),

    /// The shipping option was selected by the user.
    ShippingOptionSelected(ShippingOptionSelectedData),

    /// A lookup failed at a stage.
    LookupFailed(LookupFailedData),
}

impl SelectionEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            SelectionEvent::SessionReady(_) => "SessionReady",
            SelectionEvent::LookupStarted(_) => "LookupStarted",
            SelectionEvent::CountriesResolved(_) => "CountriesResolved",
            SelectionEvent::CountrySelected(_) => "CountrySelected",
            SelectionEvent::SubdivisionsResolved(_) => "SubdivisionsResolved",
            SelectionEvent::SubdivisionSelected(_) => "SubdivisionSelected",
            SelectionEvent::ShippingOptionsResolved(_) => "ShippingOptionsResolved",
            SelectionEvent::ShippingOptionSelected(_) => "ShippingOptionSelected",
            SelectionEvent::LookupFailed(_) => "LookupFailed",
        }
    }
}

/// Data for SessionReady event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReadyData {
    /// The checkout session the form now belongs to.
    pub checkout_id: CheckoutId,

    /// When the session became available.
    pub at: DateTime<Utc>,
}

/// Data for LookupStarted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupStartedData {
    /// The stage being looked up.
    pub stage: LookupStage,

    /// Sequence number stamped on the request.
    pub seq: RequestSeq,
}

/// Data for CountriesResolved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesResolvedData {
    /// Sequence number of the request that produced this result.
    pub seq: RequestSeq,

    /// Countries in backend order.
    pub options: Vec<LocationOption>,

    /// When the lookup resolved.
    pub resolved_at: DateTime<Utc>,
}

/// Data for CountrySelected event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySelectedData {
    /// The selected country code.
    pub code: CountryCode,
}

/// Data for SubdivisionsResolved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdivisionsResolvedData {
    /// Sequence number of the request that produced this result.
    pub seq: RequestSeq,

    /// Subdivisions in backend order.
    pub options: Vec<LocationOption>,

    /// When the lookup resolved.
    pub resolved_at: DateTime<Utc>,
}

/// Data for SubdivisionSelected event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdivisionSelectedData {
    /// The selected subdivision code.
    pub code: SubdivisionCode,
}

/// Data for ShippingOptionsResolved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOptionsResolvedData {
    /// Sequence number of the request that produced this result.
    pub seq: RequestSeq,

    /// Shipping options in backend order.
    pub options: Vec<ShippingOption>,

    /// When the lookup resolved.
    pub resolved_at: DateTime<Utc>,
}

/// Data for ShippingOptionSelected event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOptionSelectedData {
    /// The selected shipping option id.
    pub id: ShippingOptionId,
}

/// Data for LookupFailed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupFailedData {
    /// The stage that failed.
    pub stage: LookupStage,

    /// Sequence number of the failed request.
    pub seq: RequestSeq,

    /// Error message describing the failure.
    pub reason: String,

    /// When the lookup failed.
    pub failed_at: DateTime<Utc>,
}

// Convenience constructors for events
impl SelectionEvent {
    /// Creates a SessionReady event.
    pub fn session_ready(checkout_id: CheckoutId) -> Self {
        SelectionEvent::SessionReady(SessionReadyData {
            checkout_id,
            at: Utc::now(),
        })
    }

    /// Creates a LookupStarted event.
    pub fn lookup_started(stage: LookupStage, seq: RequestSeq) -> Self {
        SelectionEvent::LookupStarted(LookupStartedData { stage, seq })
    }

    /// Creates a CountriesResolved event.
    pub fn countries_resolved(seq: RequestSeq, options: Vec<LocationOption>) -> Self {
        SelectionEvent::CountriesResolved(CountriesResolvedData {
            seq,
            options,
            resolved_at: Utc::now(),
        })
    }

    /// Creates a CountrySelected event.
    pub fn country_selected(code: CountryCode) -> Self {
        SelectionEvent::CountrySelected(CountrySelectedData { code })
    }

    /// Creates a SubdivisionsResolved event.
    pub fn subdivisions_resolved(seq: RequestSeq, options: Vec<LocationOption>) -> Self {
        SelectionEvent::SubdivisionsResolved(SubdivisionsResolvedData {
            seq,
            options,
            resolved_at: Utc::now(),
        })
    }

    /// Creates a SubdivisionSelected event.
    pub fn subdivision_selected(code: SubdivisionCode) -> Self {
        SelectionEvent::SubdivisionSelected(SubdivisionSelectedData { code })
    }

    /// Creates a ShippingOptionsResolved event.
    pub fn shipping_options_resolved(seq: RequestSeq, options: Vec<ShippingOption>) -> Self {
        SelectionEvent::ShippingOptionsResolved(ShippingOptionsResolvedData {
            seq,
            options,
            resolved_at: Utc::now(),
        })
    }

    /// Creates a ShippingOptionSelected event.
    pub fn shipping_option_selected(id: ShippingOptionId) -> Self {
        SelectionEvent::ShippingOptionSelected(ShippingOptionSelectedData { id })
    }

    /// Creates a LookupFailed event.
    pub fn lookup_failed(stage: LookupStage, seq: RequestSeq, reason: impl Into<String>) -> Self {
        SelectionEvent::LookupFailed(LookupFailedData {
            stage,
            seq,
            reason: reason.into(),
            failed_at: Utc::now(),
        })
    }
}
