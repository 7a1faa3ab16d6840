//! Selection form reducer.

use common::{CheckoutId, RequestSeq};
use serde::{Deserialize, Serialize};

use super::SelectionError;
use super::events::{
    CountriesResolvedData, LookupFailedData, SelectionEvent, ShippingOptionsResolvedData,
    SubdivisionsResolvedData,
};
use super::stage::LookupStage;
use super::state::SelectionState;
use super::submission::{AddressFields, CheckoutSubmission};
use super::value_objects::{
    CountryCode, LocationOption, ShippingOption, ShippingOptionId, SubdivisionCode,
};

/// A recorded lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    /// The stage that failed.
    pub stage: LookupStage,

    /// Error message from the backend.
    pub reason: String,
}

/// In-flight lookup bookkeeping, one slot per stage.
///
/// A resolution whose sequence does not match the stage's slot is stale.
/// Clearing a slot cancels the in-flight request: its eventual result will
/// no longer match and gets discarded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct InFlight {
    countries: Option<RequestSeq>,
    subdivisions: Option<RequestSeq>,
    shipping_options: Option<RequestSeq>,
}

impl InFlight {
    fn get(&self, stage: LookupStage) -> Option<RequestSeq> {
        match stage {
            LookupStage::Countries => self.countries,
            LookupStage::Subdivisions => self.subdivisions,
            LookupStage::ShippingOptions => self.shipping_options,
        }
    }

    fn set(&mut self, stage: LookupStage, seq: RequestSeq) {
        match stage {
            LookupStage::Countries => self.countries = Some(seq),
            LookupStage::Subdivisions => self.subdivisions = Some(seq),
            LookupStage::ShippingOptions => self.shipping_options = Some(seq),
        }
    }

    fn clear(&mut self, stage: LookupStage) {
        match stage {
            LookupStage::Countries => self.countries = None,
            LookupStage::Subdivisions => self.subdivisions = None,
            LookupStage::ShippingOptions => self.shipping_options = None,
        }
    }
}

/// The selection form state machine.
///
/// All mutation flows through [`SelectionForm::apply`]; command methods
/// validate user input and return events without mutating. Lookup results
/// are gated on the sequence number recorded by the matching
/// `LookupStarted` event, so responses to superseded requests are
/// discarded instead of overwriting newer state.
///
/// Backend defaults: when a resolution arrives and no selection exists for
/// that stage, the first returned option becomes the selection. An empty
/// resolution establishes no default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionForm {
    /// Session the form belongs to; None until SessionReady.
    checkout_id: Option<CheckoutId>,

    /// Shippable countries in backend order.
    countries: Vec<LocationOption>,

    /// Subdivisions of the selected country in backend order.
    subdivisions: Vec<LocationOption>,

    /// Shipping options for the selected destination in backend order.
    shipping_options: Vec<ShippingOption>,

    /// Current selections.
    selection: SelectionState,

    /// In-flight lookup sequences.
    in_flight: InFlight,

    /// Most recent lookup failure, cleared when a new lookup starts.
    last_error: Option<LookupFailure>,

    /// Number of stale resolutions discarded since the session started.
    #[serde(default)]
    stale_discards: u64,
}

impl SelectionForm {
    /// Applies an event to the form, updating its state.
    ///
    /// This is the single mutation entry point. Resolution events whose
    /// sequence has been superseded are discarded without touching state.
    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::SessionReady(data) => {
                *self = SelectionForm::default();
                self.checkout_id = Some(data.checkout_id);
            }
            SelectionEvent::LookupStarted(data) => {
                self.last_error = None;
                self.in_flight.set(data.stage, data.seq);
            }
            SelectionEvent::CountriesResolved(data) => self.apply_countries_resolved(data),
            SelectionEvent::CountrySelected(data) => {
                self.selection.country = Some(data.code);
                self.invalidate_subdivisions();
            }
            SelectionEvent::SubdivisionsResolved(data) => self.apply_subdivisions_resolved(data),
            SelectionEvent::SubdivisionSelected(data) => {
                self.selection.subdivision = Some(data.code);
                self.invalidate_shipping_options();
            }
            SelectionEvent::ShippingOptionsResolved(data) => {
                self.apply_shipping_options_resolved(data);
            }
            SelectionEvent::ShippingOptionSelected(data) => {
                self.selection.shipping_option = Some(data.id);
            }
            SelectionEvent::LookupFailed(data) => self.apply_lookup_failed(data),
        }
    }

    /// Applies multiple events in sequence.
    pub fn apply_events(&mut self, events: impl IntoIterator<Item = SelectionEvent>) {
        for event in events {
            self.apply(event);
        }
    }
}

// Apply event helpers
impl SelectionForm {
    /// Consumes the in-flight slot if `seq` is current; returns false for
    /// stale results.
    fn take_current(&mut self, stage: LookupStage, seq: RequestSeq) -> bool {
        if self.in_flight.get(stage) == Some(seq) {
            self.in_flight.clear(stage);
            true
        } else {
            tracing::debug!(%stage, %seq, "discarding stale lookup result");
            self.stale_discards += 1;
            false
        }
    }

    fn apply_countries_resolved(&mut self, data: CountriesResolvedData) {
        if !self.take_current(LookupStage::Countries, data.seq) {
            return;
        }
        if self.selection.country.is_none() {
            if let Some(first) = data.options.first() {
                self.selection.country = Some(CountryCode::new(&first.code));
            }
        }
        self.countries = data.options;
    }

    fn apply_subdivisions_resolved(&mut self, data: SubdivisionsResolvedData) {
        if !self.take_current(LookupStage::Subdivisions, data.seq) {
            return;
        }
        if self.selection.subdivision.is_none() {
            if let Some(first) = data.options.first() {
                self.selection.subdivision = Some(SubdivisionCode::new(&first.code));
            }
        }
        self.subdivisions = data.options;
    }

    fn apply_shipping_options_resolved(&mut self, data: ShippingOptionsResolvedData) {
        if !self.take_current(LookupStage::ShippingOptions, data.seq) {
            return;
        }
        if self.selection.shipping_option.is_none() {
            if let Some(first) = data.options.first() {
                self.selection.shipping_option = Some(first.id.clone());
            }
        }
        self.shipping_options = data.options;
    }

    fn apply_lookup_failed(&mut self, data: LookupFailedData) {
        if !self.take_current(data.stage, data.seq) {
            return;
        }
        // Option lists and selections keep their last-known-good values.
        self.last_error = Some(LookupFailure {
            stage: data.stage,
            reason: data.reason,
        });
    }

    fn invalidate_subdivisions(&mut self) {
        self.subdivisions.clear();
        self.selection.subdivision = None;
        self.in_flight.clear(LookupStage::Subdivisions);
        self.invalidate_shipping_options();
    }

    fn invalidate_shipping_options(&mut self) {
        self.shipping_options.clear();
        self.selection.shipping_option = None;
        self.in_flight.clear(LookupStage::ShippingOptions);
    }
}

// Query methods
impl SelectionForm {
    /// Returns the checkout session id, if a session is available.
    pub fn checkout_id(&self) -> Option<&CheckoutId> {
        self.checkout_id.as_ref()
    }

    /// Returns the country list in backend order.
    pub fn countries(&self) -> &[LocationOption] {
        &self.countries
    }

    /// Returns the subdivision list in backend order.
    pub fn subdivisions(&self) -> &[LocationOption] {
        &self.subdivisions
    }

    /// Returns the shipping option list in backend order.
    pub fn shipping_options(&self) -> &[ShippingOption] {
        &self.shipping_options
    }

    /// Returns the current selections.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns the selected country, if any.
    pub fn selected_country(&self) -> Option<&CountryCode> {
        self.selection.country.as_ref()
    }

    /// Returns the selected subdivision, if any.
    pub fn selected_subdivision(&self) -> Option<&SubdivisionCode> {
        self.selection.subdivision.as_ref()
    }

    /// Returns the selected shipping option, if any.
    pub fn selected_shipping_option(&self) -> Option<&ShippingOptionId> {
        self.selection.shipping_option.as_ref()
    }

    /// Returns true if a lookup is in flight for the stage.
    pub fn is_in_flight(&self, stage: LookupStage) -> bool {
        self.in_flight.get(stage).is_some()
    }

    /// Returns the most recent lookup failure, if any.
    pub fn last_error(&self) -> Option<&LookupFailure> {
        self.last_error.as_ref()
    }

    /// Returns the number of stale resolutions discarded.
    pub fn stale_discards(&self) -> u64 {
        self.stale_discards
    }
}

// Command methods (return events)
impl SelectionForm {
    /// Selects a shipping country.
    ///
    /// The code must be in the current country list.
    pub fn select_country(&self, code: CountryCode) -> Result<Vec<SelectionEvent>, SelectionError> {
        if self.checkout_id.is_none() {
            return Err(SelectionError::SessionNotReady);
        }

        if !self.countries.iter().any(|o| o.code == code.as_str()) {
            return Err(SelectionError::UnknownCountry {
                code: code.to_string(),
            });
        }

        Ok(vec![SelectionEvent::country_selected(code)])
    }

    /// Selects a subdivision of the current country.
    ///
    /// The code must be in the current subdivision list.
    pub fn select_subdivision(
        &self,
        code: SubdivisionCode,
    ) -> Result<Vec<SelectionEvent>, SelectionError> {
        if self.checkout_id.is_none() {
            return Err(SelectionError::SessionNotReady);
        }

        if !self.subdivisions.iter().any(|o| o.code == code.as_str()) {
            return Err(SelectionError::UnknownSubdivision {
                code: code.to_string(),
            });
        }

        Ok(vec![SelectionEvent::subdivision_selected(code)])
    }

    /// Selects a shipping option for the current destination.
    ///
    /// The id must be in the current option list.
    pub fn select_shipping_option(
        &self,
        id: ShippingOptionId,
    ) -> Result<Vec<SelectionEvent>, SelectionError> {
        if self.checkout_id.is_none() {
            return Err(SelectionError::SessionNotReady);
        }

        if !self.shipping_options.iter().any(|o| o.id == id) {
            return Err(SelectionError::UnknownShippingOption { id: id.to_string() });
        }

        Ok(vec![SelectionEvent::shipping_option_selected(id)])
    }

    /// Merges the current selections with free-text address fields into a
    /// submission payload.
    ///
    /// Completeness validation is owned upstream by required-field markers;
    /// unselected fields pass through as None.
    pub fn submission(&self, address: AddressFields) -> Result<CheckoutSubmission, SelectionError> {
        let checkout_id = self
            .checkout_id
            .clone()
            .ok_or(SelectionError::SessionNotReady)?;

        Ok(CheckoutSubmission {
            checkout_id,
            address,
            selection: self.selection.clone(),
        })
    }
}
