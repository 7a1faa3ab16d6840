//! Cascading selection resolver.

use std::time::Instant;

use common::{CheckoutId, RequestSeq};
use domain::{
    AddressFields, CheckoutSession, CheckoutSubmission, CountryCode, LocationOption, LookupStage,
    SelectionEvent, SelectionForm, ShippingOptionId, SubdivisionCode,
};

use crate::error::{CascadeError, Result};
use crate::services::{CheckoutService, LocaleService};

/// Drives the dependent lookup chain and owns the selection form.
///
/// Every lookup is stamped with a fresh sequence number (via a
/// `LookupStarted` event) before the await; the form discards resolutions
/// whose sequence has been superseded, so a stale `(country, subdivision)`
/// shipping lookup can never override a newer selection.
///
/// Lookups run sequentially within each call; downstream lookups are
/// chained only when the upstream resolution established a selection. An
/// empty result set is a non-fatal no-op: no default, no downstream
/// lookup, no error.
pub struct CascadeResolver<L, C>
where
    L: LocaleService,
    C: CheckoutService,
{
    locale: L,
    checkout: C,
    form: SelectionForm,
    next_seq: RequestSeq,
}

impl<L, C> CascadeResolver<L, C>
where
    L: LocaleService,
    C: CheckoutService,
{
    /// Creates a new resolver over the given services.
    pub fn new(locale: L, checkout: C) -> Self {
        Self {
            locale,
            checkout,
            form: SelectionForm::default(),
            next_seq: RequestSeq::first(),
        }
    }

    /// Returns the current form state.
    pub fn form(&self) -> &SelectionForm {
        &self.form
    }

    fn alloc_seq(&mut self) -> RequestSeq {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.next();
        seq
    }

    /// Starts the cascade for a newly available checkout session.
    ///
    /// Resets the form, resolves the shippable countries, and — when a
    /// default country is established — chains subdivision and
    /// shipping-option resolution.
    #[tracing::instrument(skip(self, session), fields(checkout_id = %session.id))]
    pub async fn session_available(&mut self, session: &CheckoutSession) -> Result<()> {
        metrics::counter!("cascade_sessions_total").increment(1);
        let started = Instant::now();

        self.form
            .apply(SelectionEvent::session_ready(session.id.clone()));

        let checkout_id = session.id.clone();
        let result = self.resolve_countries(&checkout_id).await;

        metrics::histogram!("cascade_resolve_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        result
    }

    /// Applies a user's country selection and re-derives downstream state.
    #[tracing::instrument(skip(self), fields(country = %code))]
    pub async fn select_country(&mut self, code: CountryCode) -> Result<()> {
        let events = self.form.select_country(code)?;
        self.form.apply_events(events);
        self.resolve_subdivisions().await
    }

    /// Applies a user's subdivision selection and re-derives the shipping
    /// options.
    #[tracing::instrument(skip(self), fields(subdivision = %code))]
    pub async fn select_subdivision(&mut self, code: SubdivisionCode) -> Result<()> {
        let events = self.form.select_subdivision(code)?;
        self.form.apply_events(events);
        self.resolve_shipping_options().await
    }

    /// Applies a user's shipping-option selection. Local only; no lookup
    /// is triggered.
    pub fn select_shipping_option(&mut self, id: ShippingOptionId) -> Result<()> {
        let events = self.form.select_shipping_option(id)?;
        self.form.apply_events(events);
        Ok(())
    }

    /// Produces the submission payload and discards the form state.
    pub fn submit(&mut self, address: AddressFields) -> Result<CheckoutSubmission> {
        let submission = self.form.submission(address)?;
        self.form = SelectionForm::default();
        Ok(submission)
    }

    async fn resolve_countries(&mut self, checkout_id: &CheckoutId) -> Result<()> {
        let seq = self.alloc_seq();
        self.form
            .apply(SelectionEvent::lookup_started(LookupStage::Countries, seq));
        metrics::counter!("cascade_lookups_total").increment(1);

        match self.locale.list_shipping_countries(checkout_id).await {
            Ok(pairs) => {
                let options = to_location_options(pairs);
                if options.is_empty() {
                    tracing::debug!("country lookup returned no options");
                    metrics::counter!("cascade_empty_results_total").increment(1);
                }
                self.form
                    .apply(SelectionEvent::countries_resolved(seq, options));
            }
            Err(e) => {
                return Err(self.fail_lookup(LookupStage::Countries, seq, e.to_string()));
            }
        }

        if self.form.selected_country().is_some() {
            self.resolve_subdivisions().await?;
        }
        Ok(())
    }

    async fn resolve_subdivisions(&mut self) -> Result<()> {
        let Some(country) = self.form.selected_country().cloned() else {
            return Ok(());
        };

        let seq = self.alloc_seq();
        self.form.apply(SelectionEvent::lookup_started(
            LookupStage::Subdivisions,
            seq,
        ));
        metrics::counter!("cascade_lookups_total").increment(1);

        match self.locale.list_subdivisions(&country).await {
            Ok(pairs) => {
                let options = to_location_options(pairs);
                if options.is_empty() {
                    tracing::debug!(country = %country, "subdivision lookup returned no options");
                    metrics::counter!("cascade_empty_results_total").increment(1);
                }
                self.form
                    .apply(SelectionEvent::subdivisions_resolved(seq, options));
            }
            Err(e) => {
                return Err(self.fail_lookup(LookupStage::Subdivisions, seq, e.to_string()));
            }
        }

        if self.form.selected_subdivision().is_some() {
            self.resolve_shipping_options().await?;
        }
        Ok(())
    }

    async fn resolve_shipping_options(&mut self) -> Result<()> {
        let (Some(checkout_id), Some(country), Some(subdivision)) = (
            self.form.checkout_id().cloned(),
            self.form.selected_country().cloned(),
            self.form.selected_subdivision().cloned(),
        ) else {
            return Ok(());
        };

        let seq = self.alloc_seq();
        self.form.apply(SelectionEvent::lookup_started(
            LookupStage::ShippingOptions,
            seq,
        ));
        metrics::counter!("cascade_lookups_total").increment(1);

        match self
            .checkout
            .get_shipping_options(&checkout_id, &country, Some(&subdivision))
            .await
        {
            Ok(options) => {
                if options.is_empty() {
                    tracing::debug!(
                        country = %country,
                        subdivision = %subdivision,
                        "shipping-option lookup returned no options"
                    );
                    metrics::counter!("cascade_empty_results_total").increment(1);
                }
                self.form
                    .apply(SelectionEvent::shipping_options_resolved(seq, options));
                Ok(())
            }
            Err(e) => Err(self.fail_lookup(LookupStage::ShippingOptions, seq, e.to_string())),
        }
    }

    fn fail_lookup(&mut self, stage: LookupStage, seq: RequestSeq, reason: String) -> CascadeError {
        self.form
            .apply(SelectionEvent::lookup_failed(stage, seq, reason.clone()));
        metrics::counter!("cascade_lookup_failures_total").increment(1);
        tracing::warn!(%stage, %reason, "lookup failed");
        CascadeError::LookupFailed { stage, reason }
    }
}

fn to_location_options(pairs: Vec<(String, String)>) -> Vec<LocationOption> {
    pairs
        .into_iter()
        .map(|(code, name)| LocationOption::new(code, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemoryCheckoutService, InMemoryLocaleService};
    use domain::{LiveSnapshot, Price, ShippingOption};

    fn session() -> CheckoutSession {
        CheckoutSession::new("chkt_1", LiveSnapshot::default())
    }

    fn setup() -> CascadeResolver<InMemoryLocaleService, InMemoryCheckoutService> {
        let locale = InMemoryLocaleService::new();
        locale.set_countries(&[("TW", "Taiwan"), ("US", "United States")]);
        locale.set_subdivisions("TW", &[("TW-TPE", "Taipei City"), ("TW-KHH", "Kaohsiung City")]);

        let checkout = InMemoryCheckoutService::new();
        checkout.set_options(
            "TW",
            "TW-TPE",
            vec![
                ShippingOption::new("ship_std", "Standard", Price::new("NT$60")),
                ShippingOption::new("ship_exp", "Express", Price::new("NT$120")),
            ],
        );

        CascadeResolver::new(locale, checkout)
    }

    #[tokio::test]
    async fn test_session_available_runs_full_chain() {
        let mut resolver = setup();
        resolver.session_available(&session()).await.unwrap();

        let form = resolver.form();
        assert_eq!(form.selected_country().unwrap().as_str(), "TW");
        assert_eq!(form.selected_subdivision().unwrap().as_str(), "TW-TPE");
        assert_eq!(form.selected_shipping_option().unwrap().as_str(), "ship_std");
        assert!(form.selection().is_complete());
    }

    #[tokio::test]
    async fn test_select_shipping_option_is_local() {
        let mut resolver = setup();
        resolver.session_available(&session()).await.unwrap();

        resolver
            .select_shipping_option(ShippingOptionId::new("ship_exp"))
            .unwrap();
        assert_eq!(
            resolver.form().selected_shipping_option().unwrap().as_str(),
            "ship_exp"
        );
    }

    #[tokio::test]
    async fn test_submit_resets_form() {
        let mut resolver = setup();
        resolver.session_available(&session()).await.unwrap();

        let submission = resolver.submit(AddressFields::default()).unwrap();
        assert_eq!(submission.checkout_id.as_str(), "chkt_1");
        assert!(submission.selection.is_complete());

        assert!(resolver.form().checkout_id().is_none());
        assert!(matches!(
            resolver.submit(AddressFields::default()),
            Err(CascadeError::Selection(_))
        ));
    }
}
