//! Locale service trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::CheckoutId;
use domain::CountryCode;

use crate::error::BackendError;

/// Trait for shipping-locale lookups.
///
/// Both operations return ordered code → display-name pairs; list order is
/// the backend's insertion order.
#[async_trait]
pub trait LocaleService: Send + Sync {
    /// Lists the countries the checkout session can ship to.
    async fn list_shipping_countries(
        &self,
        checkout_id: &CheckoutId,
    ) -> Result<Vec<(String, String)>, BackendError>;

    /// Lists the subdivisions of a country.
    async fn list_subdivisions(
        &self,
        country: &CountryCode,
    ) -> Result<Vec<(String, String)>, BackendError>;
}

#[derive(Debug, Default)]
struct InMemoryLocaleState {
    countries: Vec<(String, String)>,
    subdivisions: HashMap<String, Vec<(String, String)>>,
    country_lookups: u32,
    subdivision_lookups: u32,
    fail_on_countries: bool,
    fail_on_subdivisions: bool,
}

/// In-memory locale service for testing.
///
/// Countries are shared across all checkouts; subdivisions are keyed by
/// country code. A country without configured subdivisions yields an empty
/// list, matching a backend with no subdivision data for it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocaleService {
    state: Arc<RwLock<InMemoryLocaleState>>,
}

impl InMemoryLocaleService {
    /// Creates a new in-memory locale service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the country list returned for every checkout.
    pub fn set_countries(&self, countries: &[(&str, &str)]) {
        self.state.write().unwrap().countries = countries
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
    }

    /// Sets the subdivision list returned for a country.
    pub fn set_subdivisions(&self, country: &str, subdivisions: &[(&str, &str)]) {
        self.state.write().unwrap().subdivisions.insert(
            country.to_string(),
            subdivisions
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        );
    }

    /// Configures the service to fail country lookups.
    pub fn set_fail_on_countries(&self, fail: bool) {
        self.state.write().unwrap().fail_on_countries = fail;
    }

    /// Configures the service to fail subdivision lookups.
    pub fn set_fail_on_subdivisions(&self, fail: bool) {
        self.state.write().unwrap().fail_on_subdivisions = fail;
    }

    /// Returns the number of country lookups performed.
    pub fn country_lookup_count(&self) -> u32 {
        self.state.read().unwrap().country_lookups
    }

    /// Returns the number of subdivision lookups performed.
    pub fn subdivision_lookup_count(&self) -> u32 {
        self.state.read().unwrap().subdivision_lookups
    }
}

#[async_trait]
impl LocaleService for InMemoryLocaleService {
    async fn list_shipping_countries(
        &self,
        _checkout_id: &CheckoutId,
    ) -> Result<Vec<(String, String)>, BackendError> {
        let mut state = self.state.write().unwrap();
        state.country_lookups += 1;

        if state.fail_on_countries {
            return Err(BackendError::new("Locale service unavailable"));
        }

        Ok(state.countries.clone())
    }

    async fn list_subdivisions(
        &self,
        country: &CountryCode,
    ) -> Result<Vec<(String, String)>, BackendError> {
        let mut state = self.state.write().unwrap();
        state.subdivision_lookups += 1;

        if state.fail_on_subdivisions {
            return Err(BackendError::new("Locale service unavailable"));
        }

        Ok(state
            .subdivisions
            .get(country.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
