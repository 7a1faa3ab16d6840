//! Checkout service trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::CheckoutId;
use domain::{CountryCode, ShippingOption, SubdivisionCode};

use crate::error::BackendError;

/// Trait for checkout shipping-rate lookups.
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Fetches the shipping options available for a destination.
    ///
    /// Options are returned in backend order; rate computation is owned by
    /// the commerce service.
    async fn get_shipping_options(
        &self,
        checkout_id: &CheckoutId,
        country: &CountryCode,
        region: Option<&SubdivisionCode>,
    ) -> Result<Vec<ShippingOption>, BackendError>;
}

#[derive(Debug, Default)]
struct InMemoryCheckoutState {
    /// Options keyed by (country code, region code or empty).
    options: HashMap<(String, String), Vec<ShippingOption>>,
    option_lookups: u32,
    fail_on_options: bool,
}

/// In-memory checkout service for testing.
///
/// A destination without configured options yields an empty list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckoutService {
    state: Arc<RwLock<InMemoryCheckoutState>>,
}

impl InMemoryCheckoutService {
    /// Creates a new in-memory checkout service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the options returned for a (country, region) destination.
    pub fn set_options(&self, country: &str, region: &str, options: Vec<ShippingOption>) {
        self.state
            .write()
            .unwrap()
            .options
            .insert((country.to_string(), region.to_string()), options);
    }

    /// Configures the service to fail option lookups.
    pub fn set_fail_on_options(&self, fail: bool) {
        self.state.write().unwrap().fail_on_options = fail;
    }

    /// Returns the number of option lookups performed.
    pub fn option_lookup_count(&self) -> u32 {
        self.state.read().unwrap().option_lookups
    }
}

#[async_trait]
impl CheckoutService for InMemoryCheckoutService {
    async fn get_shipping_options(
        &self,
        _checkout_id: &CheckoutId,
        country: &CountryCode,
        region: Option<&SubdivisionCode>,
    ) -> Result<Vec<ShippingOption>, BackendError> {
        let mut state = self.state.write().unwrap();
        state.option_lookups += 1;

        if state.fail_on_options {
            return Err(BackendError::new("Shipping rates unavailable"));
        }

        let key = (
            country.as_str().to_string(),
            region.map(|r| r.as_str()).unwrap_or_default().to_string(),
        );
        Ok(state.options.get(&key).cloned().unwrap_or_default())
    }
}
