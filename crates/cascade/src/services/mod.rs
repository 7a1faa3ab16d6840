//! Commerce service traits and in-memory implementations for the cascade
//! stages.

pub mod checkout;
pub mod locale;

pub use checkout::{CheckoutService, InMemoryCheckoutService};
pub use locale::{InMemoryLocaleService, LocaleService};
