// ============================================================================
// Transit Currency Library
// Exact currency values and localized names for transit card data
// ============================================================================

//! # Transit Currency
//!
//! Currency values and display names for amounts read off transit and
//! stored-value cards.
//!
//! ## Features
//!
//! - **Loss-free arithmetic** across values with different minor-unit divisors
//! - **Total code resolution**: unassigned numeric codes become
//!   [`CurrencyIdentity::Unknown`](currency::CurrencyIdentity) instead of errors
//! - **Explicit locales**: every name lookup takes the display locale as a
//!   parameter and reports missing data as `None`
//! - **Immutable tables** shared through `Arc`, safe to use from any thread
//!
//! ## Example
//!
//! ```rust
//! use transit_currency::prelude::*;
//!
//! let registry = CurrencyRegistry::iso4217();
//!
//! // Balance stored in tenths of a cent, top-up in cents
//! let balance = CurrencyValue::new(12340, 36, Some(1000), &registry).unwrap();
//! let top_up = CurrencyValue::new(500, "AUD", None, &registry).unwrap();
//!
//! let total = balance.checked_add(&top_up).unwrap();
//! assert_eq!(total.to_string(), "AUD 17.34");
//!
//! let resolver = NameResolver::bundled();
//! let en = Locale::english();
//! assert_eq!(resolver.currency_name_by_code(36, &en).as_deref(), Some("Australian Dollar"));
//! assert_eq!(resolver.country_code_to_name(756, &en), "Switzerland");
//! ```

pub mod currency;
pub mod interfaces;
pub mod locale;
pub mod registry;
pub mod resolver;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        CurrencyCode, CurrencyError, CurrencyIdentity, CurrencyResult, CurrencyValue,
        RawCurrencyCode,
    };
    pub use crate::interfaces::{LocaleData, NoLocaleData};
    pub use crate::locale::{BundledLocaleData, Locale};
    pub use crate::registry::{CountryRegistry, CurrencyEntry, CurrencyRegistry};
    pub use crate::resolver::{create_from_config, NameResolver, NameResolverBuilder, ResolverConfig};
}
