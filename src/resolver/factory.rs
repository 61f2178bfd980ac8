// ============================================================================
// Name Resolver Factory
// Creates name resolvers with proper configuration
// ============================================================================

use super::config::ResolverConfig;
use super::name_resolver::NameResolver;
use crate::interfaces::LocaleData;
use crate::locale::{BundledLocaleData, Locale};
use crate::registry::{CountryRegistry, CurrencyRegistry};
use std::sync::Arc;

/// Creates a name resolver over the bundled tables from configuration
///
/// # Example
/// ```
/// use transit_currency::prelude::*;
///
/// let resolver = create_from_config(ResolverConfig::english_fallback()).unwrap();
/// assert_eq!(
///     resolver.currency_name_by_code(36, &Locale::english()).as_deref(),
///     Some("Australian Dollar"),
/// );
/// ```
pub fn create_from_config(config: ResolverConfig) -> Result<NameResolver, String> {
    NameResolverBuilder::new().with_config(config).build()
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for name resolvers; every table defaults to the bundled one
///
/// # Example
/// ```
/// use transit_currency::prelude::*;
/// use std::sync::Arc;
///
/// let resolver = NameResolverBuilder::new()
///     .with_locale_data(Arc::new(NoLocaleData))
///     .with_unknown_placeholder("UNK")
///     .build()
///     .unwrap();
/// assert_eq!(resolver.currency_name_by_code(840, &Locale::english()), None);
/// ```
#[derive(Default)]
pub struct NameResolverBuilder {
    config: ResolverConfig,
    currencies: Option<Arc<CurrencyRegistry>>,
    countries: Option<Arc<CountryRegistry>>,
    locale_data: Option<Arc<dyn LocaleData>>,
}

impl NameResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// Use a custom currency registry
    pub fn with_currency_registry(mut self, registry: Arc<CurrencyRegistry>) -> Self {
        self.currencies = Some(registry);
        self
    }

    /// Use a custom country registry
    pub fn with_country_registry(mut self, registry: Arc<CountryRegistry>) -> Self {
        self.countries = Some(registry);
        self
    }

    /// Use a custom locale data provider
    pub fn with_locale_data(mut self, locale_data: Arc<dyn LocaleData>) -> Self {
        self.locale_data = Some(locale_data);
        self
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fallback locale
    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.config.fallback_locale = Some(locale);
        self
    }

    /// Set the unknown-currency placeholder
    pub fn with_unknown_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.unknown_placeholder = placeholder.into();
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the name resolver
    pub fn build(self) -> Result<NameResolver, String> {
        let currencies = self
            .currencies
            .unwrap_or_else(|| Arc::new(CurrencyRegistry::iso4217()));
        let countries = self
            .countries
            .unwrap_or_else(|| Arc::new(CountryRegistry::iso3166()));
        let locale_data = self
            .locale_data
            .unwrap_or_else(|| Arc::new(BundledLocaleData::new()));

        NameResolver::with_config(self.config, currencies, countries, locale_data)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ResolverConfig {
        &self.config
    }
}
