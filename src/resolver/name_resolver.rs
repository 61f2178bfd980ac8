// ============================================================================
// Name Resolver
// Locale-aware currency and country display names
// ============================================================================

use super::config::ResolverConfig;
use crate::currency::{CurrencyCode, CurrencyIdentity};
use crate::interfaces::LocaleData;
use crate::locale::{BundledLocaleData, Locale};
use crate::registry::{CountryRegistry, CurrencyRegistry};
use std::sync::Arc;

/// Resolves codes from card data into localized display text.
///
/// Every lookup takes the display locale explicitly. Missing data never
/// fails: currency lookups return `None`, country lookups return an
/// "Unknown (<code>)" text.
///
/// All state is read-only and shared through `Arc`, so a resolver can be
/// cloned freely and used from any thread.
#[derive(Clone)]
pub struct NameResolver {
    config: ResolverConfig,
    currencies: Arc<CurrencyRegistry>,
    countries: Arc<CountryRegistry>,
    locale_data: Arc<dyn LocaleData>,
}

impl NameResolver {
    /// Create a resolver with the default configuration
    pub fn new(
        currencies: Arc<CurrencyRegistry>,
        countries: Arc<CountryRegistry>,
        locale_data: Arc<dyn LocaleData>,
    ) -> Self {
        Self {
            config: ResolverConfig::default(),
            currencies,
            countries,
            locale_data,
        }
    }

    /// Create a resolver with an explicit configuration.
    ///
    /// # Errors
    /// Returns the validation message if `config` is invalid.
    pub fn with_config(
        config: ResolverConfig,
        currencies: Arc<CurrencyRegistry>,
        countries: Arc<CountryRegistry>,
        locale_data: Arc<dyn LocaleData>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            currencies,
            countries,
            locale_data,
        })
    }

    /// Resolver over the bundled ISO tables and locale data
    pub fn bundled() -> Self {
        Self::new(
            Arc::new(CurrencyRegistry::iso4217()),
            Arc::new(CountryRegistry::iso3166()),
            Arc::new(BundledLocaleData::new()),
        )
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Full name of a numeric currency code, e.g. 840 -> "US Dollar".
    ///
    /// `None` when the registry does not know the code or the locale data
    /// has no name for it.
    pub fn currency_name_by_code(&self, numeric: i32, locale: &Locale) -> Option<String> {
        match self.currencies.resolve(numeric) {
            CurrencyIdentity::Known(code) => self.display_name(&code, locale),
            CurrencyIdentity::Unknown => None,
        }
    }

    /// Full name of an alphabetic currency code, e.g. "RUB" -> "Russian Ruble".
    ///
    /// `None` for unrecognized codes.
    pub fn currency_name_by_symbol(&self, symbol: &str, locale: &Locale) -> Option<String> {
        let code = CurrencyCode::verbatim(symbol)?;
        self.display_name(&code, locale)
    }

    /// Localized country name, or "Unknown (<code>)".
    ///
    /// A configured fallback locale is tried before the registry's English
    /// name when the requested language has no translation.
    pub fn country_code_to_name(&self, numeric: i32, locale: &Locale) -> String {
        if self.countries.translated_name(numeric, locale).is_none() {
            if let Some(fallback) = self.config.fallback_locale.filter(|f| f != locale) {
                if let Some(name) = self.countries.translated_name(numeric, &fallback) {
                    tracing::debug!("No {} name for country {}, using {}", locale, numeric, fallback);
                    return name.to_string();
                }
            }
        }
        self.countries.country_name(numeric, locale)
    }

    /// Identity text, with the configured placeholder for `Unknown`.
    pub fn format_identity(&self, identity: &CurrencyIdentity) -> String {
        identity
            .display_with(&self.config.unknown_placeholder)
            .to_string()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn currencies(&self) -> &CurrencyRegistry {
        &self.currencies
    }

    pub fn countries(&self) -> &CountryRegistry {
        &self.countries
    }

    fn display_name(&self, code: &CurrencyCode, locale: &Locale) -> Option<String> {
        if let Some(name) = self.locale_data.currency_display_name(code, locale) {
            tracing::trace!("Currency {} in {}: {}", code, locale, name);
            return Some(name);
        }

        if self.locale_data.supports(locale) {
            tracing::debug!(
                "No {} display name for currency {} in {}",
                self.locale_data.name(),
                code,
                locale
            );
        } else {
            tracing::debug!("No {} locale data for {}", self.locale_data.name(), locale);
        }

        let fallback = self.config.fallback_locale.filter(|f| f != locale)?;
        self.locale_data.currency_display_name(code, &fallback)
    }
}

impl std::fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameResolver")
            .field("config", &self.config)
            .field("currencies", &self.currencies.len())
            .field("countries", &self.countries.len())
            .field("locale_data", &self.locale_data.name())
            .finish()
    }
}
