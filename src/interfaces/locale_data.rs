// ============================================================================
// Locale Data Interface
// Defines the contract for platform currency display-name data
// ============================================================================

use crate::currency::CurrencyCode;
use crate::locale::Locale;

/// Source of localized currency display names.
///
/// Platforms differ in how much locale data they ship, so every lookup may
/// come back empty; callers treat `None` as "no data", never as an error.
pub trait LocaleData: Send + Sync {
    /// Display name of `code` in `locale`, in that language's own casing.
    fn currency_display_name(&self, code: &CurrencyCode, locale: &Locale) -> Option<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Whether any data exists for the locale's language
    fn supports(&self, _locale: &Locale) -> bool {
        true
    }
}

/// Provider for platforms without locale tables
pub struct NoLocaleData;

impl LocaleData for NoLocaleData {
    fn currency_display_name(&self, _code: &CurrencyCode, _locale: &Locale) -> Option<String> {
        None
    }

    fn name(&self) -> &str {
        "none"
    }

    fn supports(&self, _locale: &Locale) -> bool {
        false
    }
}
