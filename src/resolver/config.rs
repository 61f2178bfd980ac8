// ============================================================================
// Resolver Configuration
// Fallback and placeholder settings for name resolution
// ============================================================================

use crate::currency::UNKNOWN_PLACEHOLDER;
use crate::locale::Locale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`NameResolver`](super::NameResolver)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolverConfig {
    /// Locale tried when the requested one has no currency name.
    /// None means "no data" is returned straight away.
    pub fallback_locale: Option<Locale>,

    /// Text shown for the unknown currency identity
    pub unknown_placeholder: String,
}

impl ResolverConfig {
    /// Create a configuration with no fallback and the ISO placeholder
    pub fn new() -> Self {
        Self {
            fallback_locale: None,
            unknown_placeholder: UNKNOWN_PLACEHOLDER.to_string(),
        }
    }

    /// Builder method: Set the fallback locale
    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    /// Builder method: Set the unknown-currency placeholder
    pub fn with_unknown_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.unknown_placeholder = placeholder.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.unknown_placeholder.is_empty() {
            return Err("Unknown placeholder cannot be empty".to_string());
        }

        if !self
            .unknown_placeholder
            .bytes()
            .all(|b| b.is_ascii_alphanumeric())
        {
            return Err("Unknown placeholder must be ASCII alphanumeric".to_string());
        }

        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ResolverConfig {
    /// Missing locale data is reported as-is
    pub fn strict() -> Self {
        Self::new()
    }

    /// Missing translations fall back to English names
    pub fn english_fallback() -> Self {
        Self::new().with_fallback_locale(Locale::english())
    }
}
