// ============================================================================
// Locale Module
// Display locales and the bundled locale data tables
// ============================================================================
//
// The locale is always an explicit parameter; nothing in this crate reads
// a process-wide "current locale".

mod bundled;

pub use bundled::BundledLocaleData;

use crate::currency::CurrencyError;
use arrayvec::ArrayString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A display locale: lower-case language plus optional upper-case region.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Locale {
    language: ArrayString<8>,
    region: Option<ArrayString<3>>,
}

impl Locale {
    /// Parse a BCP-47 style tag such as `en-US`, `ru_RU` or `de`.
    ///
    /// Script and variant subtags are skipped. Returns `None` when the
    /// language subtag is missing or malformed.
    pub fn parse(tag: &str) -> Option<Self> {
        let mut subtags = tag.trim().split(['-', '_']);

        let language = subtags.next()?;
        if !(2..=8).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let language = ArrayString::from(&language.to_ascii_lowercase()).ok()?;

        let region = subtags
            .find(|s| {
                (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
                    || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
            })
            .and_then(|s| ArrayString::from(&s.to_ascii_uppercase()).ok());

        Some(Self { language, region })
    }

    /// `en-US`
    pub fn english() -> Self {
        Self::fixed("en", Some("US"))
    }

    /// `ru-RU`
    pub fn russian() -> Self {
        Self::fixed("ru", Some("RU"))
    }

    fn fixed(language: &str, region: Option<&str>) -> Self {
        Self {
            language: ArrayString::from(language).unwrap_or_default(),
            region: region.and_then(|r| ArrayString::from(r).ok()),
        }
    }

    #[inline]
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.as_str())
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale({})", self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region() {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(self.language()),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CurrencyError::InvalidLocale(s.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
