// ============================================================================
// Currency Identity
// Canonical currency designation carried by every value
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use arrayvec::ArrayString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest code stored, in bytes. Card data carries ISO codes (3) and
/// occasionally longer proprietary ones.
pub const MAX_CODE_LEN: usize = 16;

/// Text rendered for [`CurrencyIdentity::Unknown`] (ISO 4217 "no currency")
pub const UNKNOWN_PLACEHOLDER: &str = "XXX";

// ============================================================================
// Currency Code
// ============================================================================

/// Short currency code, stored inline and verbatim.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CurrencyCode(ArrayString<MAX_CODE_LEN>);

impl CurrencyCode {
    /// Validate and wrap a well-formed alphabetic code.
    ///
    /// # Errors
    /// Returns `InvalidCode` if the code is empty, longer than
    /// [`MAX_CODE_LEN`] or contains anything but ASCII letters and digits.
    pub fn new(code: &str) -> CurrencyResult<Self> {
        if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        }
        Self::verbatim(code).ok_or_else(|| CurrencyError::InvalidCode(code.to_string()))
    }

    /// Wrap any non-empty code that fits in [`MAX_CODE_LEN`] bytes, as is.
    pub fn verbatim(code: &str) -> Option<Self> {
        if code.is_empty() {
            return None;
        }
        ArrayString::from(code).ok().map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::verbatim(&value).ok_or(CurrencyError::InvalidCode(value))
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

// ============================================================================
// Currency Identity
// ============================================================================

/// Resolved identity of a currency value.
///
/// `Unknown` replaces the "XXX" string sentinel; the placeholder text only
/// appears when an identity is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyIdentity {
    /// A currency designated by its alphabetic code
    Known(CurrencyCode),
    /// A currency code with no registry entry
    Unknown,
}

impl CurrencyIdentity {
    /// Identity for an alphabetic code, taken verbatim. Never fails.
    ///
    /// The reserved placeholder `XXX` maps to `Unknown` so that alphabetic
    /// and numeric construction agree on the "no currency" identity. Codes
    /// that cannot be stored (empty, or over [`MAX_CODE_LEN`] bytes) are
    /// also `Unknown`.
    pub fn from_alphabetic(code: &str) -> Self {
        if code == UNKNOWN_PLACEHOLDER {
            return Self::Unknown;
        }
        match CurrencyCode::verbatim(code) {
            Some(code) => Self::Known(code),
            None => {
                tracing::debug!("Unusable alphabetic currency code {:?}", code);
                Self::Unknown
            }
        }
    }

    #[inline]
    pub fn code(&self) -> Option<CurrencyCode> {
        match self {
            Self::Known(code) => Some(*code),
            Self::Unknown => None,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Render with a caller-chosen placeholder for `Unknown`.
    pub fn display_with<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Self::Known(code) => code.as_str(),
            Self::Unknown => placeholder,
        }
    }
}

impl fmt::Display for CurrencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_with(UNKNOWN_PLACEHOLDER))
    }
}

// ============================================================================
// Raw Input Codes
// ============================================================================

/// Currency code as it arrives from a card record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawCurrencyCode<'a> {
    /// ISO 4217 style numeric code (may be unassigned or proprietary)
    Numeric(i32),
    /// Alphabetic code, used verbatim
    Alphabetic(&'a str),
}

impl From<i32> for RawCurrencyCode<'_> {
    fn from(code: i32) -> Self {
        RawCurrencyCode::Numeric(code)
    }
}

impl From<u16> for RawCurrencyCode<'_> {
    fn from(code: u16) -> Self {
        RawCurrencyCode::Numeric(i32::from(code))
    }
}

impl<'a> From<&'a str> for RawCurrencyCode<'a> {
    fn from(code: &'a str) -> Self {
        RawCurrencyCode::Alphabetic(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_validation() {
        assert_eq!(CurrencyCode::new("AUD").unwrap().as_str(), "AUD");
        assert_eq!(CurrencyCode::new("aud").unwrap().as_str(), "aud");
        assert_eq!(CurrencyCode::new("LONGCODE9").unwrap().as_str(), "LONGCODE9");

        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("A D").is_err());
        assert!(CurrencyCode::new("РУБ").is_err());
        assert_eq!(
            CurrencyCode::new("TRANSIT-1"),
            Err(CurrencyError::InvalidCode("TRANSIT-1".to_string()))
        );
        assert_eq!(
            CurrencyCode::new("SEVENTEENCHARCODE"),
            Err(CurrencyError::InvalidCode("SEVENTEENCHARCODE".to_string()))
        );
    }

    #[test]
    fn test_verbatim_code() {
        assert_eq!(CurrencyCode::verbatim("TRANSIT-1").unwrap().as_str(), "TRANSIT-1");
        assert_eq!(CurrencyCode::verbatim("РУБ").unwrap().as_str(), "РУБ");
        assert!(CurrencyCode::verbatim("").is_none());
        assert!(CurrencyCode::verbatim("SEVENTEENCHARCODE").is_none());
    }

    #[test]
    fn test_identity_from_alphabetic() {
        let aud = CurrencyIdentity::from_alphabetic("AUD");
        assert_eq!(aud.code().unwrap().as_str(), "AUD");
        assert!(aud.is_known());

        let proprietary = CurrencyIdentity::from_alphabetic("TRANSIT-1");
        assert_eq!(proprietary.to_string(), "TRANSIT-1");

        assert_eq!(CurrencyIdentity::from_alphabetic("XXX"), CurrencyIdentity::Unknown);
        assert_eq!(CurrencyIdentity::from_alphabetic(""), CurrencyIdentity::Unknown);
        assert_eq!(
            CurrencyIdentity::from_alphabetic("SEVENTEENCHARCODE"),
            CurrencyIdentity::Unknown
        );
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(CurrencyIdentity::Unknown.to_string(), "XXX");
        assert_eq!(CurrencyIdentity::Unknown.display_with("???"), "???");

        let jpy = CurrencyIdentity::from_alphabetic("JPY");
        assert_eq!(jpy.to_string(), "JPY");
        assert_eq!(jpy.display_with("???"), "JPY");
    }

    #[test]
    fn test_raw_code_conversions() {
        assert_eq!(RawCurrencyCode::from(36), RawCurrencyCode::Numeric(36));
        assert_eq!(RawCurrencyCode::from(840u16), RawCurrencyCode::Numeric(840));
        assert_eq!(RawCurrencyCode::from("EUR"), RawCurrencyCode::Alphabetic("EUR"));
    }
}
