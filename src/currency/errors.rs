// ============================================================================
// Currency Errors
// Error types for currency construction and arithmetic
// ============================================================================

use super::identity::CurrencyIdentity;
use std::fmt;

/// Errors raised by invalid operations on currency values.
///
/// Missing data (unknown codes, absent translations) is never an error;
/// those resolve to sentinels or `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// Arithmetic across two different currencies
    CurrencyMismatch {
        left: CurrencyIdentity,
        right: CurrencyIdentity,
    },
    /// Divisor was zero or negative
    InvalidDivisor(i64),
    /// Alphabetic code is empty, too long or not ASCII alphanumeric
    InvalidCode(String),
    /// Locale tag could not be parsed
    InvalidLocale(String),
    /// Result left the representable range
    Overflow,
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::CurrencyMismatch { left, right } => {
                write!(f, "invalid operation: currency mismatch ({} vs {})", left, right)
            },
            CurrencyError::InvalidDivisor(divisor) => {
                write!(f, "invalid operation: divisor must be positive, got {}", divisor)
            },
            CurrencyError::InvalidCode(code) => write!(f, "invalid currency code: {:?}", code),
            CurrencyError::InvalidLocale(tag) => write!(f, "invalid locale tag: {:?}", tag),
            CurrencyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
