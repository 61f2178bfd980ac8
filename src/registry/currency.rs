// ============================================================================
// Currency Registry
// Immutable numeric-code lookup for currency identity and divisor
// ============================================================================

use super::iso4217::ISO4217_TABLE;
use crate::currency::{CurrencyCode, CurrencyIdentity};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minor units per major unit when nothing else is known
pub const DEFAULT_DIVISOR: i32 = 100;

/// One row of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyEntry {
    /// Numeric code (ISO 4217 or scheme-specific)
    pub numeric: u16,
    /// Canonical alphabetic code
    pub code: CurrencyCode,
    /// Minor units per major unit, when it differs from [`DEFAULT_DIVISOR`]
    pub divisor: Option<i32>,
}

impl CurrencyEntry {
    pub fn new(numeric: u16, code: CurrencyCode, divisor: Option<i32>) -> Self {
        Self {
            numeric,
            code,
            divisor,
        }
    }
}

/// Read-only table from numeric currency codes to identities.
///
/// Built once and shared (typically behind an `Arc`); every lookup is a
/// plain `&self` read, so concurrent use needs no locking.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    by_numeric: HashMap<u16, CurrencyEntry>,
    by_code: HashMap<CurrencyCode, u16>,
}

impl CurrencyRegistry {
    /// Registry with the bundled ISO 4217 table.
    pub fn iso4217() -> Self {
        Self::from_entries(ISO4217_TABLE.iter().filter_map(|&(numeric, code, divisor)| {
            CurrencyCode::new(code)
                .ok()
                .map(|code| CurrencyEntry::new(numeric, code, divisor))
        }))
    }

    /// Registry from custom entries. Later entries replace earlier ones
    /// with the same numeric code; non-positive divisor overrides are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = CurrencyEntry>) -> Self {
        let mut registry = Self::default();
        for mut entry in entries {
            if matches!(entry.divisor, Some(d) if d <= 0) {
                tracing::warn!(
                    "Ignoring non-positive divisor override {:?} for currency {}",
                    entry.divisor,
                    entry.numeric
                );
                entry.divisor = None;
            }
            if let Some(previous) = registry.by_numeric.insert(entry.numeric, entry) {
                // Only drop the reverse mapping if it still points at the replaced row
                if registry.by_code.get(&previous.code) == Some(&previous.numeric) {
                    registry.by_code.remove(&previous.code);
                }
            }
            registry.by_code.insert(entry.code, entry.numeric);
        }
        registry
    }

    /// Resolve a numeric code. Never fails: misses become `Unknown`.
    pub fn resolve(&self, numeric: i32) -> CurrencyIdentity {
        match self.entry(numeric) {
            Some(entry) => {
                tracing::trace!("Resolved currency {} to {}", numeric, entry.code);
                CurrencyIdentity::Known(entry.code)
            }
            None => {
                tracing::debug!("Unknown numeric currency code {}", numeric);
                CurrencyIdentity::Unknown
            }
        }
    }

    /// Registry row for a numeric code, if any.
    pub fn entry(&self, numeric: i32) -> Option<&CurrencyEntry> {
        let numeric = u16::try_from(numeric).ok()?;
        self.by_numeric.get(&numeric)
    }

    /// Divisor override for a numeric code, if the registry has one.
    pub fn divisor_override(&self, numeric: i32) -> Option<i32> {
        self.entry(numeric).and_then(|entry| entry.divisor)
    }

    /// Reverse lookup: numeric code for an alphabetic one.
    pub fn numeric_code(&self, code: &CurrencyCode) -> Option<u16> {
        self.by_code.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.by_numeric.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_numeric.is_empty()
    }
}
