// ============================================================================
// Currency Module
// Currency identities, values and their errors
// ============================================================================
//
// This module provides:
// - CurrencyCode / CurrencyIdentity: canonical currency designation
// - CurrencyValue: immutable (amount, divisor, identity) with exact arithmetic
// - CurrencyError: invalid-operation errors for construction and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Unknown codes are data, not errors

mod errors;
mod identity;
mod value;

pub use errors::{CurrencyError, CurrencyResult};
pub use identity::{
    CurrencyCode, CurrencyIdentity, RawCurrencyCode, MAX_CODE_LEN, UNKNOWN_PLACEHOLDER,
};
pub use value::CurrencyValue;
