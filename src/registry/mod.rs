// ============================================================================
// Registry Module
// Immutable lookup tables for currencies and countries
// ============================================================================
//
// Registries are plain values: construct them once, share them behind an
// Arc, and pass them to whatever needs a lookup. There is no global
// instance.

mod country;
mod currency;
mod iso4217;

pub use country::CountryRegistry;
pub use currency::{CurrencyEntry, CurrencyRegistry, DEFAULT_DIVISOR};
