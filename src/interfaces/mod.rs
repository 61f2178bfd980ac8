// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod locale_data;

pub use locale_data::{LocaleData, NoLocaleData};
