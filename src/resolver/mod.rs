// ============================================================================
// Resolver Module
// Localized display names for currencies and countries
// ============================================================================

pub mod config;
pub mod factory;
mod name_resolver;

pub use config::ResolverConfig;
pub use factory::{create_from_config, NameResolverBuilder};
pub use name_resolver::NameResolver;
