// strata-core/src/application/mod.rs

pub mod conversion;
pub mod resolution;
pub mod selection;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use strata_core::application::{convert_all, resolve_active, by_kind, validate_all};`
// sans avoir à connaître la structure interne des fichiers.

pub use conversion::convert_all;
pub use resolution::{ActiveTargetQuery, resolve_active};
pub use selection::by_kind;
pub use validation::validate_all;
