#![deny(unsafe_code)]

pub mod error;
pub mod loader;

pub use error::IngestError;
pub use loader::{DEFAULT_RULES_FIELD, RulesExport, extract_rules, load_rules, parse_rules};
