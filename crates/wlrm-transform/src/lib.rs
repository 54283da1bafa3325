//! Rule classification and conversion.
//!
//! Two steps, both order preserving:
//! 1. **Classify**: keep rules whose vendor type maps to a Terraform resource
//! 2. **Transform**: derive the import id and resource name for each kept rule

#![deny(unsafe_code)]

pub mod classify;
pub mod digest;
pub mod error;
pub mod stats;
pub mod transform;

pub use classify::{SupportedRule, classify, filter_supported};
pub use digest::md5_hex;
pub use error::TransformError;
pub use stats::TransformStats;
pub use transform::{TransformOutcome, import_id_suffix, transform_rule, transform_rules};
