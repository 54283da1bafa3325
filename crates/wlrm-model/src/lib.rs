//! Data model for the Wallarm rules to Terraform import converter.
//!
//! - [`RuleRecord`]: one entry of the Wallarm rules export
//! - [`rule_type`]: static vendor rule-type to Terraform resource-type table
//! - [`ImportTarget`]: the derived, render-ready import target for one rule
//! - [`NamePrefix`] / [`TransformOptions`]: knobs shared by the transform and CLI crates

#![deny(unsafe_code)]

pub mod options;
pub mod rule;
pub mod rule_type;
pub mod scalar;
pub mod target;

pub use options::{NamePrefix, TransformOptions};
pub use rule::{RuleField, RuleRecord};
pub use rule_type::{RULE_TYPE_TABLE, is_supported, resource_type_for};
pub use scalar::format_scalar;
pub use target::ImportTarget;
