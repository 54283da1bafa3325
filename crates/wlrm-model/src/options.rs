//! Options controlling how rules are turned into import targets.

use serde::{Deserialize, Serialize};

/// Which type string prefixes the generated Terraform resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamePrefix {
    /// `wallarm_rule_regex_<digest>`.
    #[default]
    ResourceType,
    /// `regex_<digest>`. Keeps `regex` and `experimental_regex` rules with the
    /// same id apart.
    VendorType,
}

/// Options for the transform stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Prefix used for `resource_name`.
    pub name_prefix: NamePrefix,
    /// Fail on rules with missing identifier fields instead of rendering gaps.
    pub strict: bool,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name_prefix(mut self, prefix: NamePrefix) -> Self {
        self.name_prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
