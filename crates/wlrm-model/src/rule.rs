//! A single rule as it appears in the Wallarm rules export.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::rule_type::resource_type_for;
use crate::scalar::format_scalar;

/// One entry of the export's rule array.
///
/// Identifier fields are kept as raw JSON values: the export uses numbers for
/// most of them, but nothing guarantees it. An absent field is `None`; an
/// explicit `null` is kept as `Some(Value::Null)`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Vendor rule type (`regex`, `wallarm_mode`, ...).
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub rule_type: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub clientid: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub actionid: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    /// Only meaningful for `wallarm_mode` rules.
    #[serde(default, deserialize_with = "present")]
    pub mode: Option<Value>,
}

/// Keeps `null` apart from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RuleRecord {
    /// Build a record from one element of the rule array.
    ///
    /// Elements that are not JSON objects yield an empty record, which has no
    /// type and is therefore dropped by classification.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The vendor type, when it is a string.
    pub fn vendor_type(&self) -> Option<&str> {
        self.rule_type.as_ref().and_then(Value::as_str)
    }

    /// Terraform resource type for this rule, or `None` when unsupported.
    pub fn resource_type(&self) -> Option<&'static str> {
        self.vendor_type().and_then(resource_type_for)
    }

    /// Raw identifier value, `None` when the field is absent.
    pub fn value(&self, field: RuleField) -> Option<&Value> {
        match field {
            RuleField::ClientId => self.clientid.as_ref(),
            RuleField::ActionId => self.actionid.as_ref(),
            RuleField::Id => self.id.as_ref(),
            RuleField::Mode => self.mode.as_ref(),
        }
    }

    /// Stringified identifier field, `None` when the field is absent.
    ///
    /// An explicit `null` renders as `null`.
    pub fn field(&self, field: RuleField) -> Option<String> {
        self.value(field).map(format_scalar)
    }

    /// Absent or `null`.
    pub fn is_blank(&self, field: RuleField) -> bool {
        matches!(self.value(field), None | Some(Value::Null))
    }

    /// Rule id for diagnostics; `<none>` when absent.
    pub fn display_id(&self) -> String {
        self.field(RuleField::Id)
            .unwrap_or_else(|| "<none>".to_string())
    }
}

/// Identifier fields that feed the import id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    ClientId,
    ActionId,
    Id,
    Mode,
}

impl RuleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleField::ClientId => "clientid",
            RuleField::ActionId => "actionid",
            RuleField::Id => "id",
            RuleField::Mode => "mode",
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
