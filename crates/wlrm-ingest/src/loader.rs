//! Rules export loading.
//!
//! The export is the JSON body of the Wallarm rules API: an object whose
//! `body` field holds the rule array. The whole file is read and parsed at
//! once.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use wlrm_model::RuleRecord;

use crate::error::IngestError;

/// Field of the export object holding the rule array.
pub const DEFAULT_RULES_FIELD: &str = "body";

/// Rules loaded from one export file, in file order.
#[derive(Debug, Clone)]
pub struct RulesExport {
    pub source: PathBuf,
    pub rules: Vec<RuleRecord>,
}

impl RulesExport {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Read and parse a rules export file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON, or has no
/// usable rule array under `field`.
pub fn load_rules(path: &Path, field: &str) -> Result<RulesExport, IngestError> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read rules export");
    let document: Value = serde_json::from_str(&text).map_err(|e| IngestError::json(path, e))?;
    let rules = extract_rules(document, field)?;
    Ok(RulesExport {
        source: path.to_path_buf(),
        rules,
    })
}

/// Parse export text already held in memory.
///
/// # Errors
///
/// Same as [`load_rules`], minus file access.
pub fn parse_rules(text: &str, field: &str) -> Result<Vec<RuleRecord>, IngestError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| IngestError::json("<memory>", e))?;
    extract_rules(document, field)
}

/// Pull the rule array out of a parsed export document.
///
/// An absent or `null` field means there is nothing to convert. An empty
/// array is valid and yields no rules.
///
/// # Errors
///
/// [`IngestError::MissingRules`] for an absent or `null` field,
/// [`IngestError::InvalidRules`] when the field is not an array.
pub fn extract_rules(document: Value, field: &str) -> Result<Vec<RuleRecord>, IngestError> {
    let Value::Object(mut object) = document else {
        return Err(IngestError::MissingRules {
            field: field.to_string(),
        });
    };
    match object.remove(field) {
        None | Some(Value::Null) => Err(IngestError::MissingRules {
            field: field.to_string(),
        }),
        Some(Value::Array(items)) => Ok(items.into_iter().map(RuleRecord::from_value).collect()),
        Some(other) => Err(IngestError::InvalidRules {
            field: field.to_string(),
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
