//! Rule to import target conversion.
//!
//! - import id: `{clientid}/{actionid}/{id}` plus a suffix for rule types
//!   whose provider import needs one
//! - resource name: `{prefix}_{md5(id)}`, stable across runs and always a
//!   valid Terraform identifier

use tracing::warn;

use wlrm_model::{ImportTarget, NamePrefix, RuleField, RuleRecord, TransformOptions};

use crate::classify::{SupportedRule, filter_supported};
use crate::digest::md5_hex;
use crate::error::TransformError;
use crate::stats::TransformStats;

/// Converted targets plus counts for reporting.
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub targets: Vec<ImportTarget>,
    pub stats: TransformStats,
}

/// Import id suffix for a vendor rule type.
///
/// `mode` is only read for `wallarm_mode` rules.
pub fn import_id_suffix(vendor_type: &str, mode: &str) -> String {
    match vendor_type {
        "wallarm_mode" => format!("/{mode}"),
        "regex" => "/regex".to_string(),
        "experimental_regex" => "/experimental_regex".to_string(),
        _ => String::new(),
    }
}

/// Convert one supported rule.
///
/// # Errors
///
/// In strict mode, returns [`TransformError::MissingField`] when an identifier
/// field is absent or `null`. Otherwise an absent field renders as
/// `undefined` and a `null` one as `null`.
pub fn transform_rule(
    rule: SupportedRule<'_>,
    options: &TransformOptions,
) -> Result<ImportTarget, TransformError> {
    build_target(rule, options).map(|(target, _)| target)
}

/// Classify and convert every rule of an export, keeping input order.
///
/// # Errors
///
/// Propagates the first [`TransformError`] (strict mode only).
pub fn transform_rules(
    records: &[RuleRecord],
    options: &TransformOptions,
) -> Result<TransformOutcome, TransformError> {
    let mut stats = TransformStats::new(records.len());
    let mut targets = Vec::new();
    for rule in filter_supported(records) {
        let (target, gaps) = build_target(rule, options)?;
        stats.record(&target, gaps > 0);
        targets.push(target);
    }
    Ok(TransformOutcome { targets, stats })
}

/// Text an absent field contributes to an import id or resource name.
const MISSING_TEXT: &str = "undefined";

fn build_target(
    rule: SupportedRule<'_>,
    options: &TransformOptions,
) -> Result<(ImportTarget, usize), TransformError> {
    let mut gaps = 0;
    let mut field = |name: RuleField| -> Result<String, TransformError> {
        if !rule.record.is_blank(name) {
            return Ok(rule.record.field(name).unwrap_or_default());
        }
        if options.strict {
            return Err(TransformError::MissingField {
                rule_id: rule.record.display_id(),
                vendor_type: rule.vendor_type.to_string(),
                field: name,
            });
        }
        warn!(
            rule_type = rule.vendor_type,
            rule_id = %rule.record.display_id(),
            field = %name,
            "rule is missing a field, import id will have a gap"
        );
        gaps += 1;
        Ok(rule
            .record
            .field(name)
            .unwrap_or_else(|| MISSING_TEXT.to_string()))
    };

    let clientid = field(RuleField::ClientId)?;
    let actionid = field(RuleField::ActionId)?;
    let id = field(RuleField::Id)?;
    let mode = if rule.vendor_type == "wallarm_mode" {
        field(RuleField::Mode)?
    } else {
        String::new()
    };

    let suffix = import_id_suffix(rule.vendor_type, &mode);
    let prefix = match options.name_prefix {
        NamePrefix::ResourceType => rule.resource_type,
        NamePrefix::VendorType => rule.vendor_type,
    };

    let target = ImportTarget {
        vendor_type: rule.vendor_type.to_string(),
        resource_type: rule.resource_type.to_string(),
        resource_name: format!("{prefix}_{}", md5_hex(&id)),
        import_id: format!("{clientid}/{actionid}/{id}{suffix}"),
    };
    Ok((target, gaps))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::classify::classify;

    fn convert(value: serde_json::Value, options: &TransformOptions) -> ImportTarget {
        let record = RuleRecord::from_value(value);
        let rule = classify(&record).expect("supported rule");
        transform_rule(rule, options).expect("transform")
    }

    #[test]
    fn regex_rule() {
        let target = convert(
            json!({"type": "regex", "clientid": "c1", "actionid": "a1", "id": 42}),
            &TransformOptions::default(),
        );
        assert_eq!(target.vendor_type, "regex");
        assert_eq!(target.resource_type, "wallarm_rule_regex");
        assert_eq!(target.import_id, "c1/a1/42/regex");
        assert_eq!(
            target.resource_name,
            "wallarm_rule_regex_a1d0c6e83f027327d8461063f4ac58a6"
        );
    }

    #[test]
    fn mode_rule_appends_mode() {
        let target = convert(
            json!({"type": "wallarm_mode", "clientid": "c1", "actionid": "a1", "id": 7, "mode": "block"}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "c1/a1/7/block");
        assert_eq!(target.resource_type, "wallarm_rule_mode");
    }

    #[test]
    fn experimental_regex_suffix() {
        let target = convert(
            json!({"type": "experimental_regex", "clientid": 1, "actionid": 2, "id": 3}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "1/2/3/experimental_regex");
        assert_eq!(target.resource_type, "wallarm_rule_regex");
    }

    #[test]
    fn plain_rule_ends_with_id() {
        let target = convert(
            json!({"type": "sensitive_data", "clientid": 1, "actionid": 2, "id": 3, "mode": "block"}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "1/2/3");
        assert_eq!(target.resource_type, "wallarm_rule_masking");
    }

    #[test]
    fn vendor_type_prefix() {
        let target = convert(
            json!({"type": "regex", "clientid": 1, "actionid": 2, "id": 42}),
            &TransformOptions::new().with_name_prefix(NamePrefix::VendorType),
        );
        assert_eq!(target.resource_name, "regex_a1d0c6e83f027327d8461063f4ac58a6");
    }

    #[test]
    fn lenient_mode_renders_gaps() {
        let target = convert(
            json!({"type": "wallarm_mode", "actionid": 2, "id": 3}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "undefined/2/3/undefined");
    }

    #[test]
    fn null_fields_render_as_null() {
        let target = convert(
            json!({"type": "wallarm_mode", "clientid": 1, "actionid": 2, "id": null, "mode": null}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "1/2/null/null");
        assert_eq!(
            target.resource_name,
            format!("wallarm_rule_mode_{}", md5_hex("null"))
        );
    }

    #[test]
    fn absent_id_digests_undefined() {
        let target = convert(
            json!({"type": "vpatch", "clientid": 1, "actionid": 2}),
            &TransformOptions::default(),
        );
        assert_eq!(target.import_id, "1/2/undefined");
        assert_eq!(
            target.resource_name,
            "wallarm_rule_vpatch_5e543256c480ac577d30f76f9120eb74"
        );
    }

    #[test]
    fn strict_mode_rejects_null_fields() {
        let record = RuleRecord::from_value(
            json!({"type": "wallarm_mode", "clientid": 1, "actionid": 2, "id": 3, "mode": null}),
        );
        let rule = classify(&record).expect("supported rule");

        let err = transform_rule(rule, &TransformOptions::new().with_strict(true)).unwrap_err();

        assert!(matches!(
            err,
            TransformError::MissingField {
                field: RuleField::Mode,
                ..
            }
        ));
    }

    #[test]
    fn strict_mode_rejects_missing_fields() {
        let record = RuleRecord::from_value(json!({"type": "vpatch", "clientid": 1, "id": 3}));
        let rule = classify(&record).expect("supported rule");

        let err = transform_rule(rule, &TransformOptions::new().with_strict(true)).unwrap_err();

        assert!(matches!(
            err,
            TransformError::MissingField {
                field: RuleField::ActionId,
                ..
            }
        ));
        assert_eq!(err.to_string(), "rule 3 (vpatch) is missing `actionid`");
    }

    #[test]
    fn suffix_table() {
        assert_eq!(import_id_suffix("wallarm_mode", "monitoring"), "/monitoring");
        assert_eq!(import_id_suffix("regex", "ignored"), "/regex");
        assert_eq!(import_id_suffix("vpatch", "ignored"), "");
    }
}
