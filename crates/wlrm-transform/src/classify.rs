//! Selection of rules the Terraform provider can import.

use tracing::debug;

use wlrm_model::RuleRecord;

/// A rule whose vendor type has a Terraform resource.
#[derive(Debug, Clone, Copy)]
pub struct SupportedRule<'a> {
    pub record: &'a RuleRecord,
    pub vendor_type: &'a str,
    pub resource_type: &'static str,
}

/// Classify one rule. `None` for unknown types and types without a resource.
pub fn classify(record: &RuleRecord) -> Option<SupportedRule<'_>> {
    let vendor_type = record.vendor_type()?;
    let resource_type = record.resource_type()?;
    Some(SupportedRule {
        record,
        vendor_type,
        resource_type,
    })
}

/// Stable filter over an export's rules.
///
/// Dropped rules are only reported at debug level.
pub fn filter_supported(records: &[RuleRecord]) -> impl Iterator<Item = SupportedRule<'_>> {
    records.iter().filter_map(|record| {
        let supported = classify(record);
        if supported.is_none() {
            debug!(
                rule_type = record.vendor_type().unwrap_or("<none>"),
                rule_id = %record.display_id(),
                "skipping unsupported rule"
            );
        }
        supported
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rule(rule_type: &str, id: i64) -> RuleRecord {
        RuleRecord::from_value(json!({"type": rule_type, "clientid": 1, "actionid": 2, "id": id}))
    }

    #[test]
    fn keeps_supported_rules_in_order() {
        let records = vec![
            rule("vpatch", 1),
            rule("api_abuse_mode", 2),
            rule("regex", 3),
            rule("unknown_thing", 4),
            rule("brute", 5),
        ];

        let kept: Vec<_> = filter_supported(&records)
            .map(|rule| rule.record.display_id())
            .collect();

        assert_eq!(kept, vec!["1", "3", "5"]);
    }

    #[test]
    fn classify_reports_both_types() {
        let record = rule("experimental_regex", 9);
        let supported = classify(&record).expect("supported");
        assert_eq!(supported.vendor_type, "experimental_regex");
        assert_eq!(supported.resource_type, "wallarm_rule_regex");
    }

    #[test]
    fn untyped_record_is_dropped() {
        assert!(classify(&RuleRecord::default()).is_none());
    }
}
