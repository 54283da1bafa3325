//! Vendor rule type to Terraform resource type lookups.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Every known Wallarm rule type, in provider documentation order.
///
/// `None` marks rule types the Terraform provider has no resource for; such
/// rules are dropped just like unknown types.
pub const RULE_TYPE_TABLE: &[(&str, Option<&str>)] = &[
    ("disable_attack_type", Some("wallarm_rule_disable_attack_type")),
    ("parser_state", Some("wallarm_rule_parser_state")),
    ("disable_regex", Some("wallarm_rule_ignore_regex")),
    ("regex", Some("wallarm_rule_regex")),
    // Experimental regexes share the regex resource; the import id tells them apart.
    ("experimental_regex", Some("wallarm_rule_regex")),
    ("binary_data", Some("wallarm_rule_binary_data")),
    ("uploads", Some("wallarm_rule_uploads")),
    ("overlimit_res_settings", Some("wallarm_rule_overlimit_res_settings")),
    ("vpatch", Some("wallarm_rule_vpatch")),
    ("attack_rechecker", Some("wallarm_rule_attack_rechecker")),
    ("attack_rechecker_rewrite", Some("wallarm_rule_attack_rechecker_rewrite")),
    ("set_response_header", Some("wallarm_rule_set_response_header")),
    ("wallarm_mode", Some("wallarm_rule_mode")),
    ("sensitive_data", Some("wallarm_rule_masking")),
    ("rate_limit", Some("wallarm_rule_rate_limit")),
    ("enum", Some("wallarm_rule_enum")),
    ("brute", Some("wallarm_rule_brute")),
    ("bola", Some("wallarm_rule_bola")),
    ("forced_browsing", Some("wallarm_rule_forced_browsing")),
    ("rate_limit_enum", Some("wallarm_rule_rate_limit_enum")),
    ("graphql_detection", Some("wallarm_rule_graphql_detection")),
    ("file_upload_size_limit", Some("wallarm_rule_file_upload_size_limit")),
    ("api_abuse_mode", None),
];

static RESOURCE_TYPES: LazyLock<HashMap<&'static str, Option<&'static str>>> =
    LazyLock::new(|| RULE_TYPE_TABLE.iter().copied().collect());

/// Get the Terraform resource type for a vendor rule type.
///
/// Returns `None` for unknown types and for types without a resource.
///
/// # Examples
///
/// ```
/// use wlrm_model::resource_type_for;
///
/// assert_eq!(resource_type_for("disable_regex"), Some("wallarm_rule_ignore_regex"));
/// assert_eq!(resource_type_for("api_abuse_mode"), None);
/// assert_eq!(resource_type_for("nope"), None);
/// ```
pub fn resource_type_for(vendor_type: &str) -> Option<&'static str> {
    RESOURCE_TYPES.get(vendor_type).copied().flatten()
}

/// Whether rules of this vendor type are converted.
pub fn is_supported(vendor_type: &str) -> bool {
    resource_type_for(vendor_type).is_some()
}
