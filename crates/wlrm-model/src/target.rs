/// A rule converted into a Terraform import target.
///
/// Built fresh from a [`crate::RuleRecord`]; the input record is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTarget {
    /// Vendor rule type the target was derived from.
    pub vendor_type: String,
    /// Terraform resource type, e.g. `wallarm_rule_regex`.
    pub resource_type: String,
    /// Deterministic Terraform resource name.
    pub resource_name: String,
    /// Provider import id, `clientid/actionid/id[/suffix]`.
    pub import_id: String,
}

impl ImportTarget {
    /// Terraform address, `<resource_type>.<resource_name>`.
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.resource_name)
    }
}
