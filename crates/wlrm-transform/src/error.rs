use wlrm_model::RuleField;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("rule {rule_id} ({vendor_type}) is missing `{field}`")]
    MissingField {
        rule_id: String,
        vendor_type: String,
        field: RuleField,
    },
}
