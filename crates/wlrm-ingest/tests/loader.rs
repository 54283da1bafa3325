//! Tests for loading rules exports from disk.

use std::fs;

use wlrm_ingest::{DEFAULT_RULES_FIELD, IngestError, load_rules};

#[test]
fn loads_rules_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"{"status":200,"body":[
            {"type":"regex","clientid":"c1","actionid":"a1","id":42},
            "garbage",
            {"type":"wallarm_mode","clientid":"c1","actionid":"a1","id":7,"mode":"block"}
        ]}"#,
    )
    .expect("write rules");

    let export = load_rules(&path, DEFAULT_RULES_FIELD).expect("load rules");

    assert_eq!(export.source, path);
    assert_eq!(export.len(), 3);
    assert_eq!(export.rules[0].vendor_type(), Some("regex"));
    assert_eq!(export.rules[1].vendor_type(), None);
    assert_eq!(export.rules[2].vendor_type(), Some("wallarm_mode"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let err = load_rules(&path, DEFAULT_RULES_FIELD).unwrap_err();

    assert!(matches!(err, IngestError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn invalid_json_is_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, "{\"body\": [").expect("write rules");

    let err = load_rules(&path, DEFAULT_RULES_FIELD).unwrap_err();

    assert!(matches!(err, IngestError::Json { .. }));
}

#[test]
fn export_without_body_reports_no_rules() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"status":200}"#).expect("write rules");

    let err = load_rules(&path, DEFAULT_RULES_FIELD).unwrap_err();

    assert_eq!(err.to_string(), "No rules JSON data");
}
