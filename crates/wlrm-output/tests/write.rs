//! Tests for import file output.

use std::fs;

use wlrm_model::ImportTarget;
use wlrm_output::{OutputError, render_imports, write_imports, write_imports_to};

fn sample_targets() -> Vec<ImportTarget> {
    vec![
        ImportTarget {
            vendor_type: "regex".to_string(),
            resource_type: "wallarm_rule_regex".to_string(),
            resource_name: "wallarm_rule_regex_a1d0c6e83f027327d8461063f4ac58a6".to_string(),
            import_id: "c1/a1/42/regex".to_string(),
        },
        ImportTarget {
            vendor_type: "wallarm_mode".to_string(),
            resource_type: "wallarm_rule_mode".to_string(),
            resource_name: "wallarm_rule_mode_8f14e45fceea167a5a36dedd4bea2543".to_string(),
            import_id: "c1/a1/7/block".to_string(),
        },
    ]
}

#[test]
fn rendered_imports_snapshot() {
    insta::assert_snapshot!(render_imports(&sample_targets()), @r#"
    import {
      to = wallarm_rule_regex.wallarm_rule_regex_a1d0c6e83f027327d8461063f4ac58a6
      id = "c1/a1/42/regex"
    }
    import {
      to = wallarm_rule_mode.wallarm_rule_mode_8f14e45fceea167a5a36dedd4bea2543
      id = "c1/a1/7/block"
    }
    "#);
}

#[test]
fn write_replaces_existing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("imports.tf");
    fs::write(&path, "stale contents that are longer than the new ones".repeat(20))
        .expect("seed file");

    write_imports(&path, &sample_targets()).expect("write imports");

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, render_imports(&sample_targets()));
}

#[test]
fn empty_targets_write_empty_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("imports.tf");

    write_imports(&path, &[]).expect("write imports");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "");
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("imports.tf");

    let err = write_imports(&path, &sample_targets()).unwrap_err();

    assert!(matches!(err, OutputError::Io { .. }));
    assert!(err.to_string().contains("imports.tf"));
}

#[test]
fn stream_output_ends_with_newline() {
    let mut buffer = Vec::new();
    write_imports_to(&mut buffer, &sample_targets()).expect("write stream");

    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text, format!("{}\n", render_imports(&sample_targets())));
}
