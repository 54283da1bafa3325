//! Conversion pipeline with explicit stages.
//!
//! 1. **Ingest**: read the export and pull out the rule array
//! 2. **Transform**: drop unsupported rules, derive import ids and names
//! 3. **Output**: render import blocks and write them out
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{error, info, info_span, warn};

use wlrm_ingest::{IngestError, RulesExport, load_rules};
use wlrm_model::{ImportTarget, TransformOptions};
use wlrm_output::{write_imports, write_imports_to};
use wlrm_transform::{TransformOutcome, transform_rules};

use crate::types::{ConvertOptions, ConvertResult, OutputDestination};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load the rules export.
///
/// # Errors
///
/// Fails when the file is unreadable, not JSON, or has no rule array.
pub fn ingest(path: &Path, field: &str) -> Result<RulesExport> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    match load_rules(path, field) {
        Ok(export) => {
            info!(
                rule_count = export.len(),
                duration_ms = start.elapsed().as_millis(),
                "ingest complete"
            );
            Ok(export)
        }
        Err(err @ IngestError::MissingRules { .. }) => {
            error!(field, "No rules JSON data");
            Err(err.into())
        }
        Err(err) => {
            error!(error = %err, "failed to load rules export");
            Err(err.into())
        }
    }
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Convert loaded rules into import targets.
///
/// # Errors
///
/// Fails only in strict mode, on the first rule with a missing field.
pub fn transform(export: &RulesExport, options: &TransformOptions) -> Result<TransformOutcome> {
    let span = info_span!("transform", strict = options.strict);
    let _guard = span.enter();
    let outcome = transform_rules(&export.rules, options).inspect_err(|err| {
        error!(error = %err, "rule conversion failed");
    })?;
    let stats = &outcome.stats;
    info!(
        total = stats.total,
        kept = stats.kept,
        dropped = stats.dropped(),
        incomplete = stats.incomplete,
        "transform complete"
    );
    for address in &stats.duplicate_addresses {
        warn!(%address, "Terraform address generated more than once");
    }
    Ok(outcome)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the import blocks to their destination.
///
/// # Errors
///
/// Fails when the import file or stream cannot be written.
pub fn output(targets: &[ImportTarget], destination: &OutputDestination) -> Result<()> {
    let span = info_span!("output", destination = %destination);
    let _guard = span.enter();
    let written = match destination {
        OutputDestination::File(path) => write_imports(path, targets),
        OutputDestination::Stdout => write_imports_to(io::stdout().lock(), targets),
    };
    match written {
        Ok(()) => {
            if let OutputDestination::File(path) = destination {
                info!("File {} was created successfully!", path.display());
            }
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "failed to write imports");
            Err(err.into())
        }
    }
}

/// Run all stages for one export.
///
/// # Errors
///
/// Propagates the first failing stage; nothing is written when ingest or
/// transform fails.
pub fn convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let export = ingest(&options.rules_json, &options.rules_field)?;
    let outcome = transform(&export, &options.transform)?;
    output(&outcome.targets, &options.destination)?;
    Ok(ConvertResult {
        source: export.source,
        destination: options.destination.clone(),
        stats: outcome.stats,
    })
}
