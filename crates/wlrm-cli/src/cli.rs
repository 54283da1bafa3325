//! CLI argument definitions for the import generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wlrm_ingest::DEFAULT_RULES_FIELD;
use wlrm_model::NamePrefix;

#[derive(Parser)]
#[command(
    name = "wallarm-tf-import",
    version,
    about = "Generate Terraform import blocks from a Wallarm rules export",
    long_about = "Generate Terraform import blocks from a Wallarm rules export.\n\n\
                  Each supported rule becomes one `import { to = ... id = ... }` block, \
                  so existing rules can be adopted by Terraform without being recreated.\n\
                  Rule types without a Terraform resource are skipped."
)]
pub struct Cli {
    /// Wallarm rules export (JSON object with the rules under `body`).
    #[arg(value_name = "RULES_JSON", required_unless_present = "list_types")]
    pub rules_json: Option<PathBuf>,

    /// File to write the import blocks to (overwritten).
    #[arg(
        value_name = "RULES_IMPORT",
        required_unless_present_any = ["list_types", "dry_run"]
    )]
    pub rules_import: Option<PathBuf>,

    /// Name of the export field holding the rule array.
    #[arg(long = "rules-field", value_name = "NAME", default_value = DEFAULT_RULES_FIELD)]
    pub rules_field: String,

    /// Type string used to prefix generated resource names.
    #[arg(long = "name-prefix", value_enum, default_value = "resource-type")]
    pub name_prefix: NamePrefixArg,

    /// Fail on rules with missing clientid/actionid/id/mode instead of writing
    /// import ids with gaps.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print the import blocks to stdout instead of writing RULES_IMPORT.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a per-resource-type summary table after conversion.
    #[arg(long = "summary", conflicts_with = "dry_run")]
    pub summary: bool,

    /// List the supported Wallarm rule types and exit.
    #[arg(long = "list-types", conflicts_with_all = ["strict", "dry_run", "summary"])]
    pub list_types: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI resource name prefix choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum NamePrefixArg {
    ResourceType,
    VendorType,
}

impl From<NamePrefixArg> for NamePrefix {
    fn from(arg: NamePrefixArg) -> Self {
        match arg {
            NamePrefixArg::ResourceType => NamePrefix::ResourceType,
            NamePrefixArg::VendorType => NamePrefix::VendorType,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
