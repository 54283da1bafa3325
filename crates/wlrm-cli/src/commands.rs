use anyhow::{Result, anyhow};
use comfy_table::{Cell, Table};
use tracing::error;

use wlrm_cli::pipeline::convert;
use wlrm_cli::types::{ConvertOptions, ConvertResult, OutputDestination};
use wlrm_model::{RULE_TYPE_TABLE, TransformOptions};

use crate::cli::Cli;
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_list_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule type"), header_cell("Terraform resource")]);
    apply_table_style(&mut table);
    for (vendor_type, resource_type) in RULE_TYPE_TABLE {
        let resource_cell = match resource_type {
            Some(resource) => Cell::new(resource),
            None => dim_cell("- (not importable)"),
        };
        table.add_row(vec![Cell::new(vendor_type), resource_cell]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(cli: &Cli) -> Result<ConvertResult> {
    let options = convert_options(cli).inspect_err(|err| {
        error!(error = %err, "invalid arguments");
    })?;
    convert(&options)
}

fn convert_options(cli: &Cli) -> Result<ConvertOptions> {
    let rules_json = cli
        .rules_json
        .clone()
        .ok_or_else(|| anyhow!("missing RULES_JSON argument"))?;
    let destination = if cli.dry_run {
        OutputDestination::Stdout
    } else {
        let path = cli
            .rules_import
            .clone()
            .ok_or_else(|| anyhow!("missing RULES_IMPORT argument"))?;
        OutputDestination::File(path)
    };
    Ok(ConvertOptions {
        rules_json,
        destination,
        rules_field: cli.rules_field.clone(),
        transform: TransformOptions::new()
            .with_name_prefix(cli.name_prefix.into())
            .with_strict(cli.strict),
    })
}
