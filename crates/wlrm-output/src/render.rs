use wlrm_model::ImportTarget;

/// Render one Terraform `import` block.
pub fn render_import_block(target: &ImportTarget) -> String {
    format!(
        "import {{\n  to = {}\n  id = \"{}\"\n}}",
        target.address(),
        target.import_id
    )
}

/// Render all targets, newline separated.
pub fn render_imports(targets: &[ImportTarget]) -> String {
    targets
        .iter()
        .map(render_import_block)
        .collect::<Vec<_>>()
        .join("\n")
}
