use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use wlrm_model::ImportTarget;

use crate::error::OutputError;
use crate::render::render_imports;

/// Write the rendered imports to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError::Io`] when the file cannot be written.
pub fn write_imports(path: &Path, targets: &[ImportTarget]) -> Result<(), OutputError> {
    let contents = render_imports(targets);
    fs::write(path, &contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        blocks = targets.len(),
        bytes = contents.len(),
        "wrote import file"
    );
    Ok(())
}

/// Write the rendered imports to any writer (stdout for dry runs).
///
/// A trailing newline is added to non-empty output so terminals stay tidy.
///
/// # Errors
///
/// Returns [`OutputError::Stream`] on write failure.
pub fn write_imports_to<W: Write>(mut writer: W, targets: &[ImportTarget]) -> Result<(), OutputError> {
    let contents = render_imports(targets);
    write_stream(&mut writer, &contents).map_err(OutputError::Stream)
}

fn write_stream<W: Write>(writer: &mut W, contents: &str) -> io::Result<()> {
    writer.write_all(contents.as_bytes())?;
    if !contents.is_empty() {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
