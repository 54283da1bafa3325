//! Terraform import file generation.
//!
//! Each target renders as one `import { ... }` block; blocks are joined by a
//! single newline with no trailing separator.

#![deny(unsafe_code)]

mod error;
mod render;
mod write;

pub use error::OutputError;
pub use render::{render_import_block, render_imports};
pub use write::{write_imports, write_imports_to};
