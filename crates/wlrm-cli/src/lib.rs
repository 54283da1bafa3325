//! Library side of the `wallarm-tf-import` CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
