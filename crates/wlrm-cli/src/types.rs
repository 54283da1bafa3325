use std::fmt;
use std::path::PathBuf;

use wlrm_model::TransformOptions;
use wlrm_transform::TransformStats;

/// Where rendered import blocks go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub rules_json: PathBuf,
    pub destination: OutputDestination,
    pub rules_field: String,
    pub transform: TransformOptions,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub source: PathBuf,
    pub destination: OutputDestination,
    pub stats: TransformStats,
}

impl ConvertResult {
    /// Line printed to stdout once an import file is written.
    ///
    /// `None` for dry runs, where stdout carries the blocks themselves.
    pub fn confirmation(&self) -> Option<String> {
        match &self.destination {
            OutputDestination::File(path) => {
                Some(format!("File {} was created successfully!", path.display()))
            }
            OutputDestination::Stdout => None,
        }
    }
}
