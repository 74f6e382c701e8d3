use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while driving an external forensic tool.
///
/// Every coordinator returns this error type so the dispatcher can map
/// failure kinds to distinct process exit codes instead of null-checking.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The executable could not be found on the search path.
    #[error("required tool `{0}` was not found on PATH")]
    MissingTool(String),

    /// The tool launched but reported failure.
    #[error("`{tool}` failed ({status}): {stderr}")]
    ExitFailure {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Reading tool output or writing a report/evidence file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A metadata record could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// True when the underlying cause is an absent executable.
    pub fn is_missing_tool(&self) -> bool {
        matches!(self, ToolError::MissingTool(_))
    }
}
