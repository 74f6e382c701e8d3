use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::report;
use crate::context::RunContext;
use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Record filesystem metadata (`fsstat`) for the filesystem at `offset`
/// within the image.
pub fn extract_filesystem_stats(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
) -> Result<PathBuf, ToolError> {
    let report_path = ctx.report_path("fsstat", image, Some("txt"));

    match offset {
        Some(offset) => info!(
            "Extracting filesystem stats from {} at offset {}",
            image.display(),
            offset
        ),
        None => info!("Extracting filesystem stats from {}", image.display()),
    }

    let stdout = command::filesystem_stats(tools, image, offset).capture()?;
    report::write_report(&report_path, "Filesystem Analysis", image, offset, &stdout)?;

    info!("Filesystem analysis saved to {}", report_path.display());
    Ok(report_path)
}
