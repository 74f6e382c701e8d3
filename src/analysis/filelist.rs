use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::report;
use crate::context::RunContext;
use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Record a file listing (`fls`) of the filesystem in the image.
pub fn list_files(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
    recursive: bool,
) -> Result<PathBuf, ToolError> {
    let report_path = ctx.report_path("filelist", image, Some("txt"));

    info!("Listing files from {}", image.display());

    let stdout = command::file_listing(tools, image, offset, recursive).capture()?;
    report::write_report(&report_path, "File Listing", image, offset, &stdout)?;

    info!("File listing saved to {}", report_path.display());
    Ok(report_path)
}
