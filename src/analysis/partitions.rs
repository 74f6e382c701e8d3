use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::report;
use crate::context::RunContext;
use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Record the partition layout of an image as reported by `mmls`.
pub fn analyze_partitions(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
) -> Result<PathBuf, ToolError> {
    let report_path = ctx.report_path("partitions", image, Some("txt"));

    info!("Analyzing partitions in {}", image.display());

    let stdout = command::partition_listing(tools, image).capture()?;
    report::write_report(&report_path, "Partition Analysis", image, None, &stdout)?;

    info!("Partition analysis saved to {}", report_path.display());
    Ok(report_path)
}
