use std::path::{Path, PathBuf};

use log::info;

use crate::context::RunContext;
use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Reconstruct a chronological timeline of filesystem activity.
///
/// Two stages, both required: `fls -m / -r` produces an intermediate body
/// file (machine-parseable, so it gets no report header), then `mactime -b`
/// turns it into the human-readable timeline. If either stage fails the
/// operation fails and no timeline path is reported.
pub fn timeline_analysis(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
) -> Result<PathBuf, ToolError> {
    let body_file = ctx.report_path("body_file", image, None);
    let timeline_file = ctx.report_path("timeline", image, Some("txt"));

    info!("Creating timeline for {}", image.display());

    command::body_listing(tools, image, offset).capture_to_file(&body_file)?;
    command::timeline_from_body(tools, &body_file).capture_to_file(&timeline_file)?;

    info!("Timeline analysis saved to {}", timeline_file.display());
    Ok(timeline_file)
}
