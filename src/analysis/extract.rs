use std::path::{Path, PathBuf};

use log::info;

use crate::context::RunContext;
use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Extract the content of a file by inode (`icat`) into a binary output file.
///
/// The tool's stdout is attached directly to the destination, so extraction
/// handles arbitrarily large files without buffering content in this
/// process. On failure the destination may exist but is not guaranteed
/// complete.
pub fn extract_file(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
    inode: u64,
    offset: Option<u64>,
    output: Option<PathBuf>,
) -> Result<PathBuf, ToolError> {
    let output = output.unwrap_or_else(|| ctx.default_extract_path(inode));

    info!(
        "Extracting inode {} from {} to {}",
        inode,
        image.display(),
        output.display()
    );

    command::extract_by_inode(tools, image, offset, inode).capture_to_file(&output)?;

    info!("File extraction complete: {}", output.display());
    Ok(output)
}
