//! Forensic image acquisition: block-copy a source device, then record
//! cryptographic checksums in a JSON sidecar.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::context::RunContext;
use crate::error::ToolError;
use crate::models::AcquisitionRecord;
use crate::tools::{command, Toolbox};
use crate::utils::hash;

/// Create a forensic image of `source` and persist its acquisition record.
///
/// The copy runs with `conv=sync,noerror`, so damaged media produce a
/// zero-padded image rather than an aborted acquisition. On any failure the
/// partially written image is left in place for operator inspection; partial
/// evidence may still be valuable.
pub fn acquire_image(
    ctx: &RunContext,
    tools: &Toolbox,
    source: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf, ToolError> {
    let output = output.unwrap_or_else(|| ctx.default_image_path());

    info!(
        "Creating forensic image of {} at {}",
        source.display(),
        output.display()
    );

    command::block_copy(tools, source, &output).run_interactive()?;

    let md5 = hash::md5_hex(&output)?;
    let sha1 = hash::sha1_hex(&output)?;

    let record = AcquisitionRecord {
        source: source.display().to_string(),
        image_path: output.display().to_string(),
        acquisition_date: Utc::now().to_rfc3339(),
        md5,
        sha1,
    };

    let sidecar = sidecar_path(&output);
    fs::write(&sidecar, serde_json::to_string_pretty(&record)?)?;

    info!("Image acquisition complete: {}", output.display());
    info!("MD5: {}", record.md5);
    info!("SHA1: {}", record.sha1);

    Ok(output)
}

/// Sidecar path: the image path with `.json` appended (`image.dd.json`),
/// not an extension swap.
pub fn sidecar_path(image: &Path) -> PathBuf {
    let mut path = OsString::from(image.as_os_str());
    path.push(".json");
    PathBuf::from(path)
}
