//! Launcher for the optional Autopsy GUI viewer.

use std::path::Path;
use std::process::Command;

use log::{error, info};

use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Launch Autopsy detached with the given evidence file, if it is installed.
pub fn launch_autopsy(tools: &Toolbox, evidence: &Path) -> Result<(), ToolError> {
    info!(
        "Attempting to launch Autopsy with {}",
        evidence.display()
    );

    if !viewer_available(&tools.autopsy) {
        error!("Failed to launch Autopsy. Is it installed?");
        return Err(ToolError::MissingTool(tools.autopsy.clone()));
    }

    command::ToolCommand::new(&tools.autopsy)
        .arg(evidence)
        .spawn_detached()?;

    info!("Autopsy launched successfully");
    Ok(())
}

/// Presence probe via `which`; the viewer is optional, so absence is a
/// normal condition rather than a verification failure.
fn viewer_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
