use log::{error, info};

use crate::error::ToolError;
use crate::tools::{command, Toolbox};

/// Probe each required Sleuth Kit tool and return the names of those absent.
///
/// A tool counts as present if it can be launched at all: `-V` exiting
/// non-zero still proves the binary exists. Presence is assumed stable for
/// the process lifetime, so nothing re-probes later.
pub fn missing_tools(tools: &Toolbox) -> Vec<String> {
    tools
        .required_tools()
        .iter()
        .filter(|name| !is_present(name))
        .map(|name| name.to_string())
        .collect()
}

/// Verify the Sleuth Kit installation, logging the outcome.
pub fn verify_installation(tools: &Toolbox) -> bool {
    let missing = missing_tools(tools);

    if missing.is_empty() {
        info!("Sleuth Kit installation verified");
        true
    } else {
        error!("Missing required Sleuth Kit tools: {}", missing.join(", "));
        error!("Please install The Sleuth Kit: https://www.sleuthkit.org/sleuthkit/download.php");
        false
    }
}

fn is_present(program: &str) -> bool {
    !matches!(
        command::version_probe(program).run_quiet(),
        Err(ToolError::MissingTool(_))
    )
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn stub_toolbox(dir: &Path) -> Toolbox {
        let stub = |name: &str| {
            write_stub(dir, name, "exit 0")
                .to_string_lossy()
                .into_owned()
        };
        Toolbox {
            mmls: stub("mmls"),
            mmstat: stub("mmstat"),
            fsstat: stub("fsstat"),
            fls: stub("fls"),
            icat: stub("icat"),
            blkcat: stub("blkcat"),
            mactime: stub("mactime"),
            dd: stub("dd"),
            autopsy: stub("autopsy"),
        }
    }

    #[test]
    fn test_all_tools_present() {
        let tmp = TempDir::new().unwrap();
        let tools = stub_toolbox(tmp.path());

        assert!(missing_tools(&tools).is_empty());
        assert!(verify_installation(&tools));
    }

    #[test]
    fn test_one_absent_tool_is_reported_by_name() {
        let tmp = TempDir::new().unwrap();
        let mut tools = stub_toolbox(tmp.path());
        tools.blkcat = tmp
            .path()
            .join("blkcat-not-installed")
            .to_string_lossy()
            .into_owned();

        let missing = missing_tools(&tools);
        assert_eq!(missing, vec![tools.blkcat.clone()]);
        assert!(!verify_installation(&tools));
    }

    #[test]
    fn test_nonzero_exit_still_counts_as_present() {
        let tmp = TempDir::new().unwrap();
        let mut tools = stub_toolbox(tmp.path());
        tools.mmls = write_stub(tmp.path(), "grumpy-mmls", "exit 1")
            .to_string_lossy()
            .into_owned();

        assert!(missing_tools(&tools).is_empty());
    }
}
