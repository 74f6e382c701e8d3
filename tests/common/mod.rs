//! Shared helpers for integration tests: stub executables standing in for
//! the external forensic tools, and deterministic run contexts.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tskwrap::context::RunContext;
use tskwrap::tools::Toolbox;

pub const TEST_TIMESTAMP: &str = "20240101_120000";

/// Write an executable shell script standing in for an external tool.
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

/// Stub path as the string a `Toolbox` field wants.
pub fn stub_program(dir: &Path, name: &str, body: &str) -> String {
    write_stub(dir, name, body).to_string_lossy().into_owned()
}

/// A context with fixed timestamp under `root`, so output names are
/// predictable.
pub fn test_context(root: &Path) -> RunContext {
    RunContext::with_timestamp(
        root.join("evidence"),
        root.join("reports"),
        TEST_TIMESTAMP.to_string(),
    )
    .unwrap()
}

/// A toolbox whose every tool succeeds with a one-line canned output.
pub fn happy_toolbox(dir: &Path) -> Toolbox {
    Toolbox {
        mmls: stub_program(dir, "mmls", "echo 'DOS Partition Table'"),
        mmstat: stub_program(dir, "mmstat", "echo dos"),
        fsstat: stub_program(dir, "fsstat", "echo 'FILE SYSTEM INFORMATION'"),
        fls: stub_program(dir, "fls", "echo 'r/r 128: note.txt'"),
        icat: stub_program(dir, "icat", "printf 'file content'"),
        blkcat: stub_program(dir, "blkcat", "exit 0"),
        mactime: stub_program(dir, "mactime", "echo 'Timeline'"),
        dd: stub_program(
            dir,
            "dd",
            r#"for arg in "$@"; do
  case "$arg" in
    if=*) src="${arg#if=}" ;;
    of=*) dst="${arg#of=}" ;;
  esac
done
cp "$src" "$dst""#,
        ),
        autopsy: stub_program(dir, "autopsy", "exit 0"),
    }
}
