//! Integration tests for the full-analysis orchestrator: sequencing,
//! per-step failure isolation, and the summary record.

#![cfg(unix)]

mod common;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use tskwrap::analysis::full::run_full_analysis;

#[test]
fn test_full_analysis_with_all_tools_present() {
    let tmp = TempDir::new().unwrap();
    let ctx = common::test_context(tmp.path());
    let tools = common::happy_toolbox(tmp.path());

    let result = run_full_analysis(&ctx, &tools, Path::new("disk.dd"), Some(63)).unwrap();

    assert!(result.summary.reports.is_complete());
    assert_eq!(result.summary.offset, Some(63));
    assert_eq!(result.summary.timestamp, common::TEST_TIMESTAMP);
    assert_eq!(
        result.summary_path,
        ctx.reports_dir.join(format!(
            "analysis_summary_disk_{}.json",
            common::TEST_TIMESTAMP
        ))
    );

    // Every report named in the summary exists on disk
    let reports = &result.summary.reports;
    for path in [
        reports.partitions.as_ref().unwrap(),
        reports.filesystem.as_ref().unwrap(),
        reports.file_list.as_ref().unwrap(),
        reports.timeline.as_ref().unwrap(),
    ] {
        assert!(Path::new(path).exists(), "missing report: {}", path);
    }
}

#[test]
fn test_missing_fsstat_still_yields_other_reports_and_null_entry() {
    let tmp = TempDir::new().unwrap();
    let ctx = common::test_context(tmp.path());

    let mut tools = common::happy_toolbox(tmp.path());
    tools.fsstat = tmp
        .path()
        .join("fsstat-not-installed")
        .to_string_lossy()
        .into_owned();

    let result = run_full_analysis(&ctx, &tools, Path::new("disk.dd"), None).unwrap();

    assert_eq!(result.summary.reports.failed_steps(), vec!["filesystem"]);
    assert!(result.summary.reports.partitions.is_some());
    assert!(result.summary.reports.file_list.is_some());
    assert!(result.summary.reports.timeline.is_some());

    // The persisted JSON records the failed step as null
    let json: Value =
        serde_json::from_str(&fs::read_to_string(&result.summary_path).unwrap()).unwrap();
    assert!(json["reports"]["filesystem"].is_null());
    assert!(json["reports"]["partitions"].is_string());
    assert!(json["reports"]["file_list"].is_string());
    assert!(json["reports"]["timeline"].is_string());
    assert_eq!(json["image"], "disk.dd");
    assert!(json["offset"].is_null());
}

#[test]
fn test_summary_written_even_when_every_step_fails() {
    let tmp = TempDir::new().unwrap();
    let ctx = common::test_context(tmp.path());

    let gone = |name: &str| tmp.path().join(name).to_string_lossy().into_owned();
    let mut tools = common::happy_toolbox(tmp.path());
    tools.mmls = gone("mmls-gone");
    tools.fsstat = gone("fsstat-gone");
    tools.fls = gone("fls-gone");
    tools.mactime = gone("mactime-gone");

    let result = run_full_analysis(&ctx, &tools, Path::new("disk.dd"), None).unwrap();

    assert_eq!(
        result.summary.reports.failed_steps(),
        vec!["partitions", "filesystem", "file_list", "timeline"]
    );
    assert!(result.summary_path.exists());
}

#[test]
fn test_one_failing_step_does_not_abort_later_steps() {
    let tmp = TempDir::new().unwrap();
    let ctx = common::test_context(tmp.path());

    // mmls fails hard, everything after it must still run
    let mut tools = common::happy_toolbox(tmp.path());
    tools.mmls = common::stub_program(tmp.path(), "broken-mmls", "exit 1");

    let result = run_full_analysis(&ctx, &tools, Path::new("disk.dd"), None).unwrap();

    assert_eq!(result.summary.reports.failed_steps(), vec!["partitions"]);
    assert!(result.summary.reports.timeline.is_some());
}
