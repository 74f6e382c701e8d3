use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::analysis::{filelist, fsstat, partitions, timeline};
use crate::context::RunContext;
use crate::error::ToolError;
use crate::models::{AnalysisSummary, ReportSet};
use crate::tools::Toolbox;

/// Outcome of a full-analysis run: the persisted summary and its path.
#[derive(Debug)]
pub struct FullAnalysis {
    pub summary_path: PathBuf,
    pub summary: AnalysisSummary,
}

/// Run every analysis step against one image, then persist a summary.
///
/// Steps never short-circuit each other: a broken tool path still leaves the
/// remaining reports collectable, and the summary records each failed step as
/// `null`. The summary is written even if every step failed.
pub fn run_full_analysis(
    ctx: &RunContext,
    tools: &Toolbox,
    image: &Path,
    offset: Option<u64>,
) -> Result<FullAnalysis, ToolError> {
    info!("Starting full analysis on {}", image.display());

    let reports = ReportSet {
        partitions: record_step(
            "Partition analysis",
            partitions::analyze_partitions(ctx, tools, image),
        ),
        filesystem: record_step(
            "Filesystem analysis",
            fsstat::extract_filesystem_stats(ctx, tools, image, offset),
        ),
        file_list: record_step(
            "File listing",
            filelist::list_files(ctx, tools, image, offset, true),
        ),
        timeline: record_step(
            "Timeline analysis",
            timeline::timeline_analysis(ctx, tools, image, offset),
        ),
    };

    let summary = AnalysisSummary {
        image: image.display().to_string(),
        offset,
        timestamp: ctx.timestamp.clone(),
        reports,
    };

    let summary_path = ctx.report_path("analysis_summary", image, Some("json"));
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;

    info!(
        "Full analysis complete. Summary saved to {}",
        summary_path.display()
    );

    Ok(FullAnalysis {
        summary_path,
        summary,
    })
}

fn record_step(step: &str, result: Result<PathBuf, ToolError>) -> Option<String> {
    match result {
        Ok(path) => Some(path.display().to_string()),
        Err(err) => {
            warn!("{} failed: {}", step, err);
            None
        }
    }
}
