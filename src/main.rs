use std::fs::OpenOptions;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, warn, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use tskwrap::acquire;
use tskwrap::analysis::{extract, filelist, fsstat, full, partitions, timeline};
use tskwrap::autopsy;
use tskwrap::cli::{Args, Commands};
use tskwrap::constants::{
    EXIT_ACQUISITION_FAILED, EXIT_ANALYSIS_FAILED, EXIT_TOOL_MISSING, LOG_FILE_NAME,
};
use tskwrap::context::RunContext;
use tskwrap::error::ToolError;
use tskwrap::tools::{verify, Toolbox};

fn main() {
    let args = Args::parse();

    if let Err(err) = initialize_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {:#}", err);
        process::exit(1);
    }

    process::exit(run(&args));
}

/// Initialize logging to both the terminal and the append-only log file.
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .with_context(|| format!("Failed to open {}", LOG_FILE_NAME))?;

    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            log_level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(log_level, Config::default(), log_file),
    ];

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;
    Ok(())
}

/// Dispatch the subcommand to its coordinator and map the outcome to a
/// process exit code.
fn run(args: &Args) -> i32 {
    let ctx = match RunContext::create(args.evidence_dir.clone(), args.reports_dir.clone()) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!("Failed to set up working directories: {:#}", err);
            return 1;
        }
    };
    let tools = Toolbox::default();

    match &args.command {
        Commands::Verify => {
            if verify::verify_installation(&tools) {
                0
            } else {
                EXIT_TOOL_MISSING
            }
        }

        Commands::Acquire { source, output } => exit_code(
            acquire::acquire_image(&ctx, &tools, source, output.clone()),
            "Image acquisition",
            EXIT_ACQUISITION_FAILED,
        ),

        Commands::Partitions { image } => exit_code(
            partitions::analyze_partitions(&ctx, &tools, image),
            "Partition analysis",
            EXIT_ANALYSIS_FAILED,
        ),

        Commands::Fsstat { image, offset } => exit_code(
            fsstat::extract_filesystem_stats(&ctx, &tools, image, *offset),
            "Filesystem analysis",
            EXIT_ANALYSIS_FAILED,
        ),

        Commands::List {
            image,
            offset,
            no_recursive,
        } => exit_code(
            filelist::list_files(&ctx, &tools, image, *offset, !*no_recursive),
            "File listing",
            EXIT_ANALYSIS_FAILED,
        ),

        Commands::Extract {
            image,
            inode,
            offset,
            output,
        } => exit_code(
            extract::extract_file(&ctx, &tools, image, *inode, *offset, output.clone()),
            "File extraction",
            EXIT_ANALYSIS_FAILED,
        ),

        Commands::Timeline { image, offset } => exit_code(
            timeline::timeline_analysis(&ctx, &tools, image, *offset),
            "Timeline analysis",
            EXIT_ANALYSIS_FAILED,
        ),

        Commands::Autopsy { evidence } => exit_code(
            autopsy::launch_autopsy(&tools, evidence),
            "Autopsy launch",
            EXIT_TOOL_MISSING,
        ),

        Commands::Full { image, offset } => {
            match full::run_full_analysis(&ctx, &tools, image, *offset) {
                Ok(result) => {
                    let failed = result.summary.reports.failed_steps();
                    if failed.is_empty() {
                        0
                    } else {
                        warn!(
                            "Full analysis finished with failed step(s): {}",
                            failed.join(", ")
                        );
                        EXIT_ANALYSIS_FAILED
                    }
                }
                Err(err) => {
                    error!("Full analysis failed: {}", err);
                    EXIT_ANALYSIS_FAILED
                }
            }
        }
    }
}

/// Missing tools map to their own exit code regardless of the operation;
/// everything else uses the operation's failure code.
fn exit_code<T>(result: Result<T, ToolError>, operation: &str, failure_code: i32) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            error!("{} failed: {}", operation, err);
            if err.is_missing_tool() {
                EXIT_TOOL_MISSING
            } else {
                failure_code
            }
        }
    }
}
