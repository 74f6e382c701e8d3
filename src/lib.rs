//! # tskwrap
//!
//! A command-line automation layer for The Sleuth Kit (TSK): it sequences
//! external forensic tools (`mmls`, `fsstat`, `fls`, `icat`, `mactime`, `dd`)
//! and stores their raw output as timestamped report files, plus JSON
//! metadata for acquisitions and full-analysis runs.
//!
//! All forensic heavy lifting — partition parsing, filesystem walking,
//! timeline reconstruction — happens in the wrapped tools. This crate owns
//! argument construction, process invocation, output capture, and metadata
//! bookkeeping, nothing more.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use tskwrap::analysis::full::run_full_analysis;
//! use tskwrap::context::RunContext;
//! use tskwrap::tools::Toolbox;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = RunContext::create("evidence".into(), "reports".into())?;
//! let tools = Toolbox::default();
//!
//! let result = run_full_analysis(&ctx, &tools, Path::new("disk.dd"), Some(63))?;
//! println!("Summary: {}", result.summary_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`context`]: Per-run output directories and timestamp
//! - [`models`]: Acquisition and analysis summary records
//! - [`tools`]: External tool names, typed command construction, verification
//! - [`acquire`]: Image acquisition with checksum sidecars
//! - [`analysis`]: One coordinator per Sleuth Kit analysis operation
//! - [`autopsy`]: Detached launcher for the optional GUI viewer
//! - [`error`]: Typed failure kinds for dispatcher policy
//! - [`utils`]: Streaming hash helpers
//! - [`constants`]: Application-wide constants and exit codes

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Per-run output directories and namespacing timestamp
pub mod context;

/// Acquisition and analysis metadata records
pub mod models;

/// External tool plumbing: names, command builders, verification
pub mod tools;

/// Forensic image acquisition
pub mod acquire;

/// Analysis coordinators (partitions, fsstat, file listing, extraction,
/// timeline, full workflow)
pub mod analysis;

/// Launcher for the optional Autopsy GUI viewer
pub mod autopsy;

/// Typed error kinds for coordinator failures
pub mod error;

/// Streaming hash utilities
pub mod utils;

/// Application constants and exit codes
pub mod constants;
