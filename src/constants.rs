//! Global constants for the tskwrap application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

/// Block size passed to `dd` during acquisition.
pub const DD_BLOCK_SIZE: &str = "4M";

/// Buffer size for streaming hash computation (1MB).
pub const HASH_BUFFER_SIZE: usize = 1024 * 1024;

/// Width of the ruler line under report headers.
pub const REPORT_RULER_WIDTH: usize = 80;

/// Default directory for acquired images and extracted file contents.
pub const DEFAULT_EVIDENCE_DIR: &str = "evidence";

/// Default directory for analysis reports.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Log file written alongside terminal output.
pub const LOG_FILE_NAME: &str = "tskwrap.log";

/// Timestamp format used to namespace output files within one run.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Process exit codes, one per failure kind.
/// A required external tool is not installed.
pub const EXIT_TOOL_MISSING: i32 = 10;

/// Image acquisition failed.
pub const EXIT_ACQUISITION_FAILED: i32 = 20;

/// An analysis step failed.
pub const EXIT_ANALYSIS_FAILED: i32 = 30;
