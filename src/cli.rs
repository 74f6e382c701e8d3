use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{DEFAULT_EVIDENCE_DIR, DEFAULT_REPORTS_DIR};

/// Command-line arguments for the tskwrap tool.
///
/// One subcommand per forensic operation; global options control logging
/// verbosity and where evidence and reports are written.
#[derive(Parser, Debug)]
#[clap(name = "tskwrap", about = "Sleuth Kit automation for forensic image acquisition and analysis")]
pub struct Args {
    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Directory for acquired images and extracted files
    #[clap(long, default_value = DEFAULT_EVIDENCE_DIR)]
    pub evidence_dir: PathBuf,

    /// Directory for analysis reports
    #[clap(long, default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Available subcommands, one per coordinator.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify that the required Sleuth Kit tools are installed
    Verify,

    /// Create a forensic image of a disk or partition
    Acquire {
        /// Source disk or partition
        source: PathBuf,

        /// Output image file (default: evidence/image_<timestamp>.dd)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Analyze the partition structure of an image
    Partitions {
        /// Path to forensic image
        image: PathBuf,
    },

    /// Extract filesystem statistics from an image
    Fsstat {
        /// Path to forensic image
        image: PathBuf,

        /// Partition offset in sectors
        #[clap(short, long)]
        offset: Option<u64>,
    },

    /// List files in the filesystem
    List {
        /// Path to forensic image
        image: PathBuf,

        /// Partition offset in sectors
        #[clap(short, long)]
        offset: Option<u64>,

        /// Non-recursive listing
        #[clap(short = 'n', long)]
        no_recursive: bool,
    },

    /// Extract a file by inode
    Extract {
        /// Path to forensic image
        image: PathBuf,

        /// Inode to extract
        inode: u64,

        /// Partition offset in sectors
        #[clap(short, long)]
        offset: Option<u64>,

        /// Output file path (default: evidence/inode_<inode>_<timestamp>.bin)
        #[clap(long)]
        output: Option<PathBuf>,
    },

    /// Create a timeline of filesystem activity
    Timeline {
        /// Path to forensic image
        image: PathBuf,

        /// Partition offset in sectors
        #[clap(short, long)]
        offset: Option<u64>,
    },

    /// Launch Autopsy with an evidence file
    Autopsy {
        /// Path to evidence file
        evidence: PathBuf,
    },

    /// Run the full analysis workflow
    Full {
        /// Path to forensic image
        image: PathBuf,

        /// Partition offset in sectors
        #[clap(short, long)]
        offset: Option<u64>,
    },
}
