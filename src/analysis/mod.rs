//! Analysis coordinators, one per Sleuth Kit operation.
//!
//! Each coordinator builds a command through [`crate::tools::command`], runs
//! it, and writes the captured output to a report file namespaced by the run
//! timestamp. Failures stay typed ([`crate::error::ToolError`]) so callers
//! decide whether to abort or continue.

pub mod extract;
pub mod filelist;
pub mod fsstat;
pub mod full;
pub mod partitions;
pub mod report;
pub mod timeline;
