//! Utility functions shared across coordinators.
//!
//! ## Generating acquisition digests
//!
//! ```no_run
//! use tskwrap::utils::hash::{md5_hex, sha1_hex};
//! use std::path::Path;
//!
//! # fn example() -> std::io::Result<()> {
//! let image = Path::new("evidence/image_20240101_120000.dd");
//! println!("MD5:  {}", md5_hex(image)?);
//! println!("SHA1: {}", sha1_hex(image)?);
//! # Ok(())
//! # }
//! ```

/// Streaming cryptographic hash calculation
pub mod hash;
