//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization
//! - Destination folder derivation and creation

pub mod naming;
pub mod paths;

pub use naming::{artifact_filename, sanitize_filename};
pub use paths::{course_dir, ensure_dir, module_dir};
