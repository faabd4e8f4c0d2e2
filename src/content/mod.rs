//! Content helpers.
//!
//! Provides:
//! - Extraction of file references embedded in page and assignment HTML
//! - Internet shortcut rendering for external links

pub mod references;
pub mod shortcut;

pub use references::extract_file_ids;
pub use shortcut::render_url_shortcut;
