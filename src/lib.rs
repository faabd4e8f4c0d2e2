//! Canvas Downloader - save the content of Canvas LMS courses to disk
//!
//! This library walks the modules of Canvas courses and writes their
//! content into a folder tree, one folder per course and module.
//!
//! # Features
//!
//! - Download files linked from modules
//! - Save pages and assignment descriptions as HTML
//! - Save external links as `.url` shortcuts
//! - Follow file references embedded in page and assignment HTML
//! - Collect course files no module links to
//! - Per-course deduplication by file id
//!
//! # Example
//!
//! ```no_run
//! use canvas_downloader::{CanvasApi, Collector, CourseSelection, CourseSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = CanvasApi::new("https://canvas.example.edu", "token".to_string())?;
//!     let collector = Collector::new(&api, "output");
//!
//!     for course in api.courses(&CourseSelection::All).await? {
//!         collector.collect(&course).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod content;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{CanvasApi, CourseSource};
pub use config::{Config, CourseSelection};
pub use content::extract_file_ids;
pub use download::{Collector, CourseState, GlobalState};
pub use error::{Error, Result};
