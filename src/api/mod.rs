//! Canvas API module.
//!
//! This module provides:
//! - HTTP client for the Canvas REST API
//! - The `CourseSource` trait the collector is written against
//! - API response types

pub mod client;
pub mod source;
pub mod types;

pub use client::{next_page_url, CanvasApi};
pub use source::CourseSource;
pub use types::*;
