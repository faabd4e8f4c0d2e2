//! Configuration module for the canvas-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Course selection parsing
//! - Configuration validation

pub mod loader;
pub mod selection;
pub mod validation;

pub use loader::{CanvasConfig, Config, OptionsConfig, DEFAULT_PER_PAGE};
pub use selection::CourseSelection;
pub use validation::{validate_config, validate_per_page, validate_token, validate_url};
