//! Download module for course content.
//!
//! This module provides:
//! - Download state tracking
//! - The module walk, embedded reference resolution, and course file sweep

pub mod collector;
pub mod state;

pub use collector::Collector;
pub use state::{CourseState, GlobalState};
