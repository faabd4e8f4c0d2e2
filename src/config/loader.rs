//! Configuration structures and loading logic.

use crate::config::selection::CourseSelection;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of records requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Canvas instance and credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Base URL of the Canvas instance, e.g. `https://canvas.example.edu`.
    #[serde(default)]
    pub url: String,

    /// Access token generated on the Canvas settings page.
    #[serde(default)]
    pub token: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory the course trees are written to.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Courses to download.
    #[serde(default)]
    pub courses: CourseSelection,

    /// Page size for list endpoints.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Whether to show progress bars for large files.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            courses: CourseSelection::default(),
            per_page: DEFAULT_PER_PAGE,
            show_progress: true,
        }
    }
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the output root, if one was configured.
    pub fn output_directory(&self) -> Result<&Path> {
        self.options
            .output_directory
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("output directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas-downloader.toml");
        fs::write(
            &path,
            r#"
[canvas]
url = "https://canvas.example.edu"
token = "abc"

[options]
output_directory = "out"
courses = "101,202"
per_page = 50
show_progress = false
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.canvas.url, "https://canvas.example.edu");
        assert_eq!(config.canvas.token, "abc");
        assert_eq!(config.output_directory().unwrap(), Path::new("out"));
        assert_eq!(config.options.courses, CourseSelection::Ids(vec![101, 202]));
        assert_eq!(config.options.per_page, 50);
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_load_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.options.courses, CourseSelection::All);
        assert_eq!(config.options.per_page, DEFAULT_PER_PAGE);
        assert!(config.options.show_progress);
        assert!(config.output_directory().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/canvas.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_courses_rejected() {
        let err = toml::from_str::<Config>("[options]\ncourses = \"1,x\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = Config::default();
        config.canvas.url = "https://canvas.example.edu".into();
        config.options.courses = CourseSelection::Ids(vec![3]);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.canvas.url, config.canvas.url);
        assert_eq!(loaded.options.courses, CourseSelection::Ids(vec![3]));
    }
}
