//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, CourseSelection};

/// Canvas course content downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "canvas-downloader",
    version,
    about = "Download all content from Canvas courses",
    long_about = "Downloads files, pages, assignments, and external links from the modules of \
                  Canvas courses into a local folder tree.\n\n\
                  Files of a course that no module links to are collected in the course folder."
)]
pub struct Args {
    /// URL to the Canvas website, e.g. https://canvas.utwente.nl
    #[arg(env = "CANVAS_URL")]
    pub url: Option<String>,

    /// Token generated in the settings page on Canvas.
    #[arg(env = "CANVAS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to the output folder, e.g. output/
    pub output: Option<PathBuf>,

    /// Comma-separated course ids, or "all".
    pub courses: Option<CourseSelection>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "canvas-downloader.toml")]
    pub config: PathBuf,

    /// Number of records to request per page.
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(url) = self.url {
            config.canvas.url = url;
        }

        if let Some(token) = self.token {
            config.canvas.token = token;
        }

        if let Some(output) = self.output {
            config.options.output_directory = Some(output);
        }

        if let Some(courses) = self.courses {
            config.options.courses = courses;
        }

        if let Some(per_page) = self.per_page {
            config.options.per_page = per_page;
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from([
            "canvas-downloader",
            "https://canvas.example.edu",
            "secret",
            "output/",
            "101,202",
        ])
        .unwrap();

        assert_eq!(args.url.as_deref(), Some("https://canvas.example.edu"));
        assert_eq!(args.token.as_deref(), Some("secret"));
        assert_eq!(args.output, Some(PathBuf::from("output/")));
        assert_eq!(args.courses, Some(CourseSelection::Ids(vec![101, 202])));
    }

    #[test]
    fn test_invalid_course_list() {
        let result = Args::try_parse_from([
            "canvas-downloader",
            "https://canvas.example.edu",
            "secret",
            "output/",
            "101,abc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_config() {
        let mut config = Config::default();
        config.canvas.url = "https://old.example.edu".into();
        config.canvas.token = "old".into();
        config.options.courses = CourseSelection::Ids(vec![1]);

        let args = Args::try_parse_from([
            "canvas-downloader",
            "https://canvas.example.edu",
            "secret",
            "out",
            "all",
            "--per-page",
            "25",
            "--quiet",
        ])
        .unwrap();
        args.merge_into_config(&mut config);

        assert_eq!(config.canvas.url, "https://canvas.example.edu");
        assert_eq!(config.canvas.token, "secret");
        assert_eq!(config.options.output_directory, Some(PathBuf::from("out")));
        assert_eq!(config.options.courses, CourseSelection::All);
        assert_eq!(config.options.per_page, 25);
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let mut config = Config::default();
        config.options.courses = CourseSelection::Ids(vec![5]);
        config.options.output_directory = Some(PathBuf::from("from-file"));

        let args = Args {
            url: None,
            token: None,
            output: None,
            courses: None,
            config: PathBuf::from("canvas-downloader.toml"),
            per_page: None,
            quiet: false,
            debug: false,
        };
        args.merge_into_config(&mut config);

        assert_eq!(config.options.courses, CourseSelection::Ids(vec![5]));
        assert_eq!(
            config.options.output_directory,
            Some(PathBuf::from("from-file"))
        );
        assert!(config.options.show_progress);
    }
}
