//! Canvas Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use canvas_downloader::{
    api::{CanvasApi, CourseSource},
    cli::Args,
    config::{validate_config, Config},
    download::{Collector, GlobalState},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_course_stats, print_error, print_global_stats,
        print_info, print_success,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_)
                | Error::Unauthorized(_)
                | Error::Forbidden(_)
                | Error::NotFound(_)
                | Error::Http(_)
                | Error::Json(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Download(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!("No configuration file at {}", config_path.display());
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let output = config.output_directory()?.to_path_buf();
    print_config_summary(
        &config.canvas.url,
        &config.options.courses.to_string(),
        &output.display().to_string(),
    );

    let api = CanvasApi::new(&config.canvas.url, config.canvas.token.clone())?
        .with_per_page(config.options.per_page)
        .with_progress(config.options.show_progress);

    let courses = api.courses(&config.options.courses).await?;
    print_info(&format!("Found {} course(s)", courses.len()));

    let collector = Collector::new(&api, &output);
    let mut global_state = GlobalState::default();

    for course in &courses {
        print_info(&format!("Processing course: {}", course.name));

        let state = collector.collect(course).await?;
        print_course_stats(&state);
        global_state.add_course_stats(&state);
    }

    print_global_stats(&global_state);
    print_success(&format!("Saved to {}", output.display()));

    Ok(())
}
