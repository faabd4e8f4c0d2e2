//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the progress line for one module item.
pub fn print_item(course: &str, module: &str, title: &str, item_type: &str) {
    println!(
        "{} - {} - {} {}",
        course,
        module,
        title,
        style(format!("({})", item_type)).dim()
    );
}

/// Print the progress line for a file found by the course-wide sweep.
pub fn print_loose_file(course: &str, filename: &str) {
    println!("{} - {}", course, filename);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Canvas Downloader                                 ║
║     Course content to a local folder tree             ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(canvas_url: &str, courses: &str, output_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Canvas:    {}", canvas_url);
    println!("  Courses:   {}", courses);
    println!("  Directory: {}", output_dir);
    println!();
}
