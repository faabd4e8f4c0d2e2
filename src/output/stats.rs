//! Statistics reporting.

use console::style;

use crate::download::{CourseState, GlobalState};

/// Print statistics for a single course.
pub fn print_course_stats(state: &CourseState) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", state.course_name)).bold()
    );
    println!("  Files:       {}", state.files);
    println!("  Embedded:    {}", state.embedded_files);
    println!("  Loose files: {}", state.swept_files);
    println!("  Pages:       {}", state.pages);
    println!("  Assignments: {}", state.assignments);
    println!("  Links:       {}", state.links);
    println!("  Skipped:     {} (duplicates)", state.duplicate_count);
    if state.missing_references > 0 {
        println!("  Missing:     {} (embedded references)", state.missing_references);
    }
    if state.failed_items > 0 {
        println!("  Failed:      {}", style(state.failed_items).red());
    }
    if state.sweep_denied {
        println!("  {}", style("Course files not accessible").yellow());
    }
    println!("  Total:       {}", format_bytes(state.bytes_downloaded));
}

/// Print global statistics across all courses.
pub fn print_global_stats(state: &GlobalState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Courses processed: {}", state.courses_processed);
    println!("  Files:       {}", state.files);
    println!("  Pages:       {}", state.pages);
    println!("  Assignments: {}", state.assignments);
    println!("  Links:       {}", state.links);
    println!("  Skipped:     {} (duplicates)", state.duplicate_count);
    if state.failed_items > 0 {
        println!("  Failed:      {}", style(state.failed_items).red());
    }
    println!("  Total:       {}", format_bytes(state.bytes_downloaded));
    println!("{}", style("═".repeat(50)).dim());
}

/// Human readable byte count.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(20 * 1024 * 1024), "20.0 MiB");
    }
}
