//! Download state tracking.

use std::collections::HashSet;

/// Per-course download state.
///
/// Holds the set of file ids written for the course and the counters shown
/// in the course summary. A fresh state is created for every course.
#[derive(Debug, Default)]
pub struct CourseState {
    pub course_name: String,

    // Deduplication tracking - file IDs
    downloaded_files: HashSet<u64>,

    // Statistics
    pub files: u64,
    pub pages: u64,
    pub assignments: u64,
    pub links: u64,
    pub ignored_items: u64,
    pub failed_items: u64,
    pub embedded_files: u64,
    pub missing_references: u64,
    pub swept_files: u64,
    pub duplicate_count: u64,
    pub bytes_downloaded: u64,
    /// The course file area refused access, so no sweep happened.
    pub sweep_denied: bool,
}

impl CourseState {
    /// Create a new download state for a course.
    pub fn new(course_name: impl Into<String>) -> Self {
        Self {
            course_name: course_name.into(),
            ..Default::default()
        }
    }

    /// Check if a file ID has already been downloaded.
    pub fn is_downloaded(&self, file_id: u64) -> bool {
        self.downloaded_files.contains(&file_id)
    }

    /// Record a file ID. Call right before issuing its download.
    ///
    /// Returns `false` if the ID was already recorded.
    pub fn mark_downloaded(&mut self, file_id: u64) -> bool {
        self.downloaded_files.insert(file_id)
    }

    /// Number of distinct files recorded.
    pub fn downloaded_count(&self) -> usize {
        self.downloaded_files.len()
    }

    /// Increment duplicate count.
    pub fn increment_duplicate(&mut self) {
        self.duplicate_count += 1;
    }

    /// Get total number of files written (module, embedded, and sweep).
    pub fn total_files(&self) -> u64 {
        self.files + self.embedded_files + self.swept_files
    }
}

/// Global statistics across all courses.
#[derive(Debug, Default)]
pub struct GlobalState {
    pub courses_processed: u64,
    pub files: u64,
    pub pages: u64,
    pub assignments: u64,
    pub links: u64,
    pub failed_items: u64,
    pub duplicate_count: u64,
    pub bytes_downloaded: u64,
}

impl GlobalState {
    /// Add statistics from a course's download state.
    pub fn add_course_stats(&mut self, state: &CourseState) {
        self.courses_processed += 1;
        self.files += state.total_files();
        self.pages += state.pages;
        self.assignments += state.assignments;
        self.links += state.links;
        self.failed_items += state.failed_items;
        self.duplicate_count += state.duplicate_count;
        self.bytes_downloaded += state.bytes_downloaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_downloaded() {
        let mut state = CourseState::new("CS101");
        assert!(!state.is_downloaded(42));
        assert!(state.mark_downloaded(42));
        assert!(state.is_downloaded(42));
        assert!(!state.mark_downloaded(42));
        assert_eq!(state.downloaded_count(), 1);
    }

    #[test]
    fn test_global_totals() {
        let mut course = CourseState::new("CS101");
        course.files = 2;
        course.embedded_files = 1;
        course.swept_files = 3;
        course.pages = 4;
        course.bytes_downloaded = 1024;

        let mut global = GlobalState::default();
        global.add_course_stats(&course);
        global.add_course_stats(&CourseState::new("CS102"));

        assert_eq!(global.courses_processed, 2);
        assert_eq!(global.files, 6);
        assert_eq!(global.pages, 4);
        assert_eq!(global.bytes_downloaded, 1024);
    }
}
