//! The operations the collector needs from a course content provider.

use std::path::Path;

use async_trait::async_trait;

use crate::api::types::{Assignment, Course, File, Module, ModuleItem, Page};
use crate::config::CourseSelection;
use crate::error::Result;

/// Read access to courses and their content.
///
/// [`CanvasApi`](crate::api::CanvasApi) is the production implementation.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// List the selected courses.
    async fn courses(&self, selection: &CourseSelection) -> Result<Vec<Course>>;

    /// List the modules of a course, in course order.
    async fn modules(&self, course_id: u64) -> Result<Vec<Module>>;

    /// List the items of a module, in module order.
    async fn module_items(&self, course_id: u64, module_id: u64) -> Result<Vec<ModuleItem>>;

    /// Fetch a page by its url slug.
    async fn page(&self, course_id: u64, page_url: &str) -> Result<Page>;

    /// Fetch an assignment.
    async fn assignment(&self, course_id: u64, assignment_id: u64) -> Result<Assignment>;

    /// Fetch file metadata by id.
    async fn file(&self, file_id: u64) -> Result<File>;

    /// Look up a file within a course. `None` if it does not exist.
    async fn course_file(&self, course_id: u64, file_id: u64) -> Result<Option<File>>;

    /// List every file of a course.
    ///
    /// Fails with [`Error::Unauthorized`](crate::Error::Unauthorized) or
    /// [`Error::Forbidden`](crate::Error::Forbidden) when the file area is
    /// hidden from the token's user.
    async fn course_files(&self, course_id: u64) -> Result<Vec<File>>;

    /// Download the file's bytes to `dest`, returning the number of bytes written.
    async fn download(&self, file: &File, dest: &Path) -> Result<u64>;
}
