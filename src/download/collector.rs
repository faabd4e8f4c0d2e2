//! Course content collection.
//!
//! Walks the modules of a course, writes every item to disk according to
//! its type, follows file references embedded in page and assignment
//! bodies, and finally sweeps up course files no module linked to.

use std::path::{Path, PathBuf};

use crate::api::{Course, CourseSource, File, ItemContent, Module, ModuleItem};
use crate::content::{extract_file_ids, render_url_shortcut};
use crate::download::state::CourseState;
use crate::error::Result;
use crate::fs::{artifact_filename, course_dir, ensure_dir, module_dir, sanitize_filename};
use crate::output::{print_item, print_loose_file, print_warning};

/// Downloads course content below an output root.
pub struct Collector<'a, S: CourseSource + ?Sized> {
    source: &'a S,
    output: PathBuf,
}

impl<'a, S: CourseSource + ?Sized> Collector<'a, S> {
    /// Create a collector writing below `output`.
    pub fn new(source: &'a S, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
        }
    }

    /// Download everything reachable from a course.
    ///
    /// Items whose metadata is unusable or whose name cannot become a path
    /// are reported and skipped. Any other error aborts the course.
    pub async fn collect(&self, course: &Course) -> Result<CourseState> {
        let mut state = CourseState::new(course.name.clone());
        tracing::info!("Collecting course {} ({})", course.name, course.id);

        for module in self.source.modules(course.id).await? {
            let items = self.source.module_items(course.id, module.id).await?;
            tracing::debug!("Module {} has {} items", module.name, items.len());

            for item in &items {
                if let Err(e) = self.collect_item(course, &module, item, &mut state).await {
                    if !e.is_item_local() {
                        return Err(e);
                    }
                    print_warning(&format!(
                        "Skipping '{}' in {}: {}",
                        item.title, module.name, e
                    ));
                    state.failed_items += 1;
                }
            }
        }

        self.sweep_course_files(course, &mut state).await?;

        Ok(state)
    }

    async fn collect_item(
        &self,
        course: &Course,
        module: &Module,
        item: &ModuleItem,
        state: &mut CourseState,
    ) -> Result<()> {
        let dir = module_dir(&self.output, course, module)?;
        ensure_dir(&dir).await?;

        print_item(
            &course.name,
            &module.name,
            &item.title,
            &item.item_type.to_string(),
        );

        match item.content()? {
            ItemContent::File { file_id } => {
                if state.is_downloaded(file_id) {
                    tracing::debug!("Skipping already downloaded file {}", file_id);
                    state.increment_duplicate();
                    return Ok(());
                }

                let file = self.source.file(file_id).await?;
                let dest = dir.join(sanitize_filename(&file.filename)?);
                self.fetch(file_id, &file, &dest, state).await?;
                state.files += 1;
            }
            ItemContent::Page { page_url } => {
                let dest = dir.join(artifact_filename(&item.title, "html")?);
                let page = self.source.page(course.id, &page_url).await?;
                let body = page.body.as_deref();

                write_artifact(&dest, body.unwrap_or_default()).await?;
                state.pages += 1;

                self.collect_embedded(course, body, &dir, state).await?;
            }
            ItemContent::ExternalUrl { url } => {
                let dest = dir.join(artifact_filename(&item.title, "url")?);
                write_artifact(&dest, &render_url_shortcut(&url)).await?;
                state.links += 1;
            }
            ItemContent::Assignment { assignment_id } => {
                let dest = dir.join(artifact_filename(&item.title, "html")?);
                let assignment = self.source.assignment(course.id, assignment_id).await?;
                let description = assignment.description.as_deref();

                write_artifact(&dest, description.unwrap_or_default()).await?;
                state.assignments += 1;

                self.collect_embedded(course, description, &dir, state)
                    .await?;
            }
            ItemContent::Other => {
                tracing::debug!("Nothing to save for {} '{}'", item.item_type, item.title);
                state.ignored_items += 1;
            }
        }

        Ok(())
    }

    /// Download files referenced from an HTML body into `dir`.
    async fn collect_embedded(
        &self,
        course: &Course,
        html: Option<&str>,
        dir: &Path,
        state: &mut CourseState,
    ) -> Result<()> {
        for file_id in extract_file_ids(html) {
            if state.is_downloaded(file_id) {
                state.increment_duplicate();
                continue;
            }

            let Some(file) = self.source.course_file(course.id, file_id).await? else {
                tracing::debug!("Referenced file {} no longer exists", file_id);
                state.missing_references += 1;
                continue;
            };

            if self.fetch_isolated(file_id, &file, dir, state).await? {
                state.embedded_files += 1;
            }
        }

        Ok(())
    }

    /// Download course files that no module item led to.
    async fn sweep_course_files(&self, course: &Course, state: &mut CourseState) -> Result<()> {
        let files = match self.source.course_files(course.id).await {
            Ok(files) => files,
            Err(e) if e.is_access_denied() => {
                tracing::info!("Course files of {} are not accessible: {}", course.name, e);
                state.sweep_denied = true;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if files.iter().all(|file| state.is_downloaded(file.id)) {
            return Ok(());
        }

        let dir = match course_dir(&self.output, course) {
            Ok(dir) => dir,
            Err(e) if e.is_item_local() => {
                print_warning(&format!("Skipping course files of {}: {}", course.name, e));
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        ensure_dir(&dir).await?;

        for file in &files {
            if state.is_downloaded(file.id) {
                continue;
            }

            print_loose_file(&course.name, &file.filename);

            if self.fetch_isolated(file.id, file, &dir, state).await? {
                state.swept_files += 1;
            }
        }

        Ok(())
    }

    /// Download a file into `dir` under its sanitized name.
    ///
    /// A file that cannot be named or has no download location is reported,
    /// counted as failed, and yields `Ok(false)`.
    async fn fetch_isolated(
        &self,
        file_id: u64,
        file: &File,
        dir: &Path,
        state: &mut CourseState,
    ) -> Result<bool> {
        let fetched = match sanitize_filename(&file.filename) {
            Ok(name) => self.fetch(file_id, file, &dir.join(name), state).await,
            Err(e) => Err(e),
        };

        match fetched {
            Ok(()) => Ok(true),
            Err(e) if e.is_item_local() => {
                print_warning(&format!("Skipping file '{}': {}", file.filename, e));
                state.failed_items += 1;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Record `file_id` and download the file to `dest`.
    async fn fetch(
        &self,
        file_id: u64,
        file: &File,
        dest: &Path,
        state: &mut CourseState,
    ) -> Result<()> {
        // A file without a download location must not be recorded as written.
        file.download_url()?;

        state.mark_downloaded(file_id);
        let bytes = self.source.download(file, dest).await?;
        state.bytes_downloaded += bytes;

        tracing::debug!("Downloaded {} ({} bytes)", dest.display(), bytes);
        Ok(())
    }
}

async fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents).await?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
