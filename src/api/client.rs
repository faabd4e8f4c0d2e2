//! Canvas REST API HTTP client.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::fs::File as FsFile;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::api::source::CourseSource;
use crate::api::types::*;
use crate::config::{CourseSelection, DEFAULT_PER_PAGE};
use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Longest response excerpt included in parse errors.
const ERROR_EXCERPT_LEN: usize = 500;

/// Canvas API client authenticated with a bearer token.
pub struct CanvasApi {
    client: Client,
    base_url: Url,
    token: String,
    per_page: u32,
    show_progress: bool,
}

impl CanvasApi {
    /// Create a new API client for the Canvas instance at `base_url`.
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("canvas-downloader/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        // Keep a sub-path install (https://host/canvas) as the join base.
        let mut base_url = Url::parse(base_url.trim())?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            token,
            per_page: DEFAULT_PER_PAGE,
            show_progress: true,
        })
    }

    /// Set the page size used for list endpoints.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Enable or disable progress bars for large downloads.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Make an authenticated GET request, mapping error statuses.
    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        match status {
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized(url.path().to_string())),
            StatusCode::FORBIDDEN => Err(Error::Forbidden(url.path().to_string())),
            StatusCode::NOT_FOUND => Err(Error::NotFound(url.path().to_string())),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Api(format!(
                    "HTTP {} for {}: {}",
                    s,
                    url.path(),
                    excerpt(&body)
                )))
            }
            _ => Ok(response),
        }
    }

    /// GET a single JSON object.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(self.endpoint(path)?).await?;
        let text = response.text().await?;
        parse_body(path, &text)
    }

    /// GET every page of a list endpoint, following `Link: rel="next"`.
    async fn get_paginated<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());

        let mut items = Vec::new();
        let mut next = Some(url);

        while let Some(url) = next.take() {
            let response = self.get(url).await?;
            next = next_page_url(response.headers());

            let text = response.text().await?;
            let page: Vec<T> = parse_body(path, &text)?;
            tracing::debug!("{}: {} records", path, page.len());
            items.extend(page);
        }

        Ok(items)
    }

    async fn all_courses(&self) -> Result<Vec<Course>> {
        let values: Vec<serde_json::Value> = self.get_paginated("/api/v1/courses").await?;

        let mut courses = Vec::with_capacity(values.len());
        for value in values {
            let id = value.get("id").cloned();
            match serde_json::from_value::<Course>(value) {
                Ok(course) => courses.push(course),
                // Courses outside their availability window come back without a name.
                Err(e) => tracing::warn!("Skipping course {:?}: {}", id, e),
            }
        }

        Ok(courses)
    }

    /// Stream a response body into `dest`.
    async fn write_body(&self, response: Response, dest: &Path) -> Result<u64> {
        let content_length = response.content_length();
        let show_progress =
            self.show_progress && content_length.is_some_and(|l| l > PROGRESS_THRESHOLD);

        let progress = show_progress.then(|| create_download_bar(content_length.unwrap_or(0)));

        let mut file = FsFile::create(dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(downloaded)
    }
}

#[async_trait]
impl CourseSource for CanvasApi {
    async fn courses(&self, selection: &CourseSelection) -> Result<Vec<Course>> {
        match selection {
            CourseSelection::All => self.all_courses().await,
            CourseSelection::Ids(ids) => {
                let mut courses = Vec::with_capacity(ids.len());
                for id in ids {
                    courses.push(self.get_json(&format!("/api/v1/courses/{}", id)).await?);
                }
                Ok(courses)
            }
        }
    }

    async fn modules(&self, course_id: u64) -> Result<Vec<Module>> {
        self.get_paginated(&format!("/api/v1/courses/{}/modules", course_id))
            .await
    }

    async fn module_items(&self, course_id: u64, module_id: u64) -> Result<Vec<ModuleItem>> {
        self.get_paginated(&format!(
            "/api/v1/courses/{}/modules/{}/items",
            course_id, module_id
        ))
        .await
    }

    async fn page(&self, course_id: u64, page_url: &str) -> Result<Page> {
        self.get_json(&format!("/api/v1/courses/{}/pages/{}", course_id, page_url))
            .await
    }

    async fn assignment(&self, course_id: u64, assignment_id: u64) -> Result<Assignment> {
        self.get_json(&format!(
            "/api/v1/courses/{}/assignments/{}",
            course_id, assignment_id
        ))
        .await
    }

    async fn file(&self, file_id: u64) -> Result<File> {
        self.get_json(&format!("/api/v1/files/{}", file_id)).await
    }

    async fn course_file(&self, course_id: u64, file_id: u64) -> Result<Option<File>> {
        match self
            .get_json(&format!("/api/v1/courses/{}/files/{}", course_id, file_id))
            .await
        {
            Ok(file) => Ok(Some(file)),
            Err(Error::NotFound(path)) => {
                tracing::debug!("File {} does not exist ({})", file_id, path);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn course_files(&self, course_id: u64) -> Result<Vec<File>> {
        self.get_paginated(&format!("/api/v1/courses/{}/files", course_id))
            .await
    }

    async fn download(&self, file: &File, dest: &Path) -> Result<u64> {
        let url = self.base_url.join(file.download_url()?)?;
        tracing::debug!("Downloading {} to {}", url, dest.display());

        let mut request = self.client.get(url.clone());
        // Only hand the token to the Canvas host itself.
        if url.origin() == self.base_url.origin() {
            request = request.bearer_auth(&self.token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                file.filename,
                response.status()
            )));
        }

        self.write_body(response, dest).await
    }
}

/// Extract the `rel="next"` target from a `Link` header.
pub fn next_page_url(headers: &header::HeaderMap) -> Option<Url> {
    let link = headers.get(header::LINK)?.to_str().ok()?;

    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params.split(';').any(|param| {
            let param = param.trim();
            param.eq_ignore_ascii_case("rel=\"next\"") || param.eq_ignore_ascii_case("rel=next")
        });
        if !is_next {
            return None;
        }

        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}

fn parse_body<T: DeserializeOwned>(path: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        Error::Api(format!(
            "Failed to parse {}: {} - Response: {}",
            path,
            e,
            excerpt(text)
        ))
    })
}

fn excerpt(text: &str) -> &str {
    let mut end = text.len().min(ERROR_EXCERPT_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
