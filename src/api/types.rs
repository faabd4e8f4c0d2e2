//! API response type definitions.

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A course the token has access to.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub course_code: Option<String>,
}

/// An ordered group of items within a course.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub position: Option<u32>,
}

/// Type tag of a module item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ItemType {
    File,
    Page,
    ExternalUrl,
    Assignment,
    /// Any tag we do not materialize (SubHeader, Quiz, Discussion, ...).
    Other(String),
}

impl From<String> for ItemType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "File" => ItemType::File,
            "Page" => ItemType::Page,
            "ExternalUrl" => ItemType::ExternalUrl,
            "Assignment" => ItemType::Assignment,
            _ => ItemType::Other(tag),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::File => write!(f, "File"),
            ItemType::Page => write!(f, "Page"),
            ItemType::ExternalUrl => write!(f, "ExternalUrl"),
            ItemType::Assignment => write!(f, "Assignment"),
            ItemType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A single entry of a module as returned by the API.
///
/// The type-specific references are optional on the wire; use
/// [`ModuleItem::content`] to get the reference the type tag requires.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleItem {
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub content_id: Option<u64>,
    #[serde(default)]
    pub page_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

/// What a module item points at, resolved from its type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    File { file_id: u64 },
    Page { page_url: String },
    ExternalUrl { url: String },
    Assignment { assignment_id: u64 },
    Other,
}

impl ModuleItem {
    /// Resolve the reference required by the item's type tag.
    pub fn content(&self) -> Result<ItemContent> {
        let content = match &self.item_type {
            ItemType::File => ItemContent::File {
                file_id: self.require(self.content_id, "content_id")?,
            },
            ItemType::Page => ItemContent::Page {
                page_url: self.require(self.page_url.clone(), "page_url")?,
            },
            ItemType::ExternalUrl => ItemContent::ExternalUrl {
                url: self.require(self.external_url.clone(), "external_url")?,
            },
            ItemType::Assignment => ItemContent::Assignment {
                assignment_id: self.require(self.content_id, "content_id")?,
            },
            ItemType::Other(_) => ItemContent::Other,
        };
        Ok(content)
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T> {
        value.ok_or_else(|| Error::MissingField {
            entity: format!("module item {} ({})", self.id, self.title),
            field,
        })
    }
}

/// File metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    pub id: u64,
    pub filename: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Download location. Absent or empty for locked files.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl File {
    /// Download URL, if the file can be fetched.
    pub fn download_url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::MissingField {
                entity: format!("file {} ({})", self.id, self.filename),
                field: "url",
            })
    }
}

/// A wiki page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// An assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_from_tag() {
        assert_eq!(ItemType::from("File".to_string()), ItemType::File);
        assert_eq!(ItemType::from("ExternalUrl".to_string()), ItemType::ExternalUrl);
        assert_eq!(
            ItemType::from("SubHeader".to_string()),
            ItemType::Other("SubHeader".to_string())
        );
        assert_eq!(ItemType::Other("Quiz".into()).to_string(), "Quiz");
    }

    #[test]
    fn test_module_item_content() {
        let item: ModuleItem = serde_json::from_str(
            r#"{"id": 1, "title": "Syllabus", "type": "ExternalUrl",
                "external_url": "https://example.com", "indent": 0}"#,
        )
        .unwrap();
        assert_eq!(
            item.content().unwrap(),
            ItemContent::ExternalUrl {
                url: "https://example.com".into()
            }
        );

        let item: ModuleItem =
            serde_json::from_str(r#"{"id": 2, "title": "Week 1", "type": "SubHeader"}"#).unwrap();
        assert_eq!(item.content().unwrap(), ItemContent::Other);
    }

    #[test]
    fn test_module_item_missing_reference() {
        let item: ModuleItem =
            serde_json::from_str(r#"{"id": 3, "title": "Slides", "type": "File"}"#).unwrap();
        let err = item.content().unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "content_id", .. }));
        assert!(err.is_item_local());
    }

    #[test]
    fn test_course_requires_name() {
        let restricted = serde_json::from_str::<Course>(
            r#"{"id": 5, "access_restricted_by_date": true}"#,
        );
        assert!(restricted.is_err());
    }

    #[test]
    fn test_file_download_url() {
        let file: File =
            serde_json::from_str(r#"{"id": 9, "filename": "a.pdf", "url": ""}"#).unwrap();
        assert!(file.download_url().is_err());

        let file: File = serde_json::from_str(
            r#"{"id": 9, "filename": "a.pdf", "url": "https://x/files/9/download"}"#,
        )
        .unwrap();
        assert_eq!(file.download_url().unwrap(), "https://x/files/9/download");
    }
}
