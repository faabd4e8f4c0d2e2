//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::api::{Course, Module};
use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Folder holding everything downloaded for a course.
pub fn course_dir(output: &Path, course: &Course) -> Result<PathBuf> {
    Ok(output.join(sanitize_filename(&course.name)?))
}

/// Folder holding the items of one module.
pub fn module_dir(output: &Path, course: &Course, module: &Module) -> Result<PathBuf> {
    Ok(course_dir(output, course)?.join(sanitize_filename(&module.name)?))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> Course {
        Course {
            id: 1,
            name: name.to_string(),
            course_code: None,
        }
    }

    fn module(name: &str) -> Module {
        Module {
            id: 2,
            name: name.to_string(),
            position: Some(1),
        }
    }

    #[test]
    fn test_module_dir() {
        let path = module_dir(Path::new("/output"), &course("CS101"), &module("Week 1")).unwrap();
        assert_eq!(path, PathBuf::from("/output/CS101/Week 1"));
    }

    #[test]
    fn test_names_are_sanitized() {
        let path = module_dir(
            Path::new("/output"),
            &course("Intro: C/C++"),
            &module("Week 1 / Part 2"),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/output/Intro CC++/Week 1  Part 2"));
    }

    #[test]
    fn test_unusable_module_name() {
        assert!(module_dir(Path::new("/output"), &course("CS101"), &module("??")).is_err());
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).await.unwrap();
        ensure_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
