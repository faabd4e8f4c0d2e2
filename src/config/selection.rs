//! Course selection definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which courses to download.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseSelection {
    /// Every course visible to the token (default).
    #[default]
    All,
    /// Only the listed course ids, in the given order.
    Ids(Vec<u64>),
}

impl fmt::Display for CourseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseSelection::All => write!(f, "all"),
            CourseSelection::Ids(ids) => {
                let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
                write!(f, "{}", ids.join(","))
            }
        }
    }
}

impl FromStr for CourseSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CourseSelection::All);
        }

        let mut ids = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let id = part
                .parse::<u64>()
                .map_err(|_| format!("Invalid course id: '{}'", part))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.is_empty() {
            return Err(format!("No course ids in '{}'", s));
        }

        Ok(CourseSelection::Ids(ids))
    }
}

impl TryFrom<String> for CourseSelection {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseSelection> for String {
    fn from(selection: CourseSelection) -> Self {
        selection.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        assert_eq!("all".parse::<CourseSelection>().unwrap(), CourseSelection::All);
        assert_eq!("ALL".parse::<CourseSelection>().unwrap(), CourseSelection::All);
        assert_eq!("".parse::<CourseSelection>().unwrap(), CourseSelection::All);
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            "101, 202,101".parse::<CourseSelection>().unwrap(),
            CourseSelection::Ids(vec![101, 202])
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("101,abc".parse::<CourseSelection>().is_err());
        assert!(",,".parse::<CourseSelection>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let selection = CourseSelection::Ids(vec![7, 8]);
        assert_eq!(selection.to_string(), "7,8");
        assert_eq!(selection.to_string().parse::<CourseSelection>().unwrap(), selection);
    }
}
