//! File references embedded in HTML bodies.
//!
//! Canvas rich content links to course files with paths such as
//! `/courses/12/files/345/preview` or `/files/345/download`. The scan is
//! purely textual: any `/files/<digits>` occurrence counts, inside or
//! outside of markup.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static FILE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/files/(\d+)").expect("file reference pattern is valid")
});

/// Collect the distinct file ids referenced in `text`.
pub fn extract_file_ids(text: Option<&str>) -> BTreeSet<u64> {
    let Some(text) = text else {
        return BTreeSet::new();
    };

    FILE_REFERENCE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        // ids too large for u64 cannot name a real file
        .filter_map(|id| id.as_str().parse::<u64>().ok())
        .collect()
}
