//! Filename sanitization.

use crate::error::{Error, Result};

/// Longest file name most filesystems accept, in bytes.
const MAX_FILENAME_BYTES: usize = 255;

/// Device names Windows refuses as file names, with or without extension.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Longest extension kept intact when a long name is shortened.
const MAX_EXTENSION_BYTES: usize = 16;

/// Turn an arbitrary title into a single safe path segment.
///
/// Characters that are illegal on common filesystems are removed, leading
/// and trailing whitespace and trailing dots are trimmed, and reserved
/// Windows device names get an `_` appended. Names longer than 255 bytes
/// are shortened, keeping the extension.
///
/// Returns an error when nothing usable is left, e.g. for `".."`.
pub fn sanitize_filename(name: &str) -> Result<String> {
    sanitize_within(name, MAX_FILENAME_BYTES)
}

/// Name for an artifact written from an item title, e.g. `Week 1.html`.
///
/// The title is shortened so that the name including the extension still
/// fits in 255 bytes.
pub fn artifact_filename(title: &str, extension: &str) -> Result<String> {
    let budget = MAX_FILENAME_BYTES.saturating_sub(extension.len() + 1);
    Ok(format!("{}.{}", sanitize_within(title, budget)?, extension))
}

fn sanitize_within(name: &str, max_bytes: usize) -> Result<String> {
    let stripped: String = name.chars().filter(|c| !is_forbidden(*c)).collect();

    let mut sanitized = shorten(stripped.trim(), max_bytes)
        .trim_end_matches(['.', ' '])
        .to_string();

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(format!(
            "'{}' has no usable characters",
            name
        )));
    }

    if is_reserved(&sanitized) {
        sanitized.push('_');
    }

    Ok(sanitized)
}

/// Cut `name` down to `max` bytes, preserving a short extension.
fn shorten(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    match name.rfind('.') {
        Some(dot)
            if dot > 0 && name.len() - dot <= MAX_EXTENSION_BYTES && name.len() - dot < max =>
        {
            let extension = &name[dot..];
            let stem = truncate_to_bytes(&name[..dot], max - extension.len());
            format!("{}{}", stem.trim_end_matches(['.', ' ']), extension)
        }
        _ => truncate_to_bytes(name, max).to_string(),
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

fn is_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(stem))
}

fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
