//! Destination filename derivation.

use url::Url;

use crate::error::{Error, Result};

/// Derive the destination filename from a download URL.
///
/// Uses the final non-empty path segment, query string excluded. The segment
/// is sanitized before use since it ends up joined onto the backup directory.
pub fn filename_from_url(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)?;

    let segment = url
        .path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .ok_or_else(|| Error::InvalidFilename(url_str.to_string()))?;

    sanitize_filename(segment)
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the name contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Separators and null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
