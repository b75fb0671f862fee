//! Filename generation.

use crate::error::{Error, Result};
use crate::media::MediaKind;

/// Build the filename for a downloaded item:
/// `<prefix>_<unixtime_ms>_<index>.<ext>`.
pub fn media_filename(prefix: &str, timestamp_ms: i64, index: usize, kind: MediaKind) -> String {
    format!(
        "{}_{}_{}.{}",
        prefix,
        timestamp_ms,
        index,
        kind.extension()
    )
}

/// Validate a user-supplied filename prefix.
///
/// The prefix must stay a single path component: no separators, no
/// traversal, no null bytes, not empty.
pub fn sanitize_prefix(prefix: &str) -> Result<String> {
    if prefix.contains("..") {
        return Err(Error::InvalidPrefix(format!(
            "path traversal detected: '{}'",
            prefix
        )));
    }

    if prefix.contains('/') || prefix.contains('\\') {
        return Err(Error::InvalidPrefix(format!(
            "path separators not allowed: '{}'",
            prefix
        )));
    }

    if prefix.contains('\0') {
        return Err(Error::InvalidPrefix(format!(
            "null bytes not allowed: '{}'",
            prefix
        )));
    }

    if prefix.trim().is_empty() {
        return Err(Error::InvalidPrefix(
            "prefix cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_format() {
        assert_eq!(
            media_filename("instagram", 1700000000123, 0, MediaKind::Image),
            "instagram_1700000000123_0.jpg"
        );
        assert_eq!(
            media_filename("instagram", 1700000000456, 3, MediaKind::Video),
            "instagram_1700000000456_3.mp4"
        );
    }

    #[test]
    fn sanitize_prefix_valid() {
        assert_eq!(sanitize_prefix("instagram").unwrap(), "instagram");
        assert_eq!(sanitize_prefix("my_post").unwrap(), "my_post");
    }

    #[test]
    fn sanitize_prefix_traversal() {
        assert!(sanitize_prefix("../evil").is_err());
        assert!(sanitize_prefix("a..b").is_err());
    }

    #[test]
    fn sanitize_prefix_separators() {
        assert!(sanitize_prefix("a/b").is_err());
        assert!(sanitize_prefix("a\\b").is_err());
    }

    #[test]
    fn sanitize_prefix_empty() {
        assert!(sanitize_prefix("").is_err());
        assert!(sanitize_prefix("   ").is_err());
    }
}
