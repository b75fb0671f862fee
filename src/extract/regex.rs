//! Regex-based media URL extraction.

use std::collections::HashSet;

use regex::Regex;

use crate::extract::MediaExtractor;

/// Image URLs appear as `"display_url":"..."` in the embedded markup.
const IMAGE_PATTERN: &str = r#""display_url":"([^"]+)""#;

/// Video URLs appear as `"video_url":"..."`.
const VIDEO_PATTERN: &str = r#""video_url":"([^"]+)""#;

/// Scans the raw page text with one pattern per media kind.
///
/// Brittle against upstream markup changes by nature; kept behind
/// [`MediaExtractor`] so it can be replaced wholesale.
pub struct RegexExtractor {
    image_re: Regex,
    video_re: Regex,
}

impl RegexExtractor {
    pub fn new() -> Self {
        Self {
            image_re: Regex::new(IMAGE_PATTERN).expect("image pattern compiles"),
            video_re: Regex::new(VIDEO_PATTERN).expect("video pattern compiles"),
        }
    }

    /// Undo the JSON escaping of `&` the page applies to query strings.
    fn unescape(value: &str) -> String {
        value.replace("\\u0026", "&")
    }
}

impl Default for RegexExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaExtractor for RegexExtractor {
    fn extract_media_urls(&self, html: &str) -> Vec<String> {
        let mut urls: Vec<String> = Vec::new();

        for re in [&self.image_re, &self.video_re] {
            for capture in re.captures_iter(html) {
                urls.push(Self::unescape(&capture[1]));
            }
        }

        // Remove duplicates while preserving first-seen order
        let mut seen = HashSet::new();
        urls.retain(|url| seen.insert(url.clone()));

        urls
    }
}
