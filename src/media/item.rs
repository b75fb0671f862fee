//! Media item representation and classification.

/// Kind of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a media URL.
    ///
    /// Anything containing `.mp4` is treated as video; everything else
    /// as a JPEG image. Known limitation: non-mp4 video formats and
    /// non-JPEG images are misclassified by this substring check.
    pub fn from_url(url: &str) -> Self {
        if url.contains(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// File extension (without dot) for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Image => "jpg",
        }
    }
}

/// A downloadable media item.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Download URL.
    pub url: String,

    /// Classified media kind.
    pub kind: MediaKind,
}

impl MediaItem {
    /// Build an item from an extracted URL.
    pub fn from_url(url: String) -> Self {
        let kind = MediaKind::from_url(&url);
        Self { url, kind }
    }
}
