//! Per-run download state tracking.

use crate::media::MediaKind;

/// A media item that failed to download in keep-going mode.
#[derive(Debug)]
pub struct FailedItem {
    pub url: String,
    pub reason: String,
}

/// State accumulated over one post's download loop.
#[derive(Debug, Default)]
pub struct BatchState {
    /// Number of media URLs the extractor found.
    pub found_count: usize,

    /// Images written to disk.
    pub pic_count: u64,

    /// Videos written to disk.
    pub vid_count: u64,

    /// Items that failed in keep-going mode.
    pub failed: Vec<FailedItem>,
}

impl BatchState {
    /// Record a completed download.
    pub fn record_downloaded(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Image => self.pic_count += 1,
            MediaKind::Video => self.vid_count += 1,
        }
    }

    /// Record a failed item.
    pub fn record_failed(&mut self, url: &str, reason: String) {
        self.failed.push(FailedItem {
            url: url.to_string(),
            reason,
        });
    }

    /// Total files written.
    pub fn downloaded_count(&self) -> u64 {
        self.pic_count + self.vid_count
    }
}
