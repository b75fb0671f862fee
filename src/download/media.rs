//! Media file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::client::PageClient;
use crate::error::{Error, Result};
use crate::media::MediaItem;

/// Minimum body size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download a media item to the given path, streaming the body to disk
/// as it arrives.
///
/// On failure a partially written file may be left behind; there is no
/// cleanup or atomic rename.
pub async fn download_media_item(
    client: &PageClient,
    item: &MediaItem,
    output_path: &Path,
    show_progress: bool,
) -> Result<PathBuf> {
    let response = client.fetch_media(&item.url).await?;

    let content_length = response.content_length();
    let show_progress =
        show_progress && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let progress = if show_progress {
        let pb = ProgressBar::new(content_length.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut file = File::create(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(output_path.to_path_buf())
}
