//! Post download orchestration.

use chrono::Utc;

use crate::client::PageClient;
use crate::config::Config;
use crate::download::media::download_media_item;
use crate::download::state::BatchState;
use crate::error::Result;
use crate::extract::MediaExtractor;
use crate::fs::media_filename;
use crate::media::MediaItem;

/// Fetch the configured page, extract its media URLs, and download each
/// one sequentially into the output directory.
///
/// An empty extraction result is a normal terminal state. By default the
/// first failed download aborts the batch, leaving remaining URLs
/// untouched; with `keep_going` the failure is recorded in the returned
/// [`BatchState`] and the loop continues.
pub async fn download_post(
    client: &PageClient,
    extractor: &dyn MediaExtractor,
    config: &Config,
) -> Result<BatchState> {
    tokio::fs::create_dir_all(&config.output_dir).await?;

    tracing::info!("Fetching page: {}", config.page_url);
    let html = client.fetch_page(config.page_url.as_str()).await?;

    let urls = extractor.extract_media_urls(&html);
    let mut state = BatchState {
        found_count: urls.len(),
        ..Default::default()
    };

    if urls.is_empty() {
        tracing::info!("No media found");
        return Ok(state);
    }

    tracing::info!("Found {} media items. Downloading...", urls.len());

    for (index, url) in urls.iter().enumerate() {
        let item = MediaItem::from_url(url.clone());
        let timestamp_ms = Utc::now().timestamp_millis();
        let filename = media_filename(&config.filename_prefix, timestamp_ms, index, item.kind);
        let output_path = config.output_dir.join(&filename);

        match download_media_item(client, &item, &output_path, config.show_downloads).await {
            Ok(_) => {
                state.record_downloaded(item.kind);
                if config.show_downloads {
                    tracing::info!("Downloaded: {}", filename);
                }
            }
            Err(e) if config.keep_going => {
                tracing::warn!("Failed to download {}: {}", url, e);
                state.record_failed(url, e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "All downloads completed: {} pictures, {} videos",
        state.pic_count,
        state.vid_count
    );

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::path::Path;
    use std::thread;

    use crate::client::PageClient;
    use crate::extract::RegexExtractor;

    /// Serve a page referencing three media URLs on the same listener:
    /// two that respond with a small body and one that returns HTTP 500.
    fn serve_media_page() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(s) => s,
                    Err(_) => break,
                };

                let mut buf = [0u8; 1024];
                let n = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = if path == "/page" {
                    let base = format!("http://{}", addr);
                    (
                        "200 OK",
                        format!(
                            concat!(
                                r#"{{"display_url":"{base}/media/a.jpg"}}"#,
                                r#"{{"display_url":"{base}/media/broken.jpg"}}"#,
                                r#"{{"display_url":"{base}/media/c.jpg"}}"#
                            ),
                            base = base
                        ),
                    )
                } else if path.contains("broken") {
                    ("500 Internal Server Error", String::new())
                } else {
                    ("200 OK", "media-bytes".to_string())
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        addr
    }

    fn test_config(addr: &SocketAddr, dir: &Path, keep_going: bool) -> Config {
        let mut config = Config::new(format!("http://{}/page", addr).parse().unwrap());
        config.output_dir = dir.to_path_buf();
        config.keep_going = keep_going;
        config.show_downloads = false;
        config
    }

    fn downloaded_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn failed_download_aborts_remaining_items() {
        let addr = serve_media_page();
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&addr, dir.path(), false);
        let client = PageClient::new("Mozilla/5.0", None).unwrap();
        let extractor = RegexExtractor::new();

        let result = download_post(&client, &extractor, &config).await;
        assert!(result.is_err());

        // Only the item before the failure made it to disk.
        let files = downloaded_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with(".jpg"));

        let contents = std::fs::read_to_string(dir.path().join(&files[0])).unwrap();
        assert_eq!(contents, "media-bytes");
    }

    #[tokio::test]
    async fn keep_going_records_failure_and_continues() {
        let addr = serve_media_page();
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&addr, dir.path(), true);
        let client = PageClient::new("Mozilla/5.0", None).unwrap();
        let extractor = RegexExtractor::new();

        let state = download_post(&client, &extractor, &config).await.unwrap();

        assert_eq!(state.found_count, 3);
        assert_eq!(state.downloaded_count(), 2);
        assert_eq!(state.failed.len(), 1);
        assert!(state.failed[0].url.contains("broken"));
        assert_eq!(downloaded_files(dir.path()).len(), 2);
    }
}
