//! Instagrab - download media from an Instagram post page.
//!
//! This library fetches a single post page, extracts image and video URLs
//! from the embedded markup, and downloads each one to a local directory.
//!
//! # Features
//!
//! - Regex-based media URL extraction (images and videos)
//! - Streaming downloads (no whole-file buffering)
//! - Optional cookie file for logged-in page fetches
//! - Best-effort mode that records per-item failures and continues
//!
//! # Example
//!
//! ```no_run
//! use instagrab::{download_post, Config, PageClient, RegexExtractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://www.instagram.com/p/POST_ID/".parse()?);
//!     let client = PageClient::new(&config.user_agent, None)?;
//!     let extractor = RegexExtractor::new();
//!
//!     let state = download_post(&client, &extractor, &config).await?;
//!     println!("{} files downloaded", state.downloaded_count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod extract;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use client::PageClient;
pub use config::Config;
pub use download::{download_post, BatchState};
pub use error::{Error, Result};
pub use extract::{MediaExtractor, RegexExtractor};
pub use media::{MediaItem, MediaKind};
