//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    validate_page_url, Config, DEFAULT_COOKIE_FILE, DEFAULT_FILENAME_PREFIX, DEFAULT_OUTPUT_DIR,
    DEFAULT_USER_AGENT,
};
use crate::error::Result;
use crate::fs::sanitize_prefix;

/// Instagram post media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagrab",
    version,
    about = "Download media from an Instagram post page",
    long_about = "Fetches a post page, extracts image and video URLs from the embedded\n\
                  markup, and downloads each one sequentially to a local directory.\n\n\
                  A cookies.txt file (one cookie per line) is picked up automatically\n\
                  when present, for pages that require a logged-in session."
)]
pub struct Args {
    /// Target post page URL.
    pub url: String,

    /// Output directory for downloaded files.
    #[arg(short = 'd', long = "directory", default_value = DEFAULT_OUTPUT_DIR)]
    pub directory: PathBuf,

    /// Path to the cookie file (one cookie per line).
    #[arg(long, default_value = DEFAULT_COOKIE_FILE)]
    pub cookies: PathBuf,

    /// Browser user agent string.
    #[arg(short = 'a', long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Prefix for downloaded filenames.
    #[arg(long, default_value = DEFAULT_FILENAME_PREFIX)]
    pub prefix: String,

    /// Continue past failed downloads instead of aborting the batch.
    #[arg(long)]
    pub keep_going: bool,

    /// Hide per-file download progress.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Validate the arguments and build the run configuration.
    pub fn into_config(self) -> Result<Config> {
        let page_url = validate_page_url(&self.url)?;
        let filename_prefix = sanitize_prefix(&self.prefix)?;

        Ok(Config {
            page_url,
            output_dir: self.directory,
            cookie_file: self.cookies,
            user_agent: self.user_agent,
            filename_prefix,
            keep_going: self.keep_going,
            show_downloads: !self.quiet,
        })
    }
}
