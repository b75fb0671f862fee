//! Configuration module.
//!
//! The [`Config`] value is built once at start-up from CLI arguments and
//! passed by reference to the client and orchestrator; nothing here is
//! process-global.

pub mod cookies;
pub mod validation;

use std::path::PathBuf;

use url::Url;

pub use cookies::load_cookie_header;
pub use validation::validate_page_url;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Default cookie file path. One cookie per line, loaded if present.
pub const DEFAULT_COOKIE_FILE: &str = "cookies.txt";

/// User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default prefix for downloaded filenames.
pub const DEFAULT_FILENAME_PREFIX: &str = "instagram";

/// Run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The post page to fetch.
    pub page_url: Url,

    /// Directory downloaded files are written to. Created if missing.
    pub output_dir: PathBuf,

    /// Cookie file path. Missing file means no Cookie header.
    pub cookie_file: PathBuf,

    /// User-Agent header value.
    pub user_agent: String,

    /// Prefix for generated filenames.
    pub filename_prefix: String,

    /// Continue past per-item download failures instead of aborting.
    pub keep_going: bool,

    /// Whether to log per-file progress.
    pub show_downloads: bool,
}

impl Config {
    /// Create a configuration with default paths and headers.
    pub fn new(page_url: Url) -> Self {
        Self {
            page_url,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            cookie_file: PathBuf::from(DEFAULT_COOKIE_FILE),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            keep_going: false,
            show_downloads: true,
        }
    }
}
