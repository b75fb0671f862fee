//! Configuration validation.

use url::Url;

use crate::error::{Error, Result};

/// Parse and validate the target page URL.
///
/// Only http and https URLs are accepted.
pub fn validate_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::Config(format!(
            "unsupported URL scheme '{}' in '{}'",
            scheme, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_url() {
        let url = validate_page_url("https://www.instagram.com/p/abc123/").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn accepts_http_url() {
        assert!(validate_page_url("http://example.com/page").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(validate_page_url("ftp://example.com/file").is_err());
        assert!(validate_page_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(validate_page_url("not a url").is_err());
    }
}
