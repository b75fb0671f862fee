//! Cookie file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a cookie file into a single Cookie header value.
///
/// The file holds one cookie per line; non-empty lines are joined with
/// `; `. A missing file is the normal "no cookies" case and yields
/// `None`. Any other read failure is a fatal start-up error. The file
/// contents are not validated; malformed cookie syntax passes through
/// to the HTTP layer uninterpreted.
pub fn load_cookie_header(path: &Path) -> Result<Option<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Startup(format!(
                "failed to read cookie file {}: {}",
                path.display(),
                e
            )))
        }
    };

    let header = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ");

    if header.is_empty() {
        Ok(None)
    } else {
        Ok(Some(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_no_cookies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        assert_eq!(load_cookie_header(&path).unwrap(), None);
    }

    #[test]
    fn lines_join_with_semicolon_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "sessionid=abc123").unwrap();
        writeln!(file, "csrftoken=xyz").unwrap();

        assert_eq!(
            load_cookie_header(&path).unwrap(),
            Some("sessionid=abc123; csrftoken=xyz".to_string())
        );
    }

    #[test]
    fn single_line_has_no_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "sessionid=abc123\n").unwrap();

        assert_eq!(
            load_cookie_header(&path).unwrap(),
            Some("sessionid=abc123".to_string())
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "a=1\n\n\nb=2\n").unwrap();

        assert_eq!(load_cookie_header(&path).unwrap(), Some("a=1; b=2".to_string()));
    }

    #[test]
    fn empty_file_is_no_cookies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(load_cookie_header(&path).unwrap(), None);
    }
}
