//! File system helpers.

pub mod naming;

pub use naming::{media_filename, sanitize_prefix};
