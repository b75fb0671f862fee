//! Media item representation.

pub mod item;

pub use item::{MediaItem, MediaKind};
