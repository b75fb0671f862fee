//! Download orchestration and media file downloading.

pub mod batch;
pub mod media;
pub mod state;

pub use batch::download_post;
pub use media::download_media_item;
pub use state::{BatchState, FailedItem};
