mod game;
mod manifest;
pub(crate) mod storage;

pub use game::{GameMetadata, ManifestEntry};
pub use manifest::Manifest;
