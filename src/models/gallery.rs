//! Gallery image data, consumed by `services::gallery::Lightbox`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    pub src: Option<String>,
    /// Lazy-load source, used when `src` is missing.
    pub data_src: Option<String>,
    #[serde(default)]
    pub alt: String,
}

impl GalleryImage {
    pub fn source(&self) -> Option<&str> {
        self.src
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.data_src.as_deref().filter(|s| !s.is_empty()))
    }
}
