use serde::{Deserialize, Serialize};

/// A piece on the canvas wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPost {
    pub id: String,
    pub author: String,
    pub caption: String,
    /// Medium line shown under the caption, e.g. "Spray on brick".
    pub medium: String,
    pub likes: u32,
}
