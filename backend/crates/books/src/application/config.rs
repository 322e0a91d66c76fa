//! Application Configuration
//!
//! Configuration for the books application layer.

/// Books application configuration
#[derive(Debug, Clone)]
pub struct BooksConfig {
    /// Logical image-store folder covers are uploaded under
    pub image_folder: String,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            image_folder: "books".to_string(),
        }
    }
}
