//! Screenshot export configuration.

use std::path::PathBuf;

/// Screenshot export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory; must already exist
    pub dir: PathBuf,

    /// File name prefix, followed by the session counter and `.png`
    pub prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("exports"),
            prefix: "image-".to_string(),
        }
    }
}

impl ExportConfig {
    /// Path of the `index`-th export of this session
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}{}.png", self.prefix, index))
    }
}
