//! Numbered PNG screenshots.

use std::path::PathBuf;

use image::RgbaImage;
use tracing::info;

use crate::error::ExportError;
use crate::params::ExportConfig;

/// Writes frames to `<dir>/<prefix><n>.png`, counting from 0 each run
pub struct Exporter {
    config: ExportConfig,
    next_index: usize,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            next_index: 0,
        }
    }

    /// Index the next export will use
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Write `image` as the next numbered PNG.
    ///
    /// The counter advances on every call, so a failed export leaves a gap
    /// in the numbering rather than reusing the index. The directory is never
    /// created here.
    pub fn export(&mut self, image: &RgbaImage) -> Result<PathBuf, ExportError> {
        let index = self.next_index;
        self.next_index += 1;

        let dir = &self.config.dir;
        if !dir.exists() {
            return Err(ExportError::MissingDirectory(dir.clone()));
        }
        if !dir.is_dir() {
            return Err(ExportError::NotADirectory(dir.clone()));
        }

        let path = self.config.path_for(index);
        image.save_with_format(&path, image::ImageFormat::Png)?;

        info!(path = %path.display(), "Exported frame");
        Ok(path)
    }
}
