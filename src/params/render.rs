//! Window and overlay configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Window title
    pub title: String,

    /// Wave stroke thickness (pixels)
    pub stroke_width: u32,

    /// FPS overlay glyph scale (1 = 5x7 pixel glyphs)
    pub overlay_scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1600,
            window_height: 900,
            title: "Chromatica".to_string(),
            stroke_width: 1,
            overlay_scale: 3, // ~20px tall text
        }
    }
}
