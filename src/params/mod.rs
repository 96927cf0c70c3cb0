//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (pixels, fractions of canvas height, samples per column)
//! - Documented ranges and meanings
//! - Defaults matching the reference look

mod export;
mod palette;
mod render;
mod wave;

// Re-export all types
pub use export::ExportConfig;
pub use palette::{GradientParams, GradientSpan, Palette};
pub use render::RenderConfig;
pub use wave::WaveParams;
