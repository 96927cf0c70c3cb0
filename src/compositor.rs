//! Per-pixel band lookup.

use glam::Vec2;

use crate::color::Color;
use crate::gradient::Gradient;
use crate::wave::Wave;

/// Index of the band containing `position`.
///
/// Waves are tested in order; the first one whose sampled height is at or
/// below the pixel (`y <= wave_y`, screen y grows downward) wins. Returns
/// `waves.len()` when the pixel is under every wave.
pub fn band_index(position: Vec2, waves: &[Wave]) -> usize {
    waves
        .iter()
        .position(|wave| {
            wave.y_near(position.x)
                .is_some_and(|wave_y| position.y <= wave_y)
        })
        .unwrap_or(waves.len())
}

/// Gradient color of the band containing `position`
pub fn pixel_color(position: Vec2, waves: &[Wave], gradient: &Gradient) -> Color {
    let band = band_index(position, waves);
    gradient.band(band).unwrap_or_else(|| gradient.last())
}

/// Wave heights for one pixel column, looked up once and reused down the column
#[derive(Debug, Default)]
pub struct ColumnBoundaries {
    heights: Vec<f32>,
}

impl ColumnBoundaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the sampled height of every wave at column `x`
    pub fn load(&mut self, x: f32, waves: &[Wave]) {
        self.heights.clear();
        self.heights.extend(
            waves
                .iter()
                .map(|wave| wave.y_near(x).unwrap_or(f32::NEG_INFINITY)),
        );
    }

    /// Same result as [`band_index`] for any pixel in the loaded column
    pub fn band_at(&self, y: f32) -> usize {
        self.heights
            .iter()
            .position(|&wave_y| y <= wave_y)
            .unwrap_or(self.heights.len())
    }

    /// Same result as [`pixel_color`] for any pixel in the loaded column
    pub fn color_at(&self, y: f32, gradient: &Gradient) -> Color {
        gradient
            .band(self.band_at(y))
            .unwrap_or_else(|| gradient.last())
    }
}
