//! Per-frame draw passes: clear, wave strokes, band composite, FPS overlay.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::compositor::ColumnBoundaries;
use crate::overlay;
use crate::params::{Palette, RenderConfig};
use crate::scene::Scene;

/// Rasterizes a [`Scene`] into a reusable canvas
pub struct FrameComposer {
    canvas: Canvas,
    palette: Palette,
    stroke_width: u32,
    overlay_scale: u32,
    columns: Vec<ColumnBoundaries>,
}

impl FrameComposer {
    pub fn new(config: &RenderConfig, palette: Palette) -> Self {
        Self {
            canvas: Canvas::new(config.window_width, config.window_height),
            palette,
            stroke_width: config.stroke_width,
            overlay_scale: config.overlay_scale,
            columns: Vec::new(),
        }
    }

    /// Last composed frame
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Redraw the whole frame from `scene`
    pub fn compose(&mut self, scene: &Scene, fps: u32) -> &Canvas {
        self.canvas.clear(self.palette.background);

        for wave in &scene.waves {
            self.canvas
                .draw_line_strip(wave.points(), self.stroke_width, self.palette.stroke);
        }

        self.composite(scene);

        overlay::draw_fps(&mut self.canvas, fps, self.overlay_scale, self.palette.overlay);

        &self.canvas
    }

    /// Blend every pixel's band color over what the earlier passes drew
    fn composite(&mut self, scene: &Scene) {
        let width = self.canvas.width() as usize;
        self.columns.resize_with(width, ColumnBoundaries::new);
        for (x, column) in self.columns.iter_mut().enumerate() {
            column.load(x as f32, &scene.waves);
        }

        let gradient = &scene.gradient;
        let columns = &self.columns;
        for (x, y, px) in self.canvas.image_mut().enumerate_pixels_mut() {
            let color = columns[x as usize].color_at(y as f32, gradient);
            *px = color.over(Color::from(*px)).into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Gradient;
    use crate::params::GradientSpan;
    use crate::wave::{Wave, WaveShape};

    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 48;

    fn composer() -> FrameComposer {
        let config = RenderConfig {
            window_width: WIDTH,
            window_height: HEIGHT,
            overlay_scale: 1,
            ..Default::default()
        };
        FrameComposer::new(&config, Palette::default())
    }

    fn flat_scene(baseline: f32, from: Color, to: Color) -> Scene {
        let shape = WaveShape {
            baseline,
            wavelength: 100.0,
            amplitude: 0.0,
            phase: 0.0,
        };
        Scene {
            waves: vec![Wave::sample(shape, WIDTH as usize, 1.0)],
            gradient: Gradient::linear(from, to, 1, GradientSpan::Inclusive),
        }
    }

    #[test]
    fn test_opaque_bands_cover_strokes() {
        let top = Color::rgba(10, 20, 30, 255);
        let bottom = Color::rgba(200, 100, 50, 255);
        let scene = flat_scene(24.0, top, bottom);
        let mut composer = composer();
        let canvas = composer.compose(&scene, 60);

        assert_eq!(canvas.pixel(50, 10), Some(top));
        assert_eq!(canvas.pixel(50, 24), Some(top));
        assert_eq!(canvas.pixel(50, 25), Some(bottom));
        assert_eq!(canvas.pixel(50, 47), Some(bottom));
    }

    #[test]
    fn test_transparent_bands_show_background_and_strokes() {
        let clear = Color::rgba(0, 0, 0, 0);
        let scene = flat_scene(24.0, clear, clear);
        let mut composer = composer();
        let canvas = composer.compose(&scene, 60);

        assert_eq!(canvas.pixel(50, 24), Some(Color::RAY_WHITE));
        assert_eq!(canvas.pixel(50, 10), Some(Color::DARK_GRAY));
        assert_eq!(canvas.pixel(50, 30), Some(Color::DARK_GRAY));
    }

    #[test]
    fn test_fps_overlay_drawn_last() {
        let scene = flat_scene(24.0, Color::BLACK, Color::BLACK);
        let mut composer = composer();
        let canvas = composer.compose(&scene, 88);

        let (w, h) = overlay::text_size(&overlay::fps_label(88), 1);
        let lit = (0..h as i32)
            .flat_map(|y| (0..w as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(Color::LIME))
            .count();
        assert!(lit > 0);
        assert_eq!(canvas.pixel(w as i32 + 2, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_recompose_fully_replaces_frame() {
        let mut composer = composer();
        let red = Color::rgba(255, 0, 0, 255);
        let blue = Color::rgba(0, 0, 255, 255);

        composer.compose(&flat_scene(40.0, red, red), 60);
        let canvas = composer.compose(&flat_scene(40.0, blue, blue), 60);
        assert_eq!(canvas.pixel(50, 20), Some(blue));
        assert_eq!(canvas.pixel(50, 45), Some(blue));
    }
}
