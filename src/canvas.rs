//! CPU framebuffer the scene is rasterized into before upload.

use glam::Vec2;
use image::RgbaImage;

use crate::color::Color;

/// RGBA8 software canvas
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Overwrite every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        let px = image::Rgba::from(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Read a pixel (bounds checked)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(Color::from(*self.image.get_pixel(x as u32, y as u32)))
        } else {
            None
        }
    }

    /// Blend `color` over the pixel at (x, y); out-of-bounds writes are dropped
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let px = self.image.get_pixel_mut(x as u32, y as u32);
            *px = color.over(Color::from(*px)).into();
        }
    }

    /// Blend a solid `w`×`h` rectangle with its top-left corner at (x, y)
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.blend_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Stroke a segment with a square brush `thickness` pixels wide
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: u32, color: Color) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        let thickness = thickness.max(1);
        let half = (thickness as i32 - 1) / 2;

        for i in 0..=steps {
            let p = from + delta * i as f32 / steps as f32;
            let x = p.x.floor() as i32 - half;
            let y = p.y.floor() as i32 - half;
            self.fill_rect(x, y, thickness, thickness, color);
        }
    }

    /// Stroke consecutive points as a connected polyline
    pub fn draw_line_strip(&mut self, points: &[Vec2], thickness: u32, color: Color) {
        match points {
            [] => {}
            [only] => self.draw_line(*only, *only, thickness, color),
            _ => {
                for segment in points.windows(2) {
                    self.draw_line(segment[0], segment[1], thickness, color);
                }
            }
        }
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}
