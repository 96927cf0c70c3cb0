//! 8-bit RGBA color with explicit channel arithmetic.
//!
//! Channel subtraction wraps modulo 256 and scaling truncates
//! toward zero. Nothing clamps, so a gradient running "uphill" in a channel
//! wraps around instead of saturating.

use std::fmt;

/// RGBA color, 8 bits per channel, straight (non-premultiplied) alpha
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const DARK_GRAY: Color = Color::rgba(80, 80, 80, 255);
    pub const DARK_PURPLE: Color = Color::rgba(112, 31, 126, 255);
    pub const RAY_WHITE: Color = Color::rgba(245, 245, 245, 255);
    pub const LIME: Color = Color::rgba(0, 158, 47, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channel-wise `self - other`, wrapping modulo 256
    pub fn wrapping_sub(self, other: Color) -> Color {
        Color {
            r: self.r.wrapping_sub(other.r),
            g: self.g.wrapping_sub(other.g),
            b: self.b.wrapping_sub(other.b),
            a: self.a.wrapping_sub(other.a),
        }
    }

    /// Multiply every channel by `multiplier`, truncating toward zero.
    ///
    /// Products outside `0..=255` saturate (Rust's float-to-int cast); for the
    /// multipliers used by gradients (`0.0..=1.0`) this never happens.
    pub fn scale(self, multiplier: f32) -> Color {
        let scale = |c: u8| (c as f32 * multiplier) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: scale(self.a),
        }
    }

    /// Source-over blend of `self` onto `dst`. Result is opaque if `dst` is.
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => self,
            0 => dst,
            alpha => {
                let alpha = alpha as u16;
                let blend = |src: u8, dst: u8| {
                    let v = src as u16 * alpha + dst as u16 * (255 - alpha);
                    ((v + 1 + (v >> 8)) >> 8) as u8
                };
                Color {
                    r: blend(self.r, dst.r),
                    g: blend(self.g, dst.g),
                    b: blend(self.b, dst.b),
                    a: self.a.max(dst.a),
                }
            }
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {}, {} )", self.r, self.g, self.b, self.a)
    }
}
