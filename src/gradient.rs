//! Band colors interpolated between two endpoints.

use crate::color::Color;
use crate::params::{GradientParams, GradientSpan};

/// One color per band, topmost band first, `count + 1` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    /// Interpolate `count + 1` colors from `from` toward `to`.
    ///
    /// `gradient[i] = from - (from - to) * (i / d)` with wrapping channel
    /// arithmetic, where `d` is `count + 1` for [`GradientSpan::Exclusive`]
    /// and `count` for [`GradientSpan::Inclusive`].
    pub fn linear(from: Color, to: Color, count: usize, span: GradientSpan) -> Self {
        let difference = from.wrapping_sub(to);
        let steps = match span {
            GradientSpan::Exclusive => count + 1,
            GradientSpan::Inclusive => count.max(1),
        } as f32;

        let colors = (0..=count)
            .map(|i| {
                let multiplier = i as f32 / steps;
                from.wrapping_sub(difference.scale(multiplier))
            })
            .collect();

        Self { colors }
    }

    /// Gradient for `count` waves from configured endpoints
    pub fn from_params(params: &GradientParams, count: usize) -> Self {
        Self::linear(params.from, params.to, count, params.span)
    }

    /// Color of band `index`, if it exists
    pub fn band(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Color below every wave
    pub fn last(&self) -> Color {
        // Never empty: `linear` always yields count + 1 >= 1 entries
        self.colors[self.colors.len() - 1]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::rgba(100, 100, 100, 255);

    #[test]
    fn test_length_is_count_plus_one() {
        for count in 0..8 {
            let g = Gradient::linear(
                Color::DARK_PURPLE,
                Color::BLACK,
                count,
                GradientSpan::Exclusive,
            );
            assert_eq!(g.len(), count + 1);
            assert_eq!(g.band(0), Some(Color::DARK_PURPLE));
        }
    }

    #[test]
    fn test_exclusive_gray_to_black() {
        let g = Gradient::linear(GRAY, Color::BLACK, 3, GradientSpan::Exclusive);
        assert_eq!(
            g.colors(),
            &[
                GRAY,
                Color::rgba(75, 75, 75, 255),
                Color::rgba(50, 50, 50, 255),
                Color::rgba(25, 25, 25, 255),
            ]
        );
    }

    #[test]
    fn test_inclusive_reaches_end_color() {
        let g = Gradient::linear(GRAY, Color::BLACK, 3, GradientSpan::Inclusive);
        assert_eq!(g.band(0), Some(GRAY));
        assert_eq!(g.last(), Color::BLACK);

        // 100 * 1/3 and 100 * 2/3 truncate
        assert_eq!(g.band(1), Some(Color::rgba(67, 67, 67, 255)));
        assert_eq!(g.band(2), Some(Color::rgba(34, 34, 34, 255)));
    }

    #[test]
    fn test_inclusive_single_wave_hits_both_ends() {
        let g = Gradient::linear(Color::DARK_PURPLE, Color::BLACK, 1, GradientSpan::Inclusive);
        assert_eq!(g.colors(), &[Color::DARK_PURPLE, Color::BLACK]);
    }

    #[test]
    fn test_default_palette_bands() {
        let g = Gradient::from_params(&GradientParams::default(), 3);
        assert_eq!(
            g.colors(),
            &[
                Color::rgba(112, 31, 126, 255),
                Color::rgba(84, 24, 95, 255),
                Color::rgba(56, 16, 63, 255),
                Color::rgba(28, 8, 32, 255),
            ]
        );
    }

    #[test]
    fn test_rising_channel_wraps() {
        // 0 - 100 wraps to 156; 156 * 0.5 = 78; 0 - 78 wraps to 178
        let g = Gradient::linear(
            Color::rgba(0, 0, 0, 255),
            Color::rgba(100, 0, 0, 255),
            1,
            GradientSpan::Exclusive,
        );
        assert_eq!(g.band(1), Some(Color::rgba(178, 0, 0, 255)));
    }

    #[test]
    fn test_band_out_of_range() {
        let g = Gradient::linear(GRAY, Color::BLACK, 2, GradientSpan::Exclusive);
        assert_eq!(g.band(3), None);
    }
}
