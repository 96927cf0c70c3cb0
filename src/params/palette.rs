//! Colors used by the scene and the frame composer.

use crate::color::Color;

/// How far the gradient walks toward its end color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientSpan {
    /// Step `i / (count + 1)`: the last band stops one step short of `to`
    #[default]
    Exclusive,

    /// Step `i / count`: the last band is exactly `to`
    Inclusive,
}

/// Gradient endpoints
#[derive(Debug, Clone)]
pub struct GradientParams {
    /// Topmost band color
    pub from: Color,

    /// Color the bands walk toward
    pub to: Color,

    pub span: GradientSpan,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            from: Color::DARK_PURPLE,
            to: Color::BLACK,
            span: GradientSpan::Exclusive,
        }
    }
}

/// Fixed colors for the frame passes
#[derive(Debug, Clone)]
pub struct Palette {
    /// Clear color at the start of each frame
    pub background: Color,

    /// Wave stroke color
    pub stroke: Color,

    /// FPS overlay text color
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::DARK_GRAY,
            stroke: Color::RAY_WHITE,
            overlay: Color::LIME,
        }
    }
}
