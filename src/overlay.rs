//! Frame-rate tracking and the on-screen FPS readout.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::canvas::Canvas;
use crate::color::Color;

/// Frames averaged for the displayed rate
const WINDOW_FRAMES: usize = 60;

/// Glyph cell: 5 columns by 7 rows, plus one column of spacing
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rolling-window frame-rate tracker
pub struct FpsCounter {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_log: Instant,
    min_fps: f32,
    max_fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Counter whose first frame interval is measured from `now`
    pub fn starting_at(now: Instant) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW_FRAMES + 1),
            last_frame: now,
            last_log: now,
            min_fps: f32::MAX,
            max_fps: 0.0,
        }
    }

    pub fn record_frame(&mut self) {
        self.record_frame_at(Instant::now());
    }

    /// Record a frame presented at `now`
    pub fn record_frame_at(&mut self, now: Instant) {
        let frame_time = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > WINDOW_FRAMES {
            self.frame_times.pop_front();
        }

        let current = self.current_fps();
        if current > 0.0 {
            self.min_fps = self.min_fps.min(current);
            self.max_fps = self.max_fps.max(current);
        }

        if now.saturating_duration_since(self.last_log) >= Duration::from_secs(1) {
            trace!(
                min = self.min_fps,
                avg = current,
                max = self.max_fps,
                "Frame rate"
            );
            self.last_log = now;
        }
    }

    /// Average frames per second over the window
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    /// Rate as shown on screen
    pub fn fps(&self) -> u32 {
        self.current_fps().round() as u32
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// 5x7 bitmap rows, bit 4 is the leftmost column
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        _ => return None,
    };
    Some(rows)
}

/// Draw `text` with its top-left corner at (x, y).
///
/// Each glyph pixel becomes a `scale`×`scale` block. Characters without a
/// glyph (including space) only advance the cursor.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: u32, color: Color) {
    let scale = scale.max(1);
    let mut cursor = x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        canvas.fill_rect(
                            cursor + (col * scale) as i32,
                            y + (row as u32 * scale) as i32,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        cursor += (GLYPH_ADVANCE * scale) as i32;
    }
}

/// Pixel size of `text` at `scale`
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    let chars = text.chars().count() as u32;
    let width = (chars * GLYPH_ADVANCE).saturating_sub(1) * scale;
    (width, GLYPH_HEIGHT * scale)
}

/// Readout text for a frame rate, e.g. `"60 FPS"`
pub fn fps_label(fps: u32) -> String {
    format!("{fps:2} FPS")
}

/// Draw the FPS readout at the top-left corner
pub fn draw_fps(canvas: &mut Canvas, fps: u32, scale: u32, color: Color) {
    draw_text(canvas, &fps_label(fps), 0, 0, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_average_over_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);
        for i in 1..=10 {
            counter.record_frame_at(start + Duration::from_millis(20 * i));
        }
        assert_eq!(counter.fps(), 50);
    }

    #[test]
    fn test_fps_window_drops_old_frames() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);
        let mut t = start;
        // A slow stretch followed by a full window of fast frames
        for _ in 0..10 {
            t += Duration::from_millis(100);
            counter.record_frame_at(t);
        }
        for _ in 0..WINDOW_FRAMES {
            t += Duration::from_millis(10);
            counter.record_frame_at(t);
        }
        assert_eq!(counter.fps(), 100);
    }

    #[test]
    fn test_no_frames_reads_zero() {
        assert_eq!(FpsCounter::new().fps(), 0);
    }

    #[test]
    fn test_fps_label_pads_single_digits() {
        assert_eq!(fps_label(7), " 7 FPS");
        assert_eq!(fps_label(60), "60 FPS");
        assert_eq!(fps_label(144), "144 FPS");
    }

    #[test]
    fn test_every_label_char_has_a_glyph() {
        for c in "0123456789FPS".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(glyph(' ').is_none());
    }

    #[test]
    fn test_text_stays_inside_measured_box() {
        let mut canvas = Canvas::new(64, 32);
        canvas.clear(Color::BLACK);
        let label = fps_label(60);
        draw_text(&mut canvas, &label, 0, 0, 1, Color::LIME);

        let (w, h) = text_size(&label, 1);
        assert_eq!((w, h), (35, 7));

        let mut lit = 0;
        for y in 0..32 {
            for x in 0..64 {
                if canvas.pixel(x, y) == Some(Color::LIME) {
                    lit += 1;
                    assert!((x as u32) < w && (y as u32) < h, "stray pixel at ({x}, {y})");
                }
            }
        }
        assert!(lit > 0);
    }

    #[test]
    fn test_scaled_glyph_blocks() {
        let mut canvas = Canvas::new(16, 16);
        canvas.clear(Color::BLACK);
        // '1' has its top row lit only in the middle column
        draw_text(&mut canvas, "1", 0, 0, 2, Color::LIME);
        assert_eq!(canvas.pixel(4, 0), Some(Color::LIME));
        assert_eq!(canvas.pixel(5, 1), Some(Color::LIME));
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }
}
