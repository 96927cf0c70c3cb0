//! Wave generation parameters.

use crate::error::ConfigError;

/// Upper bound on `WaveParams::count`
pub const MAX_WAVES: usize = 256;

/// Upper bound on `WaveParams::smoothness` (samples per column)
pub const MAX_SMOOTHNESS: f32 = 64.0;

/// Wave generation parameters
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Canvas width (pixels); waves span `0..width`
    pub width: u32,

    /// Canvas height (pixels); baselines and amplitudes scale with it
    pub height: u32,

    /// Number of waves (bands = count + 1)
    pub count: usize,

    /// Samples per pixel column
    /// 4.0 = sub-pixel sampling, 6400 points per wave at 1600px
    pub smoothness: f32,

    /// Largest peak-to-peak height (fraction of canvas height)
    /// Drawn uniformly from [half of this, this], amplitude is half the draw
    pub peak_to_peak_fraction: f32,

    /// Maximum baseline offset from the evenly spaced position (fraction of height)
    pub baseline_jitter: f32,

    /// Phase draw range (radians)
    /// Zero width keeps every wave starting at its baseline
    pub phase_range: (f32, f32),
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            count: 3,
            smoothness: 4.0,
            peak_to_peak_fraction: 0.15,
            baseline_jitter: 0.05,
            phase_range: (0.0, 0.0),
        }
    }
}

impl WaveParams {
    /// Number of points sampled per wave
    pub fn samples_per_wave(&self) -> usize {
        (self.smoothness * self.width as f32) as usize
    }

    /// Wavelength draw range (pixels): half the canvas width to the full width
    pub fn wavelength_range(&self) -> (f32, f32) {
        let width = self.width as f32;
        (width / 2.0, width)
    }

    /// Peak-to-peak draw range (pixels)
    pub fn peak_to_peak_range(&self) -> (f32, f32) {
        let peak_to_peak = self.peak_to_peak_fraction * self.height as f32;
        (peak_to_peak / 2.0, peak_to_peak)
    }

    /// Validate parameter values
    ///
    /// Every accepted configuration yields at least one sample per wave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoWaves(self.count));
        }
        if self.count > MAX_WAVES {
            return Err(ConfigError::TooManyWaves {
                count: self.count,
                max: MAX_WAVES,
            });
        }
        // NaN fails the range check
        if !(self.smoothness > 0.0 && self.smoothness <= MAX_SMOOTHNESS) {
            return Err(ConfigError::Smoothness {
                value: self.smoothness,
                max: MAX_SMOOTHNESS,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_wave() == 0 {
            return Err(ConfigError::NoSamples {
                smoothness: self.smoothness,
                width: self.width,
            });
        }
        Ok(())
    }
}
