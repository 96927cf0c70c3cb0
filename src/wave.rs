//! Sampled sine waves that separate the color bands.

use std::f32::consts::TAU;

use glam::Vec2;
use tracing::debug;

use crate::params::WaveParams;
use crate::random::RandomScalar;

/// Parameters of one sinusoid: `y = baseline + amplitude * sin(2π·x/wavelength + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveShape {
    /// Resting height (pixels from the top)
    pub baseline: f32,

    /// Horizontal period (pixels)
    pub wavelength: f32,

    /// Half the peak-to-peak height (pixels)
    pub amplitude: f32,

    /// Phase offset (radians)
    pub phase: f32,
}

impl WaveShape {
    /// Height of the curve at `x`
    pub fn y_at(&self, x: f32) -> f32 {
        let theta = TAU * x / self.wavelength + self.phase;
        self.baseline + self.amplitude * theta.sin()
    }
}

/// A wave sampled at `smoothness` points per pixel column
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    shape: WaveShape,
    smoothness: f32,
    points: Vec<Vec2>,
}

impl Wave {
    /// Sample `shape` at `x_j = j / smoothness` for `j in 0..samples`
    pub fn sample(shape: WaveShape, samples: usize, smoothness: f32) -> Self {
        let points = (0..samples)
            .map(|j| {
                let x = j as f32 / smoothness;
                Vec2::new(x, shape.y_at(x))
            })
            .collect();

        Self {
            shape,
            smoothness,
            points,
        }
    }

    pub fn shape(&self) -> &WaveShape {
        &self.shape
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Sampled height at the sample nearest below `x`.
    ///
    /// The index `floor(x * smoothness)` is clamped into the sample range, so
    /// columns past either edge read the first or last sample. Returns `None`
    /// only for a wave with no samples.
    pub fn y_near(&self, x: f32) -> Option<f32> {
        let last = self.points.len().checked_sub(1)?;
        // Float-to-int casts saturate: negative and NaN land on 0
        let index = ((x * self.smoothness).floor() as usize).min(last);
        Some(self.points[index].y)
    }
}

/// Randomized wave set generator
pub struct WaveGenerator {
    params: WaveParams,
    random: RandomScalar,
}

impl WaveGenerator {
    /// Create a generator with its own random source
    pub fn new(params: WaveParams, random: RandomScalar) -> Self {
        Self { params, random }
    }

    /// Generate a fresh set of `params.count` waves, top to bottom by index
    pub fn generate(&mut self) -> Vec<Wave> {
        let p = &self.params;
        let count = p.count;
        let height = p.height as f32;
        let samples = p.samples_per_wave();
        let (min_wavelength, max_wavelength) = p.wavelength_range();
        let (min_peak, max_peak) = p.peak_to_peak_range();
        let (min_phase, max_phase) = p.phase_range;
        let jitter = p.baseline_jitter;
        let smoothness = p.smoothness;

        // Baselines first, then per-wave shape draws
        let baselines: Vec<f32> = (0..count)
            .map(|i| {
                let offset = self.random.uniform(-jitter, jitter);
                ((i + 1) as f32 / (count + 1) as f32 + offset) * height
            })
            .collect();

        baselines
            .into_iter()
            .map(|baseline| {
                let shape = WaveShape {
                    baseline,
                    wavelength: self.random.uniform(min_wavelength, max_wavelength),
                    amplitude: self.random.uniform(min_peak, max_peak) / 2.0,
                    phase: self.random.uniform(min_phase, max_phase),
                };
                debug!(?shape, "Generated wave");
                Wave::sample(shape, samples, smoothness)
            })
            .collect()
    }
}
