//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::params::{ExportConfig, GradientParams, GradientSpan, RenderConfig, WaveParams};
use crate::random::RandomScalar;

/// Command line arguments; every flag defaults to the reference look
#[derive(Parser, Debug)]
#[command(name = "Chromatica")]
#[command(about = "Procedural wave gradient sketch (click to regenerate, space to export)", long_about = None)]
pub struct Args {
    /// Seed for reproducible scenes (default: OS entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of waves
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub waves: usize,

    /// Wave samples per pixel column
    #[arg(long, value_name = "SAMPLES", default_value_t = 4.0)]
    pub smoothness: f32,

    /// Directory screenshots are written to (must exist)
    #[arg(long, value_name = "DIR", default_value = "exports")]
    pub export_dir: PathBuf,

    /// Walk the gradient all the way to its end color
    #[arg(long)]
    pub inclusive_gradient: bool,
}

impl Args {
    /// Wave parameters sized to the window, with overrides applied and validated
    pub fn wave_params(&self, render: &RenderConfig) -> Result<WaveParams, ConfigError> {
        let params = WaveParams {
            width: render.window_width,
            height: render.window_height,
            count: self.waves,
            smoothness: self.smoothness,
            ..Default::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn gradient_params(&self) -> GradientParams {
        let span = if self.inclusive_gradient {
            GradientSpan::Inclusive
        } else {
            GradientSpan::Exclusive
        };
        GradientParams {
            span,
            ..Default::default()
        }
    }

    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            dir: self.export_dir.clone(),
            ..Default::default()
        }
    }

    /// Random source for the wave generator
    pub fn random_source(&self) -> RandomScalar {
        match self.seed {
            Some(seed) => RandomScalar::from_seed(seed),
            None => RandomScalar::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chromatica").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_reference() {
        let args = parse(&[]);
        let params = args.wave_params(&RenderConfig::default()).unwrap();

        assert_eq!(args.seed, None);
        assert_eq!((params.width, params.height), (1600, 900));
        assert_eq!(params.count, 3);
        assert_eq!(params.smoothness, 4.0);
        assert_eq!(args.gradient_params().span, GradientSpan::Exclusive);
        assert_eq!(args.export_config().dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_overrides_apply() {
        let args = parse(&[
            "--seed",
            "17",
            "--waves",
            "5",
            "--smoothness",
            "2",
            "--export-dir",
            "shots",
            "--inclusive-gradient",
        ]);
        let params = args.wave_params(&RenderConfig::default()).unwrap();

        assert_eq!(args.seed, Some(17));
        assert_eq!(params.count, 5);
        assert_eq!(params.smoothness, 2.0);
        assert_eq!(args.gradient_params().span, GradientSpan::Inclusive);
        assert_eq!(args.export_config().dir, PathBuf::from("shots"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = parse(&["--waves", "0"]);
        assert_eq!(
            args.wave_params(&RenderConfig::default()).unwrap_err(),
            ConfigError::NoWaves(0)
        );

        let args = parse(&["--smoothness=-1"]);
        assert!(matches!(
            args.wave_params(&RenderConfig::default()),
            Err(ConfigError::Smoothness { .. })
        ));

        let args = parse(&["--smoothness", "1e30"]);
        assert!(matches!(
            args.wave_params(&RenderConfig::default()),
            Err(ConfigError::Smoothness { .. })
        ));

        let args = parse(&["--smoothness", "0.0001"]);
        assert!(matches!(
            args.wave_params(&RenderConfig::default()),
            Err(ConfigError::NoSamples { .. })
        ));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let args = parse(&["--seed", "3"]);
        let mut a = args.random_source();
        let mut b = args.random_source();
        assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
    }
}
