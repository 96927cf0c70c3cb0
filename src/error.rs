//! Error types for configuration, GPU setup, and image export.

use std::path::PathBuf;

/// Rejected run-time configuration
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("wave count must be at least 1, got {0}")]
    NoWaves(usize),

    #[error("wave count must be at most {max}, got {count}")]
    TooManyWaves { count: usize, max: usize },

    #[error("smoothness must be in (0, {max}], got {value}")]
    Smoothness { value: f32, max: f32 },

    #[error("smoothness {smoothness} leaves no samples across a {width}px canvas")]
    NoSamples { smoothness: f32, width: u32 },

    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Failures while bringing up or driving the wgpu surface
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Screenshot export failures; never fatal
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("export directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("export path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
