//! Chromatica library - Procedural wave gradient renderer

pub mod canvas;
pub mod cli;
pub mod color;
pub mod compositor;
pub mod error;
pub mod export;
pub mod frame;
pub mod gradient;
pub mod overlay;
pub mod params;
pub mod random;
pub mod rendering;
pub mod scene;
pub mod wave;
