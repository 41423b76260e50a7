//! Raster rendering of pendulum scenes
//!
//! - `shapes`: glyph primitives and the ordered draw list
//! - `canvas`: the RGB raster target and PNG output
//! - `renderer`: scene geometry to image plus labels

pub mod canvas;
pub mod renderer;
pub mod shapes;

pub use canvas::Canvas;
pub use renderer::{RenderedSample, SceneRenderer};
pub use shapes::{DrawList, Shape};

use crate::config::ConfigError;
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Canvas side length cannot hold an image
    #[error("Invalid canvas size: {0}")]
    InvalidCanvas(u32),

    /// Scene or style configuration rejected
    #[error("Render configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image encoding or writing failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
