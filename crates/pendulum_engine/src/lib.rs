//! # Pendulum Engine
//!
//! Synthesizes labeled images of a simple pendulum lit by a movable point
//! light, together with ground-truth labels for each image.
//!
//! ## Features
//!
//! - **Closed-form scene geometry**: light, rod and shadow positions derived from two angles
//! - **Shadow projection**: rays from the light through the rod endpoints onto a ground line
//! - **Raster output**: RGB canvas rendering and PNG encoding
//! - **Dataset orchestration**: seedable sampling, image files and a CSV label table
//! - **Verification**: label table and image files checked for one-to-one correspondence
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pendulum_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let renderer = SceneRenderer::from_config(&GeneratorConfig::default())?;
//!     let sample = renderer.render(0.0, 0.3, &mut FixedLightOffset(12.0));
//!     println!("labels: {:?}", sample.labels.to_array());
//!
//!     let config = GeneratorConfig::default().with_sample_count(10).with_seed(1);
//!     let summary = DatasetGenerator::new(config)?.run()?;
//!     println!("wrote {} samples", summary.sample_count);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod dataset;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::{DatasetConfig, GeneratorConfig, SceneConfig, StyleConfig},
        dataset::{DatasetError, DatasetGenerator, DatasetManifest, DatasetSummary, LabelRow},
        foundation::math::{Point2, Vec2},
        render::{RenderError, RenderedSample, SceneRenderer},
        scene::{FixedLightOffset, LabelVector, LightOffsetSource, SceneGeometry, SceneParams},
    };
}
