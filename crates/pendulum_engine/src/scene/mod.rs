//! Pendulum scene model
//!
//! Scene parameters, derived geometry, shadow projection, the light offset
//! source and the label vector computed from a scene.

pub mod geometry;
pub mod labels;
pub mod light;

pub use geometry::{SceneGeometry, SceneParams, HORIZONTAL_RAY_EPSILON};
pub use labels::LabelVector;
pub use light::{FixedLightOffset, LightOffsetSource};
