//! Ground-truth label vector

use super::geometry::SceneGeometry;

/// Number of scalars in a label vector
pub const LABEL_COUNT: usize = 4;

/// The four ground-truth scalars emitted per sample
///
/// Spatial values are divided by the canvas size; the pendulum angle stays
/// in raw radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelVector {
    /// Light x / S
    pub light_x: f64,
    /// Pendulum angle in radians
    pub pendulum_angle: f64,
    /// Shadow center / S
    pub shadow_pos: f64,
    /// Shadow length / S
    pub shadow_len: f64,
}

impl LabelVector {
    /// Build the labels for a derived scene on a canvas of side `canvas_size`
    pub fn from_geometry(geometry: &SceneGeometry, canvas_size: u32) -> Self {
        let size = f64::from(canvas_size);
        Self {
            light_x: geometry.light.x / size,
            pendulum_angle: geometry.params.pendulum_angle,
            shadow_pos: geometry.shadow_center() / size,
            shadow_len: geometry.shadow_length() / size,
        }
    }

    /// Labels in table column order
    pub const fn to_array(&self) -> [f64; LABEL_COUNT] {
        [self.light_x, self.pendulum_angle, self.shadow_pos, self.shadow_len]
    }

    /// Build from values in table column order
    pub const fn from_array(values: [f64; LABEL_COUNT]) -> Self {
        Self {
            light_x: values[0],
            pendulum_angle: values[1],
            shadow_pos: values[2],
            shadow_len: values[3],
        }
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SceneConfig;
    use crate::scene::geometry::SceneParams;
    use approx::assert_relative_eq;

    #[test]
    fn test_spatial_labels_are_normalized_and_angle_is_raw() {
        let scene = SceneConfig::default();
        let geometry = SceneGeometry::derive(&scene, SceneParams::new(0.1, 0.5), 10.0);
        let labels = LabelVector::from_geometry(&geometry, scene.canvas_size);

        assert_relative_eq!(labels.light_x, 122.0 / 224.0);
        assert_eq!(labels.pendulum_angle, 0.5);
        assert_relative_eq!(labels.shadow_pos, geometry.shadow_center() / 224.0);
        assert_relative_eq!(labels.shadow_len, geometry.shadow_length() / 224.0);
        assert!(labels.is_finite());
    }

    #[test]
    fn test_array_order_matches_columns() {
        let labels = LabelVector::from_array([0.5, -0.2, 0.4, 0.1]);
        assert_eq!(labels.light_x, 0.5);
        assert_eq!(labels.pendulum_angle, -0.2);
        assert_eq!(labels.to_array(), [0.5, -0.2, 0.4, 0.1]);
    }

    #[test]
    fn test_non_finite_detection() {
        let labels = LabelVector::from_array([0.5, f64::NAN, 0.4, 0.1]);
        assert!(!labels.is_finite());
    }
}
