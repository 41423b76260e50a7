//! Scene geometry and shadow projection
//!
//! Everything here is closed-form: given the two scene angles and one light
//! offset, the positions of the light, the rod and its shadow on the ground
//! line follow directly. Pixel space has y pointing down, so the light sits
//! at `center.y - R` (above the pivot) and the rod hangs toward larger y.

use crate::core::config::SceneConfig;
use crate::foundation::math::{snap, snap_point, Point2, Vec2};

/// Denominator substituted when a shadow ray runs parallel to the ground line
pub const HORIZONTAL_RAY_EPSILON: f64 = 1e-5;

/// The two sampled angles of one scene, in radians
///
/// `light_angle` is recorded but does not move the light; placement comes
/// from an independent offset draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Sampled light angle
    pub light_angle: f64,
    /// Pendulum swing angle, 0 = hanging straight down
    pub pendulum_angle: f64,
}

impl SceneParams {
    /// Create scene parameters
    pub const fn new(light_angle: f64, pendulum_angle: f64) -> Self {
        Self { light_angle, pendulum_angle }
    }
}

/// Fully derived geometry of one scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGeometry {
    /// Angles the scene was derived from
    pub params: SceneParams,
    /// Canvas center `C`
    pub center: Point2,
    /// Light position
    pub light: Point2,
    /// Fixed pivot, equal to the center
    pub pendulum_base: Point2,
    /// Swinging end of the rod
    pub pendulum_tip: Point2,
    /// y-coordinate of the ground line
    pub ground_y: f64,
    /// Clamped shadow x of the tip
    pub shadow_tip_x: f64,
    /// Clamped shadow x of the base
    pub shadow_base_x: f64,
}

impl SceneGeometry {
    /// Derive the scene from its angles and the light's horizontal offset
    pub fn derive(scene: &SceneConfig, params: SceneParams, light_offset: f64) -> Self {
        let c = scene.center();
        let center = Point2::new(c, c);

        let mut light_x = c + light_offset;
        if scene.snap_to_pixels {
            light_x = snap(light_x);
        }
        let light = Point2::new(light_x, c - scene.light_radius);

        let swing = Vec2::new(params.pendulum_angle.sin(), params.pendulum_angle.cos());
        let mut pendulum_tip = center + swing * scene.pendulum_length;
        if scene.snap_to_pixels {
            pendulum_tip = snap_point(pendulum_tip);
        }
        let pendulum_base = center;

        let ground_y = scene.ground_y();
        let max_x = scene.max_shadow_x();
        let shadow_tip_x = clamp_shadow_x(project_to_ground(light, pendulum_tip, ground_y), max_x);
        let shadow_base_x = clamp_shadow_x(project_to_ground(light, pendulum_base, ground_y), max_x);

        Self {
            params,
            center,
            light,
            pendulum_base,
            pendulum_tip,
            ground_y,
            shadow_tip_x,
            shadow_base_x,
        }
    }

    /// Shadow point of the tip on the ground line
    pub fn shadow_tip(&self) -> Point2 {
        Point2::new(self.shadow_tip_x, self.ground_y)
    }

    /// Shadow point of the base on the ground line
    pub fn shadow_base(&self) -> Point2 {
        Point2::new(self.shadow_base_x, self.ground_y)
    }

    /// Absolute distance between the two shadow points
    pub fn shadow_length(&self) -> f64 {
        (self.shadow_tip_x - self.shadow_base_x).abs()
    }

    /// Midpoint of the two shadow points
    pub fn shadow_center(&self) -> f64 {
        (self.shadow_tip_x + self.shadow_base_x) / 2.0
    }
}

/// Intersect the ray `light + t * (point - light)` with `y = ground_y`
///
/// Returns the unclamped x-coordinate. A ray parallel to the ground uses
/// [`HORIZONTAL_RAY_EPSILON`] as its y-extent, which yields a large but
/// finite coordinate.
pub fn project_to_ground(light: Point2, point: Point2, ground_y: f64) -> f64 {
    let direction = point - light;
    let dy = if direction.y == 0.0 { HORIZONTAL_RAY_EPSILON } else { direction.y };
    let t = (ground_y - light.y) / dy;
    light.x + t * direction.x
}

/// Keep a shadow coordinate inside `[0, max_x]`
pub fn clamp_shadow_x(x: f64, max_x: f64) -> f64 {
    x.clamp(0.0, max_x)
}
