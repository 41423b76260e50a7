//! Math utilities and types
//!
//! Scene geometry lives in pixel space: x grows to the right, y grows
//! downward, origin at the top-left corner of the canvas.

pub use nalgebra::Vector2;

/// 2D vector type in pixel units
pub type Vec2 = Vector2<f64>;

/// 2D point type in pixel units
pub type Point2 = nalgebra::Point2<f64>;

/// Math constants
pub mod constants {
    /// Pi / 4, the default half-width of the angle sampling range
    pub const FRAC_PI_4: f64 = std::f64::consts::FRAC_PI_4;
}

/// Truncate a coordinate toward zero, matching integer pixel addressing
pub fn snap(value: f64) -> f64 {
    value.trunc()
}

/// Truncate both components of a point toward zero
pub fn snap_point(point: Point2) -> Point2 {
    Point2::new(snap(point.x), snap(point.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_truncates_toward_zero() {
        assert_eq!(snap(12.9), 12.0);
        assert_eq!(snap(-0.7), 0.0);
        assert_eq!(snap(-3.2), -3.0);
    }

    #[test]
    fn test_snap_point() {
        let p = snap_point(Point2::new(99.99, 141.5));
        assert_eq!(p, Point2::new(99.0, 141.0));
    }
}
