//! Light placement randomness
//!
//! The light's horizontal offset from the pivot is drawn per sample. The
//! draw goes through [`LightOffsetSource`] so callers decide whether it is
//! random (any `rand::Rng`) or pinned ([`FixedLightOffset`]).

use rand::Rng;

/// Source of the light's horizontal offset from the canvas center
pub trait LightOffsetSource {
    /// Return an offset in pixels within `[-radius, radius]`
    fn sample_offset(&mut self, radius: f64) -> f64;
}

impl<R: Rng + ?Sized> LightOffsetSource for R {
    fn sample_offset(&mut self, radius: f64) -> f64 {
        if radius <= 0.0 {
            return 0.0;
        }
        self.gen_range(-radius..radius)
    }
}

/// Always yields the same offset, clamped to the light radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLightOffset(pub f64);

impl FixedLightOffset {
    /// Light directly above the pivot
    pub const OVERHEAD: Self = Self(0.0);
}

impl LightOffsetSource for FixedLightOffset {
    fn sample_offset(&mut self, radius: f64) -> f64 {
        let radius = radius.abs();
        self.0.clamp(-radius, radius)
    }
}
