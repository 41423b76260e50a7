//! Scene renderer
//!
//! Turns two scene angles into a raster image plus its label vector. The
//! renderer is stateless between calls; the only per-call input besides the
//! angles is the light offset source.

use std::path::Path;

use image::RgbImage;

use super::canvas::{save_png, Canvas};
use super::shapes::DrawList;
use super::RenderError;
use crate::core::config::{GeneratorConfig, SceneConfig, StyleConfig};
use crate::scene::{LabelVector, LightOffsetSource, SceneGeometry, SceneParams};

/// One rendered sample
#[derive(Debug, Clone)]
pub struct RenderedSample {
    /// Geometry the image was drawn from
    pub geometry: SceneGeometry,
    /// Ground-truth labels
    pub labels: LabelVector,
    /// Rendered `S x S` RGB image
    pub image: RgbImage,
}

impl RenderedSample {
    /// Write the image as PNG
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        save_png(&self.image, path)
    }
}

/// Renders pendulum scenes for a fixed scene and style configuration
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    scene: SceneConfig,
    style: StyleConfig,
    blank: Canvas,
}

impl SceneRenderer {
    /// Create a renderer, validating the scene and style up front
    pub fn new(scene: SceneConfig, style: StyleConfig) -> Result<Self, RenderError> {
        scene.validate()?;
        style.validate()?;
        let blank = Canvas::new(scene.canvas_size, style.background)?;

        log::debug!(
            "Scene renderer ready: {}px canvas, light radius {}, pendulum length {}",
            scene.canvas_size,
            scene.light_radius,
            scene.pendulum_length
        );
        // Light placement comes from the offset source; light_angle is only recorded.
        log::debug!("light_angle is carried in SceneParams but does not position the light");

        Ok(Self { scene, style, blank })
    }

    /// Create a renderer from the scene and style sections of a generator config
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, RenderError> {
        Self::new(config.scene.clone(), config.style.clone())
    }

    /// Scene configuration in use
    pub const fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Style configuration in use
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Render a scene, drawing the light offset from `light_source`
    pub fn render<S>(&self, light_angle: f64, pendulum_angle: f64, light_source: &mut S) -> RenderedSample
    where
        S: LightOffsetSource + ?Sized,
    {
        let offset = light_source.sample_offset(self.scene.light_radius);
        let params = SceneParams::new(light_angle, pendulum_angle);
        self.render_geometry(SceneGeometry::derive(&self.scene, params, offset))
    }

    /// Render already derived geometry
    pub fn render_geometry(&self, geometry: SceneGeometry) -> RenderedSample {
        let mut canvas = self.blank.clone();
        canvas.draw_all(&self.compose(&geometry));

        RenderedSample {
            geometry,
            labels: LabelVector::from_geometry(&geometry, self.scene.canvas_size),
            image: canvas.into_image(),
        }
    }

    /// Build the draw list: light, rod, bob, then shadow on top
    pub fn compose(&self, geometry: &SceneGeometry) -> DrawList {
        let style = &self.style;
        let mut list = DrawList::new();
        list.draw_disc(geometry.light, style.light_glyph_radius, style.light_color);
        list.draw_line(geometry.pendulum_base, geometry.pendulum_tip, style.rod_color, style.rod_width);
        list.draw_disc(geometry.pendulum_tip, style.bob_radius, style.bob_color);
        list.draw_line(geometry.shadow_tip(), geometry.shadow_base(), style.shadow_color, style.shadow_width);
        list
    }
}
