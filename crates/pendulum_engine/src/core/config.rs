//! # Generator Configuration
//!
//! All tunable values of a dataset run live here: scene geometry, glyph
//! style, and dataset output. Defaults reproduce the canonical dataset
//! (224 px canvas, 7000 samples, light radius 40, pendulum length 30,
//! written to `./dataset`).
//!
//! ## Configuration Categories
//!
//! - **Scene Config**: canvas size and the physical constants of the scene
//! - **Style Config**: glyph colors and sizes used by the rasterizer
//! - **Dataset Config**: output location, sample count, sampling ranges, seed

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use crate::foundation::math::constants::FRAC_PI_4;

// Re-export the file-format layer for convenience
pub use crate::config::{Config, ConfigError};

/// Distance in pixels between the ground line and the bottom canvas edge
pub const GROUND_MARGIN: u32 = 2;

/// Smallest canvas the renderer accepts
pub const MIN_CANVAS_SIZE: u32 = 8;

/// RGB color triple
pub type Rgb = [u8; 3];

/// # Scene Configuration
///
/// Geometry constants of the pendulum scene, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Side length `S` of the square canvas
    pub canvas_size: u32,
    /// Light radius `R`: the light sits `R` above the pivot and moves within `±R` horizontally
    pub light_radius: f64,
    /// Pendulum rod length `L`
    pub pendulum_length: f64,
    /// Truncate the light x and tip coordinates to whole pixels before drawing and projecting
    pub snap_to_pixels: bool,
}

impl SceneConfig {
    /// Canvas center `C = (S/2, S/2)`, using integer division
    pub fn center(&self) -> f64 {
        f64::from(self.canvas_size / 2)
    }

    /// y-coordinate of the ground line shadows are projected onto
    pub fn ground_y(&self) -> f64 {
        f64::from(self.canvas_size.saturating_sub(GROUND_MARGIN))
    }

    /// Largest x-coordinate a shadow point may take after clamping
    pub fn max_shadow_x(&self) -> f64 {
        self.ground_y()
    }

    /// Check that the scene fits inside the canvas
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size < MIN_CANVAS_SIZE {
            return Err(ConfigError::Invalid(format!(
                "canvas_size {} is below the minimum of {}",
                self.canvas_size, MIN_CANVAS_SIZE
            )));
        }
        if !self.light_radius.is_finite() || self.light_radius < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "light_radius must be finite and non-negative, got {}",
                self.light_radius
            )));
        }
        if !self.pendulum_length.is_finite() || self.pendulum_length <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "pendulum_length must be finite and positive, got {}",
                self.pendulum_length
            )));
        }

        let center = self.center();
        let last_pixel = f64::from(self.canvas_size - 1);
        if center - self.light_radius < 0.0 || center + self.light_radius > last_pixel {
            return Err(ConfigError::Invalid(format!(
                "light_radius {} places the light outside a {}px canvas",
                self.light_radius, self.canvas_size
            )));
        }
        if center + self.pendulum_length >= self.ground_y() {
            return Err(ConfigError::Invalid(format!(
                "pendulum_length {} reaches the ground line of a {}px canvas",
                self.pendulum_length, self.canvas_size
            )));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_size: 224,
            light_radius: 40.0,
            pendulum_length: 30.0,
            snap_to_pixels: true,
        }
    }
}

/// # Style Configuration
///
/// Colors and glyph sizes for the rendered scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas fill color
    pub background: Rgb,
    /// Light glyph color
    pub light_color: Rgb,
    /// Light glyph disc radius
    pub light_glyph_radius: f64,
    /// Rod color
    pub rod_color: Rgb,
    /// Rod stroke width
    pub rod_width: f64,
    /// Bob color
    pub bob_color: Rgb,
    /// Bob disc radius
    pub bob_radius: f64,
    /// Shadow color
    pub shadow_color: Rgb,
    /// Shadow stroke width
    pub shadow_width: f64,
}

impl StyleConfig {
    /// The shadow must stay distinguishable from the rod and the bob
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shadow_color == self.rod_color || self.shadow_color == self.bob_color {
            return Err(ConfigError::Invalid(
                "shadow_color must differ from rod_color and bob_color".to_string(),
            ));
        }
        let sizes = [
            ("light_glyph_radius", self.light_glyph_radius),
            ("rod_width", self.rod_width),
            ("bob_radius", self.bob_radius),
            ("shadow_width", self.shadow_width),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            light_color: [255, 200, 0],
            light_glyph_radius: 3.0,
            rod_color: [0, 0, 0],
            rod_width: 2.0,
            bob_color: [255, 0, 0],
            bob_radius: 2.0,
            shadow_color: [100, 100, 100],
            shadow_width: 2.0,
        }
    }
}

/// # Dataset Configuration
///
/// Where samples go, how many there are, and how scene angles are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory receiving the images and the label table
    pub output_dir: PathBuf,
    /// Number of samples to generate
    pub sample_count: usize,
    /// Lower bound of the uniform angle range (radians)
    pub angle_min: f64,
    /// Upper bound of the uniform angle range (radians)
    pub angle_max: f64,
    /// RNG seed; `None` draws one from the operating system
    pub seed: Option<u64>,
    /// Image filename prefix, followed by a zero-padded index
    pub filename_prefix: String,
    /// Label table filename inside `output_dir`
    pub label_file: String,
    /// Log progress every this many samples (0 disables progress logs)
    pub progress_interval: usize,
}

impl DatasetConfig {
    /// Filename of the image for sample `index`
    pub fn image_filename(&self, index: usize) -> String {
        format!("{}_{:05}.png", self.filename_prefix, index)
    }

    /// Full path of the label table
    pub fn label_path(&self) -> PathBuf {
        self.output_dir.join(&self.label_file)
    }

    /// Check ranges and names
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::Invalid("sample_count must be at least 1".to_string()));
        }
        if !self.angle_min.is_finite() || !self.angle_max.is_finite() || self.angle_min >= self.angle_max {
            return Err(ConfigError::Invalid(format!(
                "angle range [{}, {}) is empty or not finite",
                self.angle_min, self.angle_max
            )));
        }
        if !(self.angle_max - self.angle_min).is_finite() {
            return Err(ConfigError::Invalid(format!(
                "angle range [{}, {}) is too wide to sample",
                self.angle_min, self.angle_max
            )));
        }
        if self.filename_prefix.is_empty() || self.filename_prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "filename_prefix {:?} must be a non-empty plain file name",
                self.filename_prefix
            )));
        }
        if self.label_file.is_empty() || self.label_file.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "label_file {:?} must be a plain file name",
                self.label_file
            )));
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./dataset"),
            sample_count: 7000,
            angle_min: -FRAC_PI_4,
            angle_max: FRAC_PI_4,
            seed: None,
            filename_prefix: "pendulum".to_string(),
            label_file: "labels.csv".to_string(),
            progress_interval: 500,
        }
    }
}

/// # Generator Configuration
///
/// Top-level configuration for a dataset run.
///
/// ```toml
/// [scene]
/// canvas_size = 224
///
/// [dataset]
/// output_dir = "./dataset"
/// sample_count = 100
/// seed = 7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Scene geometry
    pub scene: SceneConfig,
    /// Glyph style
    pub style: StyleConfig,
    /// Dataset output
    pub dataset: DatasetConfig,
}

impl GeneratorConfig {
    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dataset.output_dir = dir.into();
        self
    }

    /// Set the number of samples
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.dataset.sample_count = count;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.dataset.seed = Some(seed);
        self
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()?;
        self.style.validate()?;
        self.dataset.validate()
    }
}

impl Config for GeneratorConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_canonical() {
        let config = GeneratorConfig::default();
        assert_eq!(config.scene.canvas_size, 224);
        assert_eq!(config.scene.light_radius, 40.0);
        assert_eq!(config.scene.pendulum_length, 30.0);
        assert_eq!(config.dataset.sample_count, 7000);
        assert_eq!(config.dataset.output_dir, PathBuf::from("./dataset"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_scene_lines() {
        let scene = SceneConfig::default();
        assert_eq!(scene.center(), 112.0);
        assert_eq!(scene.ground_y(), 222.0);

        let odd = SceneConfig { canvas_size: 225, ..SceneConfig::default() };
        assert_eq!(odd.center(), 112.0);
    }

    #[test]
    fn test_image_filename_is_zero_padded() {
        let dataset = DatasetConfig::default();
        assert_eq!(dataset.image_filename(0), "pendulum_00000.png");
        assert_eq!(dataset.image_filename(6999), "pendulum_06999.png");
    }

    #[test]
    fn test_rejects_tiny_canvas() {
        let scene = SceneConfig { canvas_size: 4, ..SceneConfig::default() };
        assert!(matches!(scene.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_light_outside_canvas() {
        let scene = SceneConfig { canvas_size: 64, light_radius: 40.0, pendulum_length: 10.0, ..SceneConfig::default() };
        assert!(matches!(scene.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_pendulum_through_ground() {
        let scene = SceneConfig { pendulum_length: 200.0, ..SceneConfig::default() };
        assert!(matches!(scene.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_angle_range() {
        let dataset = DatasetConfig { angle_min: 0.5, angle_max: 0.5, ..DatasetConfig::default() };
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_rejects_angle_range_wider_than_f64() {
        let dataset = DatasetConfig { angle_min: -1e308, angle_max: 1e308, ..DatasetConfig::default() };
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("too wide"));
    }

    #[test]
    fn test_accepts_prefix_with_comma() {
        let dataset = DatasetConfig { filename_prefix: "run,a".to_string(), ..DatasetConfig::default() };
        assert!(dataset.validate().is_ok());

        let dataset = DatasetConfig { filename_prefix: "a/b".to_string(), ..DatasetConfig::default() };
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_rejects_shadow_colored_like_rod() {
        let style = StyleConfig { shadow_color: [0, 0, 0], ..StyleConfig::default() };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generator.toml");
        let config = GeneratorConfig::default()
            .with_sample_count(12)
            .with_seed(99);

        config.save_to_file(&path).unwrap();
        let loaded = GeneratorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generator.ron");
        let config = GeneratorConfig::default().with_output_dir("out/ron");

        config.save_to_file(&path).unwrap();
        let loaded = GeneratorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[dataset]\nsample_count = 3\n").unwrap();

        let loaded = GeneratorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.dataset.sample_count, 3);
        assert_eq!(loaded.scene, SceneConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = GeneratorConfig::default().save_to_file("config.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = GeneratorConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, GeneratorConfig::default());
    }
}
