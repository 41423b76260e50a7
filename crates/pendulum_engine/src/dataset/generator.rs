//! Dataset generator
//!
//! Owns everything that lives across samples: the validated configuration,
//! the renderer, the RNG, the label table writer and the row counter. Each
//! sample's image is written before its label row, so the table never names
//! a file that does not exist. Images left over from an earlier run in the
//! same directory are removed up front, so they never outlive their rows.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::table::{LabelRow, LabelTableWriter};
use super::DatasetError;
use crate::core::config::GeneratorConfig;
use crate::render::SceneRenderer;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Samples written
    pub sample_count: usize,
    /// Directory holding images and labels
    pub output_dir: PathBuf,
    /// Path of the label table
    pub label_path: PathBuf,
}

/// Orchestration context for one dataset run
pub struct DatasetGenerator {
    config: GeneratorConfig,
    renderer: SceneRenderer,
    rng: StdRng,
    labels: LabelTableWriter<File>,
    next_index: usize,
}

impl DatasetGenerator {
    /// Validate the configuration, create the output directory and the label table
    pub fn new(config: GeneratorConfig) -> Result<Self, DatasetError> {
        config.validate()?;
        let renderer = SceneRenderer::from_config(&config)?;

        let output_dir = &config.dataset.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| DatasetError::Output {
            path: output_dir.clone(),
            source,
        })?;
        remove_stale_images(output_dir, &config.dataset.filename_prefix)?;

        let rng = match config.dataset.seed {
            Some(seed) => {
                log::info!("Seeding sampler with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let label_path = config.dataset.label_path();
        let labels = LabelTableWriter::create(&label_path)?;
        log::debug!("Label table opened at {}", label_path.display());

        Ok(Self {
            config,
            renderer,
            rng,
            labels,
            next_index: 0,
        })
    }

    /// Configuration of this run
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of samples written so far
    pub const fn samples_written(&self) -> usize {
        self.next_index
    }

    /// Sample, render and write one sample, returning its label row
    pub fn generate_one(&mut self) -> Result<LabelRow, DatasetError> {
        let dataset = &self.config.dataset;
        let index = self.next_index;

        let light_angle = self.rng.gen_range(dataset.angle_min..dataset.angle_max);
        let pendulum_angle = self.rng.gen_range(dataset.angle_min..dataset.angle_max);
        let sample = self.renderer.render(light_angle, pendulum_angle, &mut self.rng);

        let filename = dataset.image_filename(index);
        let path = dataset.output_dir.join(&filename);
        if path.exists() {
            log::warn!("Overwriting existing image {}", path.display());
        }
        sample.save_png(&path)?;

        let row = LabelRow::new(filename, sample.labels);
        self.labels.append(&row)?;
        self.next_index += 1;

        log::debug!(
            "Sample {index}: pendulum_angle={pendulum_angle:.4} light_x={:.1} shadow_len={:.2}",
            sample.geometry.light.x,
            sample.geometry.shadow_length()
        );
        Ok(row)
    }

    /// Generate the configured number of samples
    pub fn run(mut self) -> Result<DatasetSummary, DatasetError> {
        let total = self.config.dataset.sample_count;
        let interval = self.config.dataset.progress_interval;
        log::info!(
            "Generating {total} samples into {}",
            self.config.dataset.output_dir.display()
        );

        for _ in 0..total {
            self.generate_one()?;
            if interval > 0 && self.next_index % interval == 0 {
                log::info!("{}/{total} samples written", self.next_index);
            }
        }
        self.labels.flush()?;

        let summary = DatasetSummary {
            sample_count: self.next_index,
            output_dir: self.config.dataset.output_dir.clone(),
            label_path: self.config.dataset.label_path(),
        };
        log::info!(
            "Dataset complete: {} samples, labels at {}",
            summary.sample_count,
            summary.label_path.display()
        );
        Ok(summary)
    }
}

/// Delete `{prefix}_*.png` files in `dir`, returning how many were removed
fn remove_stale_images(dir: &Path, prefix: &str) -> Result<usize, DatasetError> {
    let stem = format!("{prefix}_");
    let output_error = |source: std::io::Error| DatasetError::Output { path: dir.to_path_buf(), source };

    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(output_error)? {
        let path = entry.map_err(output_error)?.path();
        let is_sample = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&stem) && name.ends_with(".png"));
        if is_sample && path.is_file() {
            fs::remove_file(&path).map_err(|source| DatasetError::Output { path: path.clone(), source })?;
            removed += 1;
        }
    }

    if removed > 0 {
        log::warn!("Removed {removed} images of an earlier run from {}", dir.display());
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SceneConfig;
    use crate::dataset::{DatasetManifest, ManifestReport};
    use crate::foundation::logging;

    fn small_config(dir: &std::path::Path, count: usize) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_output_dir(dir)
            .with_sample_count(count)
            .with_seed(11)
    }

    #[test]
    fn test_run_writes_images_and_rows() {
        logging::init_for_tests();
        let dir = tempfile::tempdir().unwrap();
        let summary = DatasetGenerator::new(small_config(dir.path(), 5)).unwrap().run().unwrap();

        assert_eq!(summary.sample_count, 5);
        assert_eq!(summary.label_path, dir.path().join("labels.csv"));
        for index in 0..5 {
            assert!(dir.path().join(format!("pendulum_{index:05}.png")).is_file());
        }

        let text = std::fs::read_to_string(&summary.label_path).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("filename,light_x,pendulum_angle,shadow_pos,shadow_len\n"));
    }

    #[test]
    fn test_generate_one_advances_counter() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = DatasetGenerator::new(small_config(dir.path(), 3)).unwrap();

        let first = generator.generate_one().unwrap();
        let second = generator.generate_one().unwrap();
        assert_eq!(first.filename, "pendulum_00000.png");
        assert_eq!(second.filename, "pendulum_00001.png");
        assert_eq!(generator.samples_written(), 2);
    }

    #[test]
    fn test_sampled_angles_stay_in_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = DatasetGenerator::new(small_config(dir.path(), 20)).unwrap();
        let (min, max) = (generator.config().dataset.angle_min, generator.config().dataset.angle_max);

        for _ in 0..20 {
            let row = generator.generate_one().unwrap();
            assert!((min..max).contains(&row.labels.pendulum_angle));
        }
    }

    #[test]
    fn test_same_seed_same_labels() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let mut a = DatasetGenerator::new(small_config(dir_a.path(), 4)).unwrap();
        let mut b = DatasetGenerator::new(small_config(dir_b.path(), 4)).unwrap();

        for _ in 0..4 {
            assert_eq!(a.generate_one().unwrap(), b.generate_one().unwrap());
        }
    }

    #[test]
    fn test_creates_nested_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        DatasetGenerator::new(small_config(&nested, 1)).unwrap().run().unwrap();
        assert!(nested.join("labels.csv").is_file());
    }

    #[test]
    fn test_rerun_with_fewer_samples_still_verifies() {
        logging::init_for_tests();
        let dir = tempfile::tempdir().unwrap();
        DatasetGenerator::new(small_config(dir.path(), 5)).unwrap().run().unwrap();

        let config = small_config(dir.path(), 3).with_seed(12);
        DatasetGenerator::new(config.clone()).unwrap().run().unwrap();

        assert!(!dir.path().join("pendulum_00004.png").exists());
        let report = DatasetManifest::load_for(&config.dataset)
            .unwrap()
            .verify(&config.dataset.filename_prefix)
            .unwrap();
        assert_eq!(report, ManifestReport { rows: 3, images: 3 });
    }

    #[test]
    fn test_rerun_keeps_files_with_other_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("other_00000.png"), b"x").unwrap();
        std::fs::write(dir.path().join("pendulum_notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("pendulum_00042.png"), b"x").unwrap();

        DatasetGenerator::new(small_config(dir.path(), 1)).unwrap();

        assert!(dir.path().join("other_00000.png").exists());
        assert!(dir.path().join("pendulum_notes.txt").exists());
        assert!(!dir.path().join("pendulum_00042.png").exists());
    }

    #[test]
    fn test_invalid_config_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never");
        let mut config = small_config(&out, 1);
        config.scene = SceneConfig { canvas_size: 3, ..SceneConfig::default() };

        assert!(matches!(DatasetGenerator::new(config), Err(DatasetError::Config(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_unwritable_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = DatasetGenerator::new(small_config(&blocker.join("out"), 1));
        assert!(matches!(result, Err(DatasetError::Output { .. })));
    }
}
