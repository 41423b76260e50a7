//! Pendulum shadow dataset generator
//!
//! Reads `pendulum_dataset.toml` (or `pendulum_dataset.ron`) from the working
//! directory when present, otherwise uses the built-in defaults. Writes one
//! PNG per sample plus `labels.csv`, then checks that both agree.

use std::path::Path;

use pendulum_engine::foundation::logging;
use pendulum_engine::prelude::*;

const CONFIG_CANDIDATES: [&str; 2] = ["pendulum_dataset.toml", "pendulum_dataset.ron"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // first candidate that exists, else the TOML name (which falls back to defaults)
    let path = CONFIG_CANDIDATES
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .unwrap_or(CONFIG_CANDIDATES[0]);
    let config = GeneratorConfig::load_or_default(path)?;
    let dataset = config.dataset.clone();

    let summary = DatasetGenerator::new(config)?.run()?;

    let report = DatasetManifest::load_for(&dataset)?.verify(&dataset.filename_prefix)?;
    log::info!(
        "Verified {} label rows against {} images in {}",
        report.rows,
        report.images,
        summary.output_dir.display()
    );
    Ok(())
}
