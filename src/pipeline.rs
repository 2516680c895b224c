//! The whole run: load regions, assign shades, render the map, export the table.

use crate::config::Config;
use crate::dataset::load_regions;
use crate::models::ColorTable;
use crate::shade::assign;
use crate::{storage, viz};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Features read from the dataset.
    pub regions: usize,
    /// The table every output was painted from.
    pub table: ColorTable,
    /// `None` when the dataset was empty and nothing was drawn.
    pub image: Option<PathBuf>,
    pub table_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

/// Execute one run. A dataset that cannot be loaded aborts before any file is written.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let regions = load_regions(&config.dataset, &config.name_property)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;
    log::info!(
        "loaded {} regions from {}",
        regions.len(),
        config.dataset.display()
    );

    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    let table = assign(&names, config.formula);
    if table.len() < regions.len() {
        log::warn!(
            "{} repeated region names; the last occurrence's shade is used",
            regions.len() - table.len()
        );
    }
    let shared = table.shared_shades();
    if !shared.is_empty() {
        log::warn!(
            "{} green values are shared by several regions ({:?} formula, {} regions)",
            shared.len(),
            config.formula,
            table.len()
        );
    }

    let image = if regions.is_empty() {
        log::warn!("dataset is empty; skipping map rendering");
        None
    } else {
        viz::render_map(
            &regions,
            &table,
            &config.image,
            config.width,
            config.height,
            config.edges,
        )
        .with_context(|| format!("rendering {}", config.image.display()))?;
        log::info!("wrote map to {}", config.image.display());
        Some(config.image.clone())
    };

    storage::save_table_csv(&table, &config.table)?;
    log::info!("wrote {} rows to {}", table.len(), config.table.display());

    if let Some(json) = config.json.as_ref() {
        storage::save_table_json(&table, json)?;
        log::info!("wrote {} rows to {}", table.len(), json.display());
    }

    Ok(RunSummary {
        regions: regions.len(),
        table,
        image,
        table_path: config.table.clone(),
        json_path: config.json.clone(),
    })
}
