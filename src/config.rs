//! Run configuration: where to read, where to write, how to paint.

use crate::dataset::DEFAULT_NAME_PROPERTY;
use crate::shade::ShadeFormula;
use crate::viz::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EdgeStyle};
use anyhow::{Result, bail};
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "naturalearth_lowres.geojson";
pub const DEFAULT_IMAGE: &str = "world_map_shades_of_green.png";
pub const DEFAULT_TABLE: &str = "country_green_shades.csv";

/// Largest accepted canvas edge in pixels.
pub const MAX_DIMENSION: u32 = 8000;

/// Everything one pipeline run needs. `Config::default()` reproduces the fixed
/// file names the map consumers expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// GeoJSON FeatureCollection of regions.
    pub dataset: PathBuf,
    /// Feature property holding the region name.
    pub name_property: String,
    /// Rendered map; `.svg` selects SVG output, anything else PNG.
    pub image: PathBuf,
    /// Exported CSV table.
    pub table: PathBuf,
    /// Optional JSON copy of the table.
    pub json: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub formula: ShadeFormula,
    pub edges: EdgeStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            name_property: DEFAULT_NAME_PROPERTY.to_string(),
            image: PathBuf::from(DEFAULT_IMAGE),
            table: PathBuf::from(DEFAULT_TABLE),
            json: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            formula: ShadeFormula::default(),
            edges: EdgeStyle::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        for (what, v) in [("width", self.width), ("height", self.height)] {
            if v == 0 || v > MAX_DIMENSION {
                bail!("image {what} must be between 1 and {MAX_DIMENSION} pixels, got {v}");
            }
        }
        if self.name_property.trim().is_empty() {
            bail!("name property must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fixed_paths() {
        let c = Config::default();
        assert_eq!(c.image, PathBuf::from("world_map_shades_of_green.png"));
        assert_eq!(c.table, PathBuf::from("country_green_shades.csv"));
        assert_eq!(c.formula, ShadeFormula::Normalized);
        assert_eq!(c.edges, EdgeStyle::Drawn);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut c = Config::default();
        c.width = 0;
        assert!(c.validate().is_err());
        c.width = 800;
        c.height = MAX_DIMENSION + 1;
        assert!(c.validate().is_err());
        c.height = 400;
        assert!(c.validate().is_ok());
        c.name_property = " ".into();
        assert!(c.validate().is_err());
    }
}
