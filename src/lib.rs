//! shademap
//!
//! Paint every region of a world dataset with its own shade of green, render
//! the map, and export the green-value lookup table. Pairs with the
//! `shademap` CLI.
//!
//! ### Features
//! - Load regions from a GeoJSON FeatureCollection, keeping file order
//! - Deterministic shade per region (`round(255 * i / (N - 1))` or `i mod 256`)
//! - Equirectangular map rendering to PNG or SVG
//! - CSV (and JSON) export of `Green Channel Value,Country Name`
//! - Reverse lookup: which region lies under a longitude/latitude of a rendered map
//!
//! ### Example
//! ```no_run
//! use shademap::{Config, ShadeFormula, assign};
//!
//! let table = assign(&["Aland", "Albania", "Algeria"], ShadeFormula::Normalized);
//! shademap::storage::save_table_csv(&table, "shades.csv")?;
//!
//! let summary = shademap::run(&Config::default())?;
//! println!("{} regions painted", summary.table.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod projection;
pub mod shade;
pub mod storage;
pub mod viz;

pub use config::Config;
pub use models::{ColorTable, Region, Shade, ShadeRow};
pub use pipeline::{RunSummary, run};
pub use shade::{ShadeFormula, assign};
