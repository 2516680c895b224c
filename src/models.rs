use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A GeoJSON position: `[lon, lat]` with optional extra ordinates (ignored).
pub type Position = Vec<f64>;

/// Geometry of one feature. Only areal types are drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Outer ring followed by optional holes.
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// Points, lines, collections: the region keeps its shade but nothing is drawn.
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Every ring of the geometry, outer rings and holes alike.
    pub fn rings(&self) -> Vec<&[Position]> {
        match self {
            Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|r| r.as_slice()).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|poly| poly.iter().map(|r| r.as_slice()))
                .collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }

    /// Outer ring of each polygon part (holes are not filled).
    pub fn outer_rings(&self) -> Vec<&[Position]> {
        match self {
            Geometry::Polygon { coordinates } => {
                coordinates.first().map(|r| r.as_slice()).into_iter().collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|poly| poly.first().map(|r| r.as_slice()))
                .collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

/// Raw GeoJSON feature as found in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// Raw GeoJSON feature collection (top level of the dataset file).
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// One named area of the loaded dataset (one row = one feature).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Position in the dataset's iteration order.
    pub index: usize,
    pub name: String,
    pub geometry: Option<Geometry>,
}

/// A pure green color `(0, G, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Shade(pub u8);

impl Shade {
    pub fn green(self) -> u8 {
        self.0
    }

    pub fn rgb(self) -> [u8; 3] {
        [0, self.0, 0]
    }
}

/// Ordered mapping from region name to its shade.
///
/// Built by collecting `(name, shade)` pairs. A repeated name replaces the
/// earlier value in place: the entry keeps the position of its first
/// occurrence and the shade of its last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: IndexMap<String, Shade>,
}

impl ColorTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Shade> {
        self.entries.get(name).copied()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Shade)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Export rows in table order.
    pub fn rows(&self) -> Vec<ShadeRow> {
        self.iter()
            .map(|(name, shade)| ShadeRow {
                green: shade.green(),
                name: name.to_string(),
            })
            .collect()
    }

    /// Green values held by more than one region, with those regions in table order.
    pub fn shared_shades(&self) -> BTreeMap<u8, Vec<String>> {
        let mut by_green: BTreeMap<u8, Vec<String>> = BTreeMap::new();
        for (name, shade) in self.iter() {
            by_green
                .entry(shade.green())
                .or_default()
                .push(name.to_string());
        }
        by_green.retain(|_, names| names.len() > 1);
        by_green
    }
}

impl FromIterator<(String, Shade)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (String, Shade)>>(iter: I) -> Self {
        let mut entries = IndexMap::new();
        for (name, shade) in iter {
            entries.insert(name, shade);
        }
        Self { entries }
    }
}

/// One exported table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeRow {
    #[serde(rename = "Green Channel Value")]
    pub green: u8,
    #[serde(rename = "Country Name")]
    pub name: String,
}
