//! Loading the region dataset from a GeoJSON `FeatureCollection`.
//!
//! Features keep the file's order; that order decides every region's shade.

use crate::models::{FeatureCollection, Region};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Property holding the country name in Natural Earth exports.
pub const DEFAULT_NAME_PROPERTY: &str = "name";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not a GeoJSON FeatureCollection: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feature #{index} has no string property {property:?}")]
    MissingName { index: usize, property: String },
}

/// Read regions from a GeoJSON file on disk.
pub fn load_regions<P: AsRef<Path>>(
    path: P,
    name_property: &str,
) -> Result<Vec<Region>, DatasetError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_regions(&text, name_property)
}

/// Parse regions from GeoJSON text.
pub fn parse_regions(text: &str, name_property: &str) -> Result<Vec<Region>, DatasetError> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| -> Result<Region, DatasetError> {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get(name_property))
                .and_then(|v| v.as_str())
                .ok_or_else(|| DatasetError::MissingName {
                    index,
                    property: name_property.to_string(),
                })?;
            Ok(Region {
                index,
                name: name.to_string(),
                geometry: feature.geometry,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Geometry;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Fiji", "pop_est": 889953},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[178.0, -17.0], [179.0, -17.0], [179.0, -16.0], [178.0, -17.0]]]]}},
            {"type": "Feature", "properties": {"name": "Tanzania"},
             "geometry": {"type": "Polygon", "coordinates": [[[33.9, -0.9], [34.0, -1.0], [37.6, -3.0], [33.9, -0.9]]]}},
            {"type": "Feature", "properties": {"name": "Nowhere"}, "geometry": null}
        ]
    }"#;

    #[test]
    fn keeps_file_order_and_indices() {
        let regions = parse_regions(SAMPLE, DEFAULT_NAME_PROPERTY).unwrap();
        let names: Vec<(usize, &str)> = regions.iter().map(|r| (r.index, r.name.as_str())).collect();
        assert_eq!(names, vec![(0, "Fiji"), (1, "Tanzania"), (2, "Nowhere")]);
        assert!(matches!(regions[0].geometry, Some(Geometry::MultiPolygon { .. })));
        assert!(regions[2].geometry.is_none());
    }

    #[test]
    fn missing_name_property_is_an_error() {
        let err = parse_regions(SAMPLE, "ADMIN").unwrap_err();
        match err {
            DatasetError::MissingName { index, property } => {
                assert_eq!(index, 0);
                assert_eq!(property, "ADMIN");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_regions("{\"features\": 3}", DEFAULT_NAME_PROPERTY),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_regions(dir.path().join("absent.geojson"), DEFAULT_NAME_PROPERTY).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
