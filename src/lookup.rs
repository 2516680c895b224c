//! Reading a rendered map back: pixel color -> region name.
//!
//! A [`MapProbe`] pairs a rendered image with the exported table and answers
//! "which region is at this longitude/latitude?". [`MapProbe::sample`] walks the
//! whole globe on a regular grid and places every hit on a sphere.

use crate::models::{ColorTable, ShadeRow};
use crate::projection::{coordinate_to_pixel, to_sphere};
use crate::storage::load_table_csv;
use anyhow::{Context, Result, bail};
use image::RgbImage;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Finest grid [`MapProbe::sample`] accepts, in degrees (about 26 million grid points).
pub const MIN_SAMPLE_STEP: f64 = 0.05;

/// Reverse of a [`ColorTable`]: green value -> region name.
///
/// When several regions share a green value the later one in table order wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadeIndex {
    by_green: BTreeMap<u8, String>,
}

impl ShadeIndex {
    pub fn from_rows<I: IntoIterator<Item = ShadeRow>>(rows: I) -> Self {
        let by_green = rows.into_iter().map(|r| (r.green, r.name)).collect();
        Self { by_green }
    }

    pub fn from_table(table: &ColorTable) -> Self {
        Self::from_rows(table.rows())
    }

    /// Load an index from an exported CSV table.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_rows(load_table_csv(path)?))
    }

    pub fn len(&self) -> usize {
        self.by_green.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_green.is_empty()
    }

    /// Region painted with `rgb`, if it is a pure green present in the index.
    ///
    /// White background never matches. A black outline pixel is indistinguishable
    /// from the region with green value 0.
    pub fn region_for(&self, rgb: [u8; 3]) -> Option<&str> {
        match rgb {
            [0, g, 0] => self.by_green.get(&g).map(|s| s.as_str()),
            _ => None,
        }
    }
}

/// A region found under a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub region: String,
    pub rgb: [u8; 3],
}

/// One sampled grid point that landed on a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobePoint {
    pub lon: f64,
    pub lat: f64,
    pub region: String,
    pub rgb: [u8; 3],
    /// Position on the sphere, see [`to_sphere`].
    pub position: [f64; 3],
}

/// Rendered map plus its shade index.
pub struct MapProbe {
    image: RgbImage,
    index: ShadeIndex,
}

impl MapProbe {
    pub fn new(image: RgbImage, index: ShadeIndex) -> Self {
        Self { image, index }
    }

    /// Open a rendered map and its exported CSV table.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(image_path: P, table_path: Q) -> Result<Self> {
        let image_path = image_path.as_ref();
        let image = image::open(image_path)
            .with_context(|| format!("reading map image {}", image_path.display()))?
            .to_rgb8();
        let index = ShadeIndex::load_csv(table_path)?;
        Ok(Self::new(image, index))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel color at a coordinate (clamped into the image).
    pub fn pixel_at(&self, lon: f64, lat: f64) -> [u8; 3] {
        let (w, h) = self.image.dimensions();
        let (x, y) = coordinate_to_pixel(lon, lat, w, h);
        self.image.get_pixel(x, y).0
    }

    pub fn region_at(&self, lon: f64, lat: f64) -> Option<Hit> {
        if self.image.width() == 0 || self.image.height() == 0 {
            return None;
        }
        let rgb = self.pixel_at(lon, lat);
        self.index.region_for(rgb).map(|region| Hit {
            region: region.to_string(),
            rgb,
        })
    }

    /// Every region hit on a `step`-degree grid, latitude -90..=90 outer,
    /// longitude -180..=180 inner, placed on a sphere of `radius`.
    pub fn sample(&self, step: f64, radius: f64) -> Result<Vec<GlobePoint>> {
        if !(step.is_finite() && step >= MIN_SAMPLE_STEP) {
            bail!("sampling step must be at least {MIN_SAMPLE_STEP} degrees, got {step}");
        }
        let lat_steps = (180.0 / step).floor() as usize;
        let lon_steps = (360.0 / step).floor() as usize;

        let mut out = Vec::new();
        for i in 0..=lat_steps {
            let lat = -90.0 + i as f64 * step;
            for j in 0..=lon_steps {
                let lon = -180.0 + j as f64 * step;
                if let Some(hit) = self.region_at(lon, lat) {
                    out.push(GlobePoint {
                        lon,
                        lat,
                        region: hit.region,
                        rgb: hit.rgb,
                        position: to_sphere(lon, lat, radius),
                    });
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade::{ShadeFormula, assign};
    use image::Rgb;

    fn index() -> ShadeIndex {
        ShadeIndex::from_table(&assign(&["Aland", "Albania", "Algeria"], ShadeFormula::Normalized))
    }

    #[test]
    fn only_pure_greens_match() {
        let idx = index();
        assert_eq!(idx.region_for([0, 128, 0]), Some("Albania"));
        assert_eq!(idx.region_for([0, 0, 0]), Some("Aland"));
        assert_eq!(idx.region_for([255, 255, 255]), None);
        assert_eq!(idx.region_for([0, 127, 0]), None);
        assert_eq!(idx.region_for([1, 128, 0]), None);
    }

    #[test]
    fn later_rows_win_on_shared_green() {
        let idx = ShadeIndex::from_rows(vec![
            ShadeRow { green: 7, name: "First".into() },
            ShadeRow { green: 7, name: "Second".into() },
        ]);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.region_for([0, 7, 0]), Some("Second"));
    }

    fn half_and_half() -> MapProbe {
        // Left half Albania, right half white.
        let img = RgbImage::from_fn(36, 18, |x, _| {
            if x < 18 { Rgb([0, 128, 0]) } else { Rgb([255, 255, 255]) }
        });
        MapProbe::new(img, index())
    }

    #[test]
    fn region_at_reads_projected_pixel() {
        let probe = half_and_half();
        let hit = probe.region_at(-90.0, 10.0).unwrap();
        assert_eq!(hit.region, "Albania");
        assert_eq!(hit.rgb, [0, 128, 0]);
        assert!(probe.region_at(90.0, 10.0).is_none());
        // lon=180 clamps to the last column
        assert!(probe.region_at(180.0, -90.0).is_none());
    }

    #[test]
    fn sample_counts_grid_hits() {
        let probe = half_and_half();
        let points = probe.sample(90.0, 2.0).unwrap();
        // lats -90,0,90; lons -180,-90 fall on the left half
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|p| p.region == "Albania" && p.lon < 0.0));
        let p = &points[0];
        let len = p.position.iter().map(|c| c * c).sum::<f64>().sqrt();
        assert!((len - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sample_rejects_bad_step() {
        let probe = half_and_half();
        assert!(probe.sample(0.0, 1.0).is_err());
        assert!(probe.sample(-1.0, 1.0).is_err());
        assert!(probe.sample(f64::NAN, 1.0).is_err());
        assert!(probe.sample(f64::INFINITY, 1.0).is_err());
        let err = probe.sample(1e-6, 1.0).unwrap_err();
        assert!(err.to_string().contains("at least"));
    }
}
