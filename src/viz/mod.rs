//! Visualization: render the shaded world map to **PNG** or **SVG**.
//!
//! - Equirectangular canvas covering longitude -180..180 and latitude 90..-90
//! - Every region filled with its shade from the [`ColorTable`], in load order
//! - Optional black outlines ([`EdgeStyle`])
//! - Bitmaps are painted pixel by pixel without blending
//! - No title or legend, so the only colors on the canvas are white, black and region shades

pub mod types;
pub mod util;

pub use types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EdgeStyle};

use crate::models::{ColorTable, Region};
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

use util::{line_pixels, ring_spans, ring_to_pixels, shade_color};

/// Render `regions` onto a `width` x `height` map at `out_path`.
///
/// The output format follows the extension: `.svg` writes SVG, anything else a bitmap.
/// Each region is drawn with `table`'s shade for its name, so repeated names
/// all use the table's value.
pub fn render_map<P: AsRef<Path>>(
    regions: &[Region],
    table: &ColorTable,
    out_path: P,
    width: u32,
    height: u32,
    edges: EdgeStyle,
) -> Result<()> {
    if regions.is_empty() {
        return Err(anyhow!("no regions to plot"));
    }
    if width == 0 || height == 0 {
        return Err(anyhow!("invalid canvas size {width}x{height}"));
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_map(root, regions, table, edges, Raster::Vector)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_map(root, regions, table, edges, Raster::Exact)?;
    }
    Ok(())
}

/// How shapes reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Raster {
    /// Plotters polygons and paths (SVG keeps them as vector shapes).
    Vector,
    /// Our own scanline fill and 1 px lines, pixel by pixel. Plotters blends
    /// the borders of filled polygons, which would create greens that belong
    /// to other regions.
    Exact,
}

/// Helper that draws to any Plotters backend.
fn draw_map<DB>(
    root: DrawingArea<DB, Shift>,
    regions: &[Region],
    table: &ColorTable,
    edges: EdgeStyle,
    raster: Raster,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (width, height) = root.dim_in_pixel();
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    for region in regions {
        let shade = table
            .get(&region.name)
            .ok_or_else(|| anyhow!("region {:?} has no shade", region.name))?;
        let Some(geometry) = region.geometry.as_ref() else {
            log::debug!("region #{} {:?} has no geometry", region.index, region.name);
            continue;
        };

        let color = shade_color(shade);
        for ring in geometry.outer_rings() {
            match raster {
                Raster::Vector => {
                    if let Some(pixels) = ring_to_pixels(ring, width, height) {
                        root.draw(&Polygon::new(pixels, color.filled()))
                            .map_err(|e| anyhow!("{:?}", e))?;
                    }
                }
                Raster::Exact => {
                    for span in ring_spans(ring, width, height) {
                        for x in span.x0..=span.x1 {
                            root.draw_pixel((x, span.y), &color)
                                .map_err(|e| anyhow!("{:?}", e))?;
                        }
                    }
                }
            }
        }

        if edges == EdgeStyle::Drawn {
            for ring in geometry.rings() {
                let Some(mut pixels) = ring_to_pixels(ring, width, height) else {
                    continue;
                };
                pixels.push(pixels[0]);
                match raster {
                    Raster::Vector => {
                        root.draw(&PathElement::new(pixels, BLACK.stroke_width(1)))
                            .map_err(|e| anyhow!("{:?}", e))?;
                    }
                    Raster::Exact => {
                        for seg in pixels.windows(2) {
                            for (x, y) in line_pixels(seg[0], seg[1]) {
                                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                                    root.draw_pixel((x, y), &BLACK)
                                        .map_err(|e| anyhow!("{:?}", e))?;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
