//! Helpers that turn regions and shades into Plotters primitives.

use crate::models::{Position, Shade};
use crate::projection::{project, project_f};
use plotters::prelude::*;

/// Plotters color for a shade.
#[inline]
pub fn shade_color(shade: Shade) -> RGBColor {
    let [r, g, b] = shade.rgb();
    RGBColor(r, g, b)
}

/// Project one ring to pixel space.
///
/// Positions with fewer than two ordinates are dropped, as are consecutive
/// duplicates after projection. Returns `None` when fewer than three distinct
/// pixels remain, since such a ring covers no area.
pub fn ring_to_pixels(ring: &[Position], width: u32, height: u32) -> Option<Vec<(i32, i32)>> {
    let mut out: Vec<(i32, i32)> = Vec::with_capacity(ring.len());
    for pos in ring {
        if let [lon, lat, ..] = pos.as_slice() {
            let px = project(*lon, *lat, width, height);
            if out.last() != Some(&px) {
                out.push(px);
            }
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    if out.len() < 3 { None } else { Some(out) }
}

/// Horizontal run of pixels `x0..=x1` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x0: i32,
    pub x1: i32,
}

/// Scanline fill of one ring, clipped to the canvas.
///
/// A pixel is covered when its center lies inside the ring (even-odd rule).
/// Every covered pixel is painted with the exact fill color, so a raster map
/// contains no blended in-between shades.
pub fn ring_spans(ring: &[Position], width: u32, height: u32) -> Vec<Span> {
    let pts: Vec<(f64, f64)> = ring
        .iter()
        .filter_map(|pos| match pos.as_slice() {
            [lon, lat, ..] => Some(project_f(*lon, *lat, width, height)),
            _ => None,
        })
        .collect();
    if pts.len() < 3 || width == 0 || height == 0 {
        return Vec::new();
    }

    let min_y = pts.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = pts.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let row_from = (min_y.floor() as i64).max(0);
    let row_to = (max_y.ceil() as i64).min(height as i64 - 1);
    let max_x = width as i64 - 1;

    let mut spans = Vec::new();
    let mut crossings: Vec<f64> = Vec::new();
    for y in row_from..=row_to {
        let cy = y as f64 + 0.5;
        crossings.clear();
        for (i, a) in pts.iter().enumerate() {
            let b = pts[(i + 1) % pts.len()];
            if (a.1 <= cy && b.1 > cy) || (b.1 <= cy && a.1 > cy) {
                crossings.push(a.0 + (cy - a.1) * (b.0 - a.0) / (b.1 - a.1));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            // pixel centers x + 0.5 in [left, right)
            let x0 = ((pair[0] - 0.5).ceil() as i64).max(0);
            let x1 = ((pair[1] - 0.5).ceil() as i64 - 1).min(max_x);
            if x0 <= x1 {
                spans.push(Span {
                    y: y as i32,
                    x0: x0 as i32,
                    x1: x1 as i32,
                });
            }
        }
    }
    spans
}

/// Pixels of a 1 px line from `a` to `b`, both ends included (Bresenham).
pub fn line_pixels(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = a;
    let dx = (b.0 - a.0).abs();
    let dy = -(b.1 - a.1).abs();
    let sx = if a.0 < b.0 { 1 } else { -1 };
    let sy = if a.1 < b.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut out = Vec::with_capacity((dx - dy) as usize + 1);
    loop {
        out.push((x, y));
        if (x, y) == b {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    out
}
