//! Public types and constants for the visualization module.

/// Region outline styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStyle {
    /// 1 px black outline around every ring.
    #[default]
    Drawn,
    /// Fill only; in a bitmap every non-white pixel is exactly one region's shade.
    None,
}

/// Default canvas size: one pixel per 0.18 degree in both directions.
pub const DEFAULT_WIDTH: u32 = 2000;
pub const DEFAULT_HEIGHT: u32 = 1000;
