//! Reusable raster fixtures.
//!
//! - [`numbered`]: every pixel holds its own offset, so reading a cursor
//!   reports where it is.
//! - [`marked`]: `1` inside a rectangle, `0` elsewhere.
//! - [`region_offsets`]: row-major offsets of a rectangle, the reference
//!   order for linear traversal.

use rove_core::{Bounds, Raster};

/// A `width x height` raster whose pixels are their own offsets.
pub fn numbered(width: usize, height: usize) -> Raster<usize> {
    Raster::from_fn(width, height, |offset| offset)
}

/// A `width x height` raster holding `1` inside `bounds`.
pub fn marked(width: usize, height: usize, bounds: Bounds) -> Raster<u8> {
    Raster::from_fn(width, height, |offset| {
        u8::from(bounds.contains(offset / width, offset % width))
    })
}

/// Row-major offsets of every cell in `bounds`.
pub fn region_offsets(width: usize, bounds: Bounds) -> Vec<usize> {
    (bounds.top..=bounds.bottom)
        .flat_map(|row| (bounds.left..=bounds.right).map(move |col| row * width + col))
        .collect()
}
