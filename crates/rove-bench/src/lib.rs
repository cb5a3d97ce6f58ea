//! Benchmark profiles and reference workloads for the Rove engine.
//!
//! - [`reference_frame`]: 256x256 deterministic noise raster (64K pixels)
//! - [`stress_frame`]: 1024x1024 raster (~1M pixels) for stress runs
//! - [`sample_cells`]: deterministic pseudo-random cells for
//!   neighbourhood probes
//! - [`box_blur`], [`ring_means`]: end-to-end workloads built from nested
//!   cursors

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rove_core::{Bounds, Cell, PixelBuffer, PixelBufferMut, Raster};
use rove_cursor::{neighbourhood_offsets, Style, Walker};

/// Build the reference benchmark raster: 256x256 deterministic noise.
pub fn reference_frame(seed: u64) -> Raster<u8> {
    noise_frame(256, 256, seed)
}

/// Build the stress benchmark raster: 1024x1024 deterministic noise.
pub fn stress_frame(seed: u64) -> Raster<u8> {
    noise_frame(1024, 1024, seed)
}

fn noise_frame(width: usize, height: usize, seed: u64) -> Raster<u8> {
    Raster::from_fn(width, height, |offset| {
        let x = (offset as u64 ^ seed).wrapping_mul(6364136223846793007);
        (x >> 56) as u8
    })
}

/// Generate `n` deterministic cells inside a `width x height` raster.
pub fn sample_cells(width: usize, height: usize, n: usize, seed: u64) -> Vec<Cell> {
    (0..n as u64)
        .map(|i| {
            let k = i.wrapping_add(seed);
            let row = (k.wrapping_mul(1442695040888963407) >> 33) as usize % height;
            let col = (k.wrapping_mul(2862933555777941757) >> 33) as usize % width;
            (row, col)
        })
        .collect()
}

/// An `AXIS_ROW` walker over `bounds` parked on `row`.
pub fn row_walker(width: usize, bounds: Bounds, row: usize) -> Walker<'static> {
    let mut rows = Walker::root(width, bounds, Style::AXIS_ROW);
    for _ in bounds.top..row {
        rows.step_forward();
    }
    rows
}

/// 3x3 mean filter of `src` into `dst`, edge pixels averaging only their
/// in-bounds neighbours.
pub fn box_blur(src: &Raster<u8>, dst: &mut Raster<u8>) {
    let bounds = Bounds::covering(src.width(), src.height());
    let mut centre = Walker::root(src.width(), bounds, Style::LINEAR);
    loop {
        let mut sum = u32::from(*src.pixel_at(centre.offset()));
        let mut count = 1;
        for offset in neighbourhood_offsets(&centre, Style::MOORE) {
            sum += u32::from(*src.pixel_at(offset));
            count += 1;
        }
        *dst.pixel_at_mut(centre.offset()) = (sum / count) as u8;
        if centre.is_terminal() {
            break;
        }
        centre.step_forward();
    }
}

/// Mean pixel value of each ring, outermost first.
pub fn ring_means(src: &Raster<u8>) -> Vec<u32> {
    let bounds = Bounds::covering(src.width(), src.height());
    let mut rings = Walker::root(src.width(), bounds, Style::ORBITAL_IN);
    let mut means = Vec::new();
    loop {
        let ring = Walker::sub(&rings, Style::SUB_ORBIT_CLOCKWISE);
        let (sum, count) = ring
            .into_offsets()
            .fold((0u32, 0u32), |(s, n), o| (s + u32::from(*src.pixel_at(o)), n + 1));
        means.push(if count == 0 { 0 } else { sum / count });
        if rings.is_terminal() {
            break;
        }
        rings.step_forward();
    }
    means
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_deterministic() {
        assert_eq!(reference_frame(7), reference_frame(7));
        assert_ne!(reference_frame(7), reference_frame(8));
    }

    #[test]
    fn sample_cells_stay_inside() {
        for (row, col) in sample_cells(40, 30, 500, 3) {
            assert!(row < 30 && col < 40);
        }
    }

    #[test]
    fn blur_of_a_flat_frame_is_flat() {
        let src = Raster::new(9, 7, 40u8);
        let mut dst = Raster::new(9, 7, 0u8);
        box_blur(&src, &mut dst);
        assert!(dst.as_slice().iter().all(|&p| p == 40));
    }

    #[test]
    fn ring_means_of_a_flat_frame() {
        let src = Raster::new(7, 7, 5u8);
        assert_eq!(ring_means(&src), vec![5, 5, 5, 5]);
        let even = Raster::new(8, 8, 5u8);
        assert_eq!(ring_means(&even), vec![5, 5, 5, 5, 0]);
    }

    #[test]
    fn row_walker_parks_on_the_row() {
        let w = row_walker(10, Bounds::new(2, 0, 8, 9), 5);
        assert_eq!(w.cell(), (5, 0));
    }
}
