//! Pixel walk around the parent orbital cursor's current ring.
//!
//! The ring is split into four runs, clockwise from the top-left corner:
//! the top edge (without its last corner), the right edge, the bottom
//! edge running right to left, and the left edge running upward. A
//! degenerate ring (one row or one column) falls out of the same
//! formula with the empty runs skipped.

use crate::orbit::OrbitDescriptor;
use crate::walk::{Grid, Traversal};
use crate::walker::Walker;
use rove_core::{Bounds, Cell};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PerimeterWalk;

impl PerimeterWalk {
    fn ring(grid: &Grid<'_>) -> OrbitDescriptor {
        grid.parent
            .and_then(Walker::orbit)
            .unwrap_or_else(|| OrbitDescriptor::outermost(grid.bounds))
    }
}

/// Cell at perimeter index `p` of the ring `extents`, clockwise from the
/// top-left corner.
pub fn perimeter_cell(extents: Bounds, p: usize) -> Cell {
    let top_run = extents.right.wrapping_sub(extents.left);
    let side_run = extents.bottom.wrapping_sub(extents.top);
    let bottom_end = top_run.wrapping_add(side_run);
    let left_end = bottom_end.wrapping_add(top_run);
    if p < top_run {
        (extents.top, extents.left.wrapping_add(p))
    } else if p < bottom_end {
        (extents.top.wrapping_add(p - top_run), extents.right)
    } else if p < left_end {
        (extents.bottom, extents.right.wrapping_sub(p - bottom_end))
    } else {
        (extents.bottom.wrapping_sub(p.wrapping_sub(left_end)), extents.left)
    }
}

impl Traversal for PerimeterWalk {
    fn first(&mut self, _grid: &Grid<'_>) -> usize {
        0
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        Self::ring(grid).pixels_in_ring.saturating_sub(1)
    }

    fn next(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        p.wrapping_add(1)
    }

    fn prev(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        p.wrapping_sub(1)
    }

    fn is_first(&self, p: usize, _grid: &Grid<'_>) -> bool {
        p == 0
    }

    fn is_last(&self, p: usize, grid: &Grid<'_>) -> bool {
        p == Self::ring(grid).pixels_in_ring.saturating_sub(1)
    }

    fn offset(&self, p: usize, grid: &Grid<'_>) -> usize {
        let ring = Self::ring(grid);
        if ring.is_empty() {
            return ring.extents.first_offset(grid.width);
        }
        let (row, col) = perimeter_cell(ring.extents, p);
        grid.offset_of(row, col)
    }

    fn is_vacant(&self, grid: &Grid<'_>) -> bool {
        Self::ring(grid).is_empty()
    }
}
