//! Single-axis scans and their orthogonal sub-cursors.
//!
//! A root axis cursor walks the rows (or columns) of its bounds and
//! reports the first pixel of each. A sub-cursor walks the other axis
//! through its parent's current cell, which is how nested 2D loops are
//! built: an `AXIS_ROW` parent with a `SUB_AXIS_COL` child, or the
//! column-major mirror.

use crate::walk::{Grid, Traversal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Row,
    Col,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AxisWalk {
    axis: Axis,
    sub: bool,
}

impl AxisWalk {
    pub fn rows(sub: bool) -> Self {
        Self {
            axis: Axis::Row,
            sub,
        }
    }

    pub fn cols(sub: bool) -> Self {
        Self {
            axis: Axis::Col,
            sub,
        }
    }
}

impl Traversal for AxisWalk {
    fn first(&mut self, grid: &Grid<'_>) -> usize {
        match self.axis {
            Axis::Row => grid.bounds.top,
            Axis::Col => grid.bounds.left,
        }
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        match self.axis {
            Axis::Row => grid.bounds.bottom,
            Axis::Col => grid.bounds.right,
        }
    }

    fn next(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        p.wrapping_add(1)
    }

    fn prev(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        p.wrapping_sub(1)
    }

    fn is_first(&self, p: usize, grid: &Grid<'_>) -> bool {
        match self.axis {
            Axis::Row => p == grid.bounds.top,
            Axis::Col => p == grid.bounds.left,
        }
    }

    fn is_last(&self, p: usize, grid: &Grid<'_>) -> bool {
        match self.axis {
            Axis::Row => p == grid.bounds.bottom,
            Axis::Col => p == grid.bounds.right,
        }
    }

    fn offset(&self, p: usize, grid: &Grid<'_>) -> usize {
        match (self.axis, self.sub) {
            (Axis::Row, false) => grid.offset_of(p, grid.bounds.left),
            (Axis::Col, false) => grid.offset_of(grid.bounds.top, p),
            (Axis::Row, true) => grid.offset_of(p, grid.parent_cell().1),
            (Axis::Col, true) => grid.offset_of(grid.parent_cell().0, p),
        }
    }
}
