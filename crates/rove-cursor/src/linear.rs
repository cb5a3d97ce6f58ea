//! Row-major scan of the bounds.
//!
//! The position is the buffer offset itself. A step off the bounds'
//! right edge lands on the next row's left edge, not on the next
//! buffer column.

use crate::walk::{Grid, Traversal};
use rove_core::cell_of;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LinearWalk;

impl Traversal for LinearWalk {
    fn first(&mut self, grid: &Grid<'_>) -> usize {
        grid.bounds.first_offset(grid.width)
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        grid.bounds.last_offset(grid.width)
    }

    fn next(&mut self, p: usize, grid: &Grid<'_>) -> usize {
        let (row, col) = cell_of(p, grid.width);
        if col == grid.bounds.right && row < grid.bounds.bottom {
            grid.offset_of(row + 1, grid.bounds.left)
        } else {
            p.wrapping_add(1)
        }
    }

    fn prev(&mut self, p: usize, grid: &Grid<'_>) -> usize {
        let (row, col) = cell_of(p, grid.width);
        if col == grid.bounds.left && row > grid.bounds.top {
            grid.offset_of(row - 1, grid.bounds.right)
        } else {
            p.wrapping_sub(1)
        }
    }

    fn is_first(&self, p: usize, grid: &Grid<'_>) -> bool {
        p == grid.bounds.first_offset(grid.width)
    }

    fn is_last(&self, p: usize, grid: &Grid<'_>) -> bool {
        p == grid.bounds.last_offset(grid.width)
    }

    fn offset(&self, p: usize, _grid: &Grid<'_>) -> usize {
        p
    }
}
