//! Block-major sampling: whole blocks in row-major order, and row-major
//! order inside each block.
//!
//! The position is always recomputed from the four block coordinates, so
//! the step counter stays the buffer offset in both directions.

use crate::style::BlockShape;
use crate::walk::{Grid, Traversal};
use rove_core::Bounds;

/// Where a block sampler currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    /// Block row within the bounds.
    pub block_row: usize,
    /// Block column within the bounds.
    pub block_col: usize,
    /// Row inside the block.
    pub sample_row: usize,
    /// Column inside the block.
    pub sample_col: usize,
}

/// The tiling of a region by one block shape.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
/// use rove_cursor::{BlockGrid, BlockShape};
///
/// let grid = BlockGrid::new(BlockShape::Wide16x8, Bounds::covering(32, 16));
/// assert_eq!((grid.blocks_across, grid.blocks_down), (2, 2));
/// let last = grid.last();
/// assert_eq!((last.block_row, last.sample_row, last.sample_col), (1, 7, 15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockGrid {
    /// Block shape.
    pub shape: BlockShape,
    /// Whole blocks per block row.
    pub blocks_across: usize,
    /// Whole block rows.
    pub blocks_down: usize,
}

impl BlockGrid {
    /// Tile `bounds` with `shape`. Partial blocks are dropped.
    pub fn new(shape: BlockShape, bounds: Bounds) -> Self {
        Self {
            shape,
            blocks_across: bounds.width() / shape.width(),
            blocks_down: bounds.height() / shape.height(),
        }
    }

    /// The final sample of the final block.
    pub fn last(&self) -> BlockPosition {
        BlockPosition {
            block_row: self.blocks_down.saturating_sub(1),
            block_col: self.blocks_across.saturating_sub(1),
            sample_row: self.shape.height() - 1,
            sample_col: self.shape.width() - 1,
        }
    }

    /// The sample after `at`.
    pub fn next(&self, at: BlockPosition) -> BlockPosition {
        let mut at = at;
        if at.sample_col + 1 < self.shape.width() {
            at.sample_col += 1;
            return at;
        }
        at.sample_col = 0;
        if at.sample_row + 1 < self.shape.height() {
            at.sample_row += 1;
            return at;
        }
        at.sample_row = 0;
        if at.block_col + 1 < self.blocks_across {
            at.block_col += 1;
            return at;
        }
        at.block_col = 0;
        at.block_row = at.block_row.wrapping_add(1);
        at
    }

    /// The sample before `at`.
    pub fn prev(&self, at: BlockPosition) -> BlockPosition {
        let mut at = at;
        if at.sample_col > 0 {
            at.sample_col -= 1;
            return at;
        }
        at.sample_col = self.shape.width() - 1;
        if at.sample_row > 0 {
            at.sample_row -= 1;
            return at;
        }
        at.sample_row = self.shape.height() - 1;
        if at.block_col > 0 {
            at.block_col -= 1;
            return at;
        }
        at.block_col = self.blocks_across.saturating_sub(1);
        at.block_row = at.block_row.wrapping_sub(1);
        at
    }

    /// Buffer offset of `at` inside `bounds`.
    pub fn offset(&self, at: BlockPosition, bounds: Bounds, width: usize) -> usize {
        let row = bounds.top + at.block_row.wrapping_mul(self.shape.height()) + at.sample_row;
        let col = bounds.left + at.block_col * self.shape.width() + at.sample_col;
        row.wrapping_mul(width).wrapping_add(col)
    }

    /// Total samples visited.
    pub fn samples(&self) -> usize {
        self.blocks_across * self.blocks_down * self.shape.samples()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BlockWalk {
    grid: BlockGrid,
    at: BlockPosition,
}

impl BlockWalk {
    pub fn over(shape: BlockShape, bounds: Bounds) -> Self {
        Self {
            grid: BlockGrid::new(shape, bounds),
            at: BlockPosition::default(),
        }
    }

    pub fn at(&self) -> BlockPosition {
        self.at
    }

    fn resolve(&self, grid: &Grid<'_>) -> usize {
        self.grid.offset(self.at, grid.bounds, grid.width)
    }
}

impl Traversal for BlockWalk {
    fn first(&mut self, grid: &Grid<'_>) -> usize {
        self.at = BlockPosition::default();
        self.resolve(grid)
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        self.at = self.grid.last();
        self.resolve(grid)
    }

    fn next(&mut self, _p: usize, grid: &Grid<'_>) -> usize {
        self.at = self.grid.next(self.at);
        self.resolve(grid)
    }

    fn prev(&mut self, _p: usize, grid: &Grid<'_>) -> usize {
        self.at = self.grid.prev(self.at);
        self.resolve(grid)
    }

    fn is_first(&self, _p: usize, _grid: &Grid<'_>) -> bool {
        self.at == BlockPosition::default()
    }

    fn is_last(&self, _p: usize, _grid: &Grid<'_>) -> bool {
        self.at == self.grid.last()
    }

    fn offset(&self, p: usize, _grid: &Grid<'_>) -> usize {
        p
    }
}
