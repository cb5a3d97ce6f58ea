//! Inclusive clip rectangles over a row-major container.

use crate::error::WalkError;
use std::fmt;

/// A `(row, col)` cell coordinate inside a container.
pub type Cell = (usize, usize);

/// An inclusive rectangle `(top, left)..=(bottom, right)` inside a
/// row-major container.
///
/// Bounds are caller-supplied and trusted: nothing here normalizes an
/// inverted rectangle. Use [`Bounds::validate`] on the checked path.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
///
/// let b = Bounds::new(0, 0, 3, 3);
/// assert_eq!(b.height(), 4);
/// assert_eq!(b.offset_of(2, 1, 10), 21);
/// assert_eq!(b.last_offset(10), 33);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// First row (inclusive).
    pub top: usize,
    /// First column (inclusive).
    pub left: usize,
    /// Last row (inclusive).
    pub bottom: usize,
    /// Last column (inclusive).
    pub right: usize,
}

impl Bounds {
    /// Create bounds from the four inclusive edges.
    pub const fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Bounds covering a whole `width x height` container.
    ///
    /// Both dimensions must be non-zero.
    pub const fn covering(width: usize, height: usize) -> Self {
        Self::new(0, 0, height.wrapping_sub(1), width.wrapping_sub(1))
    }

    /// Number of rows spanned. Zero once a ring has shrunk past itself.
    pub const fn height(&self) -> usize {
        self.bottom.wrapping_add(1).wrapping_sub(self.top)
    }

    /// Number of columns spanned.
    pub const fn width(&self) -> usize {
        self.right.wrapping_add(1).wrapping_sub(self.left)
    }

    /// Number of cells inside the rectangle.
    pub const fn area(&self) -> usize {
        self.height().wrapping_mul(self.width())
    }

    /// `true` when the rectangle has collapsed to one row, one column,
    /// or nothing at all.
    pub const fn is_degenerate(&self) -> bool {
        self.height() <= 1 || self.width() <= 1
    }

    /// Pixels on the rectangle's perimeter.
    ///
    /// A degenerate rectangle counts its whole area.
    pub const fn ring_pixels(&self) -> usize {
        if self.is_degenerate() {
            self.area()
        } else {
            2 * (self.right - self.left) + 2 * (self.bottom - self.top)
        }
    }

    /// The next ring inward: one pixel off every side.
    pub const fn shrink(&self) -> Self {
        Self::new(
            self.top.wrapping_add(1),
            self.left.wrapping_add(1),
            self.bottom.wrapping_sub(1),
            self.right.wrapping_sub(1),
        )
    }

    /// The next ring outward: one pixel onto every side.
    pub const fn grow(&self) -> Self {
        Self::new(
            self.top.wrapping_sub(1),
            self.left.wrapping_sub(1),
            self.bottom.wrapping_add(1),
            self.right.wrapping_add(1),
        )
    }

    /// `true` if `(row, col)` lies inside the rectangle.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Row-major offset of `(row, col)` in a container `width` cells wide.
    pub const fn offset_of(&self, row: usize, col: usize, width: usize) -> usize {
        row * width + col
    }

    /// Offset of the top-left corner.
    pub const fn first_offset(&self, width: usize) -> usize {
        self.offset_of(self.top, self.left, width)
    }

    /// Offset of the bottom-right corner.
    pub const fn last_offset(&self, width: usize) -> usize {
        self.offset_of(self.bottom, self.right, width)
    }

    /// `true` if the rectangle is well formed and fits a
    /// `width x height` container.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.top <= self.bottom
            && self.left <= self.right
            && self.bottom < height
            && self.right < width
    }

    /// Check the rectangle against a `width x height` container.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), WalkError> {
        if self.top > self.bottom || self.left > self.right {
            return Err(WalkError::InvertedBounds { bounds: *self });
        }
        if !self.fits(width, height) {
            return Err(WalkError::BoundsOutOfBuffer {
                bounds: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]..=[{}, {}]",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// Split a row-major offset into its `(row, col)` cell.
pub const fn cell_of(offset: usize, width: usize) -> Cell {
    (offset / width, offset % width)
}
