//! Pixel neighbourhoods around a parent cursor's current cell.
//!
//! # Slot numbering
//!
//! The inner ring uses eight slots clockwise from North:
//!
//! ```text
//!   7 0 1
//!   6 . 2
//!   5 4 3
//! ```
//!
//! The depth-2 outer ring uses sixteen slots clockwise from `(-2, 0)`,
//! stored at positions 16 and up:
//!
//! ```text
//!   30 31 16 17 18
//!   29  .  .  . 19
//!   28  .  .  . 20
//!   27  .  .  . 21
//!   26 25 24 23 22
//! ```
//!
//! Positions run past the end of a ring (inner up to 15, outer up to 47)
//! so that an arc wrapping through North stays monotone. Offsets fold
//! positions back with `% 8` (inner) or `% 16` (outer).
//!
//! # Edge truncation
//!
//! The target is classified per axis against the parent's bounds. Each
//! case keeps exactly the in-bounds cells as one contiguous arc per ring.
//! Depth 1 uses three classes (first, inner, last); depth 2 uses five
//! (first, second, inner, second to last, last). See [`POSITION_MAP`].

use crate::style::Topology;
use crate::walk::{Grid, Traversal};
use crate::walker::Walker;
use crate::Style;
use rove_core::Cell;
use smallvec::SmallVec;

/// Inner ring `(d_row, d_col)` per slot, clockwise from North.
pub const INNER_RING: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Outer ring `(d_row, d_col)` per slot, clockwise from `(-2, 0)`.
pub const OUTER_RING: [(isize, isize); 16] = [
    (-2, 0),
    (-2, 1),
    (-2, 2),
    (-1, 2),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (2, -1),
    (2, -2),
    (1, -2),
    (0, -2),
    (-1, -2),
    (-2, -2),
    (-2, -1),
];

/// First position of the outer ring.
pub const OUTER_BASE: usize = 16;

/// The in-bounds arcs for one target class: inner start, inner last,
/// outer start, outer last (forward order).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arcs {
    /// First inner position.
    pub inner_start: usize,
    /// Last inner position.
    pub inner_last: usize,
    /// First outer position.
    pub outer_start: usize,
    /// Last outer position.
    pub outer_last: usize,
}

const fn arcs(inner_start: usize, inner_last: usize, outer_start: usize, outer_last: usize) -> Arcs {
    Arcs {
        inner_start,
        inner_last,
        outer_start,
        outer_last,
    }
}

/// Arcs for every target class, indexed `[row band][col band]`.
///
/// Bands are first, second, inner, second to last, last. Depth-1
/// cursors read only bands 0, 2 and 4 and only the inner arc.
pub const POSITION_MAP: [[Arcs; 5]; 5] = [
    [
        arcs(2, 4, 20, 24),
        arcs(2, 6, 20, 25),
        arcs(2, 6, 20, 28),
        arcs(2, 6, 23, 28),
        arcs(4, 6, 24, 28),
    ],
    [
        arcs(0, 4, 19, 24),
        arcs(0, 7, 19, 25),
        arcs(0, 7, 19, 29),
        arcs(0, 7, 23, 29),
        arcs(4, 8, 24, 29),
    ],
    [
        arcs(0, 4, 16, 24),
        arcs(0, 7, 31, 41),
        arcs(0, 7, 16, 31),
        arcs(0, 7, 23, 33),
        arcs(4, 8, 24, 32),
    ],
    [
        arcs(0, 4, 16, 21),
        arcs(0, 7, 31, 37),
        arcs(0, 7, 27, 37),
        arcs(0, 7, 27, 33),
        arcs(4, 8, 27, 32),
    ],
    [
        arcs(0, 2, 16, 20),
        arcs(6, 10, 31, 36),
        arcs(6, 10, 28, 36),
        arcs(6, 10, 28, 33),
        arcs(6, 8, 28, 32),
    ],
];

/// Where a coordinate sits between two inclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Band {
    First,
    Second,
    Inner,
    SecondLast,
    Last,
}

impl Band {
    fn of(v: usize, lo: usize, hi: usize) -> Self {
        if v == lo {
            Self::First
        } else if v == hi {
            Self::Last
        } else if v == lo + 1 {
            Self::Second
        } else if v + 1 == hi {
            Self::SecondLast
        } else {
            Self::Inner
        }
    }

    /// Depth-1 view: only the outermost line is truncated.
    fn shallow(self) -> Self {
        match self {
            Self::First | Self::Last => self,
            Self::Second | Self::Inner | Self::SecondLast => Self::Inner,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Inner => 2,
            Self::SecondLast => 3,
            Self::Last => 4,
        }
    }
}

/// Target cell and index arcs of a neighbourhood cursor.
///
/// Indices are logical positions (reverse bias removed). For a forward
/// cursor the walk runs `start_index` up to `switch_after_index`, jumps
/// to `switch_to_index`, and ends at `last_index`. [`reversed`] gives the
/// mirrored view a reverse cursor walks: outer ring first, jumping from
/// the outer start down to the inner last. Depth-1 descriptors never
/// switch; both switch fields equal `last_index`.
///
/// [`reversed`]: NeighbourhoodDescriptor::reversed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighbourhoodDescriptor {
    /// Row of the centre cell.
    pub target_row: usize,
    /// Column of the centre cell.
    pub target_col: usize,
    /// First position visited.
    pub start_index: usize,
    /// Last position visited.
    pub last_index: usize,
    /// Position after which the walk changes ring.
    pub switch_after_index: usize,
    /// Position the walk jumps to when changing ring.
    pub switch_to_index: usize,
}

impl NeighbourhoodDescriptor {
    /// Classify `target` against `grid` bounds for `topology`.
    fn classify(topology: Topology, target: Cell, grid: &Grid<'_>) -> Self {
        let b = grid.bounds;
        let (row, col) = target;
        let mut row_band = Band::of(row, b.top, b.bottom);
        let mut col_band = Band::of(col, b.left, b.right);
        if topology != Topology::Moore2 {
            row_band = row_band.shallow();
            col_band = col_band.shallow();
        }
        let arcs = POSITION_MAP[row_band.index()][col_band.index()];
        let inner_last = match topology {
            Topology::VonNeumann if arcs.inner_last == 7 => 6,
            _ => arcs.inner_last,
        };
        let (switch_to_index, last_index) = match topology {
            Topology::Moore2 => (arcs.outer_start, arcs.outer_last),
            _ => (inner_last, inner_last),
        };
        Self {
            target_row: row,
            target_col: col,
            start_index: arcs.inner_start,
            last_index,
            switch_after_index: inner_last,
            switch_to_index,
        }
    }

    /// The same neighbourhood as walked by a reverse cursor.
    pub fn reversed(&self) -> Self {
        Self {
            target_row: self.target_row,
            target_col: self.target_col,
            start_index: self.last_index,
            last_index: self.start_index,
            switch_after_index: self.switch_to_index,
            switch_to_index: self.switch_after_index,
        }
    }
}

/// `(d_row, d_col)` for a position; the target itself for positions
/// outside both rings.
pub fn slot_delta(p: usize) -> (isize, isize) {
    match p {
        0..=15 => INNER_RING[p % 8],
        16..=47 => OUTER_RING[p % 16],
        _ => (0, 0),
    }
}

/// Externally reported neighbour index for a logical position.
///
/// Inner positions fold to 0-7, outer positions to 8-23.
pub fn fold_index(topology: Topology, p: usize) -> usize {
    match topology {
        Topology::Moore2 if p >= OUTER_BASE => 8 + p % 16,
        _ => p % 8,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NeighbourhoodWalk {
    topology: Topology,
    descriptor: NeighbourhoodDescriptor,
}

impl NeighbourhoodWalk {
    /// Snapshot the parent's current cell and classify it.
    pub fn around(topology: Topology, grid: &Grid<'_>) -> Self {
        Self {
            topology,
            descriptor: NeighbourhoodDescriptor::classify(topology, grid.parent_cell(), grid),
        }
    }

    /// Forward-oriented descriptor.
    pub fn descriptor(&self) -> NeighbourhoodDescriptor {
        self.descriptor
    }

    pub fn fold(&self, p: usize) -> usize {
        fold_index(self.topology, p)
    }

    fn switching(&self) -> bool {
        self.topology == Topology::Moore2
    }

    fn stride(&self) -> usize {
        match self.topology {
            Topology::VonNeumann => 2,
            _ => 1,
        }
    }
}

impl Traversal for NeighbourhoodWalk {
    fn first(&mut self, _grid: &Grid<'_>) -> usize {
        self.descriptor.start_index
    }

    fn last(&mut self, _grid: &Grid<'_>) -> usize {
        self.descriptor.last_index
    }

    fn next(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        if self.switching() && p == self.descriptor.switch_after_index {
            self.descriptor.switch_to_index
        } else {
            p.wrapping_add(self.stride())
        }
    }

    fn prev(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        if self.switching() && p == self.descriptor.switch_to_index {
            self.descriptor.switch_after_index
        } else {
            p.wrapping_sub(self.stride())
        }
    }

    fn is_first(&self, p: usize, _grid: &Grid<'_>) -> bool {
        p == self.descriptor.start_index
    }

    fn is_last(&self, p: usize, _grid: &Grid<'_>) -> bool {
        p == self.descriptor.last_index
    }

    fn offset(&self, p: usize, grid: &Grid<'_>) -> usize {
        let (dr, dc) = slot_delta(p);
        let row = self.descriptor.target_row.wrapping_add_signed(dr);
        let col = self.descriptor.target_col.wrapping_add_signed(dc);
        grid.offset_of(row, col)
    }
}

/// Offsets of every cell in the `style` neighbourhood of `parent`'s
/// current cell, in traversal order.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
/// use rove_cursor::{neighbourhood_offsets, Style, Walker};
///
/// let mut row = Walker::root(5, Bounds::covering(5, 5), Style::AXIS_ROW);
/// row.step_forward();
/// let col = Walker::sub(&row, Style::SUB_AXIS_COL);
/// // (1, 0) sits on the left edge: N, NE, E, SE, S.
/// assert_eq!(neighbourhood_offsets(&col, Style::MOORE).as_slice(), &[0, 1, 6, 11, 10]);
/// ```
pub fn neighbourhood_offsets(parent: &Walker<'_>, style: Style) -> SmallVec<[usize; 24]> {
    Walker::sub(parent, style).into_offsets().collect()
}
