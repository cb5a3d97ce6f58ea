//! The per-topology traversal contract and its closed dispatch enum.
//!
//! Every topology describes its *forward* order only: where it starts,
//! where it ends, and how to move one step either way. The [`Walker`]
//! derives reverse traversal by swapping the ends and the step
//! direction, so reverse rules never need to be written twice.

use crate::axis::AxisWalk;
use crate::block::BlockWalk;
use crate::linear::LinearWalk;
use crate::neighbourhood::NeighbourhoodWalk;
use crate::orbit::OrbitDescriptor;
use crate::perimeter::PerimeterWalk;
use crate::style::{Style, Topology};
use crate::walker::Walker;
use rove_core::{Bounds, Cell};

/// The frame a topology resolves positions against.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Grid<'a> {
    pub bounds: Bounds,
    pub width: usize,
    pub parent: Option<&'a Walker<'a>>,
}

impl Grid<'_> {
    /// The parent's current cell, or the bounds' top-left corner for a
    /// root cursor (a root is its own parent).
    pub fn parent_cell(&self) -> Cell {
        self.parent
            .map_or((self.bounds.top, self.bounds.left), |parent| parent.cell())
    }

    pub fn offset_of(&self, row: usize, col: usize) -> usize {
        row.wrapping_mul(self.width).wrapping_add(col)
    }
}

/// Forward-order traversal of one topology.
///
/// `p` is the logical position: the step counter with the reverse bias
/// removed. `first` and `last` also reset any descriptor state to match
/// the position they return.
pub(crate) trait Traversal {
    fn first(&mut self, grid: &Grid<'_>) -> usize;
    fn last(&mut self, grid: &Grid<'_>) -> usize;
    fn next(&mut self, p: usize, grid: &Grid<'_>) -> usize;
    fn prev(&mut self, p: usize, grid: &Grid<'_>) -> usize;
    fn is_first(&self, p: usize, grid: &Grid<'_>) -> bool;
    fn is_last(&self, p: usize, grid: &Grid<'_>) -> bool;
    fn offset(&self, p: usize, grid: &Grid<'_>) -> usize;

    /// `true` if the traversal has no elements at all.
    fn is_vacant(&self, _grid: &Grid<'_>) -> bool {
        false
    }
}

/// Topology state, selected once at placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Walk {
    Linear(LinearWalk),
    Axis(AxisWalk),
    Orbit(OrbitDescriptor),
    Perimeter(PerimeterWalk),
    Neighbourhood(NeighbourhoodWalk),
    Block(BlockWalk),
}

impl Walk {
    pub fn for_style(style: Style, grid: &Grid<'_>) -> Self {
        match style.topology {
            Topology::Linear => Self::Linear(LinearWalk),
            Topology::AxisRow => Self::Axis(AxisWalk::rows(style.is_sub())),
            Topology::AxisCol => Self::Axis(AxisWalk::cols(style.is_sub())),
            Topology::Orbital => Self::Orbit(OrbitDescriptor::outermost(grid.bounds)),
            Topology::SubOrbit => Self::Perimeter(PerimeterWalk),
            Topology::Moore | Topology::VonNeumann | Topology::Moore2 => {
                Self::Neighbourhood(NeighbourhoodWalk::around(style.topology, grid))
            }
            Topology::Block(shape) => Self::Block(BlockWalk::over(shape, grid.bounds)),
        }
    }
}

macro_rules! dispatch {
    ($walk:expr, $inner:ident => $body:expr) => {
        match $walk {
            Walk::Linear($inner) => $body,
            Walk::Axis($inner) => $body,
            Walk::Orbit($inner) => $body,
            Walk::Perimeter($inner) => $body,
            Walk::Neighbourhood($inner) => $body,
            Walk::Block($inner) => $body,
        }
    };
}

impl Traversal for Walk {
    fn first(&mut self, grid: &Grid<'_>) -> usize {
        dispatch!(self, w => w.first(grid))
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        dispatch!(self, w => w.last(grid))
    }

    fn next(&mut self, p: usize, grid: &Grid<'_>) -> usize {
        dispatch!(self, w => w.next(p, grid))
    }

    fn prev(&mut self, p: usize, grid: &Grid<'_>) -> usize {
        dispatch!(self, w => w.prev(p, grid))
    }

    fn is_first(&self, p: usize, grid: &Grid<'_>) -> bool {
        dispatch!(self, w => w.is_first(p, grid))
    }

    fn is_last(&self, p: usize, grid: &Grid<'_>) -> bool {
        dispatch!(self, w => w.is_last(p, grid))
    }

    fn offset(&self, p: usize, grid: &Grid<'_>) -> usize {
        dispatch!(self, w => w.offset(p, grid))
    }

    fn is_vacant(&self, grid: &Grid<'_>) -> bool {
        dispatch!(self, w => w.is_vacant(grid))
    }
}
