//! The buffer-free cursor state machine.
//!
//! A [`Walker`] holds a style, a frame (root, or a borrowed parent), the
//! step counter and the topology state chosen at placement. It resolves
//! positions to row-major offsets but never touches pixel storage; see
//! [`Cursor`](crate::Cursor) for the buffer-bound handle.
//!
//! # Direction
//!
//! Topologies only know their forward order. A reverse walker starts at
//! the forward order's last element, advances with the forward `prev`
//! rule, and is terminal on the forward first element. Its counter
//! stays one ahead of the logical position ([`Style::bias`]).
//!
//! # Terminal
//!
//! A walker is terminal while it sits *on* the last element of its
//! traversal; that element is still visited. Stepping forward from the
//! terminal position is not checked on the unchecked path.

use crate::block::BlockPosition;
use crate::config::{check_sub, WalkConfig};
use crate::linear::LinearWalk;
use crate::neighbourhood::NeighbourhoodDescriptor;
use crate::orbit::OrbitDescriptor;
use crate::style::Style;
use crate::walk::{Grid, Traversal, Walk};
use rove_core::{cell_of, Bounds, Cell, WalkError};
use std::iter::FusedIterator;

/// Where a walker's frame comes from.
#[derive(Clone, Copy, Debug)]
pub enum Frame<'p> {
    /// The walker owns its bounds.
    Root,
    /// The walker derives its frame from a parent's current position.
    Child(&'p Walker<'p>),
}

/// A cursor over a row-major container, without the container.
///
/// Two walkers compare equal when their step counters match, whatever
/// their styles or frames.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
/// use rove_cursor::{Style, Walker};
///
/// let mut rows = Walker::root(10, Bounds::new(0, 0, 1, 2), Style::AXIS_ROW);
/// let mut seen = Vec::new();
/// loop {
///     seen.extend(Walker::sub(&rows, Style::SUB_AXIS_COL).into_offsets());
///     if rows.is_terminal() {
///         break;
///     }
///     rows.step_forward();
/// }
/// assert_eq!(seen, [0, 1, 2, 10, 11, 12]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Walker<'p> {
    width: usize,
    bounds: Bounds,
    style: Style,
    frame: Frame<'p>,
    counter: usize,
    walk: Walk,
}

impl<'p> Walker<'p> {
    /// A root walker over `bounds` in a container `width` pixels wide.
    ///
    /// Inputs are trusted; use [`Walker::checked_root`] to validate them.
    pub fn root(width: usize, bounds: Bounds, style: Style) -> Self {
        Self::placed(width, bounds, style, Frame::Root)
    }

    /// A child walker deriving its frame from `parent`'s current
    /// position. Bounds and width are copied from the parent.
    pub fn sub(parent: &'p Walker<'p>, style: Style) -> Self {
        Self::placed(parent.width, parent.bounds, style, Frame::Child(parent))
    }

    /// Validate `config`, then build a root walker from it.
    pub fn checked_root(config: &WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;
        Ok(Self::root(config.width, config.resolved_bounds(), config.style))
    }

    /// Check that `style` fits under `parent`, then build the child.
    pub fn checked_sub(parent: &'p Walker<'p>, style: Style) -> Result<Self, WalkError> {
        check_sub(parent.style, parent.bounds, style)?;
        Ok(Self::sub(parent, style))
    }

    fn placed(width: usize, bounds: Bounds, style: Style, frame: Frame<'p>) -> Self {
        let mut walker = Self {
            width,
            bounds,
            style,
            frame,
            counter: 0,
            walk: Walk::Linear(LinearWalk),
        };
        walker.place();
        walker
    }

    fn grid(&self) -> Grid<'p> {
        Grid {
            bounds: self.bounds,
            width: self.width,
            parent: match self.frame {
                Frame::Root => None,
                Frame::Child(parent) => Some(parent),
            },
        }
    }

    fn place(&mut self) {
        let grid = self.grid();
        self.walk = Walk::for_style(self.style, &grid);
        let p = if self.style.is_reverse() {
            self.walk.last(&grid)
        } else {
            self.walk.first(&grid)
        };
        self.counter = p.wrapping_add(self.style.bias());
        tracing::trace!(style = %self.style, counter = self.counter, "placed cursor");
    }

    /// Return to the placement state.
    pub fn reset(&mut self) {
        self.place();
    }

    /// The raw step counter.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// The logical position: the counter without the reverse bias.
    pub fn position(&self) -> usize {
        self.counter.wrapping_sub(self.style.bias())
    }

    /// Row-major buffer offset of the current pixel.
    pub fn offset(&self) -> usize {
        self.walk.offset(self.position(), &self.grid())
    }

    /// `(row, col)` of the current pixel.
    pub fn cell(&self) -> Cell {
        cell_of(self.offset(), self.width)
    }

    /// Externally reported index.
    ///
    /// Neighbourhood walkers fold their position into a neighbour slot
    /// (0-7 for the inner ring, 8-23 for the depth-2 outer ring). Every
    /// other topology reports the raw counter.
    pub fn index(&self) -> usize {
        match &self.walk {
            Walk::Neighbourhood(n) => n.fold(self.position()),
            _ => self.counter,
        }
    }

    /// `true` while positioned on the last element of the traversal.
    ///
    /// A vacant walker is both terminal and at its start.
    pub fn is_terminal(&self) -> bool {
        let grid = self.grid();
        if self.walk.is_vacant(&grid) {
            return true;
        }
        let p = self.position();
        if self.style.is_reverse() {
            self.walk.is_first(p, &grid)
        } else {
            self.walk.is_last(p, &grid)
        }
    }

    /// `true` while positioned on the first element of the traversal.
    pub fn is_at_start(&self) -> bool {
        let grid = self.grid();
        if self.walk.is_vacant(&grid) {
            return true;
        }
        let p = self.position();
        if self.style.is_reverse() {
            self.walk.is_last(p, &grid)
        } else {
            self.walk.is_first(p, &grid)
        }
    }

    /// `true` if the traversal has no elements, such as a ring walk over
    /// an empty core ring.
    pub fn is_vacant(&self) -> bool {
        self.walk.is_vacant(&self.grid())
    }

    /// Advance one element along the traversal order.
    pub fn step_forward(&mut self) {
        let grid = self.grid();
        let p = self.position();
        let p = if self.style.is_reverse() {
            self.walk.prev(p, &grid)
        } else {
            self.walk.next(p, &grid)
        };
        self.counter = p.wrapping_add(self.style.bias());
    }

    /// Retreat one element along the traversal order.
    pub fn step_backward(&mut self) {
        let grid = self.grid();
        let p = self.position();
        let p = if self.style.is_reverse() {
            self.walk.next(p, &grid)
        } else {
            self.walk.prev(p, &grid)
        };
        self.counter = p.wrapping_add(self.style.bias());
    }

    /// Advance, or `Err(WalkError::Exhausted)` from the terminal position.
    pub fn try_step_forward(&mut self) -> Result<(), WalkError> {
        if self.is_vacant() || self.is_terminal() {
            return Err(WalkError::Exhausted);
        }
        self.step_forward();
        Ok(())
    }

    /// Retreat, or `Err(WalkError::AtStart)` from the start position.
    pub fn try_step_backward(&mut self) -> Result<(), WalkError> {
        if self.is_vacant() || self.is_at_start() {
            return Err(WalkError::AtStart);
        }
        self.step_backward();
        Ok(())
    }

    /// Traversal style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Clip rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Container width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame the walker was placed in.
    pub fn frame(&self) -> Frame<'p> {
        self.frame
    }

    /// The parent walker, for children.
    pub fn parent(&self) -> Option<&'p Walker<'p>> {
        match self.frame {
            Frame::Root => None,
            Frame::Child(parent) => Some(parent),
        }
    }

    /// Current ring, for orbital walkers.
    pub fn orbit(&self) -> Option<OrbitDescriptor> {
        match self.walk {
            Walk::Orbit(d) => Some(d),
            _ => None,
        }
    }

    /// Neighbourhood descriptor, oriented the way this walker walks it.
    pub fn neighbourhood(&self) -> Option<NeighbourhoodDescriptor> {
        match &self.walk {
            Walk::Neighbourhood(n) if self.style.is_reverse() => Some(n.descriptor().reversed()),
            Walk::Neighbourhood(n) => Some(n.descriptor()),
            _ => None,
        }
    }

    /// Current block coordinates, for block samplers.
    pub fn block(&self) -> Option<BlockPosition> {
        match &self.walk {
            Walk::Block(b) => Some(b.at()),
            _ => None,
        }
    }

    /// Every offset from the current position to the terminal one,
    /// inclusive.
    pub fn into_offsets(self) -> Offsets<'p> {
        Offsets {
            done: self.is_vacant(),
            walker: self,
        }
    }
}

impl PartialEq for Walker<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter
    }
}

/// Iterator over the offsets of a traversal. See [`Walker::into_offsets`].
#[derive(Clone, Debug)]
pub struct Offsets<'p> {
    walker: Walker<'p>,
    done: bool,
}

impl Iterator for Offsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let offset = self.walker.offset();
        if self.walker.is_terminal() {
            self.done = true;
        } else {
            self.walker.step_forward();
        }
        Some(offset)
    }
}

impl FusedIterator for Offsets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    #[test]
    fn equality_compares_counters_only() {
        let bounds = Bounds::covering(4, 4);
        let linear = Walker::root(4, bounds, Style::LINEAR);
        let rows = Walker::root(4, bounds, Style::AXIS_ROW);
        assert_eq!(linear, rows);
        let mut moved = linear;
        moved.step_forward();
        assert_ne!(moved, linear);
    }

    #[test]
    fn children_copy_the_parent_frame() {
        let parent = Walker::root(12, Bounds::new(1, 2, 5, 7), Style::AXIS_ROW);
        let child = Walker::sub(&parent, Style::SUB_AXIS_COL);
        assert_eq!(child.bounds(), parent.bounds());
        assert_eq!(child.width(), 12);
        assert!(child.parent().is_some_and(|p| p == &parent));
        assert!(matches!(parent.frame(), Frame::Root));
    }

    #[test]
    fn reset_returns_to_placement() {
        let mut w = Walker::root(8, Bounds::covering(8, 8), Style::LINEAR_REVERSE);
        let placed = w;
        for _ in 0..10 {
            w.step_forward();
        }
        assert_ne!(w, placed);
        w.reset();
        assert_eq!(w, placed);
        assert!(w.is_at_start());
    }

    #[test]
    fn try_step_forward_stops_at_the_terminal() {
        let mut w = Walker::root(3, Bounds::new(0, 0, 0, 2), Style::LINEAR);
        assert_eq!(w.try_step_forward(), Ok(()));
        assert_eq!(w.try_step_forward(), Ok(()));
        assert_eq!(w.try_step_forward(), Err(WalkError::Exhausted));
        assert_eq!(w.offset(), 2);
    }

    #[test]
    fn try_step_backward_stops_at_the_start() {
        let mut w = Walker::root(3, Bounds::new(0, 0, 2, 0), Style::AXIS_ROW_REVERSE);
        assert_eq!(w.try_step_backward(), Err(WalkError::AtStart));
        w.step_forward();
        assert_eq!(w.try_step_backward(), Ok(()));
        assert_eq!(w.position(), 2);
    }

    #[test]
    fn vacant_walks_refuse_to_step() {
        let mut rings = Walker::root(6, Bounds::new(0, 0, 3, 5), Style::ORBITAL_IN);
        rings.step_forward();
        rings.step_forward();
        let mut ring = Walker::sub(&rings, Style::SUB_ORBIT_CLOCKWISE);
        assert_eq!(ring.try_step_forward(), Err(WalkError::Exhausted));
        assert_eq!(ring.try_step_backward(), Err(WalkError::AtStart));
    }

    #[test]
    fn checked_root_validates_the_config() {
        let config = WalkConfig::new(16, 16, Style::BLOCK_8X8);
        let w = Walker::checked_root(&config).unwrap();
        assert_eq!(w.into_offsets().count(), 256);
        let bad = config.with_bounds(Bounds::new(0, 0, 16, 15));
        assert!(matches!(
            Walker::checked_root(&bad),
            Err(WalkError::BoundsOutOfBuffer { .. })
        ));
    }

    #[test]
    fn checked_sub_validates_the_pairing() {
        let rows = Walker::root(8, Bounds::covering(8, 8), Style::AXIS_ROW);
        assert!(Walker::checked_sub(&rows, Style::SUB_AXIS_COL).is_ok());
        assert!(matches!(
            Walker::checked_sub(&rows, Style::SUB_ORBIT_CLOCKWISE),
            Err(WalkError::IncompatibleParent { .. })
        ));
        assert!(matches!(
            Walker::checked_sub(&rows, Style::LINEAR),
            Err(WalkError::RootOnly { .. })
        ));
    }

    #[test]
    fn index_is_the_counter_outside_neighbourhoods() {
        let mut w = Walker::root(10, Bounds::new(2, 3, 4, 5), Style::LINEAR_REVERSE);
        assert_eq!(w.index(), 46);
        w.step_forward();
        assert_eq!(w.index(), 45);
    }

    #[test]
    fn nested_children_resolve_through_every_level() {
        let rings = Walker::root(5, Bounds::covering(5, 5), Style::ORBITAL_IN);
        let mut ring = Walker::sub(&rings, Style::SUB_ORBIT_CLOCKWISE);
        for _ in 0..6 {
            ring.step_forward();
        }
        assert_eq!(ring.cell(), (2, 4));
        let around = Walker::sub(&ring, Style::VON_NEUMANN);
        let cells: Vec<Cell> = around.into_offsets().map(|o| cell_of(o, 5)).collect();
        assert_eq!(cells, vec![(3, 4), (2, 3), (1, 4)]);
    }

    #[test]
    fn compliance_root_styles() {
        let bounds = Bounds::new(0, 0, 15, 15);
        for style in Style::catalogue().iter().filter(|s| !s.is_sub()) {
            let w = Walker::root(16, bounds, *style);
            compliance::assert_offsets_within(&w, bounds);
            compliance::assert_terminal_reached(&w);
        }
    }

    proptest! {
        #[test]
        fn offsets_start_at_the_current_position(steps in 0usize..20) {
            let mut w = Walker::root(7, Bounds::new(1, 1, 5, 5), Style::LINEAR);
            for _ in 0..steps {
                w.step_forward();
            }
            let first = w.into_offsets().next();
            prop_assert_eq!(first, Some(w.offset()));
            prop_assert_eq!(w.into_offsets().count(), 25 - steps);
        }
    }
}
