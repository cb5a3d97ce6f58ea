//! Concentric-ring ("orbital") traversal.
//!
//! An orbital cursor's position is a ring index. Ring 0 is the bounds
//! themselves; each following ring is one pixel in from every side. The
//! cursor only reports each ring's top-left corner: walking the pixels of
//! a ring is the job of a `SUB_ORBIT_*` child (see [`crate::perimeter`]).

use crate::walk::{Grid, Traversal};
use rove_core::Bounds;

/// The current ring of an orbital cursor.
///
/// Stepping produces a new descriptor from the current one, so the ring
/// pixel count is always derived from `extents` by the same rule.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
/// use rove_cursor::OrbitDescriptor;
///
/// let outer = OrbitDescriptor::outermost(Bounds::new(0, 0, 4, 4));
/// assert_eq!(outer.rings_total, 3);
/// assert_eq!(outer.pixels_in_ring, 16);
/// assert_eq!(outer.shrink().pixels_in_ring, 8);
/// assert_eq!(outer.shrink().shrink().pixels_in_ring, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrbitDescriptor {
    /// The ring's rectangle.
    pub extents: Bounds,
    /// Pixels on the ring; the whole area once the ring is degenerate.
    pub pixels_in_ring: usize,
    /// Number of rings the original bounds hold.
    pub rings_total: usize,
}

/// Count the rings of `bounds` and return the innermost rectangle.
///
/// Shrinks one pixel per side while both spans exceed one. The final
/// rectangle counts as a ring even when it has collapsed to one row, one
/// column, or nothing.
pub fn count_rings(bounds: Bounds) -> (usize, Bounds) {
    let mut rings = 1;
    let mut ring = bounds;
    while !ring.is_degenerate() {
        ring = ring.shrink();
        rings += 1;
    }
    (rings, ring)
}

impl OrbitDescriptor {
    /// The outer ring of `bounds`.
    pub fn outermost(bounds: Bounds) -> Self {
        let (rings_total, _) = count_rings(bounds);
        Self::ring(bounds, rings_total)
    }

    /// The innermost ring of `bounds`.
    pub fn innermost(bounds: Bounds) -> Self {
        let (rings_total, core) = count_rings(bounds);
        Self::ring(core, rings_total)
    }

    fn ring(extents: Bounds, rings_total: usize) -> Self {
        Self {
            extents,
            pixels_in_ring: extents.ring_pixels(),
            rings_total,
        }
    }

    /// The next ring inward.
    pub fn shrink(&self) -> Self {
        Self::ring(self.extents.shrink(), self.rings_total)
    }

    /// The next ring outward.
    pub fn grow(&self) -> Self {
        Self::ring(self.extents.grow(), self.rings_total)
    }

    /// `true` if the ring holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels_in_ring == 0
    }
}

impl Traversal for OrbitDescriptor {
    fn first(&mut self, grid: &Grid<'_>) -> usize {
        *self = Self::outermost(grid.bounds);
        0
    }

    fn last(&mut self, grid: &Grid<'_>) -> usize {
        *self = Self::innermost(grid.bounds);
        self.rings_total - 1
    }

    fn next(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        *self = self.shrink();
        p.wrapping_add(1)
    }

    fn prev(&mut self, p: usize, _grid: &Grid<'_>) -> usize {
        *self = self.grow();
        p.wrapping_sub(1)
    }

    fn is_first(&self, p: usize, _grid: &Grid<'_>) -> bool {
        p == 0
    }

    fn is_last(&self, p: usize, _grid: &Grid<'_>) -> bool {
        p == self.rings_total - 1
    }

    fn offset(&self, _p: usize, grid: &Grid<'_>) -> usize {
        self.extents.first_offset(grid.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Style, Walker};
    use proptest::prelude::*;

    #[test]
    fn five_by_five_has_three_rings() {
        let (rings, core) = count_rings(Bounds::new(0, 0, 4, 4));
        assert_eq!(rings, 3);
        assert_eq!(core, Bounds::new(2, 2, 2, 2));
    }

    #[test]
    fn four_by_six_has_two_full_rings_and_a_degenerate_one() {
        let bounds = Bounds::new(0, 0, 3, 5);
        let (rings, core) = count_rings(bounds);
        assert_eq!(rings, 3);
        assert!(core.is_degenerate());
        let outer = OrbitDescriptor::outermost(bounds);
        assert_eq!(outer.pixels_in_ring, 16);
        assert_eq!(outer.shrink().pixels_in_ring, 8);
        assert!(!outer.shrink().extents.is_degenerate());
        assert!(outer.shrink().shrink().is_empty());
    }

    #[test]
    fn single_row_is_one_ring_holding_the_row() {
        let d = OrbitDescriptor::outermost(Bounds::new(3, 1, 3, 7));
        assert_eq!(d.rings_total, 1);
        assert_eq!(d.pixels_in_ring, 7);
    }

    #[test]
    fn odd_by_even_core_collapses_to_a_column() {
        let core = OrbitDescriptor::innermost(Bounds::new(0, 0, 6, 3));
        assert_eq!(core.rings_total, 3);
        assert_eq!(core.extents, Bounds::new(2, 2, 4, 1));
        assert_eq!(core.pixels_in_ring, 0);
        let core = OrbitDescriptor::innermost(Bounds::new(0, 0, 6, 4));
        assert_eq!(core.extents, Bounds::new(2, 2, 4, 2));
        assert_eq!(core.pixels_in_ring, 3);
    }

    #[test]
    fn inward_cursor_reports_ring_corners() {
        let w = Walker::root(10, Bounds::new(1, 1, 5, 5), Style::ORBITAL_IN);
        let corners: Vec<usize> = w.into_offsets().collect();
        assert_eq!(corners, vec![11, 22, 33]);
    }

    #[test]
    fn inward_terminal_is_rings_total_minus_one() {
        let mut w = Walker::root(10, Bounds::new(0, 0, 4, 4), Style::ORBITAL_IN);
        w.step_forward();
        assert!(!w.is_terminal());
        w.step_forward();
        assert!(w.is_terminal());
        assert_eq!(w.counter(), 2);
        assert_eq!(w.orbit().unwrap().pixels_in_ring, 1);
    }

    #[test]
    fn outward_cursor_starts_at_the_core() {
        let w = Walker::root(10, Bounds::new(1, 1, 5, 5), Style::ORBITAL_OUT);
        assert_eq!(w.counter(), 3);
        assert_eq!(w.orbit().unwrap().extents, Bounds::new(3, 3, 3, 3));
        let corners: Vec<usize> = w.into_offsets().collect();
        assert_eq!(corners, vec![33, 22, 11]);
    }

    #[test]
    fn reset_returns_to_the_outer_ring() {
        let mut w = Walker::root(10, Bounds::new(0, 0, 4, 4), Style::ORBITAL_IN);
        w.step_forward();
        w.reset();
        assert_eq!(w.counter(), 0);
        assert_eq!(w.orbit().unwrap().extents, Bounds::new(0, 0, 4, 4));
    }

    proptest! {
        #[test]
        fn shrink_then_grow_is_identity(
            top in 0usize..5, left in 0usize..5, h in 3usize..12, w in 3usize..12,
        ) {
            let d = OrbitDescriptor::outermost(Bounds::new(top, left, top + h - 1, left + w - 1));
            prop_assert_eq!(d.shrink().grow(), d);
        }

        #[test]
        fn ring_pixels_partition_the_bounds(h in 1usize..14, w in 1usize..14) {
            let (rings, _) = count_rings(Bounds::new(0, 0, h - 1, w - 1));
            let mut d = OrbitDescriptor::outermost(Bounds::new(0, 0, h - 1, w - 1));
            let mut total = d.pixels_in_ring;
            for _ in 1..rings {
                d = d.shrink();
                total += d.pixels_in_ring;
            }
            prop_assert_eq!(total, h * w);
        }

        #[test]
        fn step_round_trip_restores_the_ring(
            h in 3usize..12, w in 3usize..12, steps in 0usize..6, reverse in any::<bool>(),
        ) {
            let style = if reverse { Style::ORBITAL_OUT } else { Style::ORBITAL_IN };
            let mut walker = Walker::root(16, Bounds::new(0, 0, h - 1, w - 1), style);
            let rings = walker.orbit().unwrap().rings_total;
            for _ in 0..steps.min(rings - 1) {
                walker.step_forward();
            }
            prop_assume!(!walker.is_terminal());
            let before = walker;
            walker.step_forward();
            walker.step_backward();
            prop_assert_eq!(walker.counter(), before.counter());
            prop_assert_eq!(walker.orbit(), before.orbit());
        }
    }
}
