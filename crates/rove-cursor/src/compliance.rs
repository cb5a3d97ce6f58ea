//! Walker contract test helpers.
//!
//! These functions verify that a walker of any style satisfies the
//! traversal invariants: offsets stay inside the bounds, the terminal
//! position is reached, stepping round-trips, and reverse styles visit
//! the forward order back to front. Reused across every topology's
//! test module.

use crate::walker::Walker;
use indexmap::IndexSet;
use rove_core::{cell_of, Bounds};

/// Upper bound on traversal length for runaway detection.
fn step_limit(bounds: Bounds) -> usize {
    bounds.area() + 48
}

fn collect(walker: &Walker<'_>, bounds: Bounds) -> Vec<usize> {
    let limit = step_limit(bounds);
    let offsets: Vec<usize> = walker.into_offsets().take(limit + 1).collect();
    assert!(
        offsets.len() <= limit,
        "{} never reached its terminal position within {limit} steps",
        walker.style()
    );
    offsets
}

/// Assert that every visited offset lies inside `bounds`.
pub fn assert_offsets_within(walker: &Walker<'_>, bounds: Bounds) {
    let width = walker.width();
    for offset in collect(walker, bounds) {
        let (row, col) = cell_of(offset, width);
        assert!(
            bounds.contains(row, col),
            "{}: offset {offset} = ({row}, {col}) outside {bounds}",
            walker.style()
        );
    }
}

/// Assert that no offset is visited twice.
pub fn assert_offsets_unique(walker: &Walker<'_>) {
    let offsets = collect(walker, walker.bounds());
    let unique: IndexSet<usize> = offsets.iter().copied().collect();
    assert_eq!(
        unique.len(),
        offsets.len(),
        "{} visits duplicate offsets: {offsets:?}",
        walker.style()
    );
}

/// Assert that the traversal visits exactly `expected` elements.
pub fn assert_len(walker: &Walker<'_>, expected: usize) {
    let len = collect(walker, walker.bounds()).len();
    assert_eq!(len, expected, "{} visited {len} elements", walker.style());
}

/// Assert that stepping forward eventually lands on the terminal position.
pub fn assert_terminal_reached(walker: &Walker<'_>) {
    if walker.is_vacant() {
        return;
    }
    let mut w = *walker;
    let limit = step_limit(walker.bounds());
    for _ in 0..limit {
        if w.is_terminal() {
            return;
        }
        w.step_forward();
    }
    panic!("{} never became terminal", walker.style());
}

/// Assert that a forward step followed by a backward step restores the
/// counter and the offset at every position.
pub fn assert_round_trip(walker: &Walker<'_>) {
    if walker.is_vacant() {
        return;
    }
    let mut w = *walker;
    let limit = step_limit(walker.bounds());
    for _ in 0..limit {
        if w.is_terminal() {
            return;
        }
        let before = w;
        w.step_forward();
        w.step_backward();
        assert_eq!(
            w.counter(),
            before.counter(),
            "{}: round trip moved the counter",
            walker.style()
        );
        assert_eq!(w.offset(), before.offset());
        w.step_forward();
    }
}

/// Assert that `reset` returns to the same placement and that two
/// traversals agree.
pub fn assert_reset_deterministic(walker: &Walker<'_>) {
    let mut w = *walker;
    let first = collect(&w, w.bounds());
    while !w.is_vacant() && !w.is_terminal() {
        w.step_forward();
    }
    w.reset();
    assert_eq!(w.counter(), walker.counter(), "{}: reset moved", walker.style());
    assert_eq!(collect(&w, w.bounds()), first);
}

/// Assert that `reverse` visits `forward`'s offsets back to front.
pub fn assert_reverse_mirrors_forward(forward: &Walker<'_>, reverse: &Walker<'_>) {
    let mut fwd = collect(forward, forward.bounds());
    fwd.reverse();
    let rev = collect(reverse, reverse.bounds());
    assert_eq!(
        rev,
        fwd,
        "{} is not the mirror of {}",
        reverse.style(),
        forward.style()
    );
}

/// Run every compliance check on a freshly placed walker.
pub fn run_full_compliance(walker: &Walker<'_>, bounds: Bounds, expected_len: usize) {
    assert!(walker.is_vacant() || walker.is_at_start());
    assert_offsets_within(walker, bounds);
    assert_offsets_unique(walker);
    assert_len(walker, expected_len);
    assert_terminal_reached(walker);
    assert_round_trip(walker);
    assert_reset_deterministic(walker);
}
