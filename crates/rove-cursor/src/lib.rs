//! The Rove traversal engine.
//!
//! A [`Walker`] steps through a rectangular region of a row-major buffer
//! in one of a fixed catalogue of [`Style`]s and resolves each step to a
//! buffer offset. Walkers compose: a sub-walker borrows a parent and
//! derives its frame from the parent's current position, which is how
//! nested row/column loops, ring-by-ring scans and per-pixel
//! neighbourhoods are expressed.
//!
//! # Topologies
//!
//! - Linear: row-major scan of the bounds
//! - Axis row / col, and their sub-axis children
//! - Orbital rings, and the [`perimeter`] walk of one ring
//! - Moore, Von Neumann and depth-2 Moore [`neighbourhood`]s
//! - Four [`block`] sampler shapes
//!
//! # Handles
//!
//! [`Cursor`] and [`CursorMut`] bind a walker to a [`PixelBuffer`](rove_core::PixelBuffer)
//! and dereference to the current pixel. [`WalkConfig`] and the
//! `checked_*` constructors validate inputs the unchecked path trusts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod axis;
pub mod block;
pub mod config;
pub mod cursor;
mod linear;
pub mod neighbourhood;
pub mod orbit;
pub mod perimeter;
pub mod style;
mod walk;
pub mod walker;

#[cfg(test)]
pub(crate) mod compliance;

pub use block::{BlockGrid, BlockPosition};
pub use config::WalkConfig;
pub use cursor::{Cursor, CursorMut};
pub use neighbourhood::{neighbourhood_offsets, NeighbourhoodDescriptor};
pub use orbit::{count_rings, OrbitDescriptor};
pub use perimeter::perimeter_cell;
pub use style::{BlockShape, Direction, Role, Style, Topology};
pub use walker::{Frame, Offsets, Walker};
