//! Rove: a compound 2D pixel-iteration engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Rove sub-crates. For most users, adding `rove` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rove::prelude::*;
//!
//! // A 6x6 raster whose pixels hold their own offsets.
//! let raster = Raster::from_fn(6, 6, |offset| offset as u32);
//!
//! // Ring-by-ring scan: the outer ring of a 6x6 region holds 20 pixels.
//! let rings = Cursor::covering(&raster, Style::ORBITAL_IN);
//! let outer: Vec<u32> = Cursor::sub(&rings, Style::SUB_ORBIT_CLOCKWISE)
//!     .pixels()
//!     .copied()
//!     .collect();
//! assert_eq!(outer.len(), 20);
//! assert_eq!(&outer[..6], &[0, 1, 2, 3, 4, 5]);
//!
//! // Moore neighbourhood of the corner pixel: E, SE, S.
//! let corner = Cursor::covering(&raster, Style::LINEAR);
//! let around: Vec<u32> = Cursor::sub(&corner, Style::MOORE).pixels().copied().collect();
//! assert_eq!(around, [1, 7, 6]);
//!
//! // The checked path reports what is wrong instead of trusting inputs.
//! let err = Cursor::checked_root(&raster, Bounds::new(0, 0, 6, 5), Style::LINEAR).unwrap_err();
//! assert!(matches!(err, WalkError::BoundsOutOfBuffer { .. }));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`rove-core`).
///
/// Contains the clip rectangle [`types::Bounds`], the buffer provider
/// traits ([`types::PixelBuffer`], [`types::PixelBufferMut`]), the
/// in-memory [`types::Raster`], and [`types::WalkError`].
pub use rove_core as types;

/// Traversal engine (`rove-cursor`).
///
/// Provides [`cursor::Walker`], the buffer-bound [`cursor::Cursor`] and
/// [`cursor::CursorMut`], the [`cursor::Style`] catalogue, and the ring,
/// neighbourhood and block descriptors.
pub use rove_cursor as cursor;

/// Common imports for typical Rove usage.
///
/// ```rust
/// use rove::prelude::*;
/// ```
///
/// This imports the most frequently used types: bounds, buffers, cursors,
/// styles, and the checked configuration.
pub mod prelude {
    // Core types and traits
    pub use rove_core::{Bounds, Cell, PixelBuffer, PixelBufferMut, Raster};

    // Errors
    pub use rove_core::WalkError;

    // Cursors
    pub use rove_cursor::{Cursor, CursorMut, Offsets, Walker};

    // Styles
    pub use rove_cursor::{BlockShape, Direction, Role, Style, Topology};

    // Descriptors and helpers
    pub use rove_cursor::{
        neighbourhood_offsets, BlockPosition, NeighbourhoodDescriptor, OrbitDescriptor,
    };

    // Configuration
    pub use rove_cursor::WalkConfig;
}
