//! Core types for the Rove pixel-iteration engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the clip rectangle ([`Bounds`]), the buffer provider contract
//! ([`PixelBuffer`], [`PixelBufferMut`]), an in-memory [`Raster`], and the
//! [`WalkError`] reported by the checked cursor paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod buffer;
pub mod error;

pub use bounds::{cell_of, Bounds, Cell};
pub use buffer::{PixelBuffer, PixelBufferMut, Raster};
pub use error::WalkError;
