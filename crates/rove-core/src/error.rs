//! Error types for the checked construction and stepping paths.
//!
//! The unchecked engine never produces these: it trusts its
//! preconditions. Only `checked_*` constructors and `try_step_*`
//! methods report a [`WalkError`].

use crate::bounds::Bounds;
use thiserror::Error;

/// Errors arising from checked cursor construction or stepping.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The container has zero width or height.
    #[error("container must have at least one pixel, got {width}x{height}")]
    EmptyBuffer {
        /// Container width.
        width: usize,
        /// Container height.
        height: usize,
    },
    /// A buffer's backing storage does not match its dimensions.
    #[error("buffer holds {len} pixels but {width}x{height} needs {expected}")]
    BufferSizeMismatch {
        /// Container width.
        width: usize,
        /// Container height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Actual storage length.
        len: usize,
    },
    /// `top > bottom` or `left > right`.
    #[error("bounds {bounds} are inverted")]
    InvertedBounds {
        /// The offending bounds.
        bounds: Bounds,
    },
    /// The bounds reach past the container edge.
    #[error("bounds {bounds} exceed the {width}x{height} container")]
    BoundsOutOfBuffer {
        /// The offending bounds.
        bounds: Bounds,
        /// Container width.
        width: usize,
        /// Container height.
        height: usize,
    },
    /// A block sampler's region is not a whole number of blocks.
    #[error(
        "bounds {bounds} are not a whole number of {block_width}x{block_height} blocks"
    )]
    MisalignedBlocks {
        /// The offending bounds.
        bounds: Bounds,
        /// Block width in pixels.
        block_width: usize,
        /// Block height in pixels.
        block_height: usize,
    },
    /// The style must be built as a sub-cursor of a parent.
    #[error("style '{style}' needs a parent cursor")]
    ParentRequired {
        /// Name of the style.
        style: String,
    },
    /// The style cannot walk the frame of the given parent.
    #[error("style '{style}' cannot be a child of '{parent}'")]
    IncompatibleParent {
        /// Name of the child style.
        style: String,
        /// Name of the parent style.
        parent: String,
    },
    /// The style is only meaningful as a root cursor.
    #[error("style '{style}' can only be a root cursor")]
    RootOnly {
        /// Name of the style.
        style: String,
    },
    /// The region is too narrow or short for the style's reach.
    #[error("style '{style}' needs bounds spanning at least {min} pixels each way, got {bounds}")]
    RegionTooSmall {
        /// Name of the style.
        style: String,
        /// The offending bounds.
        bounds: Bounds,
        /// Minimum span on each axis.
        min: usize,
    },
    /// A packed style value does not name a known topology.
    #[error("unknown style bits {bits:#06x}")]
    UnknownStyleBits {
        /// The packed value.
        bits: u16,
    },
    /// Stepping forward from the terminal position.
    #[error("traversal exhausted: cursor is at its terminal position")]
    Exhausted,
    /// Stepping backward from the start position.
    #[error("cursor is already at its start position")]
    AtStart,
}
