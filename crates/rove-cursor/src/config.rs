//! Checked construction parameters.
//!
//! The unchecked constructors on [`Walker`](crate::Walker) trust their
//! inputs. [`WalkConfig`] gathers the same inputs for a root cursor and
//! validates them before [`Walker::checked_root`](crate::Walker::checked_root)
//! places anything; [`check_sub`] does the same for a child.

use crate::style::{Style, Topology};
use rove_core::{Bounds, PixelBuffer, WalkError};

/// Parameters for a checked root cursor.
///
/// # Examples
///
/// ```
/// use rove_core::Bounds;
/// use rove_cursor::{Style, WalkConfig};
///
/// let config = WalkConfig::new(32, 32, Style::BLOCK_16X16);
/// assert!(config.validate().is_ok());
///
/// let clipped = config.with_bounds(Bounds::new(0, 0, 15, 23));
/// assert!(clipped.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    /// Container width in pixels.
    pub width: usize,
    /// Container height in pixels.
    pub height: usize,
    /// Clip rectangle. `None` covers the whole container.
    pub bounds: Option<Bounds>,
    /// Traversal style of the root cursor.
    pub style: Style,
}

impl WalkConfig {
    /// Walk a whole `width x height` container.
    pub fn new(width: usize, height: usize, style: Style) -> Self {
        Self {
            width,
            height,
            bounds: None,
            style,
        }
    }

    /// Walk the whole of `buffer`.
    pub fn for_buffer<B: PixelBuffer + ?Sized>(buffer: &B, style: Style) -> Self {
        Self::new(buffer.width(), buffer.height(), style)
    }

    /// Clip the walk to `bounds`.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// The clip rectangle the cursor will use.
    pub fn resolved_bounds(&self) -> Bounds {
        self.bounds
            .unwrap_or_else(|| Bounds::covering(self.width, self.height))
    }

    /// Check the configuration for structural validity.
    pub fn validate(&self) -> Result<(), WalkError> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::debug!(style = %self.style, %err, "rejected root cursor");
        }
        result
    }

    fn check(&self) -> Result<(), WalkError> {
        // 1. Container must hold at least one pixel.
        if self.width == 0 || self.height == 0 {
            return Err(WalkError::EmptyBuffer {
                width: self.width,
                height: self.height,
            });
        }
        // 2. Bounds must be well formed and inside the container.
        let bounds = self.resolved_bounds();
        bounds.validate(self.width, self.height)?;
        // 3. Sub styles need a parent frame.
        if self.style.needs_parent() || self.style.is_sub() {
            return Err(WalkError::ParentRequired {
                style: self.style.to_string(),
            });
        }
        // 4. Block samplers need whole blocks.
        self.style.check_block_alignment(bounds)
    }
}

/// Smallest span on each axis a child style can walk without leaving
/// its bounds.
pub fn min_span(style: Style) -> usize {
    match style.topology {
        Topology::Moore | Topology::VonNeumann => 2,
        Topology::Moore2 => 4,
        _ => 1,
    }
}

/// Check that `style` can be placed as a child of a `parent` cursor
/// walking `bounds`.
pub fn check_sub(parent: Style, bounds: Bounds, style: Style) -> Result<(), WalkError> {
    let result = check_sub_inner(parent, bounds, style);
    if let Err(err) = &result {
        tracing::debug!(%parent, %style, %err, "rejected sub-cursor");
    }
    result
}

fn check_sub_inner(parent: Style, bounds: Bounds, style: Style) -> Result<(), WalkError> {
    // 1. Root-only topologies never take a parent frame.
    let sub_capable = style.is_sub()
        && (style.topology.is_inherently_sub()
            || matches!(style.topology, Topology::AxisRow | Topology::AxisCol));
    if !sub_capable {
        return Err(WalkError::RootOnly {
            style: style.to_string(),
        });
    }
    // 2. A ring walk needs a ring to walk.
    if style.topology == Topology::SubOrbit && parent.topology != Topology::Orbital {
        return Err(WalkError::IncompatibleParent {
            style: style.to_string(),
            parent: parent.to_string(),
        });
    }
    // 3. Neighbourhoods need room for their reach on both axes.
    let min = min_span(style);
    if bounds.width() < min || bounds.height() < min {
        return Err(WalkError::RegionTooSmall {
            style: style.to_string(),
            bounds,
            min,
        });
    }
    Ok(())
}
