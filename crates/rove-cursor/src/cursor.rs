//! Cursors bound to a pixel buffer.
//!
//! [`Cursor`] pairs a [`Walker`] with a shared buffer borrow and
//! dereferences to the current pixel. [`CursorMut`] holds the buffer
//! mutably; its parent frame is a plain walker, so reading neighbours
//! and writing the centre pixel can happen through separate handles.

use crate::style::Style;
use crate::walker::Walker;
use rove_core::{Bounds, PixelBuffer, PixelBufferMut, WalkError};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A walker bound to a shared buffer.
///
/// # Examples
///
/// ```
/// use rove_core::Raster;
/// use rove_cursor::{Cursor, Style};
///
/// let raster = Raster::from_fn(4, 4, |offset| offset as u32);
/// let mut rows = Cursor::covering(&raster, Style::AXIS_ROW);
/// rows.step_forward();
/// let along = Cursor::sub(&rows, Style::SUB_AXIS_COL);
/// let row: Vec<u32> = along.pixels().copied().collect();
/// assert_eq!(row, [4, 5, 6, 7]);
/// assert_eq!(*rows, 4);
/// ```
pub struct Cursor<'p, B: PixelBuffer> {
    buffer: &'p B,
    walker: Walker<'p>,
}

impl<'p, B: PixelBuffer> Cursor<'p, B> {
    /// A root cursor over `bounds` of `buffer`.
    pub fn root(buffer: &'p B, bounds: Bounds, style: Style) -> Self {
        Self {
            buffer,
            walker: Walker::root(buffer.width(), bounds, style),
        }
    }

    /// A root cursor over the whole of `buffer`.
    pub fn covering(buffer: &'p B, style: Style) -> Self {
        Self::root(buffer, Bounds::covering(buffer.width(), buffer.height()), style)
    }

    /// A child of `parent`, reading the same buffer.
    pub fn sub(parent: &'p Cursor<'p, B>, style: Style) -> Self {
        Self {
            buffer: parent.buffer,
            walker: Walker::sub(&parent.walker, style),
        }
    }

    /// Validate `bounds` and `style` against `buffer`, then build a root
    /// cursor.
    pub fn checked_root(buffer: &'p B, bounds: Bounds, style: Style) -> Result<Self, WalkError> {
        let config = crate::WalkConfig::for_buffer(buffer, style).with_bounds(bounds);
        Ok(Self {
            buffer,
            walker: Walker::checked_root(&config)?,
        })
    }

    /// Check that `style` fits under `parent`, then build the child.
    pub fn checked_sub(parent: &'p Cursor<'p, B>, style: Style) -> Result<Self, WalkError> {
        Ok(Self {
            buffer: parent.buffer,
            walker: Walker::checked_sub(&parent.walker, style)?,
        })
    }

    /// The pixel under the cursor.
    pub fn get(&self) -> &'p B::Pixel {
        self.buffer.pixel_at(self.walker.offset())
    }

    /// The underlying walker.
    pub fn walker(&self) -> &Walker<'p> {
        &self.walker
    }

    /// The buffer being walked.
    pub fn buffer(&self) -> &'p B {
        self.buffer
    }

    /// See [`Walker::step_forward`].
    pub fn step_forward(&mut self) {
        self.walker.step_forward();
    }

    /// See [`Walker::step_backward`].
    pub fn step_backward(&mut self) {
        self.walker.step_backward();
    }

    /// See [`Walker::try_step_forward`].
    pub fn try_step_forward(&mut self) -> Result<(), WalkError> {
        self.walker.try_step_forward()
    }

    /// See [`Walker::try_step_backward`].
    pub fn try_step_backward(&mut self) -> Result<(), WalkError> {
        self.walker.try_step_backward()
    }

    /// See [`Walker::is_terminal`].
    pub fn is_terminal(&self) -> bool {
        self.walker.is_terminal()
    }

    /// See [`Walker::index`].
    pub fn index(&self) -> usize {
        self.walker.index()
    }

    /// See [`Walker::reset`].
    pub fn reset(&mut self) {
        self.walker.reset();
    }

    /// Every pixel from the current position to the terminal one.
    pub fn pixels(&self) -> impl Iterator<Item = &'p B::Pixel> + 'p {
        let buffer = self.buffer;
        self.walker
            .into_offsets()
            .map(move |offset| buffer.pixel_at(offset))
    }
}

impl<B: PixelBuffer> Clone for Cursor<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: PixelBuffer> Copy for Cursor<'_, B> {}

impl<B: PixelBuffer> Deref for Cursor<'_, B> {
    type Target = B::Pixel;

    fn deref(&self) -> &B::Pixel {
        self.get()
    }
}

impl<B: PixelBuffer> PartialEq for Cursor<'_, B> {
    fn eq(&self, other: &Self) -> bool {
        self.walker == other.walker
    }
}

impl<B: PixelBuffer> fmt::Debug for Cursor<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("walker", &self.walker)
            .finish_non_exhaustive()
    }
}

/// A walker bound to an exclusively borrowed buffer.
///
/// # Examples
///
/// ```
/// use rove_core::{Bounds, Raster};
/// use rove_cursor::{CursorMut, Style};
///
/// let mut raster = Raster::new(3, 3, 0u8);
/// CursorMut::root(&mut raster, Bounds::new(1, 0, 1, 2), Style::LINEAR).for_each_mut(|p| *p = 9);
/// assert_eq!(raster.as_slice(), &[0, 0, 0, 9, 9, 9, 0, 0, 0]);
/// ```
pub struct CursorMut<'a, 'p, B: PixelBufferMut> {
    buffer: &'a mut B,
    walker: Walker<'p>,
}

impl<'a, 'p, B: PixelBufferMut> CursorMut<'a, 'p, B> {
    /// A root cursor over `bounds` of `buffer`.
    pub fn root(buffer: &'a mut B, bounds: Bounds, style: Style) -> Self {
        let walker = Walker::root(buffer.width(), bounds, style);
        Self { buffer, walker }
    }

    /// A child of `parent` writing into `buffer`.
    ///
    /// `parent` must have been built for a buffer of the same width.
    pub fn sub(buffer: &'a mut B, parent: &'p Walker<'p>, style: Style) -> Self {
        Self {
            buffer,
            walker: Walker::sub(parent, style),
        }
    }

    /// The pixel under the cursor.
    pub fn get(&self) -> &B::Pixel {
        self.buffer.pixel_at(self.walker.offset())
    }

    /// The pixel under the cursor, mutably.
    pub fn get_mut(&mut self) -> &mut B::Pixel {
        let offset = self.walker.offset();
        self.buffer.pixel_at_mut(offset)
    }

    /// The underlying walker.
    pub fn walker(&self) -> &Walker<'p> {
        &self.walker
    }

    /// See [`Walker::step_forward`].
    pub fn step_forward(&mut self) {
        self.walker.step_forward();
    }

    /// See [`Walker::step_backward`].
    pub fn step_backward(&mut self) {
        self.walker.step_backward();
    }

    /// See [`Walker::try_step_forward`].
    pub fn try_step_forward(&mut self) -> Result<(), WalkError> {
        self.walker.try_step_forward()
    }

    /// See [`Walker::try_step_backward`].
    pub fn try_step_backward(&mut self) -> Result<(), WalkError> {
        self.walker.try_step_backward()
    }

    /// See [`Walker::is_terminal`].
    pub fn is_terminal(&self) -> bool {
        self.walker.is_terminal()
    }

    /// See [`Walker::index`].
    pub fn index(&self) -> usize {
        self.walker.index()
    }

    /// See [`Walker::reset`].
    pub fn reset(&mut self) {
        self.walker.reset();
    }

    /// Apply `f` to every pixel from the current position to the
    /// terminal one.
    pub fn for_each_mut(self, mut f: impl FnMut(&mut B::Pixel)) {
        let Self { buffer, walker } = self;
        for offset in walker.into_offsets() {
            f(buffer.pixel_at_mut(offset));
        }
    }
}

impl<B: PixelBufferMut> Deref for CursorMut<'_, '_, B> {
    type Target = B::Pixel;

    fn deref(&self) -> &B::Pixel {
        self.get()
    }
}

impl<B: PixelBufferMut> DerefMut for CursorMut<'_, '_, B> {
    fn deref_mut(&mut self) -> &mut B::Pixel {
        self.get_mut()
    }
}

impl<B: PixelBufferMut> fmt::Debug for CursorMut<'_, '_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("walker", &self.walker)
            .finish_non_exhaustive()
    }
}
