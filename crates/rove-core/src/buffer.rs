//! Buffer provider traits and an in-memory raster.

use crate::error::WalkError;

/// Read access to row-major pixel storage.
///
/// Offsets follow `offset = row * width + col`. Cursors never allocate,
/// free, or resize a buffer; they only resolve offsets into it.
pub trait PixelBuffer {
    /// Stored pixel type.
    type Pixel;

    /// Container width in pixels.
    fn width(&self) -> usize;

    /// Container height in pixels.
    fn height(&self) -> usize;

    /// Pixel at a row-major offset.
    ///
    /// Panics if `offset >= width * height`.
    fn pixel_at(&self, offset: usize) -> &Self::Pixel;

    /// Total pixel count.
    fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// `true` if the container holds no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access to row-major pixel storage.
pub trait PixelBufferMut: PixelBuffer {
    /// Mutable pixel at a row-major offset.
    ///
    /// Panics if `offset >= width * height`.
    fn pixel_at_mut(&mut self, offset: usize) -> &mut Self::Pixel;
}

/// A contiguous `width x height` raster backed by a `Vec`.
///
/// # Examples
///
/// ```
/// use rove_core::{PixelBuffer, Raster};
///
/// let raster = Raster::new(4, 3, 0u8);
/// assert_eq!(raster.len(), 12);
/// assert_eq!(*raster.pixel_at(5), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster<P> {
    width: usize,
    height: usize,
    data: Vec<P>,
}

impl<P: Clone> Raster<P> {
    /// A raster with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: P) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }
}

impl<P> Raster<P> {
    /// Wrap existing row-major storage.
    ///
    /// Returns `Err(WalkError::BufferSizeMismatch)` if `data.len()` is not
    /// `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<P>) -> Result<Self, WalkError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(WalkError::BufferSizeMismatch {
                width,
                height,
                expected,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A raster whose pixels are produced from their offsets.
    pub fn from_fn(width: usize, height: usize, f: impl FnMut(usize) -> P) -> Self {
        Self {
            width,
            height,
            data: (0..width * height).map(f).collect(),
        }
    }

    /// Backing storage in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Mutable backing storage in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Release the backing storage.
    pub fn into_vec(self) -> Vec<P> {
        self.data
    }
}

impl<P> PixelBuffer for Raster<P> {
    type Pixel = P;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel_at(&self, offset: usize) -> &P {
        &self.data[offset]
    }
}

impl<P> PixelBufferMut for Raster<P> {
    fn pixel_at_mut(&mut self, offset: usize) -> &mut P {
        &mut self.data[offset]
    }
}
