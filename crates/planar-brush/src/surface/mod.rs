//! Pixel sinks the compositor writes into.
//!
//! The compositor needs exactly one capability from a display: store a
//! 4-bit pixel value at `(x, y)`. [`Surface`] captures that, so the brush
//! and compositor logic carries no hardware dependency.
//! [`PlanarFramebuffer`] is the in-memory four-plane backing store.

mod planar;

pub use planar::{pixel_mask, PlanarFramebuffer, BIT_MASK_REGISTER, PIXEL_MASKS};

/// Something that can store a 4-bit pixel value.
///
/// Coordinates must lie inside the surface; implementations may panic
/// otherwise.
pub trait Surface {
    /// Store the low four bits of `pixel` at `(x, y)`.
    fn commit(&mut self, x: usize, y: usize, pixel: u8);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn commit(&mut self, x: usize, y: usize, pixel: u8) {
        (**self).commit(x, y, pixel);
    }
}
