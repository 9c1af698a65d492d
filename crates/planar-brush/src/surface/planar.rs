//! Four-plane, one-bit-per-pixel backing store.
//!
//! Each plane is a packed bitmap, `stride` bytes per scanline, most
//! significant bit leftmost. Writes follow VGA write mode 2: the pixel
//! value's bit `p` is copied into plane `p` under a single-pixel bit mask,
//! leaving the other seven pixels of the addressed byte untouched.

use super::Surface;
use crate::brush::Plane;

/// Graphics controller index of the bit mask register.
pub const BIT_MASK_REGISTER: u8 = 0x08;

/// Register write words per `x mod 8`: bit mask in the high byte, register
/// index in the low byte.
pub static PIXEL_MASKS: [u16; 8] = [
    0x8008, 0x4008, 0x2008, 0x1008, 0x0808, 0x0408, 0x0208, 0x0108,
];

/// Bit mask selecting pixel `x` within its plane byte.
#[inline]
pub fn pixel_mask(x: usize) -> u8 {
    (PIXEL_MASKS[x & 7] >> 8) as u8
}

/// In-memory planar framebuffer.
///
/// # Example
///
/// ```
/// use planar_brush::{PlanarFramebuffer, Plane, Surface};
///
/// let mut fb = PlanarFramebuffer::new(16, 2);
/// fb.commit(9, 1, 0b1010);
///
/// assert_eq!(fb.pixel(9, 1), 0b1010);
/// assert_eq!(fb.plane(Plane::Green)[fb.offset(9, 1)], 0b0100_0000);
/// assert_eq!(fb.plane(Plane::Blue)[fb.offset(9, 1)], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarFramebuffer {
    width: usize,
    height: usize,
    stride: usize,
    planes: [Vec<u8>; 4],
}

impl PlanarFramebuffer {
    /// Create a framebuffer cleared to index 0.
    pub fn new(width: usize, height: usize) -> Self {
        let stride = width.div_ceil(8);
        let plane = vec![0u8; stride * height];
        Self {
            width,
            height,
            stride,
            planes: [plane.clone(), plane.clone(), plane.clone(), plane],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per scanline in each plane.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of pixel `(x, y)` within each plane.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + (x >> 3)
    }

    /// Raw bytes of one plane.
    #[inline]
    pub fn plane(&self, plane: Plane) -> &[u8] {
        &self.planes[plane.index()]
    }

    /// Read back the 4-bit value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        let offset = self.offset(x, y);
        let mask = pixel_mask(x);
        Plane::ALL
            .iter()
            .filter(|plane| self.planes[plane.index()][offset] & mask != 0)
            .fold(0, |pixel, plane| pixel | plane.mask())
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: u8) {
        for plane in Plane::ALL {
            let fill = if color & plane.mask() != 0 { 0xFF } else { 0x00 };
            self.planes[plane.index()].fill(fill);
        }
    }

    /// One 4-bit value per pixel, row-major.
    pub fn to_indices(&self) -> Vec<u8> {
        let mut indices = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                indices.push(self.pixel(x, y));
            }
        }
        indices
    }
}

impl Surface for PlanarFramebuffer {
    fn commit(&mut self, x: usize, y: usize, pixel: u8) {
        debug_assert!(
            x < self.width && y < self.height,
            "commit ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        let offset = self.offset(x, y);
        let mask = pixel_mask(x);
        for plane in Plane::ALL {
            let byte = &mut self.planes[plane.index()][offset];
            if pixel & plane.mask() != 0 {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }
}
