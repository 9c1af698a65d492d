//! Dither-brush builder.
//!
//! Maps one RGB triple to a 4x4 ordered-dither tile spread over the four
//! IRGB bit planes, plus the closest solid palette index.
//!
//! The planes combine additively: a cell lit in Blue and Green shows cyan,
//! lit in all three chroma planes shows white, and the Intensity plane
//! selects the bright half of the palette. Colors are split on their value
//! `v = max(r, g, b)`:
//!
//! - `v <= 127`: the chroma planes are dithered straight from the channel
//!   values (0..=127 scaled onto the 16 levels) and Intensity stays dark.
//! - `v > 127`: every channel is taken as a fraction of `v`, so a saturated
//!   color keeps its other planes dark, and Intensity fills in from a
//!   complemented pattern as `v` approaches 255.

mod patterns;

pub use patterns::{tile_cells, BRIGHT_PATTERNS, DIM_PATTERNS, LEVELS};

use crate::color::Rgb;

/// Values above this take the bright branch.
const MIDPOINT: u8 = 127;

/// Best-match palette bit for the intensity plane.
const INTENSITY_BIT: u8 = 0x08;

/// One of the four bit planes, numbered as the palette index bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    Blue = 0,
    Green = 1,
    Red = 2,
    Intensity = 3,
}

impl Plane {
    /// All planes in index order.
    pub const ALL: [Plane; 4] = [Plane::Blue, Plane::Green, Plane::Red, Plane::Intensity];

    /// Plane number, also the bit position in a 4-bit pixel value.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// This plane's bit in a 4-bit pixel value.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Plane::Blue => "blue",
            Plane::Green => "green",
            Plane::Red => "red",
            Plane::Intensity => "intensity",
        }
    }
}

/// A 4x4 dither tile over the four IRGB planes.
///
/// Each plane is a pattern in the layout described in [`DIM_PATTERNS`]:
/// byte `n` of the mask is tile row `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Brush {
    planes: [u32; 4],
}

impl Brush {
    /// Wrap raw plane masks, indexed Blue, Green, Red, Intensity.
    #[inline]
    pub const fn from_planes(planes: [u32; 4]) -> Self {
        Self { planes }
    }

    /// Raw plane masks, indexed Blue, Green, Red, Intensity.
    #[inline]
    pub const fn planes(&self) -> [u32; 4] {
        self.planes
    }

    /// The mask of one plane.
    #[inline]
    pub const fn plane(&self, plane: Plane) -> u32 {
        self.planes[plane.index()]
    }

    /// One row byte of a plane; `row` wraps modulo 4.
    #[inline]
    pub const fn row(&self, plane: Plane, row: usize) -> u8 {
        (self.planes[plane.index()] >> ((row & 3) * 8)) as u8
    }

    /// Whether the tile cell covering pixel `(x, y)` is lit in `plane`.
    #[inline]
    pub const fn bit(&self, plane: Plane, x: usize, y: usize) -> bool {
        (self.row(plane, y) >> (x & 3)) & 1 != 0
    }

    /// Composite 4-bit values of the whole tile, indexed `[row][column]`.
    pub fn tile(&self) -> [[u8; 4]; 4] {
        let mut tile = [[0u8; 4]; 4];
        for (y, row) in tile.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = crate::compositor::composite(self, x, y);
            }
        }
        tile
    }
}

/// Build the dither brush for `color` and its best-match palette index.
///
/// Pure and total: every triple yields a brush and an index in `0..=15`.
///
/// # Example
///
/// ```
/// use planar_brush::{build_brush, Plane, Rgb};
///
/// let (brush, index) = build_brush(Rgb::new(255, 255, 255));
/// assert_eq!(brush.plane(Plane::Intensity), 0xFFFF_FFFF);
/// assert_eq!(brush.plane(Plane::Red), 0xFFFF_FFFF);
/// assert_eq!(index, 0x0F);
///
/// let (brush, index) = build_brush(Rgb::new(0, 0, 0));
/// assert_eq!(brush.planes(), [0; 4]);
/// assert_eq!(index, 0x00);
/// ```
pub fn build_brush(color: Rgb) -> (Brush, u8) {
    let v = color.value();

    if v > MIDPOINT {
        let level = |channel: u8| {
            // channel <= v, so the quotient stays below 16
            usize::from((u16::from(channel) << 4) / (u16::from(v) + 8))
        };
        let planes = [
            BRIGHT_PATTERNS[level(color.b)],
            BRIGHT_PATTERNS[level(color.g)],
            BRIGHT_PATTERNS[level(color.r)],
            !DIM_PATTERNS[usize::from((!v >> 3) & 0x0F)],
        ];
        let index = INTENSITY_BIT
            | ((color.r & 0x80) >> 5)
            | ((color.g & 0x80) >> 6)
            | ((color.b & 0x80) >> 7);
        (Brush { planes }, index)
    } else {
        let planes = [
            DIM_PATTERNS[usize::from(color.b >> 3)],
            DIM_PATTERNS[usize::from(color.g >> 3)],
            DIM_PATTERNS[usize::from(color.r >> 3)],
            0,
        ];
        let mut index =
            ((color.r & 0x40) >> 4) | ((color.g & 0x40) >> 5) | ((color.b & 0x40) >> 6);
        // Dark grey is otherwise unreachable from the dim half.
        if index == 0 && color.r > 31 && color.g > 31 && color.b > 31 {
            index = INTENSITY_BIT;
        }
        (Brush { planes }, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white_boundaries() {
        let (brush, index) = build_brush(Rgb::BLACK);
        assert_eq!(brush.planes(), [0, 0, 0, 0]);
        assert_eq!(index, 0x00);

        let (brush, index) = build_brush(Rgb::WHITE);
        assert_eq!(brush.planes(), [0xFFFF_FFFF; 4]);
        assert_eq!(index, 0x0F);
    }

    #[test]
    fn test_dark_red_example() {
        let (brush, index) = build_brush(Rgb::new(200, 50, 50));

        // !200 = 55, 55 >> 3 = 6
        assert_eq!(brush.plane(Plane::Intensity), !DIM_PATTERNS[6]);
        // (200 << 4) / 208 = 15, (50 << 4) / 208 = 3
        assert_eq!(brush.plane(Plane::Red), BRIGHT_PATTERNS[15]);
        assert_eq!(brush.plane(Plane::Green), BRIGHT_PATTERNS[3]);
        assert_eq!(brush.plane(Plane::Blue), BRIGHT_PATTERNS[3]);
        assert_eq!(index, 0x08 | 0x04);
    }

    #[test]
    fn test_branch_threshold() {
        let (dim, dim_index) = build_brush(Rgb::new(127, 127, 127));
        assert_eq!(dim.plane(Plane::Intensity), 0);
        assert_eq!(dim.plane(Plane::Red), DIM_PATTERNS[15]);
        assert_eq!(dim_index, 0x07);

        let (bright, bright_index) = build_brush(Rgb::new(128, 128, 128));
        assert_eq!(bright.plane(Plane::Intensity), !DIM_PATTERNS[15]);
        assert_ne!(bright.plane(Plane::Intensity), 0);
        // (128 << 4) / 136 = 15
        assert_eq!(bright.plane(Plane::Red), BRIGHT_PATTERNS[15]);
        assert_eq!(bright_index, 0x0F);
    }

    #[test]
    fn test_pure_primaries_light_one_plane() {
        let (brush, index) = build_brush(Rgb::new(0, 0, 255));
        assert_eq!(brush.plane(Plane::Blue), 0xFFFF_FFFF);
        assert_eq!(brush.plane(Plane::Green), 0);
        assert_eq!(brush.plane(Plane::Red), 0);
        assert_eq!(index, 0x09);

        let (brush, index) = build_brush(Rgb::new(0, 100, 0));
        assert_eq!(brush.plane(Plane::Green), DIM_PATTERNS[12]);
        assert_eq!(brush.plane(Plane::Red), 0);
        assert_eq!(brush.plane(Plane::Blue), 0);
        assert_eq!(brush.plane(Plane::Intensity), 0);
        assert_eq!(index, 0x02);
    }

    #[test]
    fn test_dim_grey_falls_back_to_dark_grey() {
        // All channels above 31 but below the 64 threshold
        let (_, index) = build_brush(Rgb::new(40, 50, 60));
        assert_eq!(index, 0x08);

        // One channel at 31 keeps plain black
        let (_, index) = build_brush(Rgb::new(31, 50, 60));
        assert_eq!(index, 0x00);

        // A channel at 64 yields a real color bit instead
        let (_, index) = build_brush(Rgb::new(64, 50, 60));
        assert_eq!(index, 0x04);
    }

    #[test]
    fn test_row_and_bit_addressing() {
        // Row 0 = 0x0F, row 1 = 0x00, row 2 = 0x01, row 3 = 0x80
        let brush = Brush::from_planes([0x8001_000F, 0, 0, 0]);
        assert_eq!(brush.row(Plane::Blue, 0), 0x0F);
        assert_eq!(brush.row(Plane::Blue, 2), 0x01);
        assert_eq!(brush.row(Plane::Blue, 4), 0x0F);

        assert!(brush.bit(Plane::Blue, 3, 0));
        assert!(!brush.bit(Plane::Blue, 0, 1));
        assert!(brush.bit(Plane::Blue, 0, 2));
        assert!(!brush.bit(Plane::Blue, 1, 2));
        assert!(brush.bit(Plane::Blue, 4, 2), "x wraps modulo 4");
        // Bit 7 of row 3 is only reachable through the high nibble copy
        assert!(!brush.bit(Plane::Blue, 3, 3));
    }

    #[test]
    fn test_plane_bits_match_palette_layout() {
        assert_eq!(Plane::Blue.mask(), 0x01);
        assert_eq!(Plane::Green.mask(), 0x02);
        assert_eq!(Plane::Red.mask(), 0x04);
        assert_eq!(Plane::Intensity.mask(), 0x08);
        for (i, plane) in Plane::ALL.iter().enumerate() {
            assert_eq!(plane.index(), i);
        }
    }

    #[test]
    fn test_tile_of_white_is_solid() {
        let (brush, _) = build_brush(Rgb::WHITE);
        assert_eq!(brush.tile(), [[0x0F; 4]; 4]);
    }
}
