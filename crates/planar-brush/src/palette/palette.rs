//! Attribute register palette and its RGB appearance.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;

/// Number of palette entries addressable by a 4-bit pixel.
pub const PALETTE_SIZE: usize = 16;

/// Register bits of the primary (2/3 intensity) components.
const PRIMARY_BLUE: u8 = 0x01;
const PRIMARY_GREEN: u8 = 0x02;
const PRIMARY_RED: u8 = 0x04;
/// Register bits of the secondary (1/3 intensity) components.
const SECONDARY_BLUE: u8 = 0x08;
const SECONDARY_GREEN: u8 = 0x10;
const SECONDARY_RED: u8 = 0x20;

/// Dark grey: all three secondary components.
const DARK_GREY: u8 = SECONDARY_RED | SECONDARY_GREEN | SECONDARY_BLUE;

/// Power-on EGA attribute registers (index 6 is brown).
const STANDARD_REGISTERS: [u8; PALETTE_SIZE] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x14, 0x07, 0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F,
];

/// Palette layout loaded into the attribute registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    /// Strictly additive layout matching how the brush planes combine:
    /// each plane bit adds its primary, the intensity bit adds the matching
    /// secondaries, and intensity alone is dark grey.
    #[default]
    Additive,
    /// The power-on layout, with brown at index 6.
    Standard,
}

impl PaletteKind {
    pub const fn name(self) -> &'static str {
        match self {
            PaletteKind::Additive => "additive",
            PaletteKind::Standard => "standard",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("additive") => Ok(PaletteKind::Additive),
            s if s.eq_ignore_ascii_case("standard") => Ok(PaletteKind::Standard),
            other => Err(format!(
                "unknown palette '{other}' (expected 'additive' or 'standard')"
            )),
        }
    }
}

/// The 16 attribute register values and the colors they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    registers: [u8; PALETTE_SIZE],
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Build the palette for a layout.
    ///
    /// ```
    /// use planar_brush::{Palette, PaletteKind, Rgb};
    ///
    /// let palette = Palette::new(PaletteKind::Additive);
    /// assert_eq!(palette.color(0x0C), Rgb::new(0xFF, 0x00, 0x00));
    /// assert_eq!(palette.color(0x06), Rgb::new(0xAA, 0xAA, 0x00));
    ///
    /// let standard = Palette::new(PaletteKind::Standard);
    /// assert_eq!(standard.color(0x0C), Rgb::new(0xFF, 0x55, 0x55));
    /// ```
    pub fn new(kind: PaletteKind) -> Self {
        let registers = match kind {
            PaletteKind::Additive => additive_registers(),
            PaletteKind::Standard => STANDARD_REGISTERS,
        };
        let colors = registers.map(register_to_rgb);
        Self {
            kind,
            registers,
            colors,
        }
    }

    #[inline]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// The 6-bit attribute register value for a 4-bit index.
    ///
    /// Only the low four bits of `index` are used.
    #[inline]
    pub fn register(&self, index: u8) -> u8 {
        self.registers[usize::from(index & 0x0F)]
    }

    /// The displayed color for a 4-bit index.
    ///
    /// Only the low four bits of `index` are used.
    #[inline]
    pub fn color(&self, index: u8) -> Rgb {
        self.colors[usize::from(index & 0x0F)]
    }

    /// All 16 displayed colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Flattened `[R, G, B, R, G, B, ...]` table, e.g. for a PNG PLTE chunk.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteKind::default())
    }
}

/// Registers for the additive layout.
fn additive_registers() -> [u8; PALETTE_SIZE] {
    let mut registers = [0u8; PALETTE_SIZE];
    for (c, register) in registers.iter_mut().enumerate() {
        let c = c as u8;
        if c == 0x08 {
            *register = DARK_GREY;
            continue;
        }
        let bright = c & 0x08 != 0;
        if c & 0x01 != 0 {
            *register |= if bright {
                PRIMARY_BLUE | SECONDARY_BLUE
            } else {
                PRIMARY_BLUE
            };
        }
        if c & 0x02 != 0 {
            *register |= if bright {
                PRIMARY_GREEN | SECONDARY_GREEN
            } else {
                PRIMARY_GREEN
            };
        }
        if c & 0x04 != 0 {
            *register |= if bright {
                PRIMARY_RED | SECONDARY_RED
            } else {
                PRIMARY_RED
            };
        }
    }
    registers
}

/// Expand a 6-bit `rgbRGB` register value to 8-bit RGB.
fn register_to_rgb(register: u8) -> Rgb {
    let channel = |primary: u8, secondary: u8| {
        let mut level = 0u8;
        if register & primary != 0 {
            level += 0xAA;
        }
        if register & secondary != 0 {
            level += 0x55;
        }
        level
    };
    Rgb::new(
        channel(PRIMARY_RED, SECONDARY_RED),
        channel(PRIMARY_GREEN, SECONDARY_GREEN),
        channel(PRIMARY_BLUE, SECONDARY_BLUE),
    )
}
