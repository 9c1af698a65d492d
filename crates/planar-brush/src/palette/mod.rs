//! The 16-entry IRGB palette.
//!
//! A 4-bit pixel selects one of 16 attribute registers, each holding a
//! 6-bit `rgbRGB` color. This module provides the register values for the
//! supported palette layouts and their 8-bit RGB appearance.

mod palette;

pub use palette::{Palette, PaletteKind, PALETTE_SIZE};
