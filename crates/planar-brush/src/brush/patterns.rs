//! Fixed 4x4 ordered-dither patterns.
//!
//! Each pattern is an 8x4 bit block packed into a `u32`: byte `n`
//! (little-endian) is tile row `n`, and every byte repeats its 4-bit row in
//! both nibbles so one byte covers 8 horizontal pixels. Pattern `i` lights
//! exactly `i` of the 16 tile cells, and every pattern is a bit-superset of
//! the one before it.

/// Number of density levels in a pattern table.
pub const LEVELS: usize = 16;

/// Patterns for the dim half of the range and the intensity plane.
///
/// The last entry leaves one cell dark so that its complement is never
/// empty.
pub static DIM_PATTERNS: [u32; LEVELS] = [
    0x0000_0000,
    0x8800_0000,
    0x8800_2200,
    0x8800_AA00,
    0xAA00_AA00,
    0xAA44_AA00,
    0xAA44_AA11,
    0xAA44_AA55,
    0xAA55_AA55,
    0xAADD_AA55,
    0xAADD_AA77,
    0xAADD_AAFF,
    0xAAFF_AAFF,
    0xEEFF_AAFF,
    0xEEFF_BBFF,
    0xEEFF_FFFF,
];

/// Patterns for the chrominance planes of bright colors.
///
/// Identical to [`DIM_PATTERNS`] except that the top level is solid.
pub static BRIGHT_PATTERNS: [u32; LEVELS] = [
    0x0000_0000,
    0x8800_0000,
    0x8800_2200,
    0x8800_AA00,
    0xAA00_AA00,
    0xAA44_AA00,
    0xAA44_AA11,
    0xAA44_AA55,
    0xAA55_AA55,
    0xAADD_AA55,
    0xAADD_AA77,
    0xAADD_AAFF,
    0xAAFF_AAFF,
    0xEEFF_AAFF,
    0xEEFF_BBFF,
    0xFFFF_FFFF,
];

/// Number of lit cells in the 4x4 tile described by `pattern`.
///
/// Counts the low nibble of each row byte; the high nibble is its copy.
#[inline]
pub fn tile_cells(pattern: u32) -> u32 {
    (pattern & 0x0F0F_0F0F).count_ones()
}
