//! RGB input color type
//!
//! The dithering core consumes plain 8-bit-per-channel triples. No color
//! space conversion happens here; gamma shaping belongs to the caller.

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;
