//! Image input: PNM decoding and gamma correction.

pub mod gamma;
pub mod ppm;

pub use gamma::GammaTable;
pub use ppm::{decode_ppm, open_ppm, read_ppm};

/// Decoded 8-bit RGB image
pub use image::RgbImage;
