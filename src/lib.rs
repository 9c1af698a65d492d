//! vgadither - ordered dithering onto 16-color planar displays
//!
//! Decodes PPM images, maps every pixel through a 4x4 IRGB dither brush
//! and writes the result into an EGA/VGA style planar framebuffer.
//! This library exposes modules for integration testing.

pub mod error;
pub mod ingest;
pub mod models;
pub mod rendering;
pub mod services;
