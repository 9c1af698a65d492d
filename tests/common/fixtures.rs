//! Test fixtures and constants.

use planar_brush::Rgb;
use std::path::{Path, PathBuf};

/// Colors with well-known brushes
pub mod colors {
    use planar_brush::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BRIGHT_RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb::new(200, 50, 50);
    pub const DIM_CYAN: Rgb = Rgb::new(0, 100, 100);
    pub const MID_GREY: Rgb = Rgb::new(128, 128, 128);
}

/// Encode pixels as a binary PPM with maxval 255
pub fn ppm_bytes(width: u32, height: u32, pixels: &[Rgb]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "fixture size mismatch");
    let mut data = format!("P6\n{width} {height}\n255\n").into_bytes();
    for pixel in pixels {
        data.extend_from_slice(&pixel.to_bytes());
    }
    data
}

/// PPM of one flat color
pub fn flat_ppm(width: u32, height: u32, color: Rgb) -> Vec<u8> {
    ppm_bytes(width, height, &vec![color; (width * height) as usize])
}

/// PPM with red rising left to right and blue rising top to bottom
pub fn gradient_pixels(width: u32, height: u32) -> Vec<Rgb> {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1).max(1)) as u8;
            let b = (y * 255 / (height - 1).max(1)) as u8;
            pixels.push(Rgb::new(r, 64, b));
        }
    }
    pixels
}

/// Write `yaml` to `vgadither.yaml` in `dir`
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("vgadither.yaml");
    std::fs::write(&path, yaml).expect("write config fixture");
    path
}
