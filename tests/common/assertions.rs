//! Assertion helpers for tests.

use planar_brush::Rgb;
use pretty_assertions::assert_eq;
use std::io::Cursor;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A PNG decoded to 8-bit RGB
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl DecodedPng {
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Decode a PNG of any color type into RGB pixels
pub fn decode_png(bytes: &[u8]) -> DecodedPng {
    assert_png(bytes);

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).expect("Failed to decode PNG");
    let data = &buf[..frame.buffer_size()];

    let pixels = match frame.color_type {
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Rgb::new(p[0], p[0], p[0]))
            .collect(),
        other => panic!("Unexpected decoded color type {other:?}"),
    };

    DecodedPng {
        width: frame.width,
        height: frame.height,
        pixels,
    }
}

/// Assert PNG dimensions
pub fn assert_png_size(bytes: &[u8], width: u32, height: u32) {
    let decoded = decode_png(bytes);
    assert_eq!(
        (decoded.width, decoded.height),
        (width, height),
        "Unexpected PNG dimensions"
    );
}
