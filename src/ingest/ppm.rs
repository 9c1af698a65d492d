//! Netpbm input.
//!
//! Any PNM variant the `image` crate reads is accepted (binary or ASCII,
//! 8- or 16-bit samples, any maxval); everything is converted to 8-bit RGB.

use image::codecs::pnm::PnmDecoder;
use image::{DynamicImage, ImageDecoder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::RgbImage;
use crate::error::{DecodeError, RenderError};

/// Decode the image at `path`, or standard input when `path` is `-`
pub fn open_ppm(path: &Path) -> Result<RgbImage, RenderError> {
    if path == Path::new("-") {
        return Ok(read_ppm(std::io::stdin().lock())?);
    }
    let file = File::open(path)?;
    Ok(read_ppm(BufReader::new(file))?)
}

/// Decode a PNM stream to 8-bit RGB
pub fn read_ppm<R: BufRead>(reader: R) -> Result<RgbImage, DecodeError> {
    let decoder = PnmDecoder::new(reader)?;
    let (width, height) = decoder.dimensions();
    let color = decoder.color_type();
    let image = DynamicImage::from_decoder(decoder)?.into_rgb8();

    tracing::debug!(width, height, color = ?color, "Decoded PNM");
    Ok(image)
}

/// Decode a PNM held in memory
pub fn decode_ppm(data: &[u8]) -> Result<RgbImage, DecodeError> {
    read_ppm(data)
}
