use planar_brush::{Palette, PlanarFramebuffer};
use std::io::Cursor;

use crate::error::RenderError;

/// Bits per pixel of the indexed preview
const PREVIEW_DEPTH: u8 = 4;

/// Encode the framebuffer as a 4-bit indexed PNG, palette entries taken
/// from `palette`.
///
/// Written with fast settings; see [`encode_preview`] for the
/// recompressed file.
pub fn encode_indexed_png(
    framebuffer: &PlanarFramebuffer,
    palette: &Palette,
) -> Result<Vec<u8>, RenderError> {
    let width = u32::try_from(framebuffer.width())
        .map_err(|_| RenderError::PngEncode("framebuffer too wide".to_string()))?;
    let height = u32::try_from(framebuffer.height())
        .map_err(|_| RenderError::PngEncode("framebuffer too tall".to_string()))?;
    if width == 0 || height == 0 {
        return Err(RenderError::PngEncode(format!(
            "empty framebuffer {width}x{height}"
        )));
    }

    let indices = framebuffer.to_indices();
    let packed = pack_nbits(&indices, width, PREVIEW_DEPTH);
    let plte = palette.to_rgb_bytes();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode the framebuffer as a PNG preview, recompressed with oxipng.
///
/// oxipng may lower the bit depth or drop unused palette entries. If it
/// fails the fast encoding is returned as is.
pub fn encode_preview(
    framebuffer: &PlanarFramebuffer,
    palette: &Palette,
) -> Result<Vec<u8>, RenderError> {
    let png_bytes = encode_indexed_png(framebuffer, palette)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::warn!(error = %e, "PNG recompression failed, keeping fast encoding");
        png_bytes
    });

    tracing::debug!(
        width = framebuffer.width(),
        height = framebuffer.height(),
        bytes = optimized.len(),
        "Encoded preview PNG"
    );
    Ok(optimized)
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_brush::{PaletteKind, Surface};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_pack_nbits_four_bit() {
        let packed = pack_nbits(&[0x1, 0x2, 0x3, 0x4, 0x5, 0xF, 0x7, 0x8], 4, 4);
        assert_eq!(packed, vec![0x12, 0x34, 0x5F, 0x78]);
    }

    #[test]
    fn test_pack_nbits_odd_width_pads_row() {
        // Each 3-pixel row ends in a half-filled byte
        let packed = pack_nbits(&[0xA, 0xB, 0xC, 0x1, 0x2, 0x3], 3, 4);
        assert_eq!(packed, vec![0xAB, 0xC0, 0x12, 0x30]);
    }

    #[test]
    fn test_pack_nbits_masks_high_bits() {
        let packed = pack_nbits(&[0xFA, 0x1B], 2, 4);
        assert_eq!(packed, vec![0xAB]);
    }

    #[test]
    fn test_indexed_png_header() {
        let mut framebuffer = PlanarFramebuffer::new(5, 3);
        framebuffer.commit(4, 2, 0x0C);
        let palette = Palette::new(PaletteKind::Additive);

        let bytes = encode_indexed_png(&framebuffer, &palette).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (5, 3));
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Four);
        assert_eq!(
            info.palette.as_deref(),
            Some(palette.to_rgb_bytes().as_slice())
        );

        let mut data = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut data).unwrap();
        // Rows are 3 bytes; the committed pixel is the high nibble of the last byte
        assert_eq!(&data[6..9], &[0x00, 0x00, 0xC0]);
    }

    #[test]
    fn test_preview_is_valid_png() {
        let mut framebuffer = PlanarFramebuffer::new(16, 8);
        for x in 0..16 {
            framebuffer.commit(x, x % 8, x as u8);
        }
        let palette = Palette::new(PaletteKind::Standard);

        let bytes = encode_preview(&framebuffer, &palette).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (16, 8));
    }

    #[test]
    fn test_rejects_empty_framebuffer() {
        let framebuffer = PlanarFramebuffer::new(0, 0);
        let palette = Palette::default();
        assert!(matches!(
            encode_indexed_png(&framebuffer, &palette),
            Err(RenderError::PngEncode(_))
        ));
    }
}
