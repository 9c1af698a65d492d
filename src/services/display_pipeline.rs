use planar_brush::{Compositor, Palette, PixelSource, PlanarFramebuffer, Rgb, Surface};

use crate::error::RenderError;
use crate::ingest::{GammaTable, RgbImage};
use crate::models::{AppConfig, DisplaySpec};
use crate::rendering;

/// Pipeline that puts a decoded image on the display:
/// gamma → size check → centering → brush compositing
#[derive(Debug, Clone)]
pub struct DisplayPipeline {
    gamma: GammaTable,
    palette: Palette,
    display: DisplaySpec,
    source: PixelSource,
}

impl DisplayPipeline {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gamma: GammaTable::from_option(config.gamma),
            palette: Palette::new(config.palette_kind()),
            display: config.display_spec(),
            source: config.pixel_source(),
        }
    }

    #[inline]
    pub fn display(&self) -> DisplaySpec {
        self.display
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn pixel_source(&self) -> PixelSource {
        self.source
    }

    #[inline]
    pub fn gamma(&self) -> &GammaTable {
        &self.gamma
    }

    /// Render `image` into a fresh framebuffer the size of the display
    pub fn render(&self, image: &RgbImage) -> Result<PlanarFramebuffer, RenderError> {
        let mut framebuffer =
            PlanarFramebuffer::new(self.display.width as usize, self.display.height as usize);
        self.plot(image, &mut framebuffer)?;
        Ok(framebuffer)
    }

    /// Plot `image` centered on `surface`, which must cover the display.
    ///
    /// Returns the number of pixels committed.
    pub fn plot<S: Surface>(&self, image: &RgbImage, surface: S) -> Result<usize, RenderError> {
        self.display.validate_image(image.width(), image.height())?;
        let origin = self.display.centered_origin(image.width(), image.height());

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            x = origin.0,
            y = origin.1,
            source = ?self.source,
            "Plotting image"
        );

        let mut compositor = Compositor::new(surface).pixel_source(self.source);
        let gamma = &self.gamma;
        let plotted = compositor.plot_pixels(
            origin,
            image.width() as usize,
            image.pixels().map(|pixel| gamma.correct(Rgb::from(pixel.0))),
        );

        tracing::info!(
            pixels = plotted,
            display_width = self.display.width,
            display_height = self.display.height,
            "Rendered image"
        );
        Ok(plotted)
    }

    /// Encode a framebuffer as a PNG using this pipeline's palette
    pub fn preview_png(&self, framebuffer: &PlanarFramebuffer) -> Result<Vec<u8>, RenderError> {
        rendering::encode_preview(framebuffer, &self.palette)
    }
}

impl Default for DisplayPipeline {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
