//! Pixel compositor.
//!
//! For each target pixel the compositor builds the brush for its color,
//! takes the one tile cell covering `(x mod 4, y mod 4)` from every plane
//! and commits the assembled 4-bit value to a [`Surface`]. Because every
//! pixel of a flat area samples a different cell of the same tile, the
//! area shows the brush pattern.

use crate::brush::{build_brush, Brush, Plane};
use crate::color::Rgb;
use crate::surface::Surface;

/// Which value the compositor writes for a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelSource {
    /// The brush cell at the pixel's tile position.
    #[default]
    Dithered,
    /// The best-match solid palette index, no dithering.
    BestMatch,
}

/// Assemble the 4-bit pixel at `(x, y)` from the brush planes.
///
/// ```
/// use planar_brush::{build_brush, composite, Rgb};
///
/// let (brush, _) = build_brush(Rgb::new(0, 255, 255));
/// assert_eq!(composite(&brush, 17, 5), 0x0B);
/// ```
#[inline]
pub fn composite(brush: &Brush, x: usize, y: usize) -> u8 {
    Plane::ALL
        .iter()
        .map(|&plane| u8::from(brush.bit(plane, x, y)) << plane.index())
        .fold(0, |pixel, bit| pixel | bit)
}

/// Writes colors into a [`Surface`] one pixel at a time.
///
/// The compositor owns its surface (or a `&mut` borrow of one), so there
/// is a single writer for every plane byte.
#[derive(Debug)]
pub struct Compositor<S> {
    surface: S,
    source: PixelSource,
}

impl<S: Surface> Compositor<S> {
    /// Create a compositor writing dithered pixels.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            source: PixelSource::default(),
        }
    }

    /// Choose between dithered and best-match output.
    pub fn pixel_source(mut self, source: PixelSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    pub fn source(&self) -> PixelSource {
        self.source
    }

    /// Plot one pixel.
    ///
    /// `(x, y)` must lie inside the surface. Commits exactly one value.
    pub fn plot(&mut self, x: usize, y: usize, color: Rgb) {
        let (brush, best_match) = build_brush(color);
        let pixel = match self.source {
            PixelSource::Dithered => composite(&brush, x, y),
            PixelSource::BestMatch => best_match,
        };
        self.surface.commit(x, y, pixel);
    }

    /// Plot a row-major stream of `width`-pixel rows with its top-left
    /// corner at `origin`.
    ///
    /// Returns the number of pixels plotted. A short final row is plotted
    /// as far as it goes.
    pub fn plot_pixels<I>(&mut self, origin: (usize, usize), width: usize, pixels: I) -> usize
    where
        I: IntoIterator<Item = Rgb>,
    {
        if width == 0 {
            return 0;
        }
        let (left, top) = origin;
        let mut count = 0;
        for (i, color) in pixels.into_iter().enumerate() {
            self.plot(left + i % width, top + i / width, color);
            count += 1;
        }
        count
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
