#![allow(clippy::module_inception)]

//! planar-brush: ordered brush dithering for 16-color planar displays
//!
//! This library turns 8-bit RGB triples into pixels for a display whose
//! 16 colors are selected by four one-bit planes: Blue, Green, Red and
//! Intensity. Planes combine additively, so a color the palette lacks is
//! approximated by a 4x4 ordered-dither tile (a *brush*) spread over the
//! planes.
//!
//! # Quick Start
//!
//! ```
//! use planar_brush::{Compositor, PlanarFramebuffer, Rgb};
//!
//! let mut compositor = Compositor::new(PlanarFramebuffer::new(640, 480));
//! compositor.plot(10, 20, Rgb::new(255, 128, 0));
//!
//! let framebuffer = compositor.into_surface();
//! assert!(framebuffer.pixel(10, 20) < 16);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Rgb --build_brush()--> Brush { blue, green, red, intensity } + best match
//!                          |
//!              composite(x mod 4, y mod 4)
//!                          |
//!                    4-bit pixel value
//!                          |
//!                  Surface::commit(x, y)
//! ```
//!
//! # Modules
//!
//! - [`brush`]: the brush builder and its pattern tables
//! - [`compositor`]: per-pixel cell selection and commit
//! - [`surface`]: the [`Surface`] trait and the in-memory
//!   [`PlanarFramebuffer`]
//! - [`palette`]: register values and RGB appearance of the 16 colors
//! - [`color`]: the [`Rgb`] input type
//!
//! Everything here is pure or operates on an owned surface; the pattern
//! tables are immutable statics, so brushes can be built from any thread.

pub mod brush;
pub mod color;
pub mod compositor;
pub mod palette;
pub mod surface;


pub use brush::{build_brush, tile_cells, Brush, Plane};
pub use color::{ParseColorError, Rgb};
pub use compositor::{composite, Compositor, PixelSource};
pub use palette::{Palette, PaletteKind, PALETTE_SIZE};
pub use surface::{PlanarFramebuffer, Surface};
