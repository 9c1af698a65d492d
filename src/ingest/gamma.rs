//! Gamma lookup table applied to decoded pixels before dithering.

use planar_brush::Rgb;

/// Precomputed 256-entry gamma curve.
///
/// Entry `i` is `floor(255 * (i / 255)^gamma + 0.5)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable {
    table: [u8; 256],
}

impl GammaTable {
    /// A table that maps every value to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self { table }
    }

    /// Build the curve for `gamma`.
    ///
    /// `gamma` must be finite and positive (see `AppConfig::validate`);
    /// results are clamped to 0..=255 regardless.
    pub fn new(gamma: f32) -> Self {
        debug_assert!(
            gamma.is_finite() && gamma > 0.0,
            "gamma {gamma} must be finite and positive"
        );
        let gamma = f64::from(gamma);
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let value = (i as f64 / 255.0).powf(gamma) * 255.0 + 0.5;
            *entry = value.clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    /// Identity when `gamma` is `None`.
    pub fn from_option(gamma: Option<f32>) -> Self {
        gamma.map_or_else(Self::identity, Self::new)
    }

    #[inline]
    pub fn apply(&self, value: u8) -> u8 {
        self.table[usize::from(value)]
    }

    /// Apply the curve to every channel.
    #[inline]
    pub fn correct(&self, color: Rgb) -> Rgb {
        color.map(|c| self.apply(c))
    }

    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| usize::from(v) == i)
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::identity()
    }
}
