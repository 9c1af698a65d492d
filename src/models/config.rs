use planar_brush::{PaletteKind, PixelSource};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::DisplaySpec;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Gamma exponent applied to every channel before dithering
    pub gamma: Option<f32>,

    /// Which pixel value is written to the framebuffer
    pub output: OutputMode,

    /// Attribute register layout
    pub palette: PaletteLayout,

    /// Target display geometry
    pub display: DisplayConfig,
}

/// Framebuffer output mode
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Ordered 4x4 brush dithering
    #[default]
    Dithered,
    /// Nearest solid palette color only
    BestMatch,
}

impl From<OutputMode> for PixelSource {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Dithered => PixelSource::Dithered,
            OutputMode::BestMatch => PixelSource::BestMatch,
        }
    }
}

/// Attribute register layout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteLayout {
    #[default]
    Additive,
    Standard,
}

impl From<PaletteLayout> for PaletteKind {
    fn from(layout: PaletteLayout) -> Self {
        match layout {
            PaletteLayout::Additive => PaletteKind::Additive,
            PaletteLayout::Standard => PaletteKind::Standard,
        }
    }
}

impl From<PaletteKind> for PaletteLayout {
    fn from(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Additive => PaletteLayout::Additive,
            PaletteKind::Standard => PaletteLayout::Standard,
        }
    }
}

/// Display geometry section
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let spec = DisplaySpec::default();
        Self {
            width: spec.width,
            height: spec.height,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gamma: None,
            output: OutputMode::default(),
            palette: PaletteLayout::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            gamma = ?config.gamma,
            output = ?config.output,
            palette = ?config.palette,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(gamma) = self.gamma {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(ConfigError::InvalidGamma(gamma));
            }
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::InvalidDisplay {
                width: self.display.width,
                height: self.display.height,
            });
        }
        Ok(())
    }

    pub fn display_spec(&self) -> DisplaySpec {
        DisplaySpec::new(self.display.width, self.display.height)
    }

    pub fn pixel_source(&self) -> PixelSource {
        self.output.into()
    }

    pub fn palette_kind(&self) -> PaletteKind {
        self.palette.into()
    }
}
