pub mod brush_report;
pub mod config;
pub mod display_spec;

pub use brush_report::{BrushReport, PlaneReport};
pub use config::{AppConfig, DisplayConfig, OutputMode, PaletteLayout};
pub use display_spec::DisplaySpec;
