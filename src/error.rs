use thiserror::Error;

/// Errors while decoding an input image.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid gamma {0} (must be finite and greater than 0)")]
    InvalidGamma(f32),

    #[error("Invalid display size: {width}x{height}")]
    InvalidDisplay { width: u32, height: u32 },
}

/// Errors while putting an image on the display or exporting it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image too large to display: {width}x{height} (max {max_width}x{max_height})")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
