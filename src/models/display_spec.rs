use crate::error::RenderError;

/// Geometry of the target display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// VGA mode 0x12: 640x480, 16 colors, planar
    pub const VGA_12H: Self = Self {
        width: 640,
        height: 480,
    };

    /// EGA mode 0x10: 640x350, 16 colors, planar
    pub const EGA_10H: Self = Self {
        width: 640,
        height: 350,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject images that do not fit on the display
    pub fn validate_image(&self, width: u32, height: u32) -> Result<(), RenderError> {
        if width > self.width || height > self.height {
            Err(RenderError::ImageTooLarge {
                width,
                height,
                max_width: self.width,
                max_height: self.height,
            })
        } else {
            Ok(())
        }
    }

    /// Top-left corner that centers an image of the given size
    pub fn centered_origin(&self, width: u32, height: u32) -> (usize, usize) {
        let x = (self.width / 2).saturating_sub(width / 2);
        let y = (self.height / 2).saturating_sub(height / 2);
        (x as usize, y as usize)
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::VGA_12H
    }
}
