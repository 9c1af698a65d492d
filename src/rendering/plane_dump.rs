use planar_brush::{Plane, PlanarFramebuffer};
use std::io::Write;

use crate::error::RenderError;

/// Write the four bit planes back to back, blue through intensity.
///
/// Each plane is `stride * height` bytes, most significant bit leftmost,
/// the same layout as display memory. Returns the number of bytes written.
pub fn write_planes<W: Write>(
    framebuffer: &PlanarFramebuffer,
    mut writer: W,
) -> Result<usize, RenderError> {
    let mut written = 0;
    for plane in Plane::ALL {
        let bytes = framebuffer.plane(plane);
        writer.write_all(bytes)?;
        written += bytes.len();
    }
    writer.flush()?;

    tracing::debug!(
        stride = framebuffer.stride(),
        height = framebuffer.height(),
        bytes = written,
        "Wrote plane dump"
    );
    Ok(written)
}
