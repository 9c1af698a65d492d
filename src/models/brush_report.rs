use planar_brush::{build_brush, tile_cells, Palette, Plane, Rgb};
use serde::Serialize;

/// Description of the brush for one color, as printed by `vgadither brush`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrushReport {
    /// Input color as `#RRGGBB`
    pub color: String,
    /// `max(r, g, b)`
    pub value: u8,
    /// `"bright"` for values above 127, otherwise `"dim"`
    pub branch: &'static str,
    pub planes: Vec<PlaneReport>,
    /// Composited 4x4 tile, `tile[y][x]`
    pub tile: [[u8; 4]; 4],
    pub best_match: u8,
    /// Appearance of the best match under the chosen palette
    pub best_match_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaneReport {
    pub plane: &'static str,
    /// Raw mask as `0x%08X`
    pub mask: String,
    /// Lit cells out of 16
    pub cells: u32,
}

impl BrushReport {
    pub fn new(color: Rgb, palette: &Palette) -> Self {
        let (brush, best_match) = build_brush(color);
        let value = color.value();
        let planes = Plane::ALL
            .iter()
            .map(|&plane| PlaneReport {
                plane: plane.name(),
                mask: format!("0x{:08X}", brush.plane(plane)),
                cells: tile_cells(brush.plane(plane)),
            })
            .collect();

        Self {
            color: color.to_string(),
            value,
            branch: if value > 127 { "bright" } else { "dim" },
            planes,
            tile: brush.tile(),
            best_match,
            best_match_color: palette.color(best_match).to_string(),
        }
    }
}
