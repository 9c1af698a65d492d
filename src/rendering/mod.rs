pub mod plane_dump;
pub mod preview;

pub use plane_dump::write_planes;
pub use preview::{encode_indexed_png, encode_preview};
