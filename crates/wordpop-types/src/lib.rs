pub mod geometry;
pub mod types;

pub use geometry::{Point, Rect, Rgb, Size};
pub use types::*;
