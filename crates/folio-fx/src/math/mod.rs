//! Geometry for pointer effects

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
