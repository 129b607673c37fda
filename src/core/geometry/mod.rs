//! Geometry - shared value types for every demo
//!
//! Positions are sub-pixel `f32`; renderers floor them when drawing.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::{Axis, Vec2};
