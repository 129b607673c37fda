//! Movement - axis-separated displacement and collision response.
//!
//! X is always resolved before Y, each with its own component of the
//! tick's displacement, so corner hits never need special casing.

mod direction;
mod snap;
mod sweep;

pub use direction::{direction_vector, DIAGONAL_SCALE};
pub use snap::snap_out;
pub use sweep::{move_axis, AxisMove};

use crate::core::{Axis, Rect, Vec2};
use crate::systems::collision::Collider;

/// Apply `displacement` X-then-Y, resolving collisions per axis.
pub fn move_separated(
    rect: &mut Rect,
    displacement: Vec2,
    collider: &impl Collider,
    limit: u32,
) -> (AxisMove, AxisMove) {
    let x = move_axis(rect, Axis::X, displacement.x, collider, limit);
    let y = move_axis(rect, Axis::Y, displacement.y, collider, limit);
    (x, y)
}
