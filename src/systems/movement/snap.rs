use crate::core::{Axis, Rect};
use crate::domain::Obstacle;
use crate::systems::collision::collide_all;

/// Place `rect` flush against every obstacle it overlaps on `axis`.
///
/// A rect whose coordinate is below the obstacle's is put before it,
/// anything else is put after it. Hits are handled last-to-first.
pub fn snap_out(rect: &mut Rect, axis: Axis, obstacles: &[Obstacle]) {
    let hits = collide_all(rect, obstacles);
    for hit in hits.into_iter().rev() {
        let theirs = hit.rect.position(axis);
        if rect.position(axis) < theirs {
            rect.set_position(axis, theirs - rect.extent(axis));
        } else {
            rect.set_position(axis, theirs + hit.rect.extent(axis));
        }
    }
}
