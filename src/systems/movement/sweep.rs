use log::warn;

use crate::core::{Axis, Rect};
use crate::systems::collision::Collider;

/// Outcome of moving along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisMove {
    /// Moved the full offset without touching anything
    Clear,
    /// Hit something and was pushed back until clear
    Resolved,
    /// Still overlapping: the nudges ran out and the move was undone, or
    /// there was no travel to back out along
    Stuck,
}

impl AxisMove {
    pub fn collided(self) -> bool {
        self != AxisMove::Clear
    }
}

/// Move `rect` by `offset` along `axis`, then push it back out of anything it
/// hit, one whole pixel at a time.
///
/// The coordinate is floored before nudging so a resolved rect sits flush on
/// a pixel boundary. At most `limit` nudges are taken; if the rect is still
/// overlapping after that it is returned to where it started on this axis.
pub fn move_axis(
    rect: &mut Rect,
    axis: Axis,
    offset: f32,
    collider: &impl Collider,
    limit: u32,
) -> AxisMove {
    if offset == 0.0 {
        // No travel, so no direction to back out along.
        return if collider.collides(rect) { AxisMove::Stuck } else { AxisMove::Clear };
    }

    let before = rect.position(axis);
    rect.set_position(axis, before + offset);
    if !collider.collides(rect) {
        return AxisMove::Clear;
    }

    let back = if offset < 0.0 { 1.0 } else { -1.0 };
    rect.set_position(axis, rect.position(axis).floor());
    let mut steps = 0;
    while collider.collides(rect) {
        if steps == limit {
            warn!(
                "collision on {:?} unresolved after {} steps; undoing move of {:.2}",
                axis, limit, offset
            );
            rect.set_position(axis, before);
            return AxisMove::Stuck;
        }
        rect.set_position(axis, rect.position(axis) + back);
        steps += 1;
    }
    AxisMove::Resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Obstacle;
    use crate::systems::collision::BoxCollider;

    fn wall(x: f32, y: f32, w: f32, h: f32) -> Vec<Obstacle> {
        vec![Obstacle::new(Rect::new(x, y, w, h), 0)]
    }

    #[test]
    fn clear_move_goes_full_distance() {
        let obstacles = wall(500.0, 0.0, 50.0, 50.0);
        let mut r = Rect::new(0.0, 0.0, 30.0, 30.0);
        let res = move_axis(&mut r, Axis::X, 12.5, &BoxCollider::new(&obstacles), 1024);
        assert_eq!(res, AxisMove::Clear);
        assert_eq!(r.x, 12.5);
    }

    #[test]
    fn does_not_tunnel_through_wall() {
        let obstacles = wall(20.0, 0.0, 50.0, 50.0);
        let mut r = Rect::new(0.0, 0.0, 30.0, 30.0);
        let res = move_axis(&mut r, Axis::X, 40.0, &BoxCollider::new(&obstacles), 1024);
        assert_eq!(res, AxisMove::Resolved);
        assert_eq!(r.right(), 20.0);
        assert!(!r.collide_rect(&obstacles[0].rect));
    }

    #[test]
    fn upward_move_stops_under_ceiling() {
        let obstacles = wall(0.0, 0.0, 100.0, 50.0);
        let mut r = Rect::new(10.0, 60.0, 20.0, 20.0);
        let res = move_axis(&mut r, Axis::Y, -25.3, &BoxCollider::new(&obstacles), 1024);
        assert_eq!(res, AxisMove::Resolved);
        assert_eq!(r.top(), 50.0);
    }

    #[test]
    fn zero_offset_never_nudges() {
        let obstacles = wall(0.0, 0.0, 100.0, 100.0);
        let mut r = Rect::new(40.5, 10.0, 20.0, 20.0);
        let res = move_axis(&mut r, Axis::X, 0.0, &BoxCollider::new(&obstacles), 1024);
        assert_eq!(res, AxisMove::Stuck);
        assert_eq!(r, Rect::new(40.5, 10.0, 20.0, 20.0));

        let mut free = Rect::new(200.0, 10.0, 20.0, 20.0);
        let res = move_axis(&mut free, Axis::Y, 0.0, &BoxCollider::new(&obstacles), 1024);
        assert_eq!(res, AxisMove::Clear);
        assert_eq!(free.y, 10.0);
    }

    #[test]
    fn swallowed_mover_is_bounded() {
        let _ = env_logger::builder().is_test(true).try_init();
        let obstacles = wall(-1000.0, -1000.0, 5000.0, 5000.0);
        let mut r = Rect::new(10.0, 10.0, 20.0, 20.0);
        let res = move_axis(&mut r, Axis::X, 5.0, &BoxCollider::new(&obstacles), 64);
        assert_eq!(res, AxisMove::Stuck);
        assert!(res.collided());
        assert_eq!(r.x, 10.0);
    }
}
