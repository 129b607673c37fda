use crate::core::{Rect, Vec2};

/// Visible window into a larger level bitmap
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub rect: Rect,
}

impl Viewport {
    pub fn new(w: f32, h: f32) -> Self {
        Self { rect: Rect::new(0.0, 0.0, w, h) }
    }

    /// Center on `focus`, then pull back inside `bounds`.
    pub fn follow(&mut self, focus: Vec2, bounds: &Rect) {
        self.rect.set_center(focus);
        self.rect.clamp_to(bounds);
    }

    /// Integer source offset for blitting the level
    pub fn offset(&self) -> (i32, i32) {
        let r = self.rect.floored();
        (r.x as i32, r.y as i32)
    }

    /// Where a world rect lands on screen, floored
    pub fn to_screen(&self, world: &Rect) -> (i32, i32) {
        let (ox, oy) = self.offset();
        ((world.x - ox as f32).floor() as i32, (world.y - oy as f32).floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_near_origin() {
        let level = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut vp = Viewport::new(800.0, 600.0);
        vp.follow(Vec2::new(10.0, 20.0), &level);
        assert_eq!((vp.rect.x, vp.rect.y), (0.0, 0.0));
        assert_eq!(vp.offset(), (0, 0));
    }

    #[test]
    fn stays_inside_near_far_edge() {
        let level = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut vp = Viewport::new(800.0, 600.0);
        vp.follow(Vec2::new(990.0, 995.0), &level);
        assert_eq!(vp.rect.right(), 1000.0);
        assert_eq!(vp.rect.bottom(), 1000.0);
    }

    #[test]
    fn centers_when_away_from_edges() {
        let level = Rect::new(0.0, 0.0, 3000.0, 3000.0);
        let mut vp = Viewport::new(800.0, 600.0);
        vp.follow(Vec2::new(1500.0, 1500.0), &level);
        assert_eq!(vp.rect.center(), Vec2::new(1500.0, 1500.0));
        let player = Rect::new(1480.5, 1480.5, 40.0, 40.0);
        assert_eq!(vp.to_screen(&player), (380, 280));
    }
}
