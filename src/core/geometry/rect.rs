use super::vec2::{Axis, Vec2};

/// Axis-aligned rectangle with sub-pixel position.
///
/// Containment is half-open: `[x, x + w) × [y, y + h)`. Sizes are not
/// validated here; scene configuration rejects degenerate sizes up front.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn centerx(&self) -> f32 {
        self.x + self.w / 2.0
    }

    #[inline]
    pub fn centery(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.centerx(), self.centery())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Move so that the center lands on `c`
    pub fn set_center(&mut self, c: Vec2) {
        self.x = c.x - self.w / 2.0;
        self.y = c.y - self.h / 2.0;
    }

    #[inline]
    pub fn position(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn set_position(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.w,
            Axis::Y => self.h,
        }
    }

    /// Left/top edges inclusive, right/bottom edges exclusive.
    pub fn collide_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Standard AABB overlap. Rects that only share an edge do not collide.
    pub fn collide_rect(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Keep the rect inside `bounds`.
    ///
    /// Per axis: a rect at least as large as the bounds is centered on them,
    /// otherwise it is shifted the minimum distance needed to fit.
    pub fn clamp_to(&mut self, bounds: &Rect) {
        self.x = clamp_span(self.x, self.w, bounds.x, bounds.w);
        self.y = clamp_span(self.y, self.h, bounds.y, bounds.h);
    }

    /// Copy with the position floored to whole pixels
    pub fn floored(&self) -> Rect {
        Rect::new(self.x.floor(), self.y.floor(), self.w, self.h)
    }
}

fn clamp_span(pos: f32, len: f32, bound_pos: f32, bound_len: f32) -> f32 {
    if len >= bound_len {
        bound_pos + (bound_len - len) / 2.0
    } else if pos < bound_pos {
        bound_pos
    } else if pos + len > bound_pos + bound_len {
        bound_pos + bound_len - len
    } else {
        pos
    }
}
