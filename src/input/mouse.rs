use crate::core::Vec2;

/// Cursor state in canvas coordinates.
///
/// The host converts client coordinates (subtracting the canvas bounding
/// rect) before calling `move_to`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mouse {
    position: Option<Vec2>,
    previous: Option<Vec2>,
    rel: Vec2,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Compute relative motion since the previous tick. Call once per tick.
    pub fn update(&mut self) {
        if let Some(pos) = self.position {
            if let Some(prev) = self.previous {
                self.rel = pos - prev;
            }
            self.previous = Some(pos);
        }
    }

    /// `None` until the cursor has entered the canvas
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn rel(&self) -> Vec2 {
        self.rel
    }
}
