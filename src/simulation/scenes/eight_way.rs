use crate::core::Rect;
use crate::domain::config::{canvas_rect, EightWayConfig};
use crate::input::Controls;
use crate::systems::movement::direction_vector;

use super::runner::Scene;

/// Rectangle steered in eight directions, kept on the canvas
pub struct EightWayCore {
    controls: Controls,
    rect: Rect,
    canvas: Rect,
    speed: f32,
    normalize_diagonal: bool,
}

impl EightWayCore {
    pub fn new(config: &EightWayConfig) -> Self {
        Self {
            controls: Controls::new(),
            rect: Rect::new(config.start[0], config.start[1], config.size[0], config.size[1]),
            canvas: canvas_rect(config.canvas),
            speed: config.speed,
            normalize_diagonal: config.normalize_diagonal,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Scene for EightWayCore {
    fn key(&mut self, code: u32, pressed: bool) -> bool {
        self.controls.handle_direction_code(code, pressed)
    }

    fn step(&mut self, dt: f32) {
        let v = direction_vector(&self.controls, self.normalize_diagonal) * (self.speed * dt);
        self.rect.move_by(v.x, v.y);
        self.rect.clamp_to(&self.canvas);
    }
}
