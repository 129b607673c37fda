use crate::core::Rect;
use crate::domain::config::{canvas_rect, DragConfig};
use crate::input::Mouse;

use super::runner::Scene;

/// Rectangle that follows relative mouse motion while held
#[derive(Clone, Copy, Debug)]
pub struct Draggable {
    pub rect: Rect,
    pub hover: bool,
    pub grabbed: bool,
}

impl Draggable {
    pub fn new(rect: Rect) -> Self {
        Self { rect, hover: false, grabbed: false }
    }

    /// Pressing grabs only while hovered; releasing anywhere drops.
    pub fn button(&mut self, pressed: bool) {
        if !pressed {
            self.grabbed = false;
        } else if self.hover {
            self.grabbed = true;
        }
    }

    pub fn update(&mut self, mouse: &Mouse, bounds: &Rect) {
        self.hover = mouse
            .position()
            .map_or(false, |p| self.rect.collide_point(p.x, p.y));
        if self.grabbed {
            let rel = mouse.rel();
            self.rect.move_by(rel.x, rel.y);
            self.rect.clamp_to(bounds);
        }
    }
}

pub struct DragCore {
    mouse: Mouse,
    target: Draggable,
    canvas: Rect,
}

impl DragCore {
    pub fn new(config: &DragConfig) -> Self {
        let rect = Rect::new(config.start[0], config.start[1], config.size[0], config.size[1]);
        Self {
            mouse: Mouse::new(),
            target: Draggable::new(rect),
            canvas: canvas_rect(config.canvas),
        }
    }

    pub fn target(&self) -> &Draggable {
        &self.target
    }
}

impl Scene for DragCore {
    fn pointer_move(&mut self, x: f32, y: f32) {
        self.mouse.move_to(x, y);
    }

    fn pointer_button(&mut self, left: bool, pressed: bool) {
        if left {
            self.target.button(pressed);
        }
    }

    fn step(&mut self, _dt: f32) {
        self.mouse.update();
        self.target.update(&self.mouse, &self.canvas);
    }
}
