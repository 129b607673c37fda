use crate::core::{Axis, Rect, Rng, Vec2};
use crate::domain::config::{canvas_rect, point, FourWayConfig};
use crate::domain::level::{arena, ArenaOptions};
use crate::domain::Obstacle;
use crate::input::{DirectionStack, Key};
use crate::systems::movement::snap_out;

use super::runner::Scene;

/// Two-frame walk cycle
const WALK_FRAMES: u8 = 2;

/// Sprite walking in the most recently pressed direction
pub struct FourWayCore {
    rect: Rect,
    speed: f32,
    directions: DirectionStack,
    blocks: Vec<Obstacle>,
    frame: u8,
    frame_elapsed: f32,
    frame_period: f32,
}

impl FourWayCore {
    pub fn new(config: &FourWayConfig) -> Self {
        let canvas = canvas_rect(config.canvas);
        let mut rng = Rng::new(config.color_seed);
        let blocks = arena(&canvas, config.block_size, ArenaOptions::default(), &mut rng);
        let mut rect = Rect::new(0.0, 0.0, config.size[0], config.size[1]);
        rect.set_center(point(config.center));
        Self {
            rect,
            speed: config.speed,
            directions: DirectionStack::new(Key::Down),
            blocks,
            frame: 0,
            frame_elapsed: 0.0,
            frame_period: 1.0 / config.frame_fps,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn blocks(&self) -> &[Obstacle] {
        &self.blocks
    }

    pub fn facing(&self) -> Key {
        self.directions.facing()
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Sprite-sheet column and horizontal flip for the current pose.
    /// Right reuses the left frames mirrored; up/down alternate by mirroring.
    pub fn sheet_frame(&self) -> (u32, bool) {
        let second = self.frame == 1;
        match self.facing() {
            Key::Left => (if second { 50 } else { 0 }, false),
            Key::Right => (if second { 50 } else { 0 }, true),
            Key::Up => (100, second),
            _ => (150, second),
        }
    }

    fn animate(&mut self, dt: f32) {
        self.frame_elapsed += dt;
        if self.frame_elapsed > self.frame_period {
            self.frame = (self.frame + 1) % WALK_FRAMES;
            self.frame_elapsed = 0.0;
        }
    }

    fn move_on(&mut self, axis: Axis, step: Vec2) {
        let pos = self.rect.position(axis) + step.get(axis);
        self.rect.set_position(axis, pos);
        snap_out(&mut self.rect, axis, &self.blocks);
    }
}

impl Scene for FourWayCore {
    fn key(&mut self, code: u32, pressed: bool) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        if key.unit().is_none() {
            return false;
        }
        if pressed {
            self.directions.push(key);
        } else {
            self.directions.release(key);
        }
        true
    }

    fn step(&mut self, dt: f32) {
        if !self.directions.is_moving() {
            return;
        }
        self.animate(dt);
        let unit = self.facing().unit().unwrap_or_default();
        let step = unit * (self.speed * dt);
        self.move_on(Axis::X, step);
        self.move_on(Axis::Y, step);
    }
}
