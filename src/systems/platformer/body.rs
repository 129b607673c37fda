use crate::core::{Axis, Rect, Vec2};
use crate::input::{Controls, Key};
use crate::systems::collision::Collider;
use crate::systems::movement::move_axis;

/// Velocity + gravity state shared by anything that can fall
#[derive(Clone, Copy, Debug)]
pub struct Physics {
    /// Pixels per second
    pub velocity: Vec2,
    /// Pixels per second squared
    pub gravity: f32,
    pub falling: bool,
}

impl Physics {
    pub fn new(gravity: f32) -> Self {
        Self { velocity: Vec2::zero(), gravity, falling: false }
    }

    /// Falling bodies accelerate, grounded bodies have no vertical velocity.
    pub fn integrate(&mut self, dt: f32) {
        if self.falling {
            self.velocity.y += self.gravity * dt;
        } else {
            self.velocity.y = 0.0;
        }
    }
}

/// Jump permission: one jump per key press, re-armed only by releasing the key.
#[derive(Clone, Copy, Debug, Default)]
pub struct JumpLatch {
    /// `None` until the body first touches ground
    armed: Option<bool>,
    requested: bool,
}

impl JumpLatch {
    pub fn press(&mut self) {
        self.requested = true;
    }

    pub fn release(&mut self) {
        self.armed = Some(true);
    }

    pub fn is_armed(&self) -> bool {
        self.armed == Some(true)
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    fn touch_ground(&mut self) {
        if self.armed.is_none() {
            self.armed = Some(true);
        }
    }

    /// Consume a pending request. Clears the arm even when no jump happens.
    fn take(&mut self) -> bool {
        let fire = self.requested && self.is_armed();
        self.requested = false;
        self.armed = Some(false);
        fire
    }
}

/// Side-view player: horizontal input, gravity, one-shot jumps.
#[derive(Clone, Debug)]
pub struct PlatformerBody {
    pub rect: Rect,
    pub physics: Physics,
    pub jump: JumpLatch,
    /// Horizontal pixels per second
    pub speed: f32,
    /// Vertical velocity applied by a jump (negative is up)
    pub jump_power: f32,
    nudge_limit: u32,
}

impl PlatformerBody {
    pub fn new(rect: Rect, speed: f32, gravity: f32, jump_power: f32, nudge_limit: u32) -> Self {
        Self {
            rect,
            physics: Physics::new(gravity),
            jump: JumpLatch::default(),
            speed,
            jump_power,
            nudge_limit,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.physics.falling
    }

    /// One simulation tick
    pub fn update(&mut self, controls: &Controls, collider: &impl Collider, dt: f32) {
        self.read_keys(controls);
        if self.jump.is_requested() {
            self.try_jump();
        }
        self.move_body(collider, dt);
        self.physics.integrate(dt);
    }

    /// No inertia: horizontal velocity comes straight from the keys.
    fn read_keys(&mut self, controls: &Controls) {
        let mut vx = 0.0;
        if controls.is_pressed(Key::Left) {
            vx -= self.speed;
        }
        if controls.is_pressed(Key::Right) {
            vx += self.speed;
        }
        self.physics.velocity.x = vx;
    }

    fn try_jump(&mut self) {
        let fire = self.jump.take();
        if fire && !self.physics.falling {
            self.physics.velocity.y = self.jump_power;
            self.physics.falling = true;
        }
    }

    fn move_body(&mut self, collider: &impl Collider, dt: f32) {
        if self.physics.falling {
            let dy = self.physics.velocity.y * dt;
            let res = move_axis(&mut self.rect, Axis::Y, dy, collider, self.nudge_limit);
            self.physics.falling = !res.collided();
        } else {
            self.check_ground(collider);
        }
        let vx = self.physics.velocity.x;
        if vx != 0.0 {
            move_axis(&mut self.rect, Axis::X, vx * dt, collider, self.nudge_limit);
        }
    }

    /// Look one pixel down for support.
    fn check_ground(&mut self, collider: &impl Collider) {
        self.rect.move_by(0.0, 1.0);
        if collider.collides(&self.rect) {
            self.jump.touch_ground();
        } else {
            self.physics.falling = true;
        }
        self.rect.move_by(0.0, -1.0);
    }
}
