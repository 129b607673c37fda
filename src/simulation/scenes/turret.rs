use crate::core::Rect;
use crate::domain::config::{canvas_rect, TurretConfig};
use crate::input::Mouse;
use crate::systems::turret::{Projectiles, Turret};

use super::runner::Scene;

/// Turret centered on the canvas, aiming at the cursor and firing on click
pub struct TurretCore {
    mouse: Mouse,
    turret: Turret,
    projectiles: Projectiles,
    canvas: Rect,
    /// Shots requested since the last tick
    pending_shots: u32,
    barrel_length: f32,
    projectile_speed: f32,
    projectile_size: f32,
}

impl TurretCore {
    pub fn new(config: &TurretConfig) -> Self {
        let canvas = canvas_rect(config.canvas);
        let mut rect = Rect::new(0.0, 0.0, config.size[0], config.size[1]);
        rect.set_center(canvas.center());
        Self {
            mouse: Mouse::new(),
            turret: Turret::new(rect, config.image_angle),
            projectiles: Projectiles::default(),
            canvas,
            pending_shots: 0,
            barrel_length: config.barrel_length,
            projectile_speed: config.projectile_speed,
            projectile_size: config.projectile_size,
        }
    }

    pub fn turret(&self) -> &Turret {
        &self.turret
    }

    pub fn projectiles(&self) -> &Projectiles {
        &self.projectiles
    }
}

impl Scene for TurretCore {
    fn pointer_move(&mut self, x: f32, y: f32) {
        self.mouse.move_to(x, y);
    }

    fn pointer_button(&mut self, left: bool, pressed: bool) {
        if left && pressed {
            self.pending_shots += 1;
        }
    }

    fn step(&mut self, dt: f32) {
        self.turret.aim(self.mouse.position());
        for _ in 0..std::mem::take(&mut self.pending_shots) {
            let shot = self.turret.fire(self.barrel_length, self.projectile_speed, self.projectile_size);
            self.projectiles.spawn(shot);
        }
        self.projectiles.update(dt, &self.canvas);
    }
}
