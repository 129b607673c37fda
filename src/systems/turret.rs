//! Turret aiming and projectiles.

use log::debug;

use crate::core::{Rect, Vec2};

/// Rotating turret that tracks the cursor
#[derive(Clone, Debug)]
pub struct Turret {
    pub rect: Rect,
    /// Rotation applied to the barrel image, radians
    pub angle: f32,
    /// Heading the barrel already has in the unrotated image
    pub image_angle: f32,
}

impl Turret {
    pub fn new(rect: Rect, image_angle: f32) -> Self {
        // Unrotated: the barrel points along its image angle.
        Self { rect, angle: 0.0, image_angle }
    }

    /// Point the barrel at `target`; no cursor means no change.
    pub fn aim(&mut self, target: Option<Vec2>) {
        if let Some(t) = target {
            let dy = t.y - self.rect.centery();
            let dx = t.x - self.rect.centerx();
            self.angle = dy.atan2(dx) - self.image_angle;
        }
    }

    /// World heading of the barrel, radians
    pub fn heading(&self) -> f32 {
        self.angle + self.image_angle
    }

    /// Spawn a projectile at the muzzle travelling along the barrel
    pub fn fire(&self, barrel_length: f32, speed: f32, size: f32) -> Projectile {
        let dir = Vec2::from_angle(self.heading());
        let muzzle = self.rect.center() + dir * barrel_length;
        let mut rect = Rect::new(0.0, 0.0, size, size);
        rect.set_center(muzzle);
        Projectile { rect, velocity: dir * speed }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub rect: Rect,
    /// Pixels per second
    pub velocity: Vec2,
}

impl Projectile {
    pub fn update(&mut self, dt: f32) {
        self.rect.move_by(self.velocity.x * dt, self.velocity.y * dt);
    }
}

/// Live projectiles; each one is dropped once it leaves `bounds`.
#[derive(Clone, Debug, Default)]
pub struct Projectiles {
    live: Vec<Projectile>,
}

impl Projectiles {
    pub fn spawn(&mut self, p: Projectile) {
        self.live.push(p);
    }

    pub fn update(&mut self, dt: f32, bounds: &Rect) {
        for p in self.live.iter_mut() {
            p.update(dt);
        }
        let before = self.live.len();
        self.live.retain(|p| p.rect.collide_rect(bounds));
        let culled = before - self.live.len();
        if culled > 0 {
            debug!("culled {} projectile(s) outside the field", culled);
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn turret() -> Turret {
        let mut rect = Rect::new(0.0, 0.0, 150.0, 150.0);
        rect.set_center(Vec2::new(400.0, 300.0));
        Turret::new(rect, 3.0 * FRAC_PI_4)
    }

    #[test]
    fn aims_at_cursor() {
        let mut t = turret();
        t.aim(Some(Vec2::new(400.0, 500.0)));
        assert!((t.heading() - FRAC_PI_2).abs() < 1e-6);
        assert!((t.angle - (FRAC_PI_2 - 3.0 * FRAC_PI_4)).abs() < 1e-6);

        t.aim(None);
        assert!((t.heading() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn projectile_leaves_from_muzzle() {
        let mut t = turret();
        t.aim(Some(Vec2::new(800.0, 300.0)));
        let p = t.fire(75.0, 600.0, 8.0);
        assert!((p.rect.centerx() - 475.0).abs() < 1e-3);
        assert!((p.rect.centery() - 300.0).abs() < 1e-3);
        assert!((p.velocity.x - 600.0).abs() < 1e-3);
    }

    #[test]
    fn projectiles_are_destroyed_outside_bounds() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut t = turret();
        t.aim(Some(Vec2::new(800.0, 300.0)));
        let mut shots = Projectiles::default();
        shots.spawn(t.fire(75.0, 600.0, 8.0));
        shots.update(0.1, &bounds);
        assert_eq!(shots.len(), 1);
        shots.update(1.0, &bounds);
        assert!(shots.is_empty());
    }
}
