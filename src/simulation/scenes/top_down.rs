use log::info;

use crate::core::Rect;
use crate::domain::config::TopDownConfig;
use crate::input::Controls;
use crate::systems::collision::{AlphaMask, LevelCollider};
use crate::systems::movement::{direction_vector, move_separated};
use crate::systems::viewport::Viewport;

use super::runner::Scene;

/// Top-down walker on a large bitmap with a following camera.
///
/// Opaque level pixels are walls, tested pixel-perfect against the sprite.
pub struct TopDownCore {
    controls: Controls,
    player: Rect,
    sprite: AlphaMask,
    level: AlphaMask,
    bounds: Rect,
    viewport: Viewport,
    speed: f32,
    threshold: u8,
    nudge_limit: u32,
}

impl TopDownCore {
    /// Without a sprite the player is an opaque `playerSize` box.
    pub fn new(config: &TopDownConfig, level: AlphaMask, sprite: Option<AlphaMask>) -> Self {
        let sprite = sprite.unwrap_or_else(|| {
            AlphaMask::solid(
                config.player_size[0].ceil() as u32,
                config.player_size[1].ceil() as u32,
            )
        });
        let bounds = Rect::new(0.0, 0.0, level.width() as f32, level.height() as f32);
        let mut player = Rect::new(0.0, 0.0, sprite.width() as f32, sprite.height() as f32);
        player.set_center(bounds.center());

        let mut viewport = Viewport::new(config.viewport[0], config.viewport[1]);
        viewport.follow(player.center(), &bounds);
        info!("top-down: level {}x{}", level.width(), level.height());

        Self {
            controls: Controls::new(),
            player,
            sprite,
            level,
            bounds,
            viewport,
            speed: config.speed,
            threshold: config.mask_threshold,
            nudge_limit: config.nudge_limit,
        }
    }

    pub fn player(&self) -> &Rect {
        &self.player
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }
}

impl Scene for TopDownCore {
    fn key(&mut self, code: u32, pressed: bool) -> bool {
        self.controls.handle_direction_code(code, pressed)
    }

    fn step(&mut self, dt: f32) {
        let step = direction_vector(&self.controls, true) * (self.speed * dt);
        let collider = LevelCollider::new(&self.level, &self.sprite, self.threshold);
        move_separated(&mut self.player, step, &collider, self.nudge_limit);
        self.viewport.follow(self.player.center(), &self.bounds);
    }
}
