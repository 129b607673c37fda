use log::info;

use crate::core::{Rect, Rng};
use crate::domain::config::{canvas_rect, PlatformerConfig};
use crate::domain::level::{arena, ArenaOptions};
use crate::domain::Obstacle;
use crate::input::{Controls, Key};
use crate::systems::collision::{AlphaMask, BoxCollider, MaskCollider};
use crate::systems::platformer::PlatformerBody;

use super::runner::Scene;

/// Side-scrolling platformer in a walled arena
pub struct PlatformerCore {
    canvas: Rect,
    controls: Controls,
    body: PlatformerBody,
    blocks: Vec<Obstacle>,
    /// Player sprite alpha; switches collision to pixel-perfect
    sprite: Option<AlphaMask>,
    mask_threshold: u8,
}

impl PlatformerCore {
    /// Bounding-box collision with a `playerSize` player
    pub fn new(config: &PlatformerConfig) -> Self {
        let size = (config.player_size[0], config.player_size[1]);
        Self::build(config, size, None)
    }

    /// Pixel-perfect collision using the player's sprite alpha
    pub fn with_sprite(config: &PlatformerConfig, sprite: AlphaMask) -> Self {
        let size = (sprite.width() as f32, sprite.height() as f32);
        Self::build(config, size, Some(sprite))
    }

    fn build(config: &PlatformerConfig, size: (f32, f32), sprite: Option<AlphaMask>) -> Self {
        let canvas = canvas_rect(config.canvas);
        let options = ArenaOptions {
            ceiling_gap: Some(config.block_size),
            ledge: config.ledge.then_some((175.0, 500.0)),
        };
        let mut rng = Rng::new(config.color_seed);
        let blocks = arena(&canvas, config.block_size, options, &mut rng);
        let rect = Rect::new(config.start[0], config.start[1], size.0, size.1);
        info!(
            "platformer: {} blocks, {}x{} player, pixel-perfect: {}",
            blocks.len(),
            size.0,
            size.1,
            sprite.is_some()
        );
        Self {
            canvas,
            controls: Controls::new(),
            body: PlatformerBody::new(
                rect,
                config.speed,
                config.gravity,
                config.jump_power,
                config.nudge_limit,
            ),
            blocks,
            sprite,
            mask_threshold: config.mask_threshold,
        }
    }

    pub fn canvas(&self) -> &Rect {
        &self.canvas
    }

    pub fn body(&self) -> &PlatformerBody {
        &self.body
    }

    pub fn blocks(&self) -> &[Obstacle] {
        &self.blocks
    }

    pub fn is_pixel_perfect(&self) -> bool {
        self.sprite.is_some()
    }
}

impl Scene for PlatformerCore {
    fn key(&mut self, code: u32, pressed: bool) -> bool {
        if !self.controls.handle_code(code, pressed) {
            return false;
        }
        if Key::from_code(code) == Some(Key::Jump) {
            if pressed {
                self.body.jump.press();
            } else {
                self.body.jump.release();
            }
        }
        true
    }

    fn step(&mut self, dt: f32) {
        match &self.sprite {
            Some(sprite) => {
                let collider = MaskCollider::new(sprite, &self.blocks, self.mask_threshold);
                self.body.update(&self.controls, &collider, dt);
            }
            None => {
                let collider = BoxCollider::new(&self.blocks);
                self.body.update(&self.controls, &collider, dt);
            }
        }
    }
}
