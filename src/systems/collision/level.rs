use crate::core::Rect;

use super::mask::AlphaMask;
use super::{pixel_origin, Collider};

/// Pixel-perfect test of a sprite against the level bitmap it walks on.
///
/// Anything outside the bitmap counts as opaque, so the map edge is a wall.
#[derive(Clone, Copy)]
pub struct LevelCollider<'a> {
    level: &'a AlphaMask,
    sprite: &'a AlphaMask,
    threshold: u8,
}

impl<'a> LevelCollider<'a> {
    pub fn new(level: &'a AlphaMask, sprite: &'a AlphaMask, threshold: u8) -> Self {
        Self { level, sprite, threshold }
    }
}

impl Collider for LevelCollider<'_> {
    fn collides(&self, rect: &Rect) -> bool {
        let level = self.level;
        self.sprite
            .overlaps_backdrop(pixel_origin(rect), self.threshold, |x, y| {
                level.alpha_at(x, y).unwrap_or(u8::MAX)
            })
    }
}
