//! Collision oracles.
//!
//! Movement code only asks one question, "does this rect hit anything?",
//! through `Collider`. Bounding boxes, sprite masks and level bitmaps each
//! answer it differently.

mod level;
mod mask;

pub use level::LevelCollider;
pub use mask::{AlphaMask, MaskError};
pub(crate) use mask::PixelSpan;

use crate::core::Rect;
use crate::domain::Obstacle;

pub trait Collider {
    fn collides(&self, rect: &Rect) -> bool;
}

/// Every obstacle whose bounding box overlaps `rect`
pub fn collide_all<'a>(rect: &Rect, obstacles: &'a [Obstacle]) -> Vec<&'a Obstacle> {
    obstacles.iter().filter(|o| rect.collide_rect(&o.rect)).collect()
}

/// First obstacle whose bounding box overlaps `rect`
pub fn collide_any<'a>(rect: &Rect, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| rect.collide_rect(&o.rect))
}

/// Plain AABB test against a set of obstacles
#[derive(Clone, Copy)]
pub struct BoxCollider<'a> {
    obstacles: &'a [Obstacle],
}

impl<'a> BoxCollider<'a> {
    pub fn new(obstacles: &'a [Obstacle]) -> Self {
        Self { obstacles }
    }
}

impl Collider for BoxCollider<'_> {
    fn collides(&self, rect: &Rect) -> bool {
        collide_any(rect, self.obstacles).is_some()
    }
}

/// Floored pixel origin of a rect
#[inline]
pub(crate) fn pixel_origin(rect: &Rect) -> (i32, i32) {
    (rect.x.floor() as i32, rect.y.floor() as i32)
}

#[inline]
pub(crate) fn pixel_span(rect: &Rect) -> PixelSpan {
    let (x0, y0) = pixel_origin(rect);
    PixelSpan {
        x0,
        y0,
        x1: x0 + rect.w.ceil() as i32,
        y1: y0 + rect.h.ceil() as i32,
    }
}

/// Bounding-box prefilter, then a composite of the mover's sprite against
/// each candidate obstacle.
#[derive(Clone, Copy)]
pub struct MaskCollider<'a> {
    sprite: &'a AlphaMask,
    obstacles: &'a [Obstacle],
    threshold: u8,
}

impl<'a> MaskCollider<'a> {
    pub fn new(sprite: &'a AlphaMask, obstacles: &'a [Obstacle], threshold: u8) -> Self {
        Self { sprite, obstacles, threshold }
    }
}

impl Collider for MaskCollider<'_> {
    fn collides(&self, rect: &Rect) -> bool {
        let at = pixel_origin(rect);
        collide_all(rect, self.obstacles).into_iter().any(|o| match &o.mask {
            Some(mask) => self.sprite.overlaps(at, mask, pixel_origin(&o.rect), self.threshold),
            None => self.sprite.overlaps_solid(at, pixel_span(&o.rect), self.threshold),
        })
    }
}
