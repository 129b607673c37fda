use serde::Serialize;

use crate::core::Rect;
use crate::domain::{css_rgb, Obstacle};
use crate::systems::turret::Projectiles;

/// Floored rectangle as handed to the canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub(crate) struct RectView {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) w: f32,
    pub(crate) h: f32,
}

impl From<&Rect> for RectView {
    fn from(rect: &Rect) -> Self {
        let r = rect.floored();
        Self { x: r.x, y: r.y, w: r.w, h: r.h }
    }
}

#[derive(Debug, Serialize)]
struct ObstacleView {
    #[serde(flatten)]
    rect: RectView,
    color: String,
}

pub(super) fn obstacles_json(obstacles: &[Obstacle]) -> Result<String, serde_json::Error> {
    let views: Vec<ObstacleView> = obstacles
        .iter()
        .map(|o| ObstacleView { rect: RectView::from(&o.rect), color: css_rgb(o.color) })
        .collect();
    serde_json::to_string(&views)
}

pub(super) fn projectiles_json(projectiles: &Projectiles) -> Result<String, serde_json::Error> {
    let views: Vec<RectView> = projectiles.iter().map(|p| RectView::from(&p.rect)).collect();
    serde_json::to_string(&views)
}
