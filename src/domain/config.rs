//! Scene configuration loaded from JSON.
//!
//! Every field defaults to the stock demo constants, so an
//! empty string or `{}` yields a playable scene.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Rect, Vec2};

pub const DEFAULT_NUDGE_LIMIT: u32 = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("nudgeLimit must be at least 1")]
    ZeroNudgeLimit,
}

/// A JSON-configurable scene
pub trait SceneConfig: DeserializeOwned + Default {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Parse and validate a scene config. Blank input means all defaults.
pub fn parse<T: SceneConfig>(json: &str) -> Result<T, ConfigError> {
    let config: T = if json.trim().is_empty() {
        T::default()
    } else {
        serde_json::from_str(json)?
    };
    config.validate()?;
    Ok(config)
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn positive_size(field: &'static str, size: [f32; 2]) -> Result<(), ConfigError> {
    positive(field, size[0])?;
    positive(field, size[1])
}

fn nudge(limit: u32) -> Result<(), ConfigError> {
    if limit == 0 {
        Err(ConfigError::ZeroNudgeLimit)
    } else {
        Ok(())
    }
}

/// Canvas rect anchored at the origin
pub fn canvas_rect(size: [f32; 2]) -> Rect {
    Rect::new(0.0, 0.0, size[0], size[1])
}

pub fn point(p: [f32; 2]) -> Vec2 {
    Vec2::new(p[0], p[1])
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformerConfig {
    pub canvas: [f32; 2],
    pub start: [f32; 2],
    /// Player size when no sprite mask is supplied
    pub player_size: [f32; 2],
    /// Horizontal speed in pixels per second
    pub speed: f32,
    /// Pixels per second squared
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative is up)
    pub jump_power: f32,
    pub block_size: f32,
    /// Adds the ledge row at y=175 from x=500 onwards
    pub ledge: bool,
    /// Alpha above which a composited pixel counts as a hit
    pub mask_threshold: u8,
    pub nudge_limit: u32,
    pub color_seed: u32,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            canvas: [800.0, 600.0],
            start: [50.0, -25.0],
            player_size: [40.0, 40.0],
            speed: 240.0,
            gravity: 600.0,
            jump_power: -400.0,
            block_size: 50.0,
            ledge: false,
            mask_threshold: 0,
            nudge_limit: DEFAULT_NUDGE_LIMIT,
            color_seed: 12345,
        }
    }
}

impl SceneConfig for PlatformerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("canvas", self.canvas)?;
        positive_size("playerSize", self.player_size)?;
        positive("blockSize", self.block_size)?;
        non_negative("speed", self.speed)?;
        non_negative("gravity", self.gravity)?;
        nudge(self.nudge_limit)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopDownConfig {
    pub viewport: [f32; 2],
    /// Player size when no sprite mask is supplied
    pub player_size: [f32; 2],
    pub speed: f32,
    pub mask_threshold: u8,
    pub nudge_limit: u32,
}

impl Default for TopDownConfig {
    fn default() -> Self {
        Self {
            viewport: [800.0, 600.0],
            player_size: [40.0, 40.0],
            speed: 420.0,
            mask_threshold: 100,
            nudge_limit: DEFAULT_NUDGE_LIMIT,
        }
    }
}

impl SceneConfig for TopDownConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("viewport", self.viewport)?;
        positive_size("playerSize", self.player_size)?;
        non_negative("speed", self.speed)?;
        nudge(self.nudge_limit)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EightWayConfig {
    pub canvas: [f32; 2],
    pub start: [f32; 2],
    pub size: [f32; 2],
    pub speed: f32,
    /// Scale diagonals by √2⁄2 so they match orthogonal speed
    pub normalize_diagonal: bool,
}

impl Default for EightWayConfig {
    fn default() -> Self {
        Self {
            canvas: [800.0, 600.0],
            start: [50.0, 50.0],
            size: [30.0, 30.0],
            speed: 180.0,
            normalize_diagonal: true,
        }
    }
}

impl SceneConfig for EightWayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("canvas", self.canvas)?;
        positive_size("size", self.size)?;
        non_negative("speed", self.speed)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FourWayConfig {
    pub canvas: [f32; 2],
    /// Initial center of the player
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub speed: f32,
    pub block_size: f32,
    /// Walk animation frames per second
    pub frame_fps: f32,
    pub color_seed: u32,
}

impl Default for FourWayConfig {
    fn default() -> Self {
        Self {
            canvas: [800.0, 600.0],
            center: [100.0, 100.0],
            size: [50.0, 50.0],
            speed: 180.0,
            block_size: 50.0,
            frame_fps: 7.0,
            color_seed: 12345,
        }
    }
}

impl SceneConfig for FourWayConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("canvas", self.canvas)?;
        positive_size("size", self.size)?;
        positive("blockSize", self.block_size)?;
        positive("frameFps", self.frame_fps)?;
        non_negative("speed", self.speed)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurretConfig {
    pub canvas: [f32; 2],
    pub size: [f32; 2],
    /// Angle the barrel points at in the unrotated sprite sheet
    pub image_angle: f32,
    pub barrel_length: f32,
    pub projectile_speed: f32,
    pub projectile_size: f32,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            canvas: [800.0, 600.0],
            size: [150.0, 150.0],
            image_angle: 3.0 * std::f32::consts::FRAC_PI_4,
            barrel_length: 75.0,
            projectile_speed: 600.0,
            projectile_size: 8.0,
        }
    }
}

impl SceneConfig for TurretConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("canvas", self.canvas)?;
        positive_size("size", self.size)?;
        positive("projectileSize", self.projectile_size)?;
        non_negative("barrelLength", self.barrel_length)?;
        non_negative("projectileSpeed", self.projectile_speed)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DragConfig {
    pub canvas: [f32; 2],
    pub start: [f32; 2],
    pub size: [f32; 2],
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            canvas: [800.0, 600.0],
            start: [200.0, 100.0],
            size: [100.0, 100.0],
        }
    }
}

impl SceneConfig for DragConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive_size("canvas", self.canvas)?;
        positive_size("size", self.size)
    }
}
