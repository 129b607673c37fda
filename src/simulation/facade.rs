use wasm_bindgen::prelude::*;

use crate::domain::config::{
    self, DragConfig, EightWayConfig, FourWayConfig, PlatformerConfig, TopDownConfig,
    TurretConfig,
};
use crate::domain::css_rgb;
use crate::systems::collision::AlphaMask;

use super::render_extract::{obstacles_json, projectiles_json};
use super::runner::{Runner, Scene as _};
use super::{
    ColorFillCore, DragCore, EightWayCore, FourWayCore, PlatformerCore, TopDownCore, TurretCore,
};

/// DOM `MouseEvent.button` of the primary button
const PRIMARY_BUTTON: u32 = 0;

/// Host event plumbing shared by every exported scene.
macro_rules! scene_events {
    ($scene:ident) => {
        #[wasm_bindgen]
        impl $scene {
            /// Returns false when the key is not used by this scene
            pub fn key_down(&mut self, code: u32) -> bool {
                self.runner.scene_mut().key(code, true)
            }

            pub fn key_up(&mut self, code: u32) -> bool {
                self.runner.scene_mut().key(code, false)
            }

            pub fn mouse_move(&mut self, x: f32, y: f32) {
                self.runner.scene_mut().pointer_move(x, y);
            }

            pub fn mouse_down(&mut self, button: u32) {
                self.runner.scene_mut().pointer_button(button == PRIMARY_BUTTON, true);
            }

            pub fn mouse_up(&mut self, button: u32) {
                self.runner.scene_mut().pointer_button(button == PRIMARY_BUTTON, false);
            }

            /// Advance to the `requestAnimationFrame` timestamp
            pub fn tick(&mut self, timestamp_ms: f64) {
                self.runner.tick(timestamp_ms);
            }

            #[wasm_bindgen(getter)]
            pub fn ticks(&self) -> u64 {
                self.runner.ticks()
            }

            /// Enable or disable per-tick timing
            pub fn enable_perf(&mut self, enabled: bool) {
                self.runner.enable_perf(enabled);
            }

            /// Duration of the last tick (0 when perf is disabled)
            pub fn tick_ms(&self) -> f64 {
                self.runner.last_tick_ms()
            }
        }
    };
}

#[wasm_bindgen]
pub struct PlatformerScene {
    runner: Runner<PlatformerCore>,
}

#[wasm_bindgen]
impl PlatformerScene {
    /// Bounding-box platformer from a JSON config ("" for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PlatformerScene, JsError> {
        let cfg: PlatformerConfig = config::parse(config_json)?;
        Ok(Self { runner: Runner::new(PlatformerCore::new(&cfg)) })
    }

    /// Pixel-perfect platformer; `rgba` is the player sprite's image data
    #[wasm_bindgen(js_name = withSprite)]
    pub fn with_sprite(
        config_json: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<PlatformerScene, JsError> {
        let cfg: PlatformerConfig = config::parse(config_json)?;
        let sprite = AlphaMask::from_rgba(width, height, rgba)?;
        Ok(Self { runner: Runner::new(PlatformerCore::with_sprite(&cfg, sprite)) })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.runner.scene().body().rect.floored().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.runner.scene().body().rect.floored().y }

    #[wasm_bindgen(getter)]
    pub fn falling(&self) -> bool { self.runner.scene().body().is_falling() }

    /// `[{x,y,w,h,color}]` for every block
    pub fn obstacles_json(&self) -> Result<String, JsError> {
        Ok(obstacles_json(self.runner.scene().blocks())?)
    }
}

scene_events!(PlatformerScene);

#[wasm_bindgen]
pub struct TopDownScene {
    runner: Runner<TopDownCore>,
}

#[wasm_bindgen]
impl TopDownScene {
    /// `level_rgba` is the full level bitmap; an empty `sprite_rgba` means a
    /// solid `playerSize` box.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        level_width: u32,
        level_height: u32,
        level_rgba: &[u8],
        sprite_width: u32,
        sprite_height: u32,
        sprite_rgba: &[u8],
    ) -> Result<TopDownScene, JsError> {
        let cfg: TopDownConfig = config::parse(config_json)?;
        let level = AlphaMask::from_rgba(level_width, level_height, level_rgba)?;
        let sprite = if sprite_rgba.is_empty() {
            None
        } else {
            Some(AlphaMask::from_rgba(sprite_width, sprite_height, sprite_rgba)?)
        };
        Ok(Self { runner: Runner::new(TopDownCore::new(&cfg, level, sprite)) })
    }

    /// Player position on screen
    #[wasm_bindgen(getter)]
    pub fn screen_x(&self) -> i32 {
        let scene = self.runner.scene();
        scene.viewport().to_screen(scene.player()).0
    }

    #[wasm_bindgen(getter)]
    pub fn screen_y(&self) -> i32 {
        let scene = self.runner.scene();
        scene.viewport().to_screen(scene.player()).1
    }

    /// Level source offset to blit from
    #[wasm_bindgen(getter)]
    pub fn view_x(&self) -> i32 { self.runner.scene().viewport().offset().0 }

    #[wasm_bindgen(getter)]
    pub fn view_y(&self) -> i32 { self.runner.scene().viewport().offset().1 }
}

scene_events!(TopDownScene);

#[wasm_bindgen]
pub struct EightWayScene {
    runner: Runner<EightWayCore>,
}

#[wasm_bindgen]
impl EightWayScene {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<EightWayScene, JsError> {
        let cfg: EightWayConfig = config::parse(config_json)?;
        Ok(Self { runner: Runner::new(EightWayCore::new(&cfg)) })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.runner.scene().rect().floored().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.runner.scene().rect().floored().y }
}

scene_events!(EightWayScene);

#[wasm_bindgen]
pub struct FourWayScene {
    runner: Runner<FourWayCore>,
}

#[wasm_bindgen]
impl FourWayScene {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<FourWayScene, JsError> {
        let cfg: FourWayConfig = config::parse(config_json)?;
        Ok(Self { runner: Runner::new(FourWayCore::new(&cfg)) })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.runner.scene().rect().floored().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.runner.scene().rect().floored().y }

    /// Sprite-sheet x of the current frame
    #[wasm_bindgen(getter)]
    pub fn sheet_x(&self) -> u32 { self.runner.scene().sheet_frame().0 }

    /// Whether the current frame is mirrored horizontally
    #[wasm_bindgen(getter)]
    pub fn flipped(&self) -> bool { self.runner.scene().sheet_frame().1 }

    pub fn obstacles_json(&self) -> Result<String, JsError> {
        Ok(obstacles_json(self.runner.scene().blocks())?)
    }
}

scene_events!(FourWayScene);

#[wasm_bindgen]
pub struct DragScene {
    runner: Runner<DragCore>,
}

#[wasm_bindgen]
impl DragScene {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<DragScene, JsError> {
        let cfg: DragConfig = config::parse(config_json)?;
        Ok(Self { runner: Runner::new(DragCore::new(&cfg)) })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.runner.scene().target().rect.floored().x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.runner.scene().target().rect.floored().y }

    /// Hovered or grabbed; the demo draws it highlighted
    #[wasm_bindgen(getter)]
    pub fn highlighted(&self) -> bool {
        let target = self.runner.scene().target();
        target.hover || target.grabbed
    }
}

scene_events!(DragScene);

#[wasm_bindgen]
pub struct TurretScene {
    runner: Runner<TurretCore>,
}

#[wasm_bindgen]
impl TurretScene {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<TurretScene, JsError> {
        let cfg: TurretConfig = config::parse(config_json)?;
        Ok(Self { runner: Runner::new(TurretCore::new(&cfg)) })
    }

    /// Rotation to apply to the turret image, radians
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 { self.runner.scene().turret().angle }

    #[wasm_bindgen(getter)]
    pub fn projectile_count(&self) -> usize { self.runner.scene().projectiles().len() }

    /// `[{x,y,w,h}]` for every live projectile
    pub fn projectiles_json(&self) -> Result<String, JsError> {
        Ok(projectiles_json(self.runner.scene().projectiles())?)
    }
}

scene_events!(TurretScene);

#[wasm_bindgen]
pub struct ColorFillScene {
    runner: Runner<ColorFillCore>,
}

#[wasm_bindgen]
impl ColorFillScene {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> ColorFillScene {
        Self { runner: Runner::new(ColorFillCore::new(seed)) }
    }

    /// CSS color of the fill
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String { css_rgb(self.runner.scene().color()) }
}

scene_events!(ColorFillScene);
