//! Playfield Engine - 2D arcade movement and collision for canvas demos
//!
//! Architecture:
//! - core/        - geometry, clock, rng, logging
//! - input/       - keyboard and mouse state
//! - domain/      - scene configs, obstacles, arena layouts
//! - systems/     - collision, movement, platformer physics, turret, viewport
//! - simulation/  - scenes, frame runner, wasm facade
//!
//! The host (JS) owns drawing, image decoding and the animation loop; it
//! forwards DOM events and frame timestamps and reads positions back.

pub mod core;
pub mod input;
pub mod domain;
pub mod systems;
pub mod simulation;

use log::{info, Level};
use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init(Level::Info);
    info!("playfield engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use crate::core::{Rect, Vec2};
pub use domain::config::ConfigError;
pub use simulation::{
    ColorFillScene, DragScene, EightWayScene, FourWayScene, PlatformerScene, TopDownScene,
    TurretScene,
};
pub use systems::collision::{AlphaMask, MaskError};
