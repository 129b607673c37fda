//! Demo scenes and the frame runner that drives them.
//!
//! Each scene is a plain struct implementing [`Scene`]; the wasm facade wraps
//! it in a [`Runner`] and forwards host events.

#[path = "scenes/platformer.rs"]
mod platformer;
#[path = "scenes/top_down.rs"]
mod top_down;
#[path = "scenes/eight_way.rs"]
mod eight_way;
#[path = "scenes/four_way.rs"]
mod four_way;
#[path = "scenes/drag.rs"]
mod drag;
#[path = "scenes/turret.rs"]
mod turret;
#[path = "scenes/color_fill.rs"]
mod color_fill;
#[path = "render/render_extract.rs"]
mod render_extract;
mod runner;
mod facade;

pub use color_fill::ColorFillCore;
pub use drag::{DragCore, Draggable};
pub use eight_way::EightWayCore;
pub use facade::{
    ColorFillScene, DragScene, EightWayScene, FourWayScene, PlatformerScene, TopDownScene,
    TurretScene,
};
pub use four_way::FourWayCore;
pub use platformer::PlatformerCore;
pub use runner::{Runner, Scene, MAX_STEP_SECONDS};
pub use top_down::TopDownCore;
pub use turret::TurretCore;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
