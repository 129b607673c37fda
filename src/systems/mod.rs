//! Systems - collision, movement and physics shared by the scenes

pub mod collision;
pub mod movement;
pub mod platformer;
pub mod turret;
pub mod viewport;
