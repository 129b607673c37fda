//! Platformer physics - gravity, ground checks and latched jumps.
//!
//! States are just `falling` true/false: a grounded body checks one pixel
//! down each tick, a falling body integrates gravity and lands when its
//! vertical move collides.

mod body;

pub use body::{JumpLatch, Physics, PlatformerBody};
