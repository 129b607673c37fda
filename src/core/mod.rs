//! Core - value types and ambient helpers shared by every scene

pub mod clock;
pub mod geometry;
pub mod logging;
pub(crate) mod perf_timer;
pub mod random;

pub use clock::FrameClock;
pub use geometry::{Axis, Rect, Vec2};
pub use random::Rng;
