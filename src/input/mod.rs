//! Input - staged keyboard and mouse state.
//!
//! Event handlers only record state here; scenes consume it on the next tick.

mod keyboard;
mod mouse;

pub use keyboard::{Controls, DirectionStack, Key, KEY_COUNT};
pub use mouse::Mouse;
