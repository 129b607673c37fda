//! Domain - level content and scene configuration

pub mod config;
pub mod level;
pub mod obstacle;

pub use config::ConfigError;
pub use obstacle::{css_rgb, random_color, Obstacle};
