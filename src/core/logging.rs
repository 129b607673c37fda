//! Console logging - routes the `log` facade to the browser console.
//!
//! Native builds install no backend; tests bring their own `env_logger`.

use log::Level;

/// Install the console logger. A repeat call keeps the first logger.
#[cfg(all(target_arch = "wasm32", feature = "console_log"))]
pub fn init(level: Level) {
    let _ = console_log::init_with_level(level);
}

#[cfg(not(all(target_arch = "wasm32", feature = "console_log")))]
pub fn init(level: Level) {
    log::set_max_level(level.to_level_filter());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_repeatable() {
        let _ = env_logger::builder().is_test(true).try_init();
        init(Level::Warn);
        init(Level::Info);
        log::info!("logger installed");
    }
}
