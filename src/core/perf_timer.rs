//! Tick timing for the optional perf readout on scenes.

/// Wall-clock milliseconds from the host (`Date.now()` in the browser).
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Records how long the last simulated tick took, when enabled.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TickPerf {
    enabled: bool,
    started_ms: f64,
    last_tick_ms: f64,
}

impl TickPerf {
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.last_tick_ms = 0.0;
        }
    }

    #[inline]
    pub(crate) fn begin(&mut self) {
        if self.enabled {
            self.started_ms = now_ms();
        }
    }

    #[inline]
    pub(crate) fn end(&mut self) {
        if self.enabled {
            self.last_tick_ms = (now_ms() - self.started_ms).max(0.0);
        }
    }

    /// Duration of the last tick (0 while disabled)
    pub(crate) fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }
}
