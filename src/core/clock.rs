/// Converts host frame timestamps (milliseconds) into per-tick deltas (seconds).
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Seconds elapsed since the previous timestamp. The first tick is 0.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let last = self.last_ms.unwrap_or(timestamp_ms);
        self.last_ms = Some(timestamp_ms);
        ((timestamp_ms - last) / 1000.0) as f32
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), 0.0);
        assert!((clock.tick(1250.0) - 0.016).abs() < 1e-6);
        assert!((clock.tick(2250.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restarts_at_zero() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.tick(500.0);
        clock.reset();
        assert_eq!(clock.tick(9000.0), 0.0);
    }
}
