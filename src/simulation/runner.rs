use crate::core::perf_timer::TickPerf;
use crate::core::FrameClock;

/// A demo's simulation state.
///
/// Input hooks only stage state; all movement happens in `step`.
pub trait Scene {
    /// Raw DOM key event. Returns false when the key is not used.
    fn key(&mut self, _code: u32, _pressed: bool) -> bool {
        false
    }

    /// Cursor position in canvas coordinates
    fn pointer_move(&mut self, _x: f32, _y: f32) {}

    /// Mouse button change; `left` is the primary button
    fn pointer_button(&mut self, _left: bool, _pressed: bool) {}

    /// Advance by `dt` seconds
    fn step(&mut self, dt: f32);
}

/// Longest step a single frame may take; longer gaps (a backgrounded tab)
/// are clamped to it.
pub const MAX_STEP_SECONDS: f32 = 0.1;

/// Drives a scene from host frame timestamps
pub struct Runner<S> {
    scene: S,
    clock: FrameClock,
    perf: TickPerf,
    ticks: u64,
}

impl<S: Scene> Runner<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            clock: FrameClock::new(),
            perf: TickPerf::default(),
            ticks: 0,
        }
    }

    /// One frame: derive the delta from `timestamp_ms` and step the scene.
    /// The delta is kept within `0..=MAX_STEP_SECONDS`.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms).clamp(0.0, MAX_STEP_SECONDS);
        self.perf.begin();
        self.scene.step(dt);
        self.perf.end();
        self.ticks += 1;
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn enable_perf(&mut self, enabled: bool) {
        self.perf.set_enabled(enabled);
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.perf.last_tick_ms()
    }
}
