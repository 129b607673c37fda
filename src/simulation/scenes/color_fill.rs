use crate::core::Rng;
use crate::domain::random_color;

use super::runner::Scene;

/// Canvas fill that changes to a random color on every left click
pub struct ColorFillCore {
    rng: Rng,
    color: u32,
    clicks: u32,
}

impl ColorFillCore {
    pub fn new(seed: u32) -> Self {
        Self { rng: Rng::new(seed), color: 0xffffff, clicks: 0 }
    }

    pub fn color(&self) -> u32 {
        self.color
    }
}

impl Scene for ColorFillCore {
    fn pointer_button(&mut self, left: bool, pressed: bool) {
        if left && pressed {
            self.clicks += 1;
        }
    }

    fn step(&mut self, _dt: f32) {
        for _ in 0..std::mem::take(&mut self.clicks) {
            self.color = random_color(&mut self.rng);
        }
    }
}
