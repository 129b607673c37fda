use crate::core::{Rect, Rng};
use crate::systems::collision::AlphaMask;

/// Static level geometry. Lives for the whole session.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub rect: Rect,
    /// Cosmetic fill, packed `0xRRGGBB`
    pub color: u32,
    /// Sprite alpha for pixel-perfect tests; `None` means fully opaque
    pub mask: Option<AlphaMask>,
}

impl Obstacle {
    pub fn new(rect: Rect, color: u32) -> Self {
        Self { rect, color, mask: None }
    }

    pub fn with_mask(mut self, mask: AlphaMask) -> Self {
        self.mask = Some(mask);
        self
    }
}

/// Random opaque color, packed `0xRRGGBB`
pub fn random_color(rng: &mut Rng) -> u32 {
    let r = rng.next_u8() as u32;
    let g = rng.next_u8() as u32;
    let b = rng.next_u8() as u32;
    (r << 16) | (g << 8) | b
}

/// CSS `rgb(r,g,b)` string for a packed color
pub fn css_rgb(color: u32) -> String {
    format!(
        "rgb({},{},{})",
        (color >> 16) & 0xff,
        (color >> 8) & 0xff,
        color & 0xff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rgb_unpacks_channels() {
        assert_eq!(css_rgb(0x10ff00), "rgb(16,255,0)");
        assert_eq!(css_rgb(0), "rgb(0,0,0)");
    }

    #[test]
    fn random_color_fits_24_bits() {
        let mut rng = Rng::new(99);
        for _ in 0..32 {
            assert!(random_color(&mut rng) <= 0xff_ffff);
        }
    }
}
