//! Block layouts shared by the platformer and four-direction demos.

use crate::core::{Rect, Rng};

use super::obstacle::{random_color, Obstacle};

/// Optional tweaks to the walled arena
#[derive(Clone, Copy, Debug, Default)]
pub struct ArenaOptions {
    /// Leave out the ceiling block starting at this x (spawn hole)
    pub ceiling_gap: Option<f32>,
    /// Extra row of blocks at `y` for every column `>= from_x`
    pub ledge: Option<(f32, f32)>,
}

/// Three floating blocks plus a ring of blocks around the canvas
pub fn arena(canvas: &Rect, block: f32, options: ArenaOptions, rng: &mut Rng) -> Vec<Obstacle> {
    let mut out = Vec::new();
    let mut push = |x: f32, y: f32| {
        out.push(Obstacle::new(Rect::new(x, y, block, block), random_color(rng)));
    };

    for (x, y) in [(400.0, 350.0), (300.0, 250.0), (150.0, 150.0)] {
        push(x, y);
    }

    let mut x = canvas.left();
    while x < canvas.right() {
        if options.ceiling_gap != Some(x) {
            push(x, canvas.top());
        }
        if let Some((ledge_y, from_x)) = options.ledge {
            if x >= from_x {
                push(x, ledge_y);
            }
        }
        push(x, canvas.bottom() - block);
        x += block;
    }

    let mut y = canvas.top() + block;
    while y < canvas.bottom() - block {
        push(canvas.left(), y);
        push(canvas.right() - block, y);
        y += block;
    }
    out
}
