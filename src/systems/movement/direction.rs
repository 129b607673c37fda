use std::f32::consts::FRAC_1_SQRT_2;

use crate::core::Vec2;
use crate::input::Controls;

/// Per-axis scale for diagonal travel (√2⁄2), so a diagonal step has the
/// same length as an orthogonal one.
pub const DIAGONAL_SCALE: f32 = FRAC_1_SQRT_2;

/// Sum of the held direction keys, optionally normalized on diagonals.
///
/// Opposite keys cancel out.
pub fn direction_vector(controls: &Controls, normalize_diagonal: bool) -> Vec2 {
    let mut v = Vec2::zero();
    for key in controls.held_directions() {
        if let Some(unit) = key.unit() {
            v += unit;
        }
    }
    if normalize_diagonal && v.x != 0.0 && v.y != 0.0 {
        v = v * DIAGONAL_SCALE;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn held(keys: &[Key]) -> Controls {
        let mut c = Controls::new();
        for k in keys {
            c.set(*k, true);
        }
        c
    }

    #[test]
    fn orthogonal_is_unit() {
        assert_eq!(direction_vector(&held(&[Key::Left]), true), Vec2::new(-1.0, 0.0));
        assert_eq!(direction_vector(&held(&[Key::Down]), true), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn diagonal_matches_orthogonal_length() {
        let v = direction_vector(&held(&[Key::Up, Key::Right]), true);
        assert!((v.x - 0.70710677).abs() < 1e-6);
        assert!((v.y + 0.70710677).abs() < 1e-6);
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unnormalized_diagonal_is_faster() {
        let v = direction_vector(&held(&[Key::Up, Key::Right]), false);
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let v = direction_vector(&held(&[Key::Left, Key::Right, Key::Up]), true);
        assert_eq!(v, Vec2::new(0.0, -1.0));
    }
}
