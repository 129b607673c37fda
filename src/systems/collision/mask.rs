//! Pixel masks - per-pixel alpha read back from decoded sprites.
//!
//! Collision composites two masks the way canvas "destination-in" does:
//! the surviving alpha is `a * b / 255`, and any surviving pixel above the
//! threshold is a hit.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("mask dimensions must be non-zero (got {width}x{height})")]
    Empty { width: u32, height: u32 },
    #[error("buffer holds {actual} bytes but {width}x{height} needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("mask {width}x{height} is too large to address")]
    TooLarge { width: u32, height: u32 },
}

/// Alpha channel of a sprite, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

/// Integer pixel span `[x0, x1) × [y0, y1)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelSpan {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelSpan {
    pub fn intersect(&self, other: &PixelSpan) -> Option<PixelSpan> {
        let span = PixelSpan {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (span.x0 < span.x1 && span.y0 < span.y1).then_some(span)
    }
}

#[inline]
fn composite(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32 + 127) / 255) as u8
}

impl AlphaMask {
    /// Build from RGBA bytes (`ImageData.data` layout)
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MaskError> {
        let pixels = Self::pixel_count(width, height)?;
        let expected = pixels
            .checked_mul(4)
            .ok_or(MaskError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(MaskError::SizeMismatch { width, height, expected, actual: rgba.len() });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self { width, height, alpha })
    }

    /// Build from a bare alpha plane
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, MaskError> {
        let expected = Self::pixel_count(width, height)?;
        if alpha.len() != expected {
            return Err(MaskError::SizeMismatch { width, height, expected, actual: alpha.len() });
        }
        Ok(Self { width, height, alpha })
    }

    /// Fully opaque rectangle
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![255; width as usize * height as usize],
        }
    }

    /// Pixel coordinates are `i32`, so each side must fit in one.
    fn pixel_count(width: u32, height: u32) -> Result<usize, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::Empty { width, height });
        }
        let too_large = MaskError::TooLarge { width, height };
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(too_large);
        }
        (width as usize).checked_mul(height as usize).ok_or(too_large)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at local coordinates, `None` outside the mask
    #[inline]
    pub fn alpha_at(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.alpha[y as usize * self.width as usize + x as usize])
    }

    pub(crate) fn span_at(&self, at: (i32, i32)) -> PixelSpan {
        PixelSpan {
            x0: at.0,
            y0: at.1,
            x1: at.0 + self.width as i32,
            y1: at.1 + self.height as i32,
        }
    }

    /// Composite against `other` placed in the same space; true if any
    /// surviving pixel is above `threshold`.
    pub fn overlaps(&self, at: (i32, i32), other: &AlphaMask, other_at: (i32, i32), threshold: u8) -> bool {
        let Some(span) = self.span_at(at).intersect(&other.span_at(other_at)) else {
            return false;
        };
        self.any_hit(at, span, threshold, |wx, wy| {
            other.alpha_at(wx - other_at.0, wy - other_at.1).unwrap_or(0)
        })
    }

    /// Composite against a fully opaque region (obstacles without a sprite).
    pub(crate) fn overlaps_solid(&self, at: (i32, i32), region: PixelSpan, threshold: u8) -> bool {
        let Some(span) = self.span_at(at).intersect(&region) else {
            return false;
        };
        self.any_hit(at, span, threshold, |_, _| 255)
    }

    /// Composite against a backdrop sampled in world coordinates; `backdrop`
    /// decides what lies outside its own bounds.
    pub(crate) fn overlaps_backdrop(
        &self,
        at: (i32, i32),
        threshold: u8,
        backdrop: impl Fn(i32, i32) -> u8,
    ) -> bool {
        let span = self.span_at(at);
        self.any_hit(at, span, threshold, backdrop)
    }

    fn any_hit(
        &self,
        at: (i32, i32),
        span: PixelSpan,
        threshold: u8,
        other: impl Fn(i32, i32) -> u8,
    ) -> bool {
        for wy in span.y0..span.y1 {
            let row = (wy - at.1) as usize * self.width as usize;
            for wx in span.x0..span.x1 {
                let a = self.alpha[row + (wx - at.0) as usize];
                if a <= threshold {
                    continue;
                }
                if composite(a, other(wx, wy)) > threshold {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 mask with only the top-left 2x2 quadrant opaque
    fn corner_mask() -> AlphaMask {
        let mut alpha = vec![0u8; 16];
        for y in 0..2 {
            for x in 0..2 {
                alpha[y * 4 + x] = 255;
            }
        }
        AlphaMask::from_alpha(4, 4, alpha).unwrap()
    }

    #[test]
    fn from_rgba_takes_alpha_channel() {
        let rgba = [10, 20, 30, 0, 1, 2, 3, 200];
        let mask = AlphaMask::from_rgba(2, 1, &rgba).unwrap();
        assert_eq!(mask.alpha_at(0, 0), Some(0));
        assert_eq!(mask.alpha_at(1, 0), Some(200));
        assert_eq!(mask.alpha_at(2, 0), None);
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        let err = AlphaMask::from_rgba(2, 2, &[0; 12]).unwrap_err();
        assert_eq!(
            err,
            MaskError::SizeMismatch { width: 2, height: 2, expected: 16, actual: 12 }
        );
        assert!(matches!(AlphaMask::from_rgba(0, 3, &[]), Err(MaskError::Empty { .. })));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let huge = 1u32 << 31;
        assert_eq!(
            AlphaMask::from_rgba(huge, huge, &[]),
            Err(MaskError::TooLarge { width: huge, height: huge })
        );
        assert_eq!(
            AlphaMask::from_alpha(huge, 1, Vec::new()),
            Err(MaskError::TooLarge { width: huge, height: 1 })
        );
        // Fits in i32 per side; rejected by size (or overflow on 32-bit hosts).
        assert!(AlphaMask::from_rgba(1 << 16, 1 << 16, &[]).is_err());
    }

    #[test]
    fn transparent_corners_do_not_collide() {
        let a = corner_mask();
        let b = corner_mask();
        // Bounding boxes overlap at a's bottom-right quadrant, which is empty.
        assert!(!a.overlaps((0, 0), &b, (2, 2), 0));
        // Shift b so its opaque quadrant sits on a's opaque quadrant.
        assert!(a.overlaps((0, 0), &b, (1, 1), 0));
    }

    #[test]
    fn threshold_filters_faint_pixels() {
        let faint = AlphaMask::from_alpha(1, 1, vec![90]).unwrap();
        let solid = AlphaMask::solid(1, 1);
        assert!(faint.overlaps((0, 0), &solid, (0, 0), 0));
        assert!(!faint.overlaps((0, 0), &solid, (0, 0), 100));
    }

    #[test]
    fn composite_multiplies_alpha() {
        let half = AlphaMask::from_alpha(1, 1, vec![128]).unwrap();
        // 128 * 128 / 255 ≈ 64
        assert!(half.overlaps((0, 0), &half, (0, 0), 63));
        assert!(!half.overlaps((0, 0), &half, (0, 0), 64));
    }

    #[test]
    fn solid_region_only_checks_intersection() {
        let mask = corner_mask();
        let region = PixelSpan { x0: 3, y0: 0, x1: 10, y1: 10 };
        assert!(!mask.overlaps_solid((0, 0), region, 0));
        assert!(mask.overlaps_solid((2, 0), region, 0));
    }
}
