//! Checked vector helpers on top of glam.
//!
//! glam's own `normalize` silently produces NaNs for zero-length input.
//! Shading needs to notice that case, so normalization here returns a
//! `Result` and leaves the fallback decision to the caller.

use crate::Vec3;
use thiserror::Error;

/// A vector that cannot be normalized (zero or non-finite length).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
pub struct DegenerateVectorError {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl DegenerateVectorError {
    fn new(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Return `v / |v|`, or an error if `|v|` is zero or not finite.
#[inline]
pub fn normalize(v: Vec3) -> Result<Vec3, DegenerateVectorError> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Ok(v / length)
    } else {
        Err(DegenerateVectorError::new(v))
    }
}

/// Component-wise clamp of `v` into `[lo, hi]`.
///
/// A NaN component becomes `lo`. `f32::clamp` would pass it through.
#[inline]
pub fn clamp(v: Vec3, lo: f32, hi: f32) -> Vec3 {
    let v = Vec3::select(v.is_nan_mask(), Vec3::splat(lo), v);
    v.max(Vec3::splat(lo)).min(Vec3::splat(hi))
}
