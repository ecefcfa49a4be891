//! Math utilities and types
//!
//! Text geometry lives in object space: +X right, +Y up, and a tiny +Z step
//! per glyph to keep overlapping quads in a stable draw order.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type (texture coordinates)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (vertex positions)
pub type Vec3 = Vector3<f32>;

/// Returns true when `value` is farther from zero than `threshold`.
#[inline]
pub fn exceeds(value: f32, threshold: f32) -> bool {
    value.abs() > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds_threshold() {
        assert!(exceeds(0.01, 0.001));
        assert!(exceeds(-0.01, 0.001));
        assert!(!exceeds(0.001, 0.001));
        assert!(!exceeds(-0.0005, 0.001));
        assert!(!exceeds(0.0, 0.001));
    }
}
