//! 2D affine transform matrix.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// A 2D affine transform.
///
/// Row-vector convention: a point maps as
/// `x' = a·x + c·y + tx`, `y' = b·x + d·y + ty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Affine {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Counterclockwise rotation about the origin, angle in radians.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Anisotropic scale about the origin.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Compose with `other` applied after `self`: the result maps a point
    /// through `self` first, then through `other`.
    pub fn then(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    /// Map a point through this transform.
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_point_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_identity_maps_points_unchanged() {
        let point = Point::new(2.75, -3.5);
        assert_point_close(Affine::IDENTITY.apply(point), point);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let rotated = Affine::rotation(90.0_f64.to_radians()).apply(Point::new(1.0, 0.0));
        assert_point_close(rotated, Point::new(0.0, 1.0));
    }

    #[test]
    fn test_scale() {
        let scaled = Affine::scale(2.0, 3.0).apply(Point::new(1.0, 1.0));
        assert_point_close(scaled, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_translation() {
        let moved = Affine::translation(1.5, -2.5).apply(Point::new(1.0, 1.0));
        assert_point_close(moved, Point::new(2.5, -1.5));
    }

    #[test]
    fn test_then_applies_left_operand_first() {
        // scale then translate: (1,0) -> (2,0) -> (3,0)
        let first = Affine::scale(2.0, 2.0).then(Affine::translation(1.0, 0.0));
        assert_point_close(first.apply(Point::new(1.0, 0.0)), Point::new(3.0, 0.0));

        // translate then scale: (1,0) -> (2,0) -> (4,0)
        let second = Affine::translation(1.0, 0.0).then(Affine::scale(2.0, 2.0));
        assert_point_close(second.apply(Point::new(1.0, 0.0)), Point::new(4.0, 0.0));
    }

    #[test]
    fn test_then_matches_pointwise_application() {
        let lhs = Affine::rotation(0.7).then(Affine::scale(2.0, 0.5));
        let point = Point::new(1.25, -0.75);

        let composed = lhs.apply(point);
        let stepwise = Affine::scale(2.0, 0.5).apply(Affine::rotation(0.7).apply(point));
        assert_point_close(composed, stepwise);
    }
}
