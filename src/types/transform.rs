//! Geometric transform operations and their composition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{Result, SceneError};
use crate::types::Affine;

/// A 2D rotation, scale, or translation.
///
/// The constructors (`rotate`, `scale`, `translate`) and the typed
/// extractors (`as_rotate`, `as_scale`, `as_translate`) form each variant's
/// conversion-rule pair: building a value from parsed components, and
/// getting the components back out only when the variant matches. The
/// extractors are what keep the printer variant-exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Rotation about the origin, angle in degrees.
    Rotate { degrees: f64 },
    /// Anisotropic scale about the origin.
    Scale { sx: f64, sy: f64 },
    /// Translation.
    Translate { tx: f64, ty: f64 },
}

impl Transform {
    pub const fn rotate(degrees: f64) -> Self {
        Self::Rotate { degrees }
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::Scale { sx, sy }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::Translate { tx, ty }
    }

    /// Extract the rotation angle, failing for any other variant.
    pub fn as_rotate(&self) -> Result<f64> {
        match *self {
            Self::Rotate { degrees } => Ok(degrees),
            other => Err(SceneError::VariantMismatch {
                expected: "rotate",
                found: other.tag(),
            }),
        }
    }

    /// Extract the scale factors, failing for any other variant.
    pub fn as_scale(&self) -> Result<(f64, f64)> {
        match *self {
            Self::Scale { sx, sy } => Ok((sx, sy)),
            other => Err(SceneError::VariantMismatch {
                expected: "scale",
                found: other.tag(),
            }),
        }
    }

    /// Extract the translation offsets, failing for any other variant.
    pub fn as_translate(&self) -> Result<(f64, f64)> {
        match *self {
            Self::Translate { tx, ty } => Ok((tx, ty)),
            other => Err(SceneError::VariantMismatch {
                expected: "translate",
                found: other.tag(),
            }),
        }
    }

    /// Variant name used in error messages.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
            Self::Translate { .. } => "translate",
        }
    }

    /// The elementary affine transform for this operation.
    pub fn to_affine(&self) -> Affine {
        match *self {
            Self::Rotate { degrees } => Affine::rotation(degrees.to_radians()),
            Self::Scale { sx, sy } => Affine::scale(sx, sy),
            Self::Translate { tx, ty } => Affine::translation(tx, ty),
        }
    }

    /// Compose an ordered list into one net transform.
    ///
    /// List order is application order: the first transform is applied to
    /// the local shape first, later ones on top. Composition is not
    /// commutative, so the fold direction matters.
    pub fn combine(transforms: &[Transform]) -> Affine {
        transforms
            .iter()
            .fold(Affine::IDENTITY, |net, transform| net.then(transform.to_affine()))
    }
}

impl FromStr for Transform {
    type Err = SceneError;

    /// Parse a single transform, requiring the whole string to be consumed.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        codec::parse_complete(s, codec::transform::parse_transform)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        codec::transform::print_transform(&mut out, self).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Point;

    const EPSILON: f64 = 1e-9;

    fn assert_point_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_conversion_rules_extract_matching_variant() {
        assert_eq!(Transform::rotate(45.5).as_rotate().unwrap(), 45.5);
        assert_eq!(Transform::scale(2.0, 3.0).as_scale().unwrap(), (2.0, 3.0));
        assert_eq!(
            Transform::translate(1.0, 2.0).as_translate().unwrap(),
            (1.0, 2.0)
        );
    }

    #[test]
    fn test_conversion_rules_reject_other_variants() {
        let err = Transform::translate(1.0, 2.0).as_rotate().unwrap_err();
        assert_eq!(
            err,
            SceneError::VariantMismatch {
                expected: "rotate",
                found: "translate",
            }
        );
        assert!(Transform::rotate(1.0).as_scale().is_err());
        assert!(Transform::scale(1.0, 1.0).as_translate().is_err());
    }

    #[test]
    fn test_combine_empty_list_is_identity() {
        assert_eq!(Transform::combine(&[]), Affine::IDENTITY);
    }

    #[test]
    fn test_combine_applies_in_list_order() {
        // scale then rotate: (1,0) -> (2,0) -> (0,2)
        let net = Transform::combine(&[Transform::scale(2.0, 1.0), Transform::rotate(90.0)]);
        assert_point_close(net.apply(Point::new(1.0, 0.0)), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_combine_is_not_commutative() {
        // rotate then scale: (1,0) -> (0,1) -> (0,1)
        let net = Transform::combine(&[Transform::rotate(90.0), Transform::scale(2.0, 1.0)]);
        assert_point_close(net.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_combine_with_translation() {
        // rotate 90 then translate: (1,0) -> (0,1) -> (1.5,1.5)
        let net = Transform::combine(&[
            Transform::rotate(90.0),
            Transform::translate(1.5, 0.5),
        ]);
        assert_point_close(net.apply(Point::new(1.0, 0.0)), Point::new(1.5, 1.5));
    }

    #[test]
    fn test_rotation_converts_degrees() {
        let net = Transform::rotate(180.0).to_affine();
        assert_point_close(net.apply(Point::new(1.0, 0.0)), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_from_str_and_display() {
        let transform: Transform = "r 45.5".parse().unwrap();
        assert_eq!(transform, Transform::rotate(45.5));
        assert_eq!(transform.to_string(), "r 45.5");

        assert_eq!(
            Transform::scale(2.0, 1.0).to_string().parse::<Transform>().unwrap(),
            Transform::scale(2.0, 1.0)
        );
    }

    #[test]
    fn test_from_str_rejects_trailing_input() {
        assert!(matches!(
            "r 45 junk".parse::<Transform>().unwrap_err(),
            SceneError::TrailingInput { .. }
        ));
    }
}
