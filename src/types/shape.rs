//! Shape kinds and the shape value itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::SceneError;
use crate::types::{Affine, DrawStyle, Path, Point, Transform};

/// The kinds of shape the language knows about.
///
/// Each kind owns its keyword literal and its fixed unit-sized path
/// definition. Keywords must be mutually prefix-distinct; the codec's test
/// suite checks every pair, so a colliding addition fails at test time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Square with sides of length one, centered at the origin.
    UnitSquare,
    /// Circle with radius one, centered at the origin. Note this is larger
    /// than the unit square; a similar-sized circle would have radius 0.5.
    UnitCircle,
}

impl ShapeKind {
    /// Every kind, in grammar declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::UnitSquare, ShapeKind::UnitCircle];

    /// The keyword literal that introduces this kind in a document.
    pub const fn keyword(self) -> &'static str {
        match self {
            ShapeKind::UnitSquare => "unit square",
            ShapeKind::UnitCircle => "unit circle",
        }
    }

    /// The fixed outline in local coordinates.
    pub fn path(self) -> Path {
        match self {
            ShapeKind::UnitSquare => Path::polyline([
                Point::new(-0.5, -0.5),
                Point::new(-0.5, 0.5),
                Point::new(0.5, 0.5),
                Point::new(0.5, -0.5),
                Point::new(-0.5, -0.5),
            ]),
            ShapeKind::UnitCircle => Path::ellipse(Point::ORIGIN, 1.0, 1.0),
        }
    }
}

/// A shape: kind, draw style, and ordered transforms.
///
/// Immutable once constructed; equality is structural over all three parts.
/// The net transform is derived from the sequence on demand rather than
/// stored, so it can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub style: DrawStyle,
    pub transforms: Vec<Transform>,
}

impl Shape {
    pub fn new(kind: ShapeKind, style: DrawStyle, transforms: Vec<Transform>) -> Self {
        Self {
            kind,
            style,
            transforms,
        }
    }

    /// The outline in local coordinates.
    pub fn path(&self) -> Path {
        self.kind.path()
    }

    /// The composed net transform, transforms applied in list order.
    pub fn net_transform(&self) -> Affine {
        Transform::combine(&self.transforms)
    }
}

impl FromStr for Shape {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_complete(s, codec::shape::parse_shape)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        codec::shape::print_shape(&mut out, self).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{Color, PathSegment, Style};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_unit_square_path() {
        let path = ShapeKind::UnitSquare.path();

        assert_eq!(path.segments().len(), 5);
        assert_eq!(
            path.segments()[0],
            PathSegment::MoveTo(Point::new(-0.5, -0.5))
        );
        // closes back to the starting corner
        assert_eq!(
            path.segments()[4],
            PathSegment::LineTo(Point::new(-0.5, -0.5))
        );
    }

    #[test]
    fn test_unit_circle_path() {
        let path = ShapeKind::UnitCircle.path();

        assert_eq!(
            path.segments(),
            &[PathSegment::Ellipse {
                center: Point::ORIGIN,
                rx: 1.0,
                ry: 1.0,
            }]
        );
    }

    #[test]
    fn test_net_transform_composes_in_order() {
        let shape = Shape::new(
            ShapeKind::UnitSquare,
            DrawStyle::new(Style::Filled, Color::Red),
            vec![Transform::scale(2.0, 1.0), Transform::rotate(90.0)],
        );

        let mapped = shape.net_transform().apply(Point::new(1.0, 0.0));
        assert!((mapped.x - 0.0).abs() < EPSILON);
        assert!((mapped.y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_net_transform_of_empty_sequence_is_identity() {
        let shape = Shape::new(
            ShapeKind::UnitCircle,
            DrawStyle::new(Style::Path, Color::Blue),
            Vec::new(),
        );

        assert_eq!(shape.net_transform(), Affine::IDENTITY);
    }

    #[test]
    fn test_from_str_and_display() {
        let source = "unit square\nfilled red\n\nr 45.5";
        let shape: Shape = source.parse().unwrap();

        assert_eq!(shape.kind, ShapeKind::UnitSquare);
        assert_eq!(shape.to_string(), "unit square\nfilled red\nr 45.5");
    }
}
