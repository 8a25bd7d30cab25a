//! Geometric outlines in local (untransformed) coordinates.
//!
//! A [`Path`] is plain data for a renderer to consume: the crate never
//! strokes or fills anything itself. Paths stay in local coordinates; the
//! consumer maps them through a shape's net transform (composed with any
//! ambient transform) before drawing.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// One element of a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// An axis-aligned ellipse.
    Ellipse { center: Point, rx: f64, ry: f64 },
}

/// An ordered list of path segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// A polyline through the given points: `MoveTo` the first, `LineTo`
    /// each of the rest.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        let mut segments = Vec::new();
        for (index, point) in points.into_iter().enumerate() {
            if index == 0 {
                segments.push(PathSegment::MoveTo(point));
            } else {
                segments.push(PathSegment::LineTo(point));
            }
        }
        Self { segments }
    }

    /// A single axis-aligned ellipse.
    pub fn ellipse(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            segments: vec![PathSegment::Ellipse { center, rx, ry }],
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_polyline_moves_then_lines() {
        let path = Path::polyline([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);

        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::LineTo(Point::new(1.0, 0.0)),
                PathSegment::LineTo(Point::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_empty_polyline() {
        let path = Path::polyline([]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_ellipse() {
        let path = Path::ellipse(Point::ORIGIN, 1.0, 1.0);
        assert_eq!(path.segments().len(), 1);
        assert!(matches!(
            path.segments()[0],
            PathSegment::Ellipse { rx, ry, .. } if rx == 1.0 && ry == 1.0
        ));
    }
}
