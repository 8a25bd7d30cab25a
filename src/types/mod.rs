//! Core domain types for scena.
//!
//! This module contains the value types the codecs parse into and print
//! from:
//! - `Point`, `Affine` - geometry primitives
//! - `Style`, `Color`, `DrawStyle` - how a shape is drawn
//! - `Transform` - rotate/scale/translate operations and their composition
//! - `Path`, `PathSegment` - local-coordinate outlines
//! - `ShapeKind`, `Shape`, `Scene` - the scene model itself

mod affine;
mod path;
mod point;
mod scene;
mod shape;
mod style;
mod transform;

pub use affine::Affine;
pub use path::{Path, PathSegment};
pub use point::Point;
pub use scene::Scene;
pub use shape::{Shape, ShapeKind};
pub use style::{Color, DrawStyle, Style};
pub use transform::Transform;
