//! scena - bidirectional text codec for 2D geometric scenes
//!
//! A small textual language describes 2D scenes: shapes, draw styles, and
//! geometric transforms. Every grammar production is a parse/print pair
//! over the same canonical text, so parsing and printing are exact inverses
//! for every well-formed value. Rendering is deliberately out of scope: a
//! scene exposes plain paths, style descriptors, and composed affine
//! transforms for a consumer to draw with whatever toolkit it likes.
//!
//! # Example
//!
//! ```
//! use scena::{parse_scene, print_scene, ShapeKind, Transform};
//!
//! let source = "unit square\nfilled red\n\nr 45.5";
//! let scene = parse_scene(source).unwrap();
//!
//! assert_eq!(scene.shapes[0].kind, ShapeKind::UnitSquare);
//! assert_eq!(scene.shapes[0].transforms, vec![Transform::rotate(45.5)]);
//!
//! // printing is canonical: single spaces, minimal vertical whitespace
//! let canonical = print_scene(&scene).unwrap();
//! assert_eq!(canonical, "unit square\nfilled red\nr 45.5");
//! ```

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{parse_scene, print_scene, Location};
pub use error::{Result, SceneError};
pub use types::{
    Affine, Color, DrawStyle, Path, PathSegment, Point, Scene, Shape, ShapeKind, Style, Transform,
};
