//! Scene/document codec: the entry point for whole inputs.
//!
//! A document is zero or more shapes. Parsing tolerates leading, separating,
//! and trailing blank-line runs; printing joins shapes with a single newline
//! and emits no surrounding vertical whitespace.

use crate::codec::cursor::Cursor;
use crate::codec::parse_complete;
use crate::codec::shape::{parse_shape, print_shape};
use crate::error::Result;
use crate::types::Scene;

/// Parse a whole document into a [`Scene`], requiring full consumption.
pub fn parse_scene(source: &str) -> Result<Scene> {
    parse_complete(source, parse_scene_body)
}

/// Print a scene in canonical form.
///
/// Fails only if a transform value does not satisfy its own variant's
/// conversion rule, which cannot happen for values of these types.
pub fn print_scene(scene: &Scene) -> Result<String> {
    let mut out = String::new();
    for (index, shape) in scene.shapes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        print_shape(&mut out, shape)?;
    }
    Ok(out)
}

pub(crate) fn parse_scene_body(cursor: &mut Cursor) -> Result<Scene> {
    let mut shapes = Vec::new();

    cursor.eat_newlines();
    while !cursor.is_at_end() {
        shapes.push(parse_shape(cursor)?);
        cursor.eat_newlines();
    }

    Ok(Scene::new(shapes))
}
