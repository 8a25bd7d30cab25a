//! Bidirectional codecs for the scene language.
//!
//! Every production in the grammar lives here as a parse/print pair over the
//! same canonical text fragment, so the two directions stay exact inverses:
//!
//! - [`number`] - numeric literals and points
//! - [`keyword`] - closed keyword enumerations (style, color)
//! - [`style`] - draw styles
//! - [`transform`] - single transforms and newline-separated sequences
//! - [`shape`] - shape kinds with style and transforms
//! - [`document`] - whole scenes, the public entry point
//!
//! Parsing is lenient about whitespace runs where the grammar allows it;
//! printing always produces canonical text (single spaces, single-newline
//! separators, shortest round-trip numbers).

pub(crate) mod cursor;
pub(crate) mod keyword;
pub(crate) mod number;
pub(crate) mod shape;
pub(crate) mod style;
pub(crate) mod transform;

pub mod document;
pub mod location;

pub use document::{parse_scene, print_scene};
pub use location::Location;

use crate::error::{Result, SceneError};
use cursor::Cursor;

/// Run a sub-parser against `source` and require it to consume everything.
pub(crate) fn parse_complete<T>(
    source: &str,
    parse: impl FnOnce(&mut Cursor) -> Result<T>,
) -> Result<T> {
    let mut cursor = Cursor::new(source);
    let value = parse(&mut cursor)?;
    if !cursor.is_at_end() {
        return Err(SceneError::TrailingInput {
            location: cursor.location(),
        });
    }
    Ok(value)
}
