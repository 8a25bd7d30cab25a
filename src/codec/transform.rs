//! Transform codec: single operations and newline-separated sequences.
//!
//! A transform is a tag letter (`r`, `s`, `t`) followed by one or two
//! numbers, with one-or-more spaces/tabs between every element. Printing
//! normalizes each separator to a single space.
//!
//! Every variant has a conversion-rule pair: a constructor on [`Transform`]
//! and a typed extractor (`as_rotate` and friends) that fails with
//! `VariantMismatch` for any other variant. The printer dispatches on the
//! variant tag and then goes through that variant's extractor, so a value
//! can only ever print through its own rule.

use crate::codec::cursor::Cursor;
use crate::codec::number::{parse_number, print_number};
use crate::error::{Result, SceneError};
use crate::types::Transform;

/// Parse a single transform at the cursor, dispatching on the tag letter.
pub(crate) fn parse_transform(cursor: &mut Cursor) -> Result<Transform> {
    match cursor.peek() {
        Some('r') => parse_rotate(cursor),
        Some('s') => parse_scale(cursor),
        Some('t') => parse_translate(cursor),
        Some(found) => Err(SceneError::UnknownSymbol {
            expected: "transform",
            found: found.to_string(),
            location: cursor.location(),
            help: Some("a transform starts with r, s, or t".to_string()),
        }),
        None => Err(cursor.end_of_input("transform")),
    }
}

/// Print a single transform through its own variant's conversion rule.
pub(crate) fn print_transform(out: &mut String, transform: &Transform) -> Result<()> {
    match transform {
        Transform::Rotate { .. } => print_rotate(out, transform),
        Transform::Scale { .. } => print_scale(out, transform),
        Transform::Translate { .. } => print_translate(out, transform),
    }
}

/// Parse a sequence of zero or more transforms.
///
/// The non-empty alternative is tried first and consumes any leading blank
/// lines; the empty alternative consumes nothing. The order is load-bearing:
/// the empty alternative trivially matches everything and would shadow the
/// non-empty one if tried first.
pub(crate) fn parse_transforms(cursor: &mut Cursor) -> Result<Vec<Transform>> {
    let start = cursor.offset();
    match parse_transforms_nonempty(cursor) {
        Ok(transforms) => Ok(transforms),
        Err(_) => {
            cursor.set_offset(start);
            Ok(Vec::new())
        }
    }
}

/// One or more transforms separated by exactly one newline, after any run of
/// leading newlines.
fn parse_transforms_nonempty(cursor: &mut Cursor) -> Result<Vec<Transform>> {
    cursor.eat_newlines();
    let mut transforms = vec![parse_transform(cursor)?];

    loop {
        let separator = cursor.offset();
        if !cursor.eat_newline() {
            break;
        }
        match parse_transform(cursor) {
            Ok(transform) => transforms.push(transform),
            Err(_) => {
                // the newline belongs to whatever follows the sequence
                cursor.set_offset(separator);
                break;
            }
        }
    }

    Ok(transforms)
}

/// Print a sequence: transforms joined by a single newline, nothing at all
/// for an empty sequence.
pub(crate) fn print_transforms(out: &mut String, transforms: &[Transform]) -> Result<()> {
    for (index, transform) in transforms.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        print_transform(out, transform)?;
    }
    Ok(())
}

fn parse_rotate(cursor: &mut Cursor) -> Result<Transform> {
    cursor.advance(1); // tag `r`
    cursor.require_hspace()?;
    let degrees = parse_number(cursor)?;
    Ok(Transform::rotate(degrees))
}

fn parse_scale(cursor: &mut Cursor) -> Result<Transform> {
    cursor.advance(1); // tag `s`
    cursor.require_hspace()?;
    let sx = parse_number(cursor)?;
    cursor.require_hspace()?;
    let sy = parse_number(cursor)?;
    Ok(Transform::scale(sx, sy))
}

fn parse_translate(cursor: &mut Cursor) -> Result<Transform> {
    cursor.advance(1); // tag `t`
    cursor.require_hspace()?;
    let tx = parse_number(cursor)?;
    cursor.require_hspace()?;
    let ty = parse_number(cursor)?;
    Ok(Transform::translate(tx, ty))
}

pub(crate) fn print_rotate(out: &mut String, transform: &Transform) -> Result<()> {
    let degrees = transform.as_rotate()?;
    out.push_str("r ");
    print_number(out, degrees);
    Ok(())
}

pub(crate) fn print_scale(out: &mut String, transform: &Transform) -> Result<()> {
    let (sx, sy) = transform.as_scale()?;
    out.push_str("s ");
    print_number(out, sx);
    out.push(' ');
    print_number(out, sy);
    Ok(())
}

pub(crate) fn print_translate(out: &mut String, transform: &Transform) -> Result<()> {
    let (tx, ty) = transform.as_translate()?;
    out.push_str("t ");
    print_number(out, tx);
    out.push(' ');
    print_number(out, ty);
    Ok(())
}
