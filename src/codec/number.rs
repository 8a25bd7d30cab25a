//! Numeric literal and point codec.
//!
//! Numbers follow the standard decimal floating-point shape: optional sign,
//! integer digits, optional fractional part, optional exponent. The printed
//! form is Rust's shortest round-trip representation, which always carries a
//! fractional digit for integral values (`2` prints as `"2.0"`), so every
//! printed number reparses to the identical bit pattern.

use crate::codec::cursor::Cursor;
use crate::error::Result;
use crate::types::Point;

/// Parse a floating-point literal at the cursor.
pub(crate) fn parse_number(cursor: &mut Cursor) -> Result<f64> {
    let extent = number_extent(cursor.rest());
    if extent == 0 {
        return Err(cursor.malformed("number"));
    }

    let text = &cursor.rest()[..extent];
    let value: f64 = text.parse().map_err(|_| cursor.malformed("number"))?;
    cursor.advance(extent);
    Ok(value)
}

/// Print a number in canonical form.
pub(crate) fn print_number(out: &mut String, value: f64) {
    // {:?} keeps at least one fractional digit outside exponent range
    out.push_str(&format!("{value:?}"));
}

/// Parse two numbers separated by one-or-more spaces/tabs.
pub(crate) fn parse_point(cursor: &mut Cursor) -> Result<Point> {
    let x = parse_number(cursor)?;
    cursor.require_hspace()?;
    let y = parse_number(cursor)?;
    Ok(Point::new(x, y))
}

/// Print a point as `<x> <y>` with a single space.
pub(crate) fn print_point(out: &mut String, point: Point) {
    print_number(out, point.x);
    out.push(' ');
    print_number(out, point.y);
}

/// Byte length of the maximal number literal prefix of `text`.
///
/// The exponent marker is only included when at least one digit follows it,
/// so `"2e"` scans as `"2"` and leaves the `e` behind. The `inf`/`nan`
/// spellings accepted by `f64::from_str` are not part of the grammar and
/// never match.
fn number_extent(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let integer_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == integer_start {
        return 0;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_digits {
            i = j;
        }
    }

    i
}
