//! Draw-style codec: `<style-keyword> <hspace+> <color-keyword>`.

use crate::codec::cursor::Cursor;
use crate::codec::keyword::{parse_keyword, print_keyword};
use crate::error::Result;
use crate::types::DrawStyle;

pub(crate) fn parse_draw_style(cursor: &mut Cursor) -> Result<DrawStyle> {
    let style = parse_keyword(cursor)?;
    cursor.require_hspace()?;
    let color = parse_keyword(cursor)?;
    Ok(DrawStyle::new(style, color))
}

/// Print as `<style> <color>` with a single space.
pub(crate) fn print_draw_style(out: &mut String, draw_style: &DrawStyle) {
    print_keyword(out, draw_style.style);
    out.push(' ');
    print_keyword(out, draw_style.color);
}
