//! Closed-enumeration token codec.
//!
//! Each keyword enumeration exposes a table of members; parsing scans a run
//! of lowercase letters and looks the token up in the table, printing walks
//! the same table in reverse. One table serves both directions, which is
//! what keeps the keyword codecs exactly invertible.

use crate::codec::cursor::Cursor;
use crate::error::{Result, SceneError};
use crate::types::{Color, Style};

/// A closed set of keyword tokens usable as a grammar terminal.
pub(crate) trait KeywordSet: Copy + 'static {
    /// What this set is called in error messages, e.g. "style keyword".
    const DESCRIPTION: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == token)
    }
}

impl KeywordSet for Style {
    const DESCRIPTION: &'static str = "style keyword";
    const ALL: &'static [Self] = &Style::ALL;

    fn as_str(self) -> &'static str {
        Style::as_str(self)
    }
}

impl KeywordSet for Color {
    const DESCRIPTION: &'static str = "color keyword";
    const ALL: &'static [Self] = &Color::ALL;

    fn as_str(self) -> &'static str {
        Color::as_str(self)
    }
}

/// Parse one keyword of the set `K` at the cursor.
///
/// Matching is case-sensitive: the token scan only takes ASCII lowercase
/// letters, so `"Path"` fails before lookup even happens.
pub(crate) fn parse_keyword<K: KeywordSet>(cursor: &mut Cursor) -> Result<K> {
    let start = cursor.offset();
    let token_len = cursor
        .rest()
        .bytes()
        .take_while(|b| b.is_ascii_lowercase())
        .count();
    if token_len == 0 {
        return Err(cursor.malformed(K::DESCRIPTION));
    }

    let token = &cursor.rest()[..token_len];
    cursor.advance(token_len);

    K::from_token(token).ok_or_else(|| SceneError::UnknownSymbol {
        expected: K::DESCRIPTION,
        found: token.to_string(),
        location: cursor.location_at(start),
        help: Some(format!("expected one of: {}", member_list::<K>())),
    })
}

/// Print a keyword as its exact token spelling.
pub(crate) fn print_keyword<K: KeywordSet>(out: &mut String, keyword: K) {
    out.push_str(keyword.as_str());
}

fn member_list<K: KeywordSet>() -> String {
    K::ALL
        .iter()
        .map(|member| member.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_style(source: &str) -> Result<Style> {
        let mut cursor = Cursor::new(source);
        parse_keyword(&mut cursor)
    }

    fn parse_color(source: &str) -> Result<Color> {
        let mut cursor = Cursor::new(source);
        parse_keyword(&mut cursor)
    }

    #[test]
    fn test_parse_style_members() {
        assert_eq!(parse_style("path").unwrap(), Style::Path);
        assert_eq!(parse_style("closed").unwrap(), Style::Closed);
        assert_eq!(parse_style("filled").unwrap(), Style::Filled);
    }

    #[test]
    fn test_parse_color_members() {
        assert_eq!(parse_color("black").unwrap(), Color::Black);
        assert_eq!(parse_color("indigo").unwrap(), Color::Indigo);
        assert_eq!(parse_color("yellow").unwrap(), Color::Yellow);
    }

    #[test]
    fn test_unknown_symbol_carries_token_and_location() {
        let err = parse_style("dotted rest").unwrap_err();

        match err {
            SceneError::UnknownSymbol {
                expected,
                found,
                location,
                ..
            } => {
                assert_eq!(expected, "style keyword");
                assert_eq!(found, "dotted");
                assert_eq!(location.offset, 0);
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert!(parse_style("Path").is_err());
        assert!(parse_color("RED").is_err());
    }

    #[test]
    fn test_keyword_stops_at_non_letter() {
        let mut cursor = Cursor::new("filled red");

        let style: Style = parse_keyword(&mut cursor).unwrap();
        assert_eq!(style, Style::Filled);
        assert_eq!(cursor.rest(), " red");
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        assert!(matches!(
            parse_style("").unwrap_err(),
            SceneError::UnexpectedEndOfInput { .. }
        ));
    }

    #[test]
    fn test_print_keyword_round_trips_every_member() {
        for &style in <Style as KeywordSet>::ALL {
            let mut out = String::new();
            print_keyword(&mut out, style);
            assert_eq!(parse_style(&out).unwrap(), style);
        }
        for &color in <Color as KeywordSet>::ALL {
            let mut out = String::new();
            print_keyword(&mut out, color);
            assert_eq!(parse_color(&out).unwrap(), color);
        }
    }
}
