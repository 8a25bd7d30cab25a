//! Draw style: how a shape's boundary is rendered, and in which color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::SceneError;

/// How to draw a shape's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Open stroke: the boundary is not closed back to its start.
    Path,
    /// Closed stroke.
    Closed,
    /// Filled interior.
    Filled,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Path, Style::Closed, Style::Filled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Path => "path",
            Style::Closed => "closed",
            Style::Filled => "filled",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic color names.
///
/// Purely symbolic: mapping a name to an actual paint value is the
/// renderer's job, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Blue,
    Brown,
    Clear,
    Cyan,
    Gray,
    Green,
    Indigo,
    Mint,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    White,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Brown,
        Color::Clear,
        Color::Cyan,
        Color::Gray,
        Color::Green,
        Color::Indigo,
        Color::Mint,
        Color::Orange,
        Color::Pink,
        Color::Purple,
        Color::Red,
        Color::Teal,
        Color::White,
        Color::Yellow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Brown => "brown",
            Color::Clear => "clear",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
            Color::Green => "green",
            Color::Indigo => "indigo",
            Color::Mint => "mint",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Teal => "teal",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style/color pair describing how a shape is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawStyle {
    pub style: Style,
    pub color: Color,
}

impl DrawStyle {
    pub const fn new(style: Style, color: Color) -> Self {
        Self { style, color }
    }
}

impl FromStr for DrawStyle {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_complete(s, codec::style::parse_draw_style)
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        codec::style::print_draw_style(&mut out, self);
        f.write_str(&out)
    }
}
