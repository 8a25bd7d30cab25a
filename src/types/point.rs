//! 2D point value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::SceneError;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = SceneError;

    /// Parse `<x> <y>`, requiring the whole string to be consumed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse_complete(s, codec::number::parse_point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        codec::number::print_point(&mut out, *self);
        f.write_str(&out)
    }
}
