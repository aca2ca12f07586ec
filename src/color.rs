//! Color specifications: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or a common
//! CSS color name.

use std::{fmt, str::FromStr};

use image::Rgba;
use serde::Deserialize;

use crate::error::IconError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    #[inline]
    pub fn to_rgba(self) -> Rgba<u8> { Rgba([self.r, self.g, self.b, self.a]) }

    pub fn is_opaque(self) -> bool { self.a == 255 }
}

/// Default icon background (`#4A90E2`, muted blue).
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0x4A, 0x90, 0xE2);
/// Default droplet fill (`#FFFFFF`).
pub const DEFAULT_FOREGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);

// Lowercase names, kept sorted for binary search.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("aqua", Color::rgb(0, 255, 255)),
    ("black", Color::rgb(0, 0, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("cornflowerblue", Color::rgb(100, 149, 237)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("darkblue", Color::rgb(0, 0, 139)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("darkgreen", Color::rgb(0, 100, 0)),
    ("darkgrey", Color::rgb(169, 169, 169)),
    ("deepskyblue", Color::rgb(0, 191, 255)),
    ("dodgerblue", Color::rgb(30, 144, 255)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("gold", Color::rgb(255, 215, 0)),
    ("gray", Color::rgb(128, 128, 128)),
    ("green", Color::rgb(0, 128, 0)),
    ("grey", Color::rgb(128, 128, 128)),
    ("lightblue", Color::rgb(173, 216, 230)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("lightgrey", Color::rgb(211, 211, 211)),
    ("lime", Color::rgb(0, 255, 0)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("navy", Color::rgb(0, 0, 128)),
    ("olive", Color::rgb(128, 128, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("red", Color::rgb(255, 0, 0)),
    ("royalblue", Color::rgb(65, 105, 225)),
    ("silver", Color::rgb(192, 192, 192)),
    ("skyblue", Color::rgb(135, 206, 235)),
    ("steelblue", Color::rgb(70, 130, 180)),
    ("teal", Color::rgb(0, 128, 128)),
    ("transparent", Color::rgba(0, 0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
];

impl FromStr for Color {
    type Err = IconError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let trimmed = spec.trim();
        let invalid = || IconError::InvalidColor(spec.to_string());
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        let name = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .binary_search_by(|(n, _)| (*n).cmp(name.as_str()))
            .map(|i| NAMED_COLORS[i].1)
            .map_err(|_| invalid())
    }
}

impl TryFrom<String> for Color {
    type Error = IconError;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if !self.is_opaque() { write!(f, "{:02X}", self.a)?; }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    // from_str_radix alone would accept a leading '+'
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return None; }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}
