//! Hexadecimal color codes, `#rrggbb` and `#rrggbbaa`.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseError;

/// Format a channel as two lowercase hexadecimal digits.
///
/// ```rust
/// assert_eq!(colorkit::to_hex_pair(10), "0a");
/// assert_eq!(colorkit::to_hex_pair(255), "ff");
/// ```
pub fn to_hex_pair(channel: u8) -> String {
    format!("{channel:02x}")
}

impl Color {
    /// Parse a 6 or 8 digit hexadecimal code, with or without a leading `#`.
    /// Without the alpha digits the color is opaque.
    pub fn from_hex(code: &str) -> Result<Self, ParseError> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(code.to_string()));
        }

        let pair = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseError::InvalidHex(code.to_string()))
        };

        match digits.len() {
            6 => Ok(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Ok(Color::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
            len => Err(ParseError::InvalidLength(len)),
        }
    }

    /// The `#rrggbb` code of this color.
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    /// The `#rrggbbaa` code of this color.
    pub fn to_rgba_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_hex())
    }
}
