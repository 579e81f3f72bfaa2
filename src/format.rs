//! A small template language to print colors.

use std::fmt::Write;

use crate::color::Color;
use crate::error::ValidationError;

const RESET: &str = "\x1b[0m";

impl Color {
    /// Fill in a template with information about this color.
    ///
    /// | Token | Replaced with |
    /// |---|---|
    /// | `%R` `%G` `%B` `%A` | a channel as two hexadecimal digits |
    /// | `%r` `%g` `%b` `%a` | a channel as a decimal number |
    /// | `%h` `%s` `%v` | hue, saturation and value |
    /// | `%n` | the name, or nothing if the color has none |
    /// | `%f` | start printing in this color on a 24-bit terminal |
    /// | `%t` | reset the terminal color |
    ///
    /// Any other `%` sequence is copied as is. Every `%f` must be matched by a
    /// `%t`.
    ///
    /// ```rust
    /// use colorkit::Color;
    ///
    /// let color = Color::rgb(255, 0, 128).with_name("rose");
    /// assert_eq!(color.format("%n: #%R%G%B").unwrap(), "rose: #ff0080");
    /// assert!(color.format("%f%n").is_err());
    /// ```
    pub fn format(&self, template: &str) -> Result<String, ValidationError> {
        let (mut starts, mut ends) = (0, 0);
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let Some(token) = chars.next() else {
                out.push('%');
                break;
            };

            // Writing to a String can not fail.
            let _ = match token {
                'R' => write!(out, "{:02x}", self.red()),
                'G' => write!(out, "{:02x}", self.green()),
                'B' => write!(out, "{:02x}", self.blue()),
                'A' => write!(out, "{:02x}", self.alpha()),
                'r' => write!(out, "{}", self.red()),
                'g' => write!(out, "{}", self.green()),
                'b' => write!(out, "{}", self.blue()),
                'a' => write!(out, "{}", self.alpha()),
                'h' => write!(out, "{}", self.hue()),
                's' => write!(out, "{}", self.saturation()),
                'v' => write!(out, "{}", self.value()),
                'n' => write!(out, "{}", self.name().unwrap_or_default()),
                'f' => {
                    starts += 1;
                    write!(
                        out,
                        "\x1b[38;2;{};{};{}m",
                        self.red(),
                        self.green(),
                        self.blue()
                    )
                }
                't' => {
                    ends += 1;
                    write!(out, "{RESET}")
                }
                other => write!(out, "%{other}"),
            };
        }

        if starts != ends {
            return Err(ValidationError::UnbalancedFormatTokens { starts, ends });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_tokens() {
        let color = Color::rgb(255, 0, 128);
        assert_eq!(color.format("%R%G%B").unwrap(), "ff0080");
        assert_eq!(color.format("%A").unwrap(), "ff");
    }

    #[test]
    fn decimal_tokens() {
        let color = Color::rgba(1, 22, 133, 4);
        assert_eq!(
            color.format("rgba(%r, %g, %b, %a)").unwrap(),
            "rgba(1, 22, 133, 4)"
        );
    }

    #[test]
    fn hsv_tokens() {
        let color = Color::rgb(255, 255, 0);
        let expected = format!("{} 1 1", 1.0 / 6.0);
        assert_eq!(color.format("%h %s %v").unwrap(), expected);
    }

    #[test]
    fn name_token() {
        assert_eq!(Color::rgb(0, 0, 0).format("[%n]").unwrap(), "[]");
        assert_eq!(
            Color::rgb(0, 0, 0).with_name("night").format("[%n]").unwrap(),
            "[night]"
        );
    }

    #[test]
    fn terminal_tokens() {
        let color = Color::rgb(1, 2, 3);
        assert_eq!(
            color.format("%fx%t").unwrap(),
            "\x1b[38;2;1;2;3mx\x1b[0m"
        );
        assert_eq!(
            color.format("%f%f%t"),
            Err(ValidationError::UnbalancedFormatTokens { starts: 2, ends: 1 })
        );
        assert_eq!(
            color.format("%t"),
            Err(ValidationError::UnbalancedFormatTokens { starts: 0, ends: 1 })
        );
    }

    #[test]
    fn unknown_tokens_are_kept() {
        let color = Color::rgb(9, 9, 9);
        assert_eq!(color.format("100%% %x %").unwrap(), "100%% %x %");
        assert_eq!(color.format("ünï %r").unwrap(), "ünï 9");
    }
}
