//! Errors reported by colorkit.
//!
//! Every operation fails at the point where invalid input is supplied. Values
//! are never clamped into range.

use std::fmt;

use crate::color::Component;

/// Identifies a field of a [`Color`](crate::Color) in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The alpha channel.
    Alpha,
    /// The hue component.
    Hue,
    /// The saturation component.
    Saturation,
    /// The value (brightness) component.
    Value,
}

impl Field {
    /// The inclusive range of stored values for this field. A hue outside of
    /// it is wrapped into `[0, 1)` instead of rejected.
    pub fn range(&self) -> (Component, Component) {
        match self {
            Field::Red | Field::Green | Field::Blue | Field::Alpha => (0.0, 255.0),
            Field::Hue | Field::Saturation | Field::Value => (0.0, 1.0),
        }
    }
}

fn requirement(field: &Field) -> String {
    match field {
        Field::Hue => "must be finite".to_string(),
        _ => {
            let (min, max) = field.range();
            format!("must be between {min} and {max}")
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Red => "red",
            Field::Green => "green",
            Field::Blue => "blue",
            Field::Alpha => "alpha",
            Field::Hue => "hue",
            Field::Saturation => "saturation",
            Field::Value => "value",
        })
    }
}

/// Invalid values or arguments passed while building or mutating a color.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A numeric value outside the range of its field, or a hue that is not
    /// finite.
    #[error("{field} {}, not {value}", requirement(field))]
    OutOfRange {
        /// The field that was being set.
        field: Field,
        /// The rejected value.
        value: Component,
    },
    /// A channel value that is neither a number nor a hexadecimal string.
    #[error("{field} must be a number or a hexadecimal string, not {input:?}")]
    InvalidChannel {
        /// The field that was being set.
        field: Field,
        /// The rejected input.
        input: String,
    },
    /// More than one notation (RGB, HSV, hex) was supplied to a builder.
    #[error("a color must be built from exactly one of RGB channels, HSV components or a hex code")]
    AmbiguousConstruction,
    /// A notation was supplied without all of its components.
    #[error("missing {0} to build the color")]
    MissingChannel(Field),
    /// The red, green and blue channels can not be cleared.
    #[error("the {0} channel of a color can not be cleared")]
    ImmutableChannel(Field),
    /// A format template with unequal numbers of `%f` and `%t` tokens.
    #[error("format template has {starts} %f tokens but {ends} %t tokens")]
    UnbalancedFormatTokens {
        /// Number of `%f` tokens.
        starts: usize,
        /// Number of `%t` tokens.
        ends: usize,
    },
    /// A CIEDE2000 weighting factor that is not a positive, finite number.
    #[error("weight {name} must be positive and finite, not {value}")]
    InvalidWeight {
        /// The name of the weight, `kl`, `kc` or `kh`.
        name: &'static str,
        /// The rejected value.
        value: Component,
    },
    /// A gradient needs at least both of its endpoints.
    #[error("a gradient needs at least 2 steps, not {0}")]
    TooFewSteps(usize),
}

/// A hexadecimal color code that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but an optional `#` was given.
    #[error("empty color code")]
    Empty,
    /// The code does not have 6 or 8 hexadecimal digits.
    #[error("color code must have 6 or 8 hex digits, not {0}")]
    InvalidLength(usize),
    /// The code contains a character that is not a hexadecimal digit.
    #[error("invalid hex digit in color code {0:?}")]
    InvalidHex(String),
}

/// The error type for all fallible colorkit operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Averaging a color with a sequence of fewer than 3 components.
    #[error("unsupported operand for averaging a color: expected at least 3 components, got {0}")]
    UnsupportedOperand(usize),
    /// Searching for the closest color among zero candidates.
    #[error("can not search for the closest color in an empty set of candidates")]
    EmptyInput,
}

/// A `Result` with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_messages() {
        let error = ValidationError::OutOfRange {
            field: Field::Green,
            value: 300.0,
        };
        assert_eq!(error.to_string(), "green must be between 0 and 255, not 300");

        let error = ValidationError::OutOfRange {
            field: Field::Saturation,
            value: 1.5,
        };
        assert_eq!(error.to_string(), "saturation must be between 0 and 1, not 1.5");

        let error = ValidationError::OutOfRange {
            field: Field::Hue,
            value: Component::NAN,
        };
        assert_eq!(error.to_string(), "hue must be finite, not NaN");
    }
}
