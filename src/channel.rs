//! Values that can be assigned to a color channel.

use crate::error::{Field, ValidationError};

/// One of the four channels of a [`Color`](crate::Color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
    /// The alpha channel.
    Alpha,
}

impl From<Channel> for Field {
    fn from(value: Channel) -> Self {
        match value {
            Channel::Red => Field::Red,
            Channel::Green => Field::Green,
            Channel::Blue => Field::Blue,
            Channel::Alpha => Field::Alpha,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Input {
    Integer(i64),
    Float(f64),
    Hex(String),
}

/// A value passed to any of the channel constructors or setters. Integers,
/// floats and hexadecimal strings implement `Into<ChannelInput>`, validation
/// happens when the value is assigned to a channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelInput(Input);

impl ChannelInput {
    /// Validate the input for the given field and return the channel value.
    ///
    /// Floats are truncated toward zero once they are known to be in range.
    pub fn validate(&self, field: Field) -> Result<u8, ValidationError> {
        let out_of_range = |value: f64| ValidationError::OutOfRange { field, value };

        match &self.0 {
            Input::Integer(value) => {
                u8::try_from(*value).map_err(|_| out_of_range(*value as f64))
            }
            Input::Float(value) => {
                if !value.is_finite() {
                    return Err(ValidationError::InvalidChannel {
                        field,
                        input: value.to_string(),
                    });
                }
                if !(0.0..=255.0).contains(value) {
                    return Err(out_of_range(*value));
                }
                Ok(value.trunc() as u8)
            }
            Input::Hex(text) => {
                let invalid = || ValidationError::InvalidChannel {
                    field,
                    input: text.clone(),
                };
                if text.is_empty() || text.len() > 8 || !text.bytes().all(|b| b.is_ascii_hexdigit())
                {
                    return Err(invalid());
                }
                let value = u32::from_str_radix(text, 16).map_err(|_| invalid())?;
                u8::try_from(value).map_err(|_| out_of_range(value as f64))
            }
        }
    }
}

impl Default for ChannelInput {
    fn default() -> Self {
        Self(Input::Integer(0))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChannelInput {
                fn from(value: $t) -> Self {
                    Self(Input::Integer(value as i64))
                }
            }
        )*
    };
}

from_integer!(u8, u16, u32, i8, i16, i32, i64);

impl From<f32> for ChannelInput {
    fn from(value: f32) -> Self {
        Self(Input::Float(value as f64))
    }
}

impl From<f64> for ChannelInput {
    fn from(value: f64) -> Self {
        Self(Input::Float(value))
    }
}

impl From<&str> for ChannelInput {
    fn from(value: &str) -> Self {
        Self(Input::Hex(value.to_owned()))
    }
}

impl From<String> for ChannelInput {
    fn from(value: String) -> Self {
        Self(Input::Hex(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_in_range() {
        assert_eq!(ChannelInput::from(0).validate(Field::Red), Ok(0));
        assert_eq!(ChannelInput::from(255).validate(Field::Red), Ok(255));
        assert_eq!(ChannelInput::from(128u8).validate(Field::Alpha), Ok(128));
    }

    #[test]
    fn integers_out_of_range() {
        assert_eq!(
            ChannelInput::from(-1).validate(Field::Red),
            Err(ValidationError::OutOfRange {
                field: Field::Red,
                value: -1.0
            })
        );
        assert_eq!(
            ChannelInput::from(256).validate(Field::Blue),
            Err(ValidationError::OutOfRange {
                field: Field::Blue,
                value: 256.0
            })
        );
    }

    #[test]
    fn floats_are_truncated() {
        assert_eq!(ChannelInput::from(12.9).validate(Field::Green), Ok(12));
        assert_eq!(ChannelInput::from(255.0f32).validate(Field::Green), Ok(255));
        assert!(ChannelInput::from(255.5).validate(Field::Green).is_err());
        assert!(ChannelInput::from(-0.5).validate(Field::Green).is_err());
        assert!(matches!(
            ChannelInput::from(f64::NAN).validate(Field::Green),
            Err(ValidationError::InvalidChannel { .. })
        ));
    }

    #[test]
    fn hex_strings() {
        assert_eq!(ChannelInput::from("ff").validate(Field::Red), Ok(255));
        assert_eq!(ChannelInput::from("0A").validate(Field::Red), Ok(10));
        assert_eq!(ChannelInput::from("7").validate(Field::Red), Ok(7));
        assert!(matches!(
            ChannelInput::from("100").validate(Field::Red),
            Err(ValidationError::OutOfRange { value, .. }) if value == 256.0
        ));
        assert!(matches!(
            ChannelInput::from("zz").validate(Field::Red),
            Err(ValidationError::InvalidChannel { .. })
        ));
        assert!(matches!(
            ChannelInput::from("").validate(Field::Red),
            Err(ValidationError::InvalidChannel { .. })
        ));
    }
}
