//! Build a [`Color`] from exactly one notation.

use bitflags::bitflags;

use crate::channel::ChannelInput;
use crate::color::{Color, Component};
use crate::error::{Error, Field, ValidationError};

bitflags! {
    /// Flags to mark which components were supplied to a [`ColorBuilder`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Supplied : u8 {
        /// Set when the red channel was supplied.
        const RED = 1 << 0;
        /// Set when the green channel was supplied.
        const GREEN = 1 << 1;
        /// Set when the blue channel was supplied.
        const BLUE = 1 << 2;
        /// Set when the hue was supplied.
        const HUE = 1 << 3;
        /// Set when the saturation was supplied.
        const SATURATION = 1 << 4;
        /// Set when the value was supplied.
        const VALUE = 1 << 5;
        /// Set when a hex code was supplied.
        const HEX = 1 << 6;
        /// Set when the alpha channel was supplied.
        const ALPHA = 1 << 7;

        /// The RGB notation.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// The HSV notation.
        const HSV = Self::HUE.bits() | Self::SATURATION.bits() | Self::VALUE.bits();
    }
}

/// Collects the components of one notation and validates them all at once in
/// [`ColorBuilder::build`].
///
/// ```rust
/// use colorkit::Color;
///
/// let color = Color::builder().rgb(255, "80", 0).alpha(128).name("amber").build().unwrap();
/// assert_eq!(color.to_rgba_hex(), "#ff800080");
///
/// assert!(Color::builder().red(255).hue(0.5).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColorBuilder {
    supplied: Supplied,
    red: ChannelInput,
    green: ChannelInput,
    blue: ChannelInput,
    alpha: ChannelInput,
    hue: Component,
    saturation: Component,
    value: Component,
    hex: String,
    name: Option<String>,
}

impl ColorBuilder {
    /// Supply the red channel.
    pub fn red(mut self, red: impl Into<ChannelInput>) -> Self {
        self.red = red.into();
        self.supplied |= Supplied::RED;
        self
    }

    /// Supply the green channel.
    pub fn green(mut self, green: impl Into<ChannelInput>) -> Self {
        self.green = green.into();
        self.supplied |= Supplied::GREEN;
        self
    }

    /// Supply the blue channel.
    pub fn blue(mut self, blue: impl Into<ChannelInput>) -> Self {
        self.blue = blue.into();
        self.supplied |= Supplied::BLUE;
        self
    }

    /// Supply all three RGB channels.
    pub fn rgb(
        self,
        red: impl Into<ChannelInput>,
        green: impl Into<ChannelInput>,
        blue: impl Into<ChannelInput>,
    ) -> Self {
        self.red(red).green(green).blue(blue)
    }

    /// Supply the alpha channel. Defaults to 255 (or the alpha of a hex code).
    pub fn alpha(mut self, alpha: impl Into<ChannelInput>) -> Self {
        self.alpha = alpha.into();
        self.supplied |= Supplied::ALPHA;
        self
    }

    /// Supply the hue, in turns.
    pub fn hue(mut self, hue: Component) -> Self {
        self.hue = hue;
        self.supplied |= Supplied::HUE;
        self
    }

    /// Supply the saturation.
    pub fn saturation(mut self, saturation: Component) -> Self {
        self.saturation = saturation;
        self.supplied |= Supplied::SATURATION;
        self
    }

    /// Supply the value.
    pub fn value(mut self, value: Component) -> Self {
        self.value = value;
        self.supplied |= Supplied::VALUE;
        self
    }

    /// Supply all three HSV components.
    pub fn hsv(self, hue: Component, saturation: Component, value: Component) -> Self {
        self.hue(hue).saturation(saturation).value(value)
    }

    /// Supply a `#rrggbb` or `#rrggbbaa` code.
    pub fn hex(mut self, code: impl Into<String>) -> Self {
        self.hex = code.into();
        self.supplied |= Supplied::HEX;
        self
    }

    /// Give the color a name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate the supplied notation and create the color.
    pub fn build(self) -> Result<Color, Error> {
        let notations = [Supplied::RGB, Supplied::HSV, Supplied::HEX]
            .into_iter()
            .filter(|notation| self.supplied.intersects(*notation))
            .count();
        if notations > 1 {
            return Err(ValidationError::AmbiguousConstruction.into());
        }

        let alpha = if self.supplied.contains(Supplied::ALPHA) {
            Some(self.alpha.validate(Field::Alpha)?)
        } else {
            None
        };

        let mut color = if self.supplied.intersects(Supplied::RGB) {
            self.require(&[
                (Supplied::RED, Field::Red),
                (Supplied::GREEN, Field::Green),
                (Supplied::BLUE, Field::Blue),
            ])?;
            Color::new_with_alpha(self.red, self.green, self.blue, alpha.unwrap_or(u8::MAX))?
        } else if self.supplied.intersects(Supplied::HSV) {
            self.require(&[
                (Supplied::HUE, Field::Hue),
                (Supplied::SATURATION, Field::Saturation),
                (Supplied::VALUE, Field::Value),
            ])?;
            Color::from_hsva(
                self.hue,
                self.saturation,
                self.value,
                alpha.unwrap_or(u8::MAX),
            )?
        } else if self.supplied.contains(Supplied::HEX) {
            let mut color = Color::from_hex(&self.hex)?;
            if let Some(alpha) = alpha {
                if self.hex.trim_start_matches('#').len() == 8 {
                    return Err(ValidationError::AmbiguousConstruction.into());
                }
                color.set_alpha(alpha)?;
            }
            color
        } else {
            return Err(ValidationError::MissingChannel(Field::Red).into());
        };

        color.set_name(self.name);
        Ok(color)
    }

    fn require(&self, fields: &[(Supplied, Field)]) -> Result<(), ValidationError> {
        match fields
            .iter()
            .find(|(flag, _)| !self.supplied.contains(*flag))
        {
            Some((_, field)) => Err(ValidationError::MissingChannel(*field)),
            None => Ok(()),
        }
    }
}
