//! A [`Color`] is an RGBA value with its hue, saturation and value kept in
//! sync with the red, green and blue channels.

use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::builder::ColorBuilder;
use crate::channel::{Channel, ChannelInput};
use crate::convert::{hsv_to_rgb, rgb_to_hsv};
use crate::error::{Error, Field, ValidationError};
use crate::models::Hsv;

/// A 64-bit floating point value that all derived components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color with 8-bit red, green, blue and alpha channels.
///
/// The hue, saturation and value are derived from the channels and updated by
/// every setter, and setting any of them updates the channels in turn. The hue
/// is stored in turns, so it lies in `[0, 1)`, while saturation and value lie
/// in `[0, 1]`.
///
/// ```rust
/// use colorkit::Color;
///
/// let mut color = Color::new(255, 0, 0).unwrap();
/// color.set_hue(1.0 / 3.0).unwrap();
/// assert_eq!((color.red(), color.green(), color.blue()), (0, 255, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
    hue: Component,
    saturation: Component,
    value: Component,
    name: Option<String>,
}

impl Color {
    /// Create an opaque color from channels that are already known to be
    /// valid.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Create a color from channels that are already known to be valid.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let Hsv {
            hue,
            saturation,
            value,
        } = rgb_to_hsv(red, green, blue);

        Self {
            red,
            green,
            blue,
            alpha,
            hue,
            saturation,
            value,
            name: None,
        }
    }

    /// Create an opaque color. Each channel can be an integer or float in
    /// `[0, 255]`, or a hexadecimal string such as `"ff"`.
    pub fn new(
        red: impl Into<ChannelInput>,
        green: impl Into<ChannelInput>,
        blue: impl Into<ChannelInput>,
    ) -> Result<Self, ValidationError> {
        Self::new_with_alpha(red, green, blue, u8::MAX)
    }

    /// Create a color with an alpha channel. See [`Color::new`].
    pub fn new_with_alpha(
        red: impl Into<ChannelInput>,
        green: impl Into<ChannelInput>,
        blue: impl Into<ChannelInput>,
        alpha: impl Into<ChannelInput>,
    ) -> Result<Self, ValidationError> {
        let red = red.into().validate(Field::Red)?;
        let green = green.into().validate(Field::Green)?;
        let blue = blue.into().validate(Field::Blue)?;
        let alpha = alpha.into().validate(Field::Alpha)?;

        Ok(Self::rgba(red, green, blue, alpha))
    }

    /// Create an opaque color from its hue, saturation and value.
    ///
    /// The hue is given in turns and wraps around, saturation and value must
    /// lie in `[0, 1]`. The channels are derived with
    /// [`hsv_to_rgb`](crate::hsv_to_rgb), which truncates toward zero.
    pub fn from_hsv(
        hue: Component,
        saturation: Component,
        value: Component,
    ) -> Result<Self, ValidationError> {
        Self::from_hsva(hue, saturation, value, u8::MAX)
    }

    /// Create a color from its hue, saturation, value and alpha channel.
    pub fn from_hsva(
        hue: Component,
        saturation: Component,
        value: Component,
        alpha: impl Into<ChannelInput>,
    ) -> Result<Self, ValidationError> {
        let hsv = Hsv::new(
            validate_hue(hue)?,
            validate_unit(Field::Saturation, saturation)?,
            validate_unit(Field::Value, value)?,
        );
        let alpha = alpha.into().validate(Field::Alpha)?;
        let [red, green, blue] = hsv_to_rgb(&hsv);

        Ok(Self {
            red,
            green,
            blue,
            alpha,
            hue: hsv.hue,
            saturation: hsv.saturation,
            value: hsv.value,
            name: None,
        })
    }

    /// Start building a color from exactly one notation.
    pub fn builder() -> ColorBuilder {
        ColorBuilder::default()
    }

    /// Return this color with the given name attached.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The alpha channel, 0 is fully transparent.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Return the value of any channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// The hue in turns, `[0, 1)`.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation, `[0, 1]`.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The value (brightness), `[0, 1]`.
    pub fn value(&self) -> Component {
        self.value
    }

    /// The hue, saturation and value as a model.
    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation, self.value)
    }

    /// The name of the color, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or remove the name of the color.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Set the red channel and derive the HSV components again.
    pub fn set_red(&mut self, red: impl Into<ChannelInput>) -> Result<(), ValidationError> {
        self.set_channel(Channel::Red, red)
    }

    /// Set the green channel and derive the HSV components again.
    pub fn set_green(&mut self, green: impl Into<ChannelInput>) -> Result<(), ValidationError> {
        self.set_channel(Channel::Green, green)
    }

    /// Set the blue channel and derive the HSV components again.
    pub fn set_blue(&mut self, blue: impl Into<ChannelInput>) -> Result<(), ValidationError> {
        self.set_channel(Channel::Blue, blue)
    }

    /// Set the alpha channel. The HSV components are not affected.
    pub fn set_alpha(&mut self, alpha: impl Into<ChannelInput>) -> Result<(), ValidationError> {
        self.set_channel(Channel::Alpha, alpha)
    }

    /// Set the red, green and blue channels at once. Nothing is changed if any
    /// of them is invalid.
    pub fn set_rgb(
        &mut self,
        red: impl Into<ChannelInput>,
        green: impl Into<ChannelInput>,
        blue: impl Into<ChannelInput>,
    ) -> Result<(), ValidationError> {
        let red = red.into().validate(Field::Red)?;
        let green = green.into().validate(Field::Green)?;
        let blue = blue.into().validate(Field::Blue)?;

        self.red = red;
        self.green = green;
        self.blue = blue;
        self.derive_hsv();

        Ok(())
    }

    /// Set any channel. Setting red, green or blue derives the HSV components
    /// from the full channel triple.
    pub fn set_channel(
        &mut self,
        channel: Channel,
        value: impl Into<ChannelInput>,
    ) -> Result<(), ValidationError> {
        let value = value.into().validate(channel.into())?;

        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::Alpha => {
                self.alpha = value;
                return Ok(());
            }
        }
        self.derive_hsv();

        Ok(())
    }

    /// Clear a channel. The alpha channel becomes 0 (fully transparent); the
    /// red, green and blue channels always hold a value and can not be
    /// cleared.
    pub fn clear_channel(&mut self, channel: Channel) -> Result<(), ValidationError> {
        match channel {
            Channel::Alpha => {
                self.alpha = 0;
                Ok(())
            }
            other => Err(ValidationError::ImmutableChannel(other.into())),
        }
    }

    /// Set the hue (in turns, wrapping around) and derive the channels from it
    /// and the current saturation and value.
    pub fn set_hue(&mut self, hue: Component) -> Result<(), ValidationError> {
        self.hue = validate_hue(hue)?;
        self.derive_rgb();
        Ok(())
    }

    /// Set the saturation and derive the channels from it and the current hue
    /// and value.
    pub fn set_saturation(&mut self, saturation: Component) -> Result<(), ValidationError> {
        self.saturation = validate_unit(Field::Saturation, saturation)?;
        self.derive_rgb();
        Ok(())
    }

    /// Set the value and derive the channels from it and the current hue and
    /// saturation.
    pub fn set_value(&mut self, value: Component) -> Result<(), ValidationError> {
        self.value = validate_unit(Field::Value, value)?;
        self.derive_rgb();
        Ok(())
    }

    /// Set all HSV components at once. Nothing is changed if any of them is
    /// invalid.
    pub fn set_hsv(
        &mut self,
        hue: Component,
        saturation: Component,
        value: Component,
    ) -> Result<(), ValidationError> {
        let hue = validate_hue(hue)?;
        let saturation = validate_unit(Field::Saturation, saturation)?;
        let value = validate_unit(Field::Value, value)?;

        self.hue = hue;
        self.saturation = saturation;
        self.value = value;
        self.derive_rgb();

        Ok(())
    }

    /// Whether the color is dark, using the Rec. 709 luminance of the
    /// channels normalized to `[0, 1]`.
    pub fn is_dark(&self) -> bool {
        let luminance = 0.2126 * self.red as Component
            + 0.7152 * self.green as Component
            + 0.0722 * self.blue as Component;
        luminance / 255.0 < 0.5
    }

    /// The channel-wise mean of two colors, truncated toward zero.
    pub fn average(&self, other: &Color) -> Color {
        let mean = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;

        Color::rgba(
            mean(self.red, other.red),
            mean(self.green, other.green),
            mean(self.blue, other.blue),
            mean(self.alpha, other.alpha),
        )
    }

    /// The channel-wise mean of this color and a sequence of at least 3
    /// components (red, green, blue and optionally alpha). With 3 components
    /// the alpha channel of this color is kept as is.
    pub fn average_with(&self, components: &[i64]) -> Result<Color, Error> {
        let mean = |own: u8, other: i64| (own as i64).saturating_add(other).div_euclid(2);

        let [red, green, blue] = match components {
            [red, green, blue, ..] => [*red, *green, *blue],
            _ => return Err(Error::UnsupportedOperand(components.len())),
        };
        let alpha = components
            .get(3)
            .map_or(self.alpha as i64, |alpha| mean(self.alpha, *alpha));

        Ok(Color::new_with_alpha(
            mean(self.red, red),
            mean(self.green, green),
            mean(self.blue, blue),
            alpha,
        )?)
    }

    /// The channels normalized to `[0, 1]`, in red, green, blue, alpha order.
    pub fn to_unit_rgba(&self) -> [Component; 4] {
        [self.red, self.green, self.blue, self.alpha].map(|c| c as Component / 255.0)
    }

    fn derive_hsv(&mut self) {
        let Hsv {
            hue,
            saturation,
            value,
        } = rgb_to_hsv(self.red, self.green, self.blue);
        self.hue = hue;
        self.saturation = saturation;
        self.value = value;
    }

    fn derive_rgb(&mut self) {
        let [red, green, blue] = hsv_to_rgb(&self.hsv());
        self.red = red;
        self.green = green;
        self.blue = blue;
    }
}

fn validate_hue(hue: Component) -> Result<Component, ValidationError> {
    if !hue.is_finite() {
        return Err(ValidationError::OutOfRange {
            field: Field::Hue,
            value: hue,
        });
    }
    let hue = hue.rem_euclid(1.0);
    // Tiny negative hues round up to a full turn.
    Ok(if hue >= 1.0 { 0.0 } else { hue })
}

fn validate_unit(field: Field, value: Component) -> Result<Component, ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        (self.red, self.green, self.blue, self.alpha)
            == (other.red, other.green, other.blue, other.alpha)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.red, self.green, self.blue, self.alpha).hash(state);
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        self.average(&rhs)
    }
}

impl Add<&Color> for &Color {
    type Output = Color;

    fn add(self, rhs: &Color) -> Self::Output {
        self.average(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(color: &Color) -> u64 {
        let mut hasher = DefaultHasher::new();
        color.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn channel_bounds() {
        assert!(Color::new(0, 0, 0).is_ok());
        assert!(Color::new(255, 255, 255).is_ok());
        assert_eq!(
            Color::new(-1, 0, 0),
            Err(ValidationError::OutOfRange {
                field: Field::Red,
                value: -1.0
            })
        );
        assert_eq!(
            Color::new(256, 0, 0),
            Err(ValidationError::OutOfRange {
                field: Field::Red,
                value: 256.0
            })
        );
        assert!(Color::new_with_alpha(0, 0, 0, 300).is_err());
    }

    #[test]
    fn mixed_channel_inputs() {
        let color = Color::new_with_alpha("ff", 128.7, 3u8, "80").unwrap();
        assert_eq!(color, Color::rgba(255, 128, 3, 128));
    }

    #[test]
    fn hsv_is_derived_on_construction() {
        let color = Color::rgb(255, 0, 0);
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.value(), 1.0);

        let color = Color::rgb(0, 0, 255);
        crate::assert_component_eq!(color.hue(), 2.0 / 3.0);

        let gray = Color::rgb(51, 51, 51);
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        crate::assert_component_eq!(gray.value(), 0.2);
    }

    #[test]
    fn setting_channels_one_at_a_time_derives_from_the_full_triple() {
        let mut color = Color::rgb(0, 0, 0);
        color.set_red(255).unwrap();
        color.set_green(255).unwrap();
        assert_eq!(color.hsv(), Color::rgb(255, 255, 0).hsv());
        color.set_blue(255).unwrap();
        assert_eq!(color.hsv(), Hsv::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn invalid_setter_leaves_color_untouched() {
        let mut color = Color::rgb(10, 20, 30);
        assert!(color.set_rgb(40, 50, 256).is_err());
        assert_eq!(color, Color::rgb(10, 20, 30));
        assert!(color.set_hsv(0.5, 1.5, 1.0).is_err());
        assert_eq!(color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn setting_hsv_derives_channels() {
        let mut color = Color::rgb(255, 0, 0);
        color.set_hue(2.0 / 3.0).unwrap();
        assert_eq!(color, Color::rgb(0, 0, 255));

        color.set_saturation(0.0).unwrap();
        assert_eq!(color, Color::rgb(255, 255, 255));
        crate::assert_component_eq!(color.hue(), 2.0 / 3.0);

        color.set_value(0.0).unwrap();
        assert_eq!(color, Color::rgb(0, 0, 0));
    }

    #[test]
    fn hue_wraps_around() {
        let color = Color::from_hsv(1.25, 1.0, 1.0).unwrap();
        crate::assert_component_eq!(color.hue(), 0.25);
        let color = Color::from_hsv(-0.75, 1.0, 1.0).unwrap();
        crate::assert_component_eq!(color.hue(), 0.25);
        let error = Color::from_hsv(Component::NAN, 1.0, 1.0).unwrap_err();
        assert_eq!(error.to_string(), "hue must be finite, not NaN");
        assert!(Color::from_hsv(Component::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn tiny_negative_hue_wraps_to_zero() {
        let color = Color::from_hsv(-1e-20, 1.0, 1.0).unwrap();
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color, Color::rgb(255, 0, 0));

        let mut color = Color::rgb(0, 0, 255);
        color.set_hue(-1e-20).unwrap();
        assert_eq!(color.hue(), 0.0);
        color.set_hsv(-1e-20, 1.0, 1.0).unwrap();
        assert_eq!(color.hue(), 0.0);

        let color = Color::builder().hsv(-1e-20, 1.0, 1.0).build().unwrap();
        assert_eq!(color.hue(), 0.0);
    }

    #[test]
    fn from_hsv() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0).unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(
            Color::from_hsva(1.0 / 3.0, 1.0, 1.0, 0).unwrap(),
            Color::rgba(0, 255, 0, 0)
        );
        assert!(matches!(
            Color::from_hsv(0.0, 1.1, 1.0),
            Err(ValidationError::OutOfRange {
                field: Field::Saturation,
                ..
            })
        ));
        assert!(matches!(
            Color::from_hsv(0.0, 1.0, -0.1),
            Err(ValidationError::OutOfRange {
                field: Field::Value,
                ..
            })
        ));
    }

    #[test]
    fn alpha_does_not_touch_hsv() {
        let mut color = Color::rgb(12, 200, 77);
        let hsv = color.hsv();
        color.set_alpha(3).unwrap();
        assert_eq!(color.hsv(), hsv);
        assert_eq!(color.alpha(), 3);
    }

    #[test]
    fn clearing_channels() {
        let mut color = Color::rgb(1, 2, 3);
        color.clear_channel(Channel::Alpha).unwrap();
        assert_eq!(color.alpha(), 0);

        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            assert_eq!(
                color.clear_channel(channel),
                Err(ValidationError::ImmutableChannel(channel.into()))
            );
        }
        assert_eq!(color, Color::rgba(1, 2, 3, 0));
    }

    #[test]
    fn equality_ignores_name_and_includes_alpha() {
        let named = Color::rgb(1, 2, 3).with_name("dust");
        let unnamed = Color::rgb(1, 2, 3);
        assert_eq!(named, unnamed);
        assert_eq!(hash_of(&named), hash_of(&unnamed));
        assert_ne!(Color::rgba(1, 2, 3, 4), Color::rgba(1, 2, 3, 5));
    }

    #[test]
    fn is_dark() {
        assert!(Color::rgb(0, 0, 0).is_dark());
        assert!(Color::rgb(0, 0, 255).is_dark());
        assert!(!Color::rgb(255, 255, 255).is_dark());
        assert!(!Color::rgb(0, 255, 0).is_dark());
    }

    #[test]
    fn addition_averages_channels() {
        let left = Color::rgba(10, 20, 30, 255);
        let right = Color::rgba(20, 30, 40, 255);
        assert_eq!(&left + &right, Color::rgba(15, 25, 35, 255));
        assert_eq!(
            Color::rgba(1, 2, 3, 4) + Color::rgba(2, 3, 4, 5),
            Color::rgba(1, 2, 3, 4)
        );
    }

    #[test]
    fn average_with_components() {
        let color = Color::rgba(10, 20, 30, 100);
        assert_eq!(
            color.average_with(&[20, 30, 40]).unwrap(),
            Color::rgba(15, 25, 35, 100)
        );
        assert_eq!(
            color.average_with(&[20, 30, 40, 200]).unwrap(),
            Color::rgba(15, 25, 35, 150)
        );
        assert_eq!(
            color.average_with(&[20, 30]),
            Err(Error::UnsupportedOperand(2))
        );
        assert!(matches!(
            color.average_with(&[600, 0, 0]),
            Err(Error::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(matches!(
            color.average_with(&[i64::MAX, 0, 0]),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: Field::Red,
                ..
            }))
        ));
        assert!(matches!(
            color.average_with(&[0, 0, 0, i64::MIN]),
            Err(Error::Validation(ValidationError::OutOfRange {
                field: Field::Alpha,
                ..
            }))
        ));
    }

    #[test]
    fn unit_rgba() {
        assert_eq!(
            Color::rgba(255, 0, 51, 0).to_unit_rgba(),
            [1.0, 0.0, 0.2, 0.0]
        );
    }
}
