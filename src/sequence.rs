//! Ordered sequences of colors.

use std::ops::Index;

use crate::color::{Color, Component};
use crate::error::ValidationError;

/// Shared behavior of every ordered sequence of colors.
pub trait ColorSequence {
    /// The colors in order.
    fn colors(&self) -> &[Color];

    /// The number of colors.
    fn len(&self) -> usize {
        self.colors().len()
    }

    /// Whether the sequence holds no colors.
    fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// The color at `index`, if there is one.
    fn get(&self, index: usize) -> Option<&Color> {
        self.colors().get(index)
    }

    /// Iterate over the colors in order.
    fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors().iter()
    }

    /// The `#rrggbbaa` code of every color.
    fn to_hex_strings(&self) -> Vec<String> {
        self.iter().map(Color::to_rgba_hex).collect()
    }

    /// Every color with its channels normalized to `[0, 1]`, which is what
    /// plotting libraries expect to build a color map from.
    fn to_unit_rgba(&self) -> Vec<[Component; 4]> {
        self.iter().map(Color::to_unit_rgba).collect()
    }
}

/// A fixed sequence of arbitrary colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Create a palette holding the given colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Consume the palette and return its colors.
    pub fn into_inner(self) -> Vec<Color> {
        self.0
    }
}

impl ColorSequence for Palette {
    fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Colors linearly interpolated between two endpoints, both included.
///
/// ```rust
/// use colorkit::{Color, ColorSequence, Gradient};
///
/// let gradient = Gradient::new(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255), 3).unwrap();
/// assert_eq!(
///     gradient.to_hex_strings(),
///     ["#000000ff", "#7f7f7fff", "#ffffffff"]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    start: Color,
    end: Color,
    steps: usize,
    colors: Vec<Color>,
}

impl Gradient {
    /// Create a gradient of `steps` colors from `start` to `end`. There must
    /// be at least 2 steps.
    pub fn new(start: Color, end: Color, steps: usize) -> Result<Self, ValidationError> {
        let steps = validate_steps(steps)?;
        let mut gradient = Self {
            start,
            end,
            steps,
            colors: Vec::with_capacity(steps),
        };
        gradient.regenerate();
        Ok(gradient)
    }

    /// The first color.
    pub fn start(&self) -> &Color {
        &self.start
    }

    /// The last color.
    pub fn end(&self) -> &Color {
        &self.end
    }

    /// The number of colors.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Replace the first color and interpolate again.
    pub fn set_start(&mut self, start: Color) {
        self.start = start;
        self.regenerate();
    }

    /// Replace the last color and interpolate again.
    pub fn set_end(&mut self, end: Color) {
        self.end = end;
        self.regenerate();
    }

    /// Change the number of colors and interpolate again. Nothing changes if
    /// `steps` is less than 2.
    pub fn set_steps(&mut self, steps: usize) -> Result<(), ValidationError> {
        self.steps = validate_steps(steps)?;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        let last = (self.steps - 1) as Component;

        self.colors.clear();
        self.colors.push(self.start.clone());
        self.colors.extend(
            (1..self.steps - 1).map(|i| self.start.interpolate(&self.end, i as Component / last)),
        );
        self.colors.push(self.end.clone());
    }
}

fn validate_steps(steps: usize) -> Result<usize, ValidationError> {
    if steps < 2 {
        Err(ValidationError::TooFewSteps(steps))
    } else {
        Ok(steps)
    }
}

impl ColorSequence for Gradient {
    fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Index<usize> for Gradient {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
