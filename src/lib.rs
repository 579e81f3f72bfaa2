//! colorkit models colors as 8-bit RGBA values with their hue, saturation and
//! value kept in sync, and measures how different two colors look with
//! CIEDE2000.
//!
//! ```rust
//! use colorkit::{closest_in, Color, Weights};
//!
//! let query: Color = "#fa0a0a".parse().unwrap();
//! let candidates = [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)];
//! let found = closest_in(&query, &candidates, &Weights::default()).unwrap();
//! assert_eq!(found.column, 0);
//! assert_eq!(found.color.format("%r %g %b").unwrap(), "255 0 0");
//! ```

#![warn(missing_docs)]

mod builder;
mod channel;
mod color;
mod convert;
mod difference;
mod error;
mod format;
mod interpolate;
mod math;
mod parse;
mod sequence;

#[cfg(feature = "catalog")]
pub mod catalog;
pub mod models;

#[cfg(test)]
mod test;

pub use builder::{ColorBuilder, Supplied};
pub use channel::{Channel, ChannelInput};
pub use color::{Color, Component, Components};
pub use convert::{hsv_to_rgb, rgb_to_hsv};
pub use difference::{
    ciede2000, closest_color, closest_in, color_difference, color_difference_with,
    difference_grid, Match, Weights,
};
pub use error::{Error, Field, ParseError, Result, ValidationError};
pub use parse::to_hex_pair;
pub use sequence::{ColorSequence, Gradient, Palette};
