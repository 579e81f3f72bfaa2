//! Models are structs that hold the three components of a color in one of the
//! color spaces colorkit converts through. They are plain values; conversions
//! between them are implemented only along the sRGB to CIE-Lab pipeline.
//!
//! ```rust
//! use colorkit::models::{Lab, Srgb};
//!
//! let lab = Lab::from(
//!     Srgb::new(1.0, 0.0, 0.0)    // gamma encoded sRGB.
//!         .to_linear_light()      // convert to linear sRGB.
//!         .to_xyz(),              // convert to CIE-XYZ (D65).
//! );                              // convert to CIE-Lab.
//! assert!((lab.lightness - 53.24).abs() < 0.01);
//! ```

mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::Xyz;
