//! Model a color in the sRGB color space with unit components.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::Xyz,
};

/// Tags that specify whether RGB components carry the sRGB transfer function.
pub mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding: Clone + Copy + std::fmt::Debug + PartialEq {}

    /// Components are gamma encoded, as stored in a [`Color`](crate::Color).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

colorkit_macros::gen_model! {
    /// A color specified in the sRGB color space, each component in `[0, 1]`.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Remove the sRGB transfer function: linear below `0.04045`, a 2.4 power
    /// curve above it.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                if value <= 0.04045 {
                    value / 12.92
                } else {
                    ((value + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert to CIE-XYZ with a D65 white point, scaled so that white has a
    /// Y of 100.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        transform(&TO_XYZ, self.to_components().map(|v| v * 100.0)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Components};

    #[test]
    fn linear_light_segments() {
        let linear = Srgb::new(0.0, 0.04045, 1.0).to_linear_light();
        assert_eq!(linear.red, 0.0);
        assert_component_eq!(linear.green, 0.04045 / 12.92, epsilon = 1e-12);
        assert_component_eq!(linear.blue, 1.0, epsilon = 1e-12);

        let linear = Srgb::new(0.5, 0.5, 0.5).to_linear_light();
        assert_component_eq!(linear.red, 0.214041, epsilon = 1e-6);
    }

    #[test]
    fn white_maps_to_the_reference_white() {
        let xyz = SrgbLinear::new(1.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(xyz.x, 95.05, epsilon = 1e-9);
        assert_component_eq!(xyz.y, 100.0, epsilon = 1e-9);
        assert_component_eq!(xyz.z, 108.9, epsilon = 1e-9);
    }

    #[test]
    fn components_round_trip() {
        let srgb = Srgb::new(0.1, 0.2, 0.3);
        let components: Components = srgb.into();
        assert_eq!(components, Components(0.1, 0.2, 0.3));
        assert_eq!(Srgb::from(components), srgb);
    }
}
