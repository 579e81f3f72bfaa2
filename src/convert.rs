//! Conversions between a [`Color`] and the models. RGB and HSV convert both
//! ways, CIE-Lab is only ever derived from a color:
//!
//! ```text
//! Color -> Srgb -> SrgbLinear -> Xyz -> Lab
//!            \
//!             <-> Hsv
//! ```
//!
//! Integer channels are produced from unit components by multiplying with 255
//! and truncating toward zero, so a round trip through HSV reproduces each
//! channel within 1.

use crate::{
    color::{Color, Component, Components},
    models::{Hsv, Lab, Srgb},
};

/// Derive the hue, saturation and value of 8-bit channels.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    Srgb::from(Components(red as Component, green as Component, blue as Component).map(|c| c / 255.0))
        .to_hsv()
}

/// Derive 8-bit channels from hue, saturation and value, truncating toward
/// zero.
pub fn hsv_to_rgb(hsv: &Hsv) -> [u8; 3] {
    let Components(red, green, blue) = hsv.to_srgb().to_components();
    [red, green, blue].map(unit_to_channel)
}

fn unit_to_channel(value: Component) -> u8 {
    (value * 255.0).trunc() as u8
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

impl Color {
    /// The channels of this color as unit sRGB components. Alpha is dropped.
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            self.red() as Component / 255.0,
            self.green() as Component / 255.0,
            self.blue() as Component / 255.0,
        )
    }

    /// Convert this color to CIE-Lab. Alpha does not take part.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_srgb().to_linear_light().to_xyz())
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Convert from RGB notation to HSV notation. The hue of achromatic colors
    /// is 0.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if delta == 0.0 {
            return Components(0.0, 0.0, max);
        }

        let hue = if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Components((hue / 6.0).rem_euclid(1.0), delta / max, max)
    }

    /// Convert from HSV notation to RGB notation.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB_alternative>
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        let sector = hue.rem_euclid(1.0) * 6.0;

        macro_rules! f {
            ($n:expr) => {{
                let k: Component = ($n + sector) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn primaries_to_hsv() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255,   0,   0, 0.0,       1.0, 1.0),
            (255, 255,   0, 1.0 / 6.0, 1.0, 1.0),
            (  0, 255,   0, 2.0 / 6.0, 1.0, 1.0),
            (  0, 255, 255, 3.0 / 6.0, 1.0, 1.0),
            (  0,   0, 255, 4.0 / 6.0, 1.0, 1.0),
            (255,   0, 255, 5.0 / 6.0, 1.0, 1.0),
            (  0,   0,   0, 0.0,       0.0, 0.0),
            (255, 255, 255, 0.0,       0.0, 1.0),
        ];

        for &(red, green, blue, hue, saturation, value) in TESTS {
            let hsv = rgb_to_hsv(red, green, blue);
            assert_component_eq!(hsv.hue, hue);
            assert_component_eq!(hsv.saturation, saturation);
            assert_component_eq!(hsv.value, value);
        }
    }

    #[test]
    fn chocolate() {
        // rgb(210, 105, 30)
        let hsv = rgb_to_hsv(210, 105, 30);
        assert_component_eq!(hsv.hue, 25.0 / 360.0);
        assert_component_eq!(hsv.saturation, 0.857143, epsilon = 1e-6);
        assert_component_eq!(hsv.value, 0.823529, epsilon = 1e-6);

        // Green comes back as 104.99999...
        assert_eq!(hsv_to_rgb(&hsv), [210, 104, 30]);
    }

    #[test]
    fn hsv_round_trip_is_within_one() {
        for red in (0..=255u8).step_by(5) {
            for green in (0..=255u8).step_by(3) {
                for blue in (0..=255u8).step_by(3) {
                    assert_round_trip(red, green, blue);
                }
            }
        }
    }

    #[test]
    #[ignore = "visits all 2^24 colors"]
    fn hsv_round_trip_is_within_one_for_every_color() {
        for red in 0..=255u8 {
            for green in 0..=255u8 {
                for blue in 0..=255u8 {
                    assert_round_trip(red, green, blue);
                }
            }
        }
    }

    fn assert_round_trip(red: u8, green: u8, blue: u8) {
        let [r, g, b] = hsv_to_rgb(&rgb_to_hsv(red, green, blue));
        assert!(
            red.abs_diff(r) <= 1 && green.abs_diff(g) <= 1 && blue.abs_diff(b) <= 1,
            "({red}, {green}, {blue}) came back as ({r}, {g}, {b})"
        );
    }

    #[test]
    fn truncation_toward_zero() {
        // 0.999 * 255 = 254.745
        assert_eq!(hsv_to_rgb(&Hsv::new(0.0, 0.0, 0.999)), [254, 254, 254]);
    }

    #[test]
    fn lab_of_primaries() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255,   0,   0, 53.2329,  80.1093,   67.2201),
            (  0, 255,   0, 87.7370, -86.1846,   83.1812),
            (  0,   0, 255, 32.3026,  79.1967, -107.8637),
            (255, 255, 255, 100.0,     0.0053,   -0.0104),
            (  0,   0,   0,  0.0,      0.0,       0.0),
        ];

        for &(red, green, blue, lightness, a, b) in TESTS {
            let lab = Color::rgb(red, green, blue).to_lab();
            assert_component_eq!(lab.lightness, lightness, epsilon = 1e-3);
            assert_component_eq!(lab.a, a, epsilon = 1e-3);
            assert_component_eq!(lab.b, b, epsilon = 1e-3);
        }
    }

    #[test]
    fn alpha_does_not_change_lab() {
        assert_eq!(
            Color::rgba(12, 34, 56, 0).to_lab(),
            Color::rgba(12, 34, 56, 255).to_lab()
        );
    }
}
