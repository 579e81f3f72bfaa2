//! Model a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::Xyz,
};

colorkit_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to a D65 white point.
    pub struct Lab {
        /// The lightness component, 0 for black and 100 for white.
        pub lightness: Component,
        /// The green (negative) to red (positive) axis.
        pub a: Component,
        /// The blue (negative) to yellow (positive) axis.
        pub b: Component,
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        const EPSILON: Component = 0.008856;

        let adapted = Components(
            value.x / Xyz::WHITE_POINT.0,
            value.y / Xyz::WHITE_POINT.1,
            value.z / Xyz::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                7.787 * v + 16.0 / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}
