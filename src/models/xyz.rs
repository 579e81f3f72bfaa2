//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

colorkit_macros::gen_model! {
    /// A color in the CIE-XYZ color space with a D65 white point, scaled so
    /// that the reference white has a Y of 100.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl Xyz {
    /// The D65 reference white (2 degree observer).
    pub const WHITE_POINT: Components = Components(95.047, 100.0, 108.883);
}
