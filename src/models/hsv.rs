//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

colorkit_macros::gen_model! {
    /// A color specified with the HSV notation. The hue is measured in turns,
    /// `[0, 1)`, saturation and value lie in `[0, 1]`.
    pub struct Hsv {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The value (brightness) component of the color.
        pub value: Component,
    }
}
