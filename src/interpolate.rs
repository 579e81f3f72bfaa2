use crate::color::{Color, Component};
use crate::math::lerp;

impl Color {
    /// Linearly interpolate each channel, alpha included, from this color to
    /// another using `t` as the progress between them. `t` is clamped to
    /// `[0, 1]` and the channels are truncated toward zero.
    pub fn interpolate(&self, other: &Self, t: Component) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| lerp(from as Component, to as Component, t) as u8;

        Color::rgba(
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
            mix(self.alpha(), other.alpha()),
        )
    }
}
