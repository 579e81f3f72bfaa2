//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix embedded in a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix given in row vector order, i.e. each
/// row holds the contribution of one input component to the three outputs.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Linear interpolation between `a` and `b`, `t` being the progress from `a`
/// to `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_uses_row_vectors() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );

        let Components(x, y, z) = transform(&M, Components(1.0, 0.0, 0.0));
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));

        let Components(x, y, z) = transform(&M, Components(0.0, 1.0, 1.0));
        assert_eq!((x, y, z), (11.0, 13.0, 15.0));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0f32, 20.0, 0.25), 12.5);
    }
}
