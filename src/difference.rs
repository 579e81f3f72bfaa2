//! The CIEDE2000 color difference and a search for the closest color among a
//! grid of candidates.
//!
//! The difference follows "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" by G. Sharma, W. Wu and E. N. Dalal (2005). All angles are
//! kept in radians.

use std::f64::consts::{PI, TAU};

use crate::color::{Color, Component};
use crate::error::{Error, ValidationError};
use crate::models::Lab;

/// The parametric weighting factors of CIEDE2000 for lightness, chroma and
/// hue. They are all 1 under reference conditions.
///
/// Each weight divides its term, so it must be positive and finite. The
/// searches reject other weights with [`ValidationError::InvalidWeight`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "catalog", derive(serde::Deserialize), serde(default))]
pub struct Weights {
    /// Lightness weight.
    pub kl: Component,
    /// Chroma weight.
    pub kc: Component,
    /// Hue weight.
    pub kh: Component,
}

impl Weights {
    /// Create validated weights.
    pub fn new(kl: Component, kc: Component, kh: Component) -> Result<Self, ValidationError> {
        let weights = Self { kl, kc, kh };
        weights.validate()?;
        Ok(weights)
    }

    /// Check that every weight is positive and finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [("kl", self.kl), ("kc", self.kc), ("kh", self.kh)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            kl: 1.0,
            kc: 1.0,
            kh: 1.0,
        }
    }
}

/// 25^7, used by the chroma compensation `G` and the rotation term.
const POW25_7: Component = 6_103_515_625.0;

fn chroma_ratio(chroma: Component) -> Component {
    let c7 = chroma.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

fn hue_angle(b: Component, a: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).rem_euclid(TAU)
    }
}

/// The CIEDE2000 difference between two colors in the CIE-Lab color space.
///
/// The result is never negative, is 0 for identical inputs and does not
/// depend on the order of the arguments. The weights are not checked here, a
/// zero, negative or non-finite weight gives an infinite or NaN difference.
/// See [`Weights::validate`].
pub fn ciede2000(reference: &Lab, sample: &Lab, weights: &Weights) -> Component {
    let Lab {
        lightness: l1,
        a: a1,
        b: b1,
    } = *reference;
    let Lab {
        lightness: l2,
        a: a2,
        b: b2,
    } = *sample;

    // Chroma compensated a*.
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let g = 0.5 * (1.0 - chroma_ratio((c1 + c2) / 2.0));

    let a1 = (1.0 + g) * a1;
    let a2 = (1.0 + g) * a2;
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let h1 = hue_angle(b1, a1);
    let h2 = hue_angle(b2, a2);

    // Differences in lightness, chroma and hue.
    let chroma_product = c1 * c2;

    let delta_l = l2 - l1;
    let delta_c = c2 - c1;
    let delta_h = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2 - h1;
        if diff.abs() <= PI {
            diff
        } else if diff > PI {
            diff - TAU
        } else {
            diff + TAU
        }
    };
    let delta_h = 2.0 * chroma_product.sqrt() * (delta_h / 2.0).sin();

    // Means.
    let mean_l = (l1 + l2) / 2.0;
    let mean_c = (c1 + c2) / 2.0;
    let mean_h = if chroma_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= PI {
        (h1 + h2) / 2.0
    } else if h1 + h2 < TAU {
        (h1 + h2 + TAU) / 2.0
    } else {
        (h1 + h2 - TAU) / 2.0
    };

    let t = 1.0 - 0.17 * (mean_h - 30f64.to_radians()).cos()
        + 0.24 * (2.0 * mean_h).cos()
        + 0.32 * (3.0 * mean_h + 6f64.to_radians()).cos()
        - 0.20 * (4.0 * mean_h - 63f64.to_radians()).cos();

    let delta_theta =
        30f64.to_radians() * (-((mean_h.to_degrees() - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_ratio(mean_c);

    let l50 = (mean_l - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * mean_c;
    let sh = 1.0 + 0.015 * mean_c * t;
    let rt = -(2.0 * delta_theta).sin() * rc;

    let l = delta_l / (weights.kl * sl);
    let c = delta_c / (weights.kc * sc);
    let h = delta_h / (weights.kh * sh);

    (l * l + c * c + h * h + rt * c * h).sqrt()
}

/// The CIEDE2000 difference between two colors with reference weights. Alpha
/// does not take part.
pub fn color_difference(first: &Color, second: &Color) -> Component {
    color_difference_with(first, second, &Weights::default())
}

/// The CIEDE2000 difference between two colors with the given weights.
pub fn color_difference_with(first: &Color, second: &Color, weights: &Weights) -> Component {
    ciede2000(&first.to_lab(), &second.to_lab(), weights)
}

/// The candidate closest to a query color and where it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match<'a> {
    /// The closest candidate.
    pub color: &'a Color,
    /// The row of the candidate in the grid.
    pub row: usize,
    /// The column of the candidate in its row.
    pub column: usize,
    /// The CIEDE2000 difference between the query and the candidate.
    pub distance: Component,
}

/// Find the candidate closest to `query` in a grid of candidates, visited in
/// row-major order. When candidates are equally close, the first one wins.
///
/// Rows do not need to have the same length. Fails with
/// [`Error::EmptyInput`] if the grid holds no colors at all, and with
/// [`ValidationError::InvalidWeight`] if the weights are not usable.
///
/// ```rust
/// use colorkit::{closest_color, Color, Weights};
///
/// let grid = [
///     [Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
///     [Color::rgb(0, 0, 255), Color::rgb(255, 255, 0)],
/// ];
/// let found = closest_color(&Color::rgb(250, 10, 10), &grid, &Weights::default()).unwrap();
/// assert_eq!((found.row, found.column), (0, 0));
/// ```
pub fn closest_color<'a, R: AsRef<[Color]>>(
    query: &Color,
    grid: &'a [R],
    weights: &Weights,
) -> Result<Match<'a>, Error> {
    search(query, grid.iter().map(|row| row.as_ref()), weights)
}

/// Find the candidate closest to `query` in a single row of candidates. See
/// [`closest_color`].
pub fn closest_in<'a>(
    query: &Color,
    candidates: &'a [Color],
    weights: &Weights,
) -> Result<Match<'a>, Error> {
    search(query, std::iter::once(candidates), weights)
}

fn search<'a>(
    query: &Color,
    rows: impl IntoIterator<Item = &'a [Color]>,
    weights: &Weights,
) -> Result<Match<'a>, Error> {
    weights.validate()?;
    let lab = query.to_lab();
    let mut best: Option<Match<'a>> = None;

    for (row, colors) in rows.into_iter().enumerate() {
        for (column, color) in colors.iter().enumerate() {
            let distance = ciede2000(&lab, &color.to_lab(), weights);
            if best.map_or(true, |best| distance < best.distance) {
                best = Some(Match {
                    color,
                    row,
                    column,
                    distance,
                });
            }
        }
    }

    let found = best.ok_or(Error::EmptyInput)?;
    tracing::trace!(
        query = %query,
        found = %found.color,
        row = found.row,
        column = found.column,
        distance = found.distance,
        "closest color"
    );
    Ok(found)
}

/// The CIEDE2000 difference between `query` and every candidate, in the shape
/// of the grid. Fails only if the weights are not usable.
pub fn difference_grid<R: AsRef<[Color]>>(
    query: &Color,
    grid: &[R],
    weights: &Weights,
) -> Result<Vec<Vec<Component>>, Error> {
    weights.validate()?;
    let lab = query.to_lab();
    Ok(grid
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|color| ciede2000(&lab, &color.to_lab(), weights))
                .collect()
        })
        .collect())
}
