//! Render a gradient between two colors as a strip of blocks, one per step,
//! and log the closest named color of every step.
//!
//! ```text
//! colorkit-gradient <from> <to> [steps] [out.png]
//! ```
//!
//! Colors are catalog names (`dark_orange`) or hex codes (`#ff8c00`).

use anyhow::{bail, Context};
use colorkit::{catalog::Catalog, Color, ColorSequence, Gradient};
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 100;
const DEFAULT_STEPS: usize = 7;

fn install_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter_layer = EnvFilter::try_from_env("COLORKIT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("colorkit=info,colorkit_gradient=info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer())
        .try_init()
}

fn resolve(catalog: &Catalog, input: &str) -> anyhow::Result<Color> {
    if let Some(color) = catalog.get(input) {
        return Ok(color.clone());
    }
    input
        .parse()
        .with_context(|| format!("{input:?} is neither a color name nor a hex code"))
}

fn main() -> anyhow::Result<()> {
    install_tracing()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (from, to) = match args.as_slice() {
        [from, to, ..] => (from, to),
        _ => bail!("usage: colorkit-gradient <from> <to> [steps] [out.png]"),
    };
    let steps = match args.get(2) {
        Some(steps) => steps
            .parse()
            .with_context(|| format!("invalid number of steps {steps:?}"))?,
        None => DEFAULT_STEPS,
    };
    if steps > WIDTH as usize {
        bail!("at most {WIDTH} steps fit in the image");
    }
    let out = args.get(3).map_or("gradient.png", String::as_str);

    let catalog = Catalog::bundled()?;
    let gradient = Gradient::new(resolve(&catalog, from)?, resolve(&catalog, to)?, steps)?;

    for (i, color) in gradient.iter().enumerate() {
        let name = catalog
            .closest_name(color)
            .and_then(Color::name)
            .unwrap_or_default();
        tracing::info!(step = i, color = %color, closest = name, "gradient step");
    }

    let block = WIDTH / gradient.len() as u32;
    let mut image = RgbaImage::new(block * gradient.len() as u32, HEIGHT);
    for (x, _, pixel) in image.enumerate_pixels_mut() {
        let color = &gradient[(x / block) as usize];
        *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    image
        .save(out)
        .with_context(|| format!("could not write image to {out}"))?;
    tracing::info!(path = out, "saved gradient");

    Ok(())
}
