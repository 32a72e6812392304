//! The gradient synthesizer.
//!
//! A pure function from palette + canvas to a complete SVG document. Each
//! call makes [`REPETITIONS`] passes over the palette; every pass emits one
//! radial gradient definition per color (opaque at the focal point, fading
//! to transparent at the edge) and one full-canvas rectangle painted with
//! that gradient under a randomized affine transform. Rectangles from later
//! passes overpaint earlier ones with the same gradient id, which is what
//! produces the layered, cloudy look.

use rand::Rng;

use crate::{GradientOptions, Palette, TransformCenter};

/// Number of layering passes over the palette.
pub const REPETITIONS: usize = 3;

/// Synthesize a gradient document with a fresh thread-local generator.
///
/// Consecutive calls with identical inputs produce different documents;
/// there is no seed to share. Use [`synthesize_with`] and a seeded
/// generator when output must be reproducible.
pub fn synthesize(palette: &Palette, opts: &GradientOptions) -> String {
    synthesize_with(&mut rand::rng(), palette, opts)
}

/// Synthesize a gradient document, drawing all randomness from `rng`.
///
/// The output holds exactly `REPETITIONS * palette.colors().len()` gradient
/// definitions and as many transformed rectangles, emitted pass-major in
/// palette order, plus the clip rectangle and the solid background.
pub fn synthesize_with<R: Rng>(rng: &mut R, palette: &Palette, opts: &GradientOptions) -> String {
    let mut gradients = String::new();
    let mut rects = String::new();
    for _ in 0..REPETITIONS {
        for (index, color) in palette.colors().iter().enumerate() {
            gradients.push_str(&radial_gradient(rng, index, color));
            rects.push_str(&layer_rect(rng, index, opts));
        }
    }

    let width = fmt_number(opts.width);
    let height = fmt_number(opts.height);

    let mut style = format!("#bg {{fill:{}}}", palette.primary());
    for index in 0..palette.colors().len() {
        style.push_str(&format!(" .rect{index} {{fill:url(#rg{index})}}"));
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" \
         xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         preserveAspectRatio=\"xMidYMid meet\">\n"
    ));
    svg.push_str("<defs>\n");
    svg.push_str(&format!(
        "<clipPath id=\"clip\"><rect width=\"{width}\" height=\"{height}\"/></clipPath>\n"
    ));
    svg.push_str(&format!("<style>{style}</style>\n"));
    svg.push_str(&gradients);
    svg.push_str("</defs>\n");
    svg.push_str("<g clip-path=\"url(#clip)\">\n");
    svg.push_str("<rect id=\"bg\" x=\"0\" y=\"0\" width=\"100%\" height=\"100%\"/>\n");
    svg.push_str(&rects);
    svg.push_str("</g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// One radial fade: fully opaque `color` at the focal point, transparent
/// at the rim. The focal point wanders horizontally in `[0, 0.5)` while
/// staying vertically centered.
fn radial_gradient<R: Rng>(rng: &mut R, index: usize, color: &str) -> String {
    let fx = format!("{:.18}", random(rng, 0.0, 0.5));
    format!(
        "<radialGradient id=\"rg{index}\" fx=\"{fx}\" fy=\"0.5\">\
         <stop offset=\"0%\" stop-color=\"{color}\"/>\
         <stop offset=\"100%\" stop-color=\"{color}\" stop-opacity=\"0\"/>\
         </radialGradient>\n"
    )
}

/// One full-canvas rectangle with a randomized transform composed around
/// the configured center: scale in `[0.7, 1.5)` per axis, x-skew in
/// `[-10, 10)` degrees, rotation in `[0, 360)` degrees, and a drift of
/// `[-200, 200)` user units per axis.
fn layer_rect<R: Rng>(rng: &mut R, index: usize, opts: &GradientOptions) -> String {
    let sx = format!("{:.3}", random(rng, 0.7, 1.5));
    let sy = format!("{:.3}", random(rng, 0.7, 1.5));
    let skew = format!("{:.2}", random(rng, -10.0, 10.0));
    let rot = format!("{:.2}", random(rng, 0.0, 360.0));
    let tx = format!("{:.2}", random(rng, -200.0, 200.0));
    let ty = format!("{:.2}", random(rng, -200.0, 200.0));
    let (cx, cy, ncx, ncy) = match opts.center {
        TransformCenter::Canvas => (
            fmt_number(opts.width / 2.0),
            fmt_number(opts.height / 2.0),
            fmt_number(-opts.width / 2.0),
            fmt_number(-opts.height / 2.0),
        ),
        TransformCenter::Fixed => (
            "300".to_string(),
            "300".to_string(),
            "-300".to_string(),
            "-300".to_string(),
        ),
    };
    format!(
        "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" class=\"rect rect{index}\" \
         transform=\"translate({cx} {cy}) scale({sx} {sy}) skewX({skew}) rotate({rot}) \
         translate({tx} {ty}) translate({ncx} {ncy})\"/>\n"
    )
}

// Uniform draw over the half-open range [min, max).
fn random<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random_range(min..max)
}

/// Format a coordinate or dimension: integral values print without a
/// decimal point ("600", not "600.0"); everything else uses the `f64`
/// `Display` form, so non-finite inputs land in the markup as-is.
pub(crate) fn fmt_number(value: f64) -> String {
    // 2^53 bounds the integers f64 represents exactly.
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
