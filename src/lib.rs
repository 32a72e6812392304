//! svgrad
//!
//! Randomized layered radial-gradient SVG synthesis with a small HTTP
//! image endpoint.
//!
//! The core is [`synthesize`]: a pure function from a color [`Palette`]
//! and canvas [`GradientOptions`] to a complete, self-contained SVG
//! document. Each call layers [`REPETITIONS`] passes of randomly
//! transformed, radially faded rectangles over a solid background in the
//! first palette color, so two calls with the same inputs produce
//! different images by design. [`synthesize_with`] accepts an explicit
//! random generator for reproducible output.
//!
//! # Example
//!
//! ```
//! use svgrad::{synthesize, GradientOptions, Palette};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let palette = Palette::new(vec!["#5135FF".into(), "#FF5828".into()])?;
//! let svg = synthesize(&palette, &GradientOptions::default());
//! assert!(svg.contains("viewBox=\"0 0 600 400\""));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// The gradient synthesizer (the only designed algorithm in the crate)
pub mod synth;
pub use synth::{synthesize, synthesize_with, REPETITIONS};

// Named four-color palettes offered by the CLI and the /presets route
pub mod presets;

// String conventions of the HTTP boundary (token codec, links, filenames)
pub mod params;

// tiny_http shell exposing the synthesizer as an image endpoint
pub mod server;

/// Palette used when a caller supplies no colors.
pub const DEFAULT_COLORS: [&str; 4] = ["#5135FF", "#FF5828", "#F69CFF", "#FFA50F"];

/// Default canvas width in user units.
pub const DEFAULT_WIDTH: f64 = 600.0;

/// Default canvas height in user units.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// An ordered, non-empty list of color tokens.
///
/// Tokens are opaque strings (`#RRGGBB`, named colors, anything the target
/// renderer accepts) and pass through into the emitted markup verbatim.
/// Order matters: the first color becomes the solid background, and each
/// position gets its own gradient id in the output.
///
/// # Examples
///
/// ```
/// let palette = svgrad::Palette::new(vec!["#134E5E".into(), "#71B280".into()]).unwrap();
/// assert_eq!(palette.primary(), "#134E5E");
/// assert!(svgrad::Palette::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from color tokens. At least one color is required.
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidPalette(
                "at least one color is required".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Build a palette from decoded boundary values, substituting the
    /// default palette when the list is empty.
    pub fn from_query(colors: Vec<String>) -> Self {
        Self::new(colors).unwrap_or_default()
    }

    /// The color tokens in layering order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The first color; fills the full-canvas background rectangle.
    pub fn primary(&self) -> &str {
        &self.colors[0]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Which point the per-layer transform recenters around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformCenter {
    /// Recenter around `(width/2, height/2)` of the requested canvas.
    #[default]
    Canvas,
    /// Recenter around the fixed point `(300,300)` regardless of canvas
    /// size. Non-default canvases layer off-center in this mode; kept
    /// selectable for output compatibility.
    Fixed,
}

/// Options for a single synthesis call.
///
/// Dimensions are plain `f64`s with no validation: non-positive or
/// non-finite values pass through into the markup verbatim, producing a
/// document that still parses but may not render sensibly.
#[derive(Debug, Clone, Copy)]
pub struct GradientOptions {
    /// Canvas width in user units
    pub width: f64,
    /// Canvas height in user units
    pub height: f64,
    /// Transform-center behavior for the layer rectangles
    pub center: TransformCenter,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: TransformCenter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GradientOptions::default();
        assert_eq!(opts.width, 600.0);
        assert_eq!(opts.height, 400.0);
        assert_eq!(opts.center, TransformCenter::Canvas);
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors().len(), 4);
        assert_eq!(palette.primary(), "#5135FF");
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = Palette::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidPalette(_)));
    }

    #[test]
    fn test_from_query_falls_back_to_default() {
        assert_eq!(Palette::from_query(Vec::new()), Palette::default());
        let palette = Palette::from_query(vec!["tomato".into()]);
        assert_eq!(palette.colors(), ["tomato"]);
    }
}
