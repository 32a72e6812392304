//! Named four-color palettes.
//!
//! Offered to callers through the `/presets` route and the CLI `--preset`
//! flag. Purely a convenience table; the synthesizer accepts any palette.

use serde::Serialize;

use crate::Palette;

/// A named, fixed four-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub colors: [&'static str; 4],
}

impl ColorPreset {
    /// The preset's colors as an owned [`Palette`].
    pub fn palette(&self) -> Palette {
        Palette::from_query(self.colors.iter().map(|c| c.to_string()).collect())
    }
}

/// The full preset table, in presentation order.
pub const COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset {
        name: "Sunset",
        colors: ["#FF6B6B", "#FFE66D", "#FF8E53", "#FE6B8B"],
    },
    ColorPreset {
        name: "Ocean",
        colors: ["#667EEA", "#764BA2", "#6B8DD6", "#8E37D7"],
    },
    ColorPreset {
        name: "Forest",
        colors: ["#134E5E", "#71B280", "#52C234", "#061700"],
    },
    ColorPreset {
        name: "Aurora",
        colors: ["#00C9FF", "#92FE9D", "#FC00FF", "#00DBDE"],
    },
    ColorPreset {
        name: "Fire",
        colors: ["#FF512F", "#DD2476", "#FFA400", "#FF6B6B"],
    },
    ColorPreset {
        name: "Purple Dream",
        colors: ["#DA22FF", "#9733EE", "#B06AB3", "#4568DC"],
    },
    ColorPreset {
        name: "Teal Sunset",
        colors: ["#0BA360", "#3CBA92", "#30DD8A", "#2BB673"],
    },
    ColorPreset {
        name: "Peach",
        colors: ["#FF9A56", "#FF6A88", "#FF99AC", "#FFC3A0"],
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
