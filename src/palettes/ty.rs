use crate::Color;

/// A registered color sequence with its kind.
pub(crate) struct PaletteData {
    pub(crate) colors: Vec<Color>, // Invariant: non-empty
    pub(crate) typ: PaletteType,
}

impl PaletteData {
    /// Palette registered as `0xRRGGBB` hex codes.
    pub(crate) fn hex(typ: PaletteType, hex: &[u32]) -> Self {
        PaletteData { colors: hex.iter().map(|&h| Color::from_u32(h)).collect(),
                      typ }
    }

    /// Palette registered as numeric triples in \[0, 1\].
    pub(crate) fn rgb(typ: PaletteType, rgb: &[[f64; 3]]) -> Self {
        PaletteData { colors: rgb.iter().map(|&c| Color::from(c)).collect(),
                      typ }
    }
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between series; hues are used to create the
    /// primary visual differences.  Style-sheet color cycles are of
    /// this type.
    Qual,
}
