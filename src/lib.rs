//! Color palettes, style sheets, fonts and subplot layout for plots.
//!
//! - [`Color`] and the per-channel transforms [`lighten`] and [`darken`]
//! - [`Palette`]s, named ones are obtained with [`get_palette`]
//! - [`Style`], the state a plot is drawn with, and [`StyleSheet`]s
//! - [`FontBook`] and [`find_font_files`]
//! - [`SubplotLayout`] / [`make_subplots`]
//!
//! Registered palettes include the color cycles of the matplotlib
//! style sheets (`"bmh"`, `"ggplot"`, `"fivethirtyeight"`,...), the
//! colorblind-safe `"tableau-colorblind10"` and `"okabe-ito"` sets and
//! samplings of `"viridis"` and `"magma"`.  See [`palette_names`].

use std::{fmt, ops::Index, path::PathBuf, str::FromStr};
use rgb::{RGB, RGB8};
use serde::{Deserialize, Serialize};

mod palettes;
pub use palettes::ty::PaletteType;

mod style;
pub use style::{set_palette, Style, StyleSheet, STYLE_NAMES};

mod fonts;
pub use fonts::{find_font_files, load_custom_fonts, set_global_font,
                FontBook, FontEntry};

mod layout;
pub use layout::{make_subplots, Axes, Figure, SubplotLayout,
                 DEFAULT_H_TO_W, DEFAULT_WIDTH};

/// Errors of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("palette {0:?} not found")]
    UnknownPalette(String),
    #[error("invalid color {0}: expected \"#RRGGBB\" or three channels")]
    InvalidColor(String),
    #[error("a palette must contain at least one color")]
    EmptyPalette,
    #[error("style sheet {0:?} not found")]
    UnknownStyle(String),
    #[error("invalid style sheet: {0}")]
    StyleSheet(#[from] serde_json::Error),
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a font file", .0.display())]
    NotAFont(PathBuf),
    #[error("a subplot grid needs at least one row and one column")]
    EmptyGrid,
    #[error("invalid figure size: width {width}, height to width ratio {h_to_w}")]
    InvalidSize { width: f64, h_to_w: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The fraction used by [`Color::lighter`] and [`Color::darker`].
pub const DEFAULT_FACTOR: f64 = 1. / 3.;

/// An RGB color with channels nominally in \[0, 1\].
///
/// Colors are created from numeric triples ([`Color::new`],
/// `From<[f64; 3]>`,...) or from `#RRGGBB` strings
/// ([`Color::from_hex`] or [`str::parse`]) and formatted back with
/// [`Color::to_hex`].  Channels outside \[0, 1\] are kept as they are.
///
/// With serde, a color is read from either a hex string or an array
/// of three numbers and written as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color {
    rgb: RGB<f64>,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::new(0., 0., 0.);
    /// White.
    pub const WHITE: Color = Color::new(1., 1., 1.);

    /// Create a color from its red, green and blue channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { rgb: RGB { r, g, b } }
    }

    /// Create a color from a `0xRRGGBB` code.
    pub fn from_u32(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f64 / 255.;
        Color::new(channel(16), channel(8), channel(0))
    }

    /// Parse a color of the form `#RRGGBB` (hex digits of any case).
    ///
    /// # Example
    ///
    /// ```
    /// use kondo::Color;
    /// let c = Color::from_hex("#348abd")?;
    /// assert_eq!(c.to_hex(), "#348ABD");
    /// assert!(Color::from_hex("348ABD").is_err());
    /// # Ok::<(), kondo::Error>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(format!("{s:?}"));
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6
            || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid())
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Color::from_u32(hex))
    }

    /// Create a color from a slice which must hold exactly three
    /// channels.
    pub fn from_channels(c: &[f64]) -> Result<Self> {
        match c {
            &[r, g, b] => Ok(Color::new(r, g, b)),
            _ => Err(Error::InvalidColor(format!("{c:?}"))),
        }
    }

    #[inline]
    pub fn r(&self) -> f64 { self.rgb.r }

    #[inline]
    pub fn g(&self) -> f64 { self.rgb.g }

    #[inline]
    pub fn b(&self) -> f64 { self.rgb.b }

    /// Return the channels as an [`RGB`] value.
    #[inline]
    pub fn rgb(&self) -> RGB<f64> { self.rgb }

    /// Return the channels as `[r, g, b]`.
    #[inline]
    pub fn channels(&self) -> [f64; 3] { [self.rgb.r, self.rgb.g, self.rgb.b] }

    /// Return the color as 8-bit channels.  Channels are rounded and
    /// saturated to 0 ..= 255.
    pub fn to_rgb8(&self) -> RGB8 {
        fn to_u8(v: f64) -> u8 { (255. * v).round().clamp(0., 255.) as u8 }
        RGB8 { r: to_u8(self.rgb.r), g: to_u8(self.rgb.g),
               b: to_u8(self.rgb.b) }
    }

    /// Format the color as `#RRGGBB` (upper case digits).  Channels
    /// outside \[0, 1\] are saturated for the formatting only.
    pub fn to_hex(&self) -> String {
        let RGB8 { r, g, b } = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Apply `f` to each channel.
    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Color::new(f(self.rgb.r), f(self.rgb.g), f(self.rgb.b))
    }

    /// Move each channel the fraction `f` of its distance to 1.
    /// `f` is not checked: outside \[0, 1\] the channels leave \[0, 1\].
    ///
    /// # Example
    ///
    /// ```
    /// use kondo::Color;
    /// let c = Color::new(0.5, 0., 1.).lighten(0.5);
    /// assert_eq!(c.channels(), [0.75, 0.5, 1.]);
    /// ```
    #[inline]
    pub fn lighten(self, f: f64) -> Self { self.map(|v| v + f * (1. - v)) }

    /// Move each channel the fraction `f` of its distance to 0.
    /// `f` is not checked: outside \[0, 1\] the channels leave \[0, 1\].
    #[inline]
    pub fn darken(self, f: f64) -> Self { self.map(|v| v - f * v) }

    /// Same as `self.lighten(DEFAULT_FACTOR)`.
    #[inline]
    pub fn lighter(self) -> Self { self.lighten(DEFAULT_FACTOR) }

    /// Same as `self.darken(DEFAULT_FACTOR)`.
    #[inline]
    pub fn darker(self) -> Self { self.darken(DEFAULT_FACTOR) }
}

impl From<RGB<f64>> for Color {
    #[inline]
    fn from(rgb: RGB<f64>) -> Self { Color { rgb } }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f64; 3]) -> Self { Color::new(r, g, b) }
}

impl From<(f64, f64, f64)> for Color {
    #[inline]
    fn from((r, g, b): (f64, f64, f64)) -> Self { Color::new(r, g, b) }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self {
        Color::new(c.r as f64 / 255., c.g as f64 / 255., c.b as f64 / 255.)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Color::from_hex(s) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_hex() }
}

/// The two external forms of a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels(Vec<f64>),
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(c: ColorRepr) -> Result<Self> {
        match c {
            ColorRepr::Hex(s) => Color::from_hex(&s),
            ColorRepr::Channels(c) => Color::from_channels(&c),
        }
    }
}

/// Lighten `color`: each channel `v` becomes `v + f * (1 - v)`.
///
/// # Example
///
/// ```
/// use kondo::{lighten, Color, DEFAULT_FACTOR};
/// let c = lighten(Color::BLACK, DEFAULT_FACTOR);
/// assert_eq!(c.channels(), [1. / 3.; 3]);
/// ```
#[inline]
pub fn lighten(color: impl Into<Color>, f: f64) -> Color {
    color.into().lighten(f)
}

/// Darken `color`: each channel `v` becomes `v - f * v`.
///
/// Note that `darken(lighten(c, f), f)` is in general not `c`.
#[inline]
pub fn darken(color: impl Into<Color>, f: f64) -> Color {
    color.into().darken(f)
}

/// Lighten a `#RRGGBB` color and return it in the same form.
pub fn lighten_hex(color: &str, f: f64) -> Result<String> {
    Ok(Color::from_hex(color)?.lighten(f).to_hex())
}

/// Darken a `#RRGGBB` color and return it in the same form.
pub fn darken_hex(color: &str, f: f64) -> Result<String> {
    Ok(Color::from_hex(color)?.darken(f).to_hex())
}


/// An ordered, non-empty sequence of colors.  The order is the one
/// in which plotted series receive their colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>, // Invariant: non-empty
}

impl Palette {
    /// Create a palette from the colors `colors`, in that order.
    /// Fails if there are none.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self> {
        let colors: Vec<_> = colors.into_iter().collect();
        if colors.is_empty() { return Err(Error::EmptyPalette) }
        Ok(Palette { colors })
    }

    /// Create a palette from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self> {
        let colors = hex.iter().map(|h| Color::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Palette::new(colors)
    }

    /// Returns the number of colors in the palette (at least 1).
    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    /// The colors of the palette.
    #[inline]
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// The first color of the palette.
    #[inline]
    pub fn first(&self) -> Color { self.colors[0] }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }

    /// Return an endless iterator repeating the colors in order, the
    /// way successive series are colored.
    ///
    /// # Example
    ///
    /// ```
    /// use kondo::get_palette;
    /// let p = get_palette("ggplot")?;
    /// let c: Vec<_> = p.cycle().take(p.len() + 1).collect();
    /// assert_eq!(c[p.len()], p[0]);
    /// # Ok::<(), kondo::Error>(())
    /// ```
    pub fn cycle(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied().cycle()
    }

    /// The colors as `#RRGGBB` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }

    /// Return a new palette with each color lightened by `f`.
    pub fn lighten(&self, f: f64) -> Palette {
        Palette { colors: self.colors.iter().map(|c| c.lighten(f)).collect() }
    }

    /// Return a new palette with each color darkened by `f`.
    pub fn darken(&self, f: f64) -> Palette {
        Palette { colors: self.colors.iter().map(|c| c.darken(f)).collect() }
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    #[inline]
    fn index(&self, i: usize) -> &Color { &self.colors[i] }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Color>) -> Result<Self> { Palette::new(colors) }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self { p.colors }
}

/// Lighten every color of `palette` by `f`, keeping the order.
#[inline]
pub fn lighten_palette(palette: &Palette, f: f64) -> Palette {
    palette.lighten(f)
}

/// Darken every color of `palette` by `f`, keeping the order.
#[inline]
pub fn darken_palette(palette: &Palette, f: f64) -> Palette {
    palette.darken(f)
}


/// A palette given either by its registered name or by its colors.
///
/// In style sheets, a string is a name and an array is a list of
/// colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Explicit(Vec<Color>),
}

impl PaletteSpec {
    /// Look the name up in the registry or check the explicit colors.
    pub fn resolve(&self) -> Result<Palette> {
        match self {
            PaletteSpec::Named(name) => get_palette(name),
            PaletteSpec::Explicit(colors) => Palette::new(colors.iter().copied()),
        }
    }
}

impl From<&str> for PaletteSpec {
    fn from(name: &str) -> Self { PaletteSpec::Named(name.to_string()) }
}

impl From<String> for PaletteSpec {
    fn from(name: String) -> Self { PaletteSpec::Named(name) }
}

impl From<Vec<Color>> for PaletteSpec {
    fn from(colors: Vec<Color>) -> Self { PaletteSpec::Explicit(colors) }
}

impl From<Palette> for PaletteSpec {
    fn from(p: Palette) -> Self { PaletteSpec::Explicit(p.colors) }
}

impl From<&Palette> for PaletteSpec {
    fn from(p: &Palette) -> Self { PaletteSpec::Explicit(p.colors.clone()) }
}


/// Return a copy of the palette registered under `name`.
///
/// # Example
///
/// ```
/// use kondo::get_palette;
/// assert_eq!(get_palette("bmh")?[0].to_hex(), "#348ABD");
/// assert!(get_palette("nonexistent").is_err());
/// # Ok::<(), kondo::Error>(())
/// ```
pub fn get_palette(name: &str) -> Result<Palette> {
    palettes::REGISTRY.get(name)
        .map(|p| Palette { colors: p.colors.clone() })
        .ok_or_else(|| Error::UnknownPalette(name.to_string()))
}

/// Return the [`PaletteType`] of the palette registered under `name`.
pub fn palette_type(name: &str) -> Result<PaletteType> {
    palettes::REGISTRY.get(name)
        .map(|p| p.typ)
        .ok_or_else(|| Error::UnknownPalette(name.to_string()))
}

/// The names of all registered palettes, in alphabetical order.
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    palettes::REGISTRY.keys().copied()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(c: Color, expected: [f64; 3]) {
        for (x, e) in c.channels().into_iter().zip(expected) {
            assert!((x - e).abs() <= 1e-12, "{:?} ≉ {:?}", c, expected);
        }
    }

    #[test]
    fn registry_is_deterministic() {
        for name in palette_names() {
            let p = get_palette(name).unwrap();
            assert!(p.len() > 0, "{name} is empty");
            assert_eq!(p, get_palette(name).unwrap());
        }
    }

    #[test]
    fn unknown_palette() {
        match get_palette("nonexistent") {
            Err(Error::UnknownPalette(name)) => assert_eq!(name, "nonexistent"),
            r => panic!("unexpected {r:?}"),
        }
        assert!(palette_type("nonexistent").is_err());
    }

    #[test]
    fn bmh_first_color() {
        let bmh = get_palette("bmh").unwrap();
        assert_eq!(bmh[0].to_hex(), "#348ABD");
        assert_eq!(bmh.first(), Color::from_hex("#348ABD").unwrap());
        assert_eq!(palette_type("bmh").unwrap(), PaletteType::Qual);
    }

    #[test]
    fn triple_registered_palette() {
        let p = get_palette("okabe-ito").unwrap();
        assert_eq!(p.len(), 8);
        assert_eq!(p[1].channels(), [0.9, 0.6, 0.]);
        assert_eq!(palette_type("grayscale").unwrap(), PaletteType::Seq);
    }

    #[test]
    fn identity_at_zero() {
        for c in [Color::new(0.2, 0.5, 0.9), Color::BLACK, Color::WHITE] {
            assert_eq!(lighten(c, 0.), c);
            assert_eq!(darken(c, 0.), c);
        }
    }

    #[test]
    fn saturate_at_one() {
        for c in get_palette("tab10").unwrap() {
            assert_close(lighten(c, 1.), [1.; 3]);
            assert_eq!(darken(c, 1.).channels(), [0.; 3]);
        }
    }

    #[test]
    fn default_factor() {
        assert_close(lighten((0., 0., 0.), DEFAULT_FACTOR), [1. / 3.; 3]);
        assert_close(darken((1., 1., 1.), DEFAULT_FACTOR), [2. / 3.; 3]);
        assert_close(Color::WHITE.darker(), [2. / 3.; 3]);
        assert_close(Color::BLACK.lighter(), [1. / 3.; 3]);
    }

    #[test]
    fn not_invertible() {
        let c = Color::new(0.5, 0.5, 0.5);
        let back = darken(lighten(c, 0.5), 0.5);
        assert_eq!(back.channels(), [0.375; 3]);
        assert_ne!(back, c);
    }

    #[test]
    fn factor_out_of_range_is_kept() {
        let c = Color::new(0.5, 0.5, 0.5);
        assert_eq!(c.lighten(2.).channels(), [1.5; 3]);
        assert_eq!(c.darken(-1.).channels(), [1.; 3]);
        assert_eq!(c.lighten(2.).to_hex(), "#FFFFFF");
    }

    #[test]
    fn palette_transforms_keep_order() {
        let p = get_palette("ggplot").unwrap();
        for q in [lighten_palette(&p, 0.4), darken_palette(&p, 0.4)] {
            assert_eq!(q.len(), p.len());
            for (i, (c, d)) in p.iter().zip(q.iter()).enumerate() {
                assert_ne!(c, d, "color {i} unchanged");
            }
        }
        let l = lighten_palette(&p, 0.4);
        for (i, c) in p.iter().enumerate() {
            assert_eq!(l[i], c.lighten(0.4));
        }
        // The input is untouched.
        assert_eq!(p, get_palette("ggplot").unwrap());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!("#FFffFF".parse::<Color>().unwrap(), Color::WHITE);
        for s in ["", "#", "FFFFFF", "#FFF", "#FFFFFFF", "#GGGGGG", "#+FFFFF",
                  " #FFFFFF"] {
            assert!(matches!(Color::from_hex(s), Err(Error::InvalidColor(_))),
                    "{s:?} accepted");
        }
        assert_eq!(lighten_hex("#000000", 1.).unwrap(), "#FFFFFF");
        assert_eq!(darken_hex("#FFFFFF", 1.).unwrap(), "#000000");
        assert!(darken_hex("red", 0.5).is_err());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_u32(0x0072B2).to_string(), "#0072B2");
        assert_eq!(Color::from(RGB8 { r: 255, g: 128, b: 0 }).to_hex(),
                   "#FF8000");
        assert_eq!(Color::new(-0.5, 0.5, 3.).to_rgb8(),
                   RGB8 { r: 0, g: 128, b: 255 });
    }

    #[test]
    fn channel_count() {
        assert!(Color::from_channels(&[0.1, 0.2, 0.3]).is_ok());
        assert!(matches!(Color::from_channels(&[0.1, 0.2]),
                         Err(Error::InvalidColor(_))));
        assert!(Color::from_channels(&[0.1, 0.2, 0.3, 1.]).is_err());
    }

    #[test]
    fn empty_palette() {
        assert!(matches!(Palette::new(vec![]), Err(Error::EmptyPalette)));
        let empty: [&str; 0] = [];
        assert!(Palette::from_hex(&empty).is_err());
        assert!(Palette::from_hex(&["#123456", "nope"]).is_err());
    }

    #[test]
    fn palette_duplicates_allowed() {
        let p = Palette::from_hex(&["#123456", "#123456"]).unwrap();
        assert_eq!(p.to_hex(), ["#123456", "#123456"]);
    }

    #[test]
    fn serde_forms() {
        let c: Color = serde_json::from_str("\"#348ABD\"").unwrap();
        assert_eq!(c.to_hex(), "#348ABD");
        let c: Color = serde_json::from_str("[0.0, 0.5, 1.0]").unwrap();
        assert_eq!(c.channels(), [0., 0.5, 1.]);
        assert!(serde_json::from_str::<Color>("[0.0, 0.5]").is_err());
        assert_eq!(serde_json::to_string(&Color::WHITE).unwrap(),
                   "\"#FFFFFF\"");
        assert!(serde_json::from_str::<Palette>("[]").is_err());
        let spec: PaletteSpec = serde_json::from_str("\"bmh\"").unwrap();
        assert_eq!(spec, PaletteSpec::from("bmh"));
        let spec: PaletteSpec =
            serde_json::from_str("[\"#000000\", [1, 1, 1]]").unwrap();
        assert_eq!(spec.resolve().unwrap().colors(),
                   [Color::BLACK, Color::WHITE]);
    }
}
