//! The state plots are drawn with, and style sheets modifying it.

use std::{fs, path::Path};
use serde::{Deserialize, Deserializer};
use tracing::debug;
use crate::{palettes, Color, Error, Palette, PaletteSpec, Result};

/// Settings consumed by drawing code: the color cycle given to
/// successive series, tick colors, fonts,...
///
/// A `Style` is an ordinary value: create one (its [`Default`] follows
/// the matplotlib defaults), adjust it with the setters, a
/// [`StyleSheet`] or [`Style::use_style`], and hand it to every
/// drawing call.
///
/// # Example
///
/// ```
/// use kondo::{Style, get_palette};
/// let mut style = Style::default();
/// style.set_palette("bmh")?;
/// assert_eq!(style.color_cycle(), &get_palette("bmh")?);
/// style.use_style("dark_background")?;
/// assert_eq!(style.xtick_color().to_hex(), "#FFFFFF");
/// # Ok::<(), kondo::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    color_cycle: Palette,
    xtick_color: Color,
    ytick_color: Color,
    font_family: Vec<String>,
    usetex: bool,
    axes_facecolor: Color,
    figure_facecolor: Color,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            color_cycle: palettes::default_cycle(),
            xtick_color: Color::BLACK,
            ytick_color: Color::BLACK,
            font_family: vec!["sans-serif".to_string()],
            usetex: false,
            axes_facecolor: Color::WHITE,
            figure_facecolor: Color::WHITE,
        }
    }
}

impl Style {
    /// The palette successive series are colored with.
    #[inline]
    pub fn color_cycle(&self) -> &Palette { &self.color_cycle }

    /// An endless iterator on the colors of the color cycle.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.color_cycle.cycle()
    }

    /// Install a copy of the palette `palette` (a registered name or
    /// explicit colors) as the color cycle.  On error, the style is
    /// left unchanged.
    pub fn set_palette(&mut self, palette: impl Into<PaletteSpec>) -> Result<()> {
        let palette = palette.into().resolve()?;
        debug!(colors = ?palette.to_hex(), "set color cycle");
        self.color_cycle = palette;
        Ok(())
    }

    #[inline]
    pub fn xtick_color(&self) -> Color { self.xtick_color }

    #[inline]
    pub fn ytick_color(&self) -> Color { self.ytick_color }

    /// Set the color of the ticks and tick labels of both axes.
    pub fn set_tick_color(&mut self, color: impl Into<Color>) {
        let color = color.into();
        self.xtick_color = color;
        self.ytick_color = color;
    }

    /// Font families, in order of preference.
    #[inline]
    pub fn font_family(&self) -> &[String] { &self.font_family }

    /// Use `family` for all text.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = vec![family.into()];
    }

    /// Whether text is rendered with LaTeX.
    #[inline]
    pub fn usetex(&self) -> bool { self.usetex }

    pub fn set_usetex(&mut self, usetex: bool) { self.usetex = usetex }

    #[inline]
    pub fn axes_facecolor(&self) -> Color { self.axes_facecolor }

    #[inline]
    pub fn figure_facecolor(&self) -> Color { self.figure_facecolor }

    /// Apply the settings present in `sheet`.  The sheet is checked
    /// before anything is modified.
    pub fn apply(&mut self, sheet: &StyleSheet) -> Result<()> {
        let color_cycle = match &sheet.color_cycle {
            Some(spec) => Some(spec.resolve()?),
            None => None,
        };
        debug!(?sheet, "apply style sheet");
        if let Some(p) = color_cycle { self.color_cycle = p }
        if let Some(c) = sheet.tick_color { self.set_tick_color(c) }
        if let Some(c) = sheet.xtick_color { self.xtick_color = c }
        if let Some(c) = sheet.ytick_color { self.ytick_color = c }
        if let Some(f) = &sheet.font_family { self.font_family = f.clone() }
        if let Some(u) = sheet.usetex { self.usetex = u }
        if let Some(c) = sheet.axes_facecolor { self.axes_facecolor = c }
        if let Some(c) = sheet.figure_facecolor { self.figure_facecolor = c }
        Ok(())
    }

    /// Apply the built-in style sheet `name` (see [`StyleSheet::named`]).
    pub fn use_style(&mut self, name: &str) -> Result<()> {
        self.apply(&StyleSheet::named(name)?)
    }

    /// Apply the JSON style sheet stored in `path`.
    pub fn use_style_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.apply(&StyleSheet::from_path(path)?)
    }
}

/// Install `palette` as the color cycle of `style`.
/// See [`Style::set_palette`].
pub fn set_palette(style: &mut Style, palette: impl Into<PaletteSpec>)
                   -> Result<()> {
    style.set_palette(palette)
}


/// Overrides for some settings of a [`Style`].
///
/// Style sheets are read from JSON objects whose keys are the field
/// names, for example
///
/// ```json
/// { "color_cycle": "ggplot",
///   "tick_color": "#555555",
///   "font_family": ["Fira Sans", "sans-serif"],
///   "axes_facecolor": [0.9, 0.9, 0.9] }
/// ```
///
/// `color_cycle` is a palette name or a list of colors, colors are
/// `"#RRGGBB"` strings or arrays of three channels and `font_family`
/// is a string or a list of strings.  `tick_color` sets both axes and
/// is overridden by `xtick_color` and `ytick_color`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    pub color_cycle: Option<PaletteSpec>,
    pub tick_color: Option<Color>,
    pub xtick_color: Option<Color>,
    pub ytick_color: Option<Color>,
    #[serde(deserialize_with = "one_or_many")]
    pub font_family: Option<Vec<String>>,
    pub usetex: Option<bool>,
    pub axes_facecolor: Option<Color>,
    pub figure_facecolor: Option<Color>,
}

fn one_or_many<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where D: Deserializer<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }
    Ok(Some(match OneOrMany::deserialize(d)? {
        OneOrMany::One(f) => vec![f],
        OneOrMany::Many(f) => f,
    }))
}

/// Names accepted by [`StyleSheet::named`].
pub const STYLE_NAMES: [&str; 8] = [
    "bmh", "dark_background", "default", "fivethirtyeight", "ggplot",
    "grayscale", "seaborn", "solarized"];

impl StyleSheet {
    /// Parse a JSON style sheet.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON style sheet from the file `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "read style sheet");
        Self::from_json(&json)
    }

    /// Return the built-in style sheet `name`, one of [`STYLE_NAMES`].
    /// `"default"` sets every field back to the [`Style`] defaults.
    pub fn named(name: &str) -> Result<Self> {
        let cycle = |n: &str| Some(PaletteSpec::from(n));
        let hex = |h: u32| Some(Color::from_u32(h));
        let sheet = match name {
            "default" => StyleSheet {
                color_cycle: cycle("default"),
                tick_color: Some(Color::BLACK),
                font_family: Some(vec!["sans-serif".to_string()]),
                usetex: Some(false),
                axes_facecolor: Some(Color::WHITE),
                figure_facecolor: Some(Color::WHITE),
                ..Default::default()
            },
            "bmh" => StyleSheet {
                color_cycle: cycle("bmh"),
                axes_facecolor: hex(0xEEEEEE),
                ..Default::default()
            },
            "dark_background" => StyleSheet {
                color_cycle: cycle("dark_background"),
                tick_color: Some(Color::WHITE),
                axes_facecolor: Some(Color::BLACK),
                figure_facecolor: Some(Color::BLACK),
                ..Default::default()
            },
            "fivethirtyeight" => StyleSheet {
                color_cycle: cycle("fivethirtyeight"),
                axes_facecolor: hex(0xF0F0F0),
                figure_facecolor: hex(0xF0F0F0),
                ..Default::default()
            },
            "ggplot" => StyleSheet {
                color_cycle: cycle("ggplot"),
                tick_color: hex(0x555555),
                axes_facecolor: hex(0xE5E5E5),
                ..Default::default()
            },
            "grayscale" => StyleSheet {
                color_cycle: cycle("grayscale"),
                ..Default::default()
            },
            "seaborn" => StyleSheet {
                color_cycle: cycle("seaborn"),
                tick_color: hex(0x262626),
                axes_facecolor: hex(0xEAEAF2),
                ..Default::default()
            },
            "solarized" => StyleSheet {
                color_cycle: cycle("solarized"),
                tick_color: hex(0x657B83),
                axes_facecolor: hex(0xEEE8D5),
                figure_facecolor: hex(0xFDF6E3),
                ..Default::default()
            },
            _ => return Err(Error::UnknownStyle(name.to_string())),
        };
        Ok(sheet)
    }
}
