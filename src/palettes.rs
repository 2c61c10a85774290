// Color cycles of the matplotlib style sheets, a few colorblind-safe
// qualitative sets and sampled sequential maps.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use crate::{Color, Palette};
pub(crate) mod ty;
use ty::*;

const TAB10: [u32; 10] = [
    0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD,
    0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22, 0x17BECF];

const BMH: [u32; 10] = [
    0x348ABD, 0xA60628, 0x7A68A6, 0x467821, 0xD55E00,
    0xCC79A7, 0x56B4E9, 0x009E73, 0xF0E442, 0x0072B2];

const GGPLOT: [u32; 7] = [
    0xE24A33, 0x348ABD, 0x988ED5, 0x777777, 0xFBC15E, 0x8EBA42, 0xFFB5B8];

const FIVETHIRTYEIGHT: [u32; 6] = [
    0x008FD5, 0xFC4F30, 0xE5AE38, 0x6D904F, 0x8B8B8B, 0x810F7C];

const SEABORN: [u32; 10] = [
    0x4C72B0, 0xDD8452, 0x55A868, 0xC44E52, 0x8172B3,
    0x937860, 0xDA8BC3, 0x8C8C8C, 0xCCB974, 0x64B5CD];

const SOLARIZED: [u32; 8] = [
    0x268BD2, 0x2AA198, 0x859900, 0xB58900,
    0xCB4B16, 0xDC322F, 0xD33682, 0x6C71C4];

const DARK_BACKGROUND: [u32; 10] = [
    0x8DD3C7, 0xFEFFB3, 0xBFBBD9, 0xFA8174, 0x81B1D2,
    0xFDB462, 0xB3DE69, 0xBC82BD, 0xCCEBC4, 0xFFED6F];

const TABLEAU_COLORBLIND10: [u32; 10] = [
    0x006BA4, 0xFF800E, 0xABABAB, 0x595959, 0x5F9ED1,
    0xC85200, 0x898989, 0xA2C8EC, 0xFFBC79, 0xCFCFCF];

// Okabe & Ito, "Color Universal Design" (2008).
const OKABE_ITO: [[f64; 3]; 8] = [
    [0.  , 0.  , 0.  ],
    [0.9 , 0.6 , 0.  ],
    [0.35, 0.7 , 0.9 ],
    [0.  , 0.6 , 0.5 ],
    [0.95, 0.9 , 0.25],
    [0.  , 0.45, 0.7 ],
    [0.8 , 0.4 , 0.  ],
    [0.8 , 0.6 , 0.7 ]];

const GRAYSCALE: [[f64; 3]; 4] = [
    [0. , 0. , 0. ],
    [0.4, 0.4, 0.4],
    [0.6, 0.6, 0.6],
    [0.7, 0.7, 0.7]];

// Matplotlib colormaps sampled at 10 points.
const VIRIDIS: [u32; 10] = [
    0x440154, 0x482878, 0x3E4A89, 0x31688E, 0x26828E,
    0x1F9E89, 0x35B779, 0x6ECE58, 0xB5DE2B, 0xFDE725];

const MAGMA: [u32; 10] = [
    0x000004, 0x180F3D, 0x440F76, 0x721F81, 0x9E2F7F,
    0xCD4071, 0xF1605D, 0xFD9668, 0xFECA8D, 0xFCFDBF];

lazy_static! {
    pub(crate) static ref REGISTRY: BTreeMap<&'static str, PaletteData> = {
        use PaletteType::*;
        let mut m = BTreeMap::new();
        m.insert("default", PaletteData::hex(Qual, &TAB10));
        m.insert("tab10", PaletteData::hex(Qual, &TAB10));
        m.insert("bmh", PaletteData::hex(Qual, &BMH));
        m.insert("ggplot", PaletteData::hex(Qual, &GGPLOT));
        m.insert("fivethirtyeight", PaletteData::hex(Qual, &FIVETHIRTYEIGHT));
        m.insert("seaborn", PaletteData::hex(Qual, &SEABORN));
        m.insert("solarized", PaletteData::hex(Qual, &SOLARIZED));
        m.insert("dark_background", PaletteData::hex(Qual, &DARK_BACKGROUND));
        m.insert("tableau-colorblind10",
                 PaletteData::hex(Qual, &TABLEAU_COLORBLIND10));
        m.insert("okabe-ito", PaletteData::rgb(Qual, &OKABE_ITO));
        m.insert("grayscale", PaletteData::rgb(Seq, &GRAYSCALE));
        m.insert("viridis", PaletteData::hex(Seq, &VIRIDIS));
        m.insert("magma", PaletteData::hex(Seq, &MAGMA));
        m
    };
}

/// The color cycle of a default [`Style`](crate::Style).
pub(crate) fn default_cycle() -> Palette {
    Palette { colors: TAB10.iter().map(|&h| Color::from_u32(h)).collect() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_palettes_are_not_empty() {
        for (name, p) in REGISTRY.iter() {
            assert!(!p.colors.is_empty(), "{name}");
        }
    }

    #[test]
    fn default_is_tab10() {
        assert_eq!(default_cycle().colors(), REGISTRY["default"].colors);
        assert_eq!(REGISTRY["default"].colors, REGISTRY["tab10"].colors);
    }
}
