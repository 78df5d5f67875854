//! Qualitative palettes: hue wheels, curated sets and named colors.

use serde::{Deserialize, Serialize};
use tracing::trace;
use crate::color::Color;
use crate::error::{check_range, Error, Result};
use crate::named;
use crate::palettes::{self, ty::CuratedData};
use crate::space::{husl_to_rgb, normalize_hue, Hls};
use crate::{ColorRange, Palette, PaletteType};

/// Circular color space in which hues are evenly spaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueSpace {
    Hls,
    /// Perceptually uniform: all colors have the same brightness.
    Husl,
}

/// Colors with evenly spaced hues and fixed lightness and saturation.
///
/// Lightness and saturation are fractions in \[0, 1\], in both
/// spaces (for HUSL they are scaled to \[0, 100\]).
///
/// # Example
///
/// ```
/// use palette_brewery::{CircularPalette, ColorRange, HueSpace};
/// let p = CircularPalette::new(HueSpace::Husl, 0.6, 0.8).unwrap().palette(8);
/// assert_eq!(p.len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircularPalette {
    space: HueSpace,
    lightness: f64,
    saturation: f64,
    /// Hue of the first color, in degrees.
    #[serde(default)]
    hue_offset: f64,
}

impl CircularPalette {
    pub fn new(space: HueSpace, lightness: f64, saturation: f64) -> Result<Self> {
        let p = CircularPalette { space, lightness, saturation, hue_offset: 0. };
        p.validate()?;
        Ok(p)
    }

    /// Default HLS wheel: lightness 0.6, saturation 0.65, starting
    /// slightly off pure red.
    pub fn hls() -> Self {
        CircularPalette { space: HueSpace::Hls, lightness: 0.6,
                          saturation: 0.65, hue_offset: 3.6 }
    }

    /// Default HUSL wheel: lightness 0.65, saturation 0.9, starting
    /// slightly off pure red.
    pub fn husl() -> Self {
        CircularPalette { space: HueSpace::Husl, lightness: 0.65,
                          saturation: 0.9, hue_offset: 3.6 }
    }

    /// Set the hue (in degrees) of the first color.
    pub fn hue_offset(mut self, degrees: f64) -> Self {
        self.hue_offset = degrees;
        self
    }

    pub fn space(&self) -> HueSpace { self.space }

    pub fn validate(&self) -> Result<()> {
        check_range("lightness", self.lightness, 0., 1.)?;
        check_range("saturation", self.saturation, 0., 1.)?;
        if !self.hue_offset.is_finite() {
            return Err(Error::InputValidation(
                format!("hue offset = {} is not finite", self.hue_offset)))
        }
        Ok(())
    }

    /// Color of hue `h` (in degrees).
    pub fn at_hue(&self, h: f64) -> Color {
        let h = normalize_hue(h);
        match self.space {
            HueSpace::Hls => Hls { h, l: self.lightness, s: self.saturation }
                .to_rgb_clamped(),
            HueSpace::Husl => husl_to_rgb(h, 100. * self.saturation,
                                          100. * self.lightness),
        }
    }
}

impl ColorRange for CircularPalette {
    /// Go once around the hue wheel.
    fn color(&self, t: f64) -> Color {
        self.at_hue(self.hue_offset + 360. * t.clamp(0., 1.))
    }

    /// Hue `i` is `hue_offset + i · 360 / n`: the wheel is split in
    /// `n` equal parts, so the last color is not the first one again.
    fn palette(&self, n: usize) -> Palette {
        (0 .. n).map(|i| self.at_hue(self.hue_offset + 360. * i as f64 / n as f64))
            .collect()
    }
}

/// Return `n` colors with hues `i · 360 / n` (`i = 0, …, n - 1`) in
/// the given `space` and the fixed `lightness` and `saturation`
/// (in \[0, 1\]).
pub fn circular_palette(space: HueSpace, n: usize, lightness: f64,
                        saturation: f64) -> Result<Palette> {
    Ok(CircularPalette::new(space, lightness, saturation)?.palette(n))
}

pub(crate) fn lookup(name: &str) -> Option<&'static CuratedData> {
    palettes::CURATED.iter().find(|p| p.name == name)
}

/// Qualitative themes whose default length is [`THEME_LEN`], not the
/// size of the set.
const THEMES: [&str; 6] = ["deep", "muted", "pastel", "bright", "dark", "colorblind"];
const THEME_LEN: usize = 6;

/// The palette in use when none was set: the first colors of `"deep"`.
pub(crate) fn default_palette() -> Palette {
    lookup("deep").map(|p| p.take(p.default_len())).unwrap_or_default()
}

impl CuratedData {
    /// The colors of the set.
    pub(crate) fn base(&self) -> Palette {
        self.rgb.iter().map(|&[r, g, b]| Color::from_rgb8(r, g, b)).collect()
    }

    /// The number of colors returned when none is specified.
    pub(crate) fn default_len(&self) -> usize {
        match self.typ {
            PaletteType::Qual if THEMES.contains(&self.name) => THEME_LEN,
            PaletteType::Qual => self.rgb.len(),
            PaletteType::Seq | PaletteType::Div => 6,
        }
    }

    /// `n` colors of the set.  Qualitative sets are repeated if they
    /// are too short; the other ones are interpolated and sampled
    /// away from their extremes.
    pub(crate) fn take(&self, n: usize) -> Palette {
        let base = self.base();
        match self.typ {
            PaletteType::Qual => {
                if n > base.len() {
                    trace!(palette = self.name, n, len = base.len(),
                           "cycling curated palette");
                }
                base.colors().iter().copied().cycle().take(n).collect()
            }
            PaletteType::Seq | PaletteType::Div => {
                let Ok(ramp) = base.gradient() else { return Palette::default() };
                let step = 1. / (n + 1) as f64;
                (1 ..= n).map(|k| ramp.color(k as f64 * step)).collect()
            }
        }
    }
}

/// Return `n` colors of the built-in palette `name` (see
/// [`curated_names`]).
///
/// Qualitative sets such as `"deep"` or `"Set2"` are repeated from the
/// start when `n` exceeds their size; sequential and diverging sets
/// (`"Blues"`, `"RdBu"`, …) are interpolated.
///
/// # Example
///
/// ```
/// use palette_brewery::curated;
/// let p = curated("deep6", 8).unwrap();
/// assert_eq!(p[6], p[0]);
/// ```
pub fn curated(name: &str, n: usize) -> Result<Palette> {
    lookup(name).map(|p| p.take(n))
        .ok_or_else(|| Error::UnknownPaletteName(name.to_string()))
}

/// The names and types of the built-in palettes.
pub fn curated_names() -> impl Iterator<Item = (&'static str, PaletteType)> {
    palettes::CURATED.iter().map(|p| (p.name, p.typ))
}

/// Return the colors named `names` in the xkcd color survey, in order.
pub fn named_list_palette<S: AsRef<str>>(names: &[S]) -> Result<Palette> {
    Ok(Palette::new(named::xkcd_palette(names)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hls_three_hues() {
        let p = circular_palette(HueSpace::Hls, 3, 0.5, 0.7).unwrap();
        assert_eq!(p.len(), 3);
        let expect = [[0.85, 0.15, 0.15], [0.15, 0.85, 0.15], [0.15, 0.15, 0.85]];
        for (c, e) in p.iter().zip(expect) {
            for (x, y) in c.to_array().iter().zip(e) {
                assert!((x - y).abs() < 1e-12, "{c:?} ≠ {e:?}");
            }
        }
        let hues: Vec<_> = p.iter().map(|c| c.to_hls().h.round()).collect();
        assert_eq!(hues, vec![0., 120., 240.]);
    }

    #[test]
    fn husl_same_lightness() {
        let p = circular_palette(HueSpace::Husl, 7, 0.6, 0.9).unwrap();
        for (i, c) in p.iter().enumerate() {
            let husl = c.to_husl();
            assert!((husl.l - 60.).abs() < 1e-6);
            let h = 360. * i as f64 / 7.;
            assert!((husl.h - h).abs() < 1e-6 || i == 0 && husl.h > 359.999);
        }
    }

    #[test]
    fn circular_lengths() {
        for n in [0, 1, 2, 10] {
            assert_eq!(CircularPalette::hls().palette(n).len(), n);
            assert_eq!(CircularPalette::husl().palette(n).len(), n);
        }
        assert!(circular_palette(HueSpace::Hls, 3, 1.5, 0.5).is_err());
        assert!(circular_palette(HueSpace::Husl, 3, 0.5, -0.5).is_err());
    }

    #[test]
    fn curated_cycling() {
        let base = curated("deep", 10).unwrap();
        let p = curated("deep", 25).unwrap();
        assert_eq!(p.len(), 25);
        assert_eq!(&p.colors()[.. 10], base.colors());
        for i in 0 .. 25 { assert_eq!(p[i], base[i % 10]); }
        assert_eq!(curated("Set1", 0).unwrap().len(), 0);
        assert_eq!(curated("deep", 3).unwrap().colors(), &base.colors()[.. 3]);
    }

    #[test]
    fn curated_values() {
        assert_eq!(curated("deep", 1).unwrap()[0].to_hex(), "#4c72b0");
        assert_eq!(curated("colorblind6", 6).unwrap().as_hex(),
                   vec!["#0173b2", "#029e73", "#d55e00", "#cc78bc",
                        "#ece133", "#56b4e9"]);
        assert_eq!(curated("nope", 3), Err(Error::UnknownPaletteName("nope".into())));
    }

    #[test]
    fn curated_ramps_are_sampled() {
        let blues = curated("Blues", 4).unwrap();
        assert_eq!(blues.len(), 4);
        // Extremes are excluded and lightness decreases.
        assert!(blues[0] != Color::from_hex("#f7fbff").unwrap());
        for w in blues.colors().windows(2) {
            assert!(w[0].luma() > w[1].luma());
        }
        assert_eq!(lookup("RdBu").unwrap().default_len(), 6);
        assert_eq!(lookup("Paired").unwrap().default_len(), 12);
        assert_eq!(lookup("deep").unwrap().default_len(), 6);
        assert_eq!(lookup("tab10").unwrap().default_len(), 10);
        assert_eq!(default_palette(), curated("deep", 6).unwrap());
    }

    #[test]
    fn every_curated_set_is_valid() {
        for (name, _) in curated_names() {
            let p = lookup(name).unwrap();
            assert!(p.rgb.len() >= 2, "{name}");
            assert_eq!(curated(name, 13).unwrap().len(), 13);
        }
    }

    #[test]
    fn named_list() {
        let p = named_list_palette(&["windows blue", "amber", "greyish",
                                     "faded green", "dusty purple"]).unwrap();
        assert_eq!(p.as_hex(), vec!["#3778bf", "#feb308", "#a8a495",
                                    "#7bb274", "#825f87"]);
        assert_eq!(named_list_palette(&["amber", "ambre"]),
                   Err(Error::UnknownColorName("ambre".into())));
    }
}
