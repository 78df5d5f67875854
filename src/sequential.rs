//! Sequential palettes: blends, light/dark ramps and cubehelix.

use std::f64::consts::PI;
use serde::{Deserialize, Serialize};
use crate::color::{clamp01, Color};
use crate::error::{check_range, Error, Result};
use crate::space::{husl_to_rgb, InputSpace};
use crate::{sample_positions, ColorRange, Palette};

/// Piecewise linear interpolation (in RGB) between evenly spaced
/// control colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Blend {
    colors: Vec<Color>, // Invariant: non-empty
}

impl Blend {
    /// Fails if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InputValidation(
                "a blend needs at least one color".into()))
        }
        Ok(Blend { colors })
    }

    /// The control colors.
    pub fn colors(&self) -> &[Color] { &self.colors }
}

impl ColorRange for Blend {
    fn color(&self, t: f64) -> Color {
        let n = self.colors.len() - 1;
        let tn = clamp01(t) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.colors[i].mix(&self.colors[i + 1], tn - i as f64) }
        else { self.colors[n] }
    }
}

/// Return `n` colors blending linearly between `colors`.
pub fn blend_palette(colors: &[Color], n: usize) -> Result<Palette> {
    Ok(Blend::new(colors.to_vec())?.palette(n))
}

/// The unsaturated end of a [`SequentialRamp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampEnd {
    /// Start near white.
    #[default]
    Light,
    /// Start near black.
    Dark,
}

impl RampEnd {
    /// HUSL lightness of the unsaturated end.
    fn husl_lightness(self) -> f64 {
        match self { RampEnd::Light => 95., RampEnd::Dark => 15. }
    }
}

/// A ramp from an almost gray color, near white or near black, to a
/// seed color.
///
/// The gray end has the hue of the seed in HUSL, 15% of its
/// saturation and a lightness of 95 ([`RampEnd::Light`]) or 15
/// ([`RampEnd::Dark`]).  Colors are interpolated linearly in RGB.
///
/// # Example
///
/// ```
/// use palette_brewery::{Color, ColorRange, SequentialRamp};
/// let seed = Color::from_hex("#3778bf").unwrap();
/// let blues = SequentialRamp::light(seed).palette(6);
/// assert_eq!(blues[5], seed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialRamp {
    seed: Color,
    gray: Color,
    reverse: bool,
}

impl SequentialRamp {
    pub fn new(seed: Color, end: RampEnd) -> Self {
        let husl = seed.to_husl();
        let gray = husl_to_rgb(husl.h, 0.15 * husl.s, end.husl_lightness());
        SequentialRamp { seed, gray, reverse: false }
    }

    /// Ramp from near white to `seed`.
    pub fn light(seed: Color) -> Self { Self::new(seed, RampEnd::Light) }

    /// Ramp from near black to `seed`.
    pub fn dark(seed: Color) -> Self { Self::new(seed, RampEnd::Dark) }

    /// Go from the seed color to the gray end instead.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn seed(&self) -> Color { self.seed }

    /// The unsaturated end of the ramp.
    pub fn gray(&self) -> Color { self.gray }

    #[inline]
    fn forward(&self, t: f64) -> Color { self.gray.mix(&self.seed, clamp01(t)) }
}

impl ColorRange for SequentialRamp {
    fn color(&self, t: f64) -> Color {
        self.forward(if self.reverse { 1. - t } else { t })
    }

    /// A reversed ramp is exactly the non-reversed one read backwards.
    fn palette(&self, n: usize) -> Palette {
        let p: Palette = sample_positions(n).map(|t| self.forward(t)).collect();
        if self.reverse { p.reversed() } else { p }
    }
}

/// Return `n` colors ramping from a near white (`end` =
/// [`RampEnd::Light`]) or near black ([`RampEnd::Dark`]) color to
/// `seed`, whose coordinates are expressed in the `input` space.
pub fn sequential_ramp(seed: [f64; 3], input: InputSpace, end: RampEnd,
                       n: usize, reverse: bool) -> Result<Palette> {
    let seed = input.to_color(seed)?;
    Ok(SequentialRamp::new(seed, end).reverse(reverse).palette(n))
}

/// Cubehelix color scheme (D. A. Green, 2011): brightness increases
/// monotonically while the hue rotates, so that the ramp degrades
/// gracefully to grayscale.
///
/// The parameters are set with builder methods; the defaults are
/// `start = 0`, `rot = 0.4`, `gamma = 1`, `hue = 0.8`, `dark = 0.15`,
/// `light = 0.85`.  Parameters are checked by [`Cubehelix::validate`];
/// evaluating an invalid ramp clamps the resulting colors.
///
/// # Example
///
/// ```
/// use palette_brewery::{ColorRange, Cubehelix};
/// let ch = Cubehelix::default().start(2.).rot(0.).light(0.95);
/// ch.validate().unwrap();
/// let p = ch.palette(8);
/// assert!(p[0].luma() < p[7].luma());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cubehelix {
    start: f64,
    rot: f64,
    gamma: f64,
    hue: f64,
    dark: f64,
    light: f64,
    reverse: bool,
}

impl Default for Cubehelix {
    fn default() -> Self {
        Cubehelix { start: 0., rot: 0.4, gamma: 1., hue: 0.8,
                    dark: 0.15, light: 0.85, reverse: false }
    }
}

impl Cubehelix {
    /// Hue at the start of the helix, in \[0, 3\].
    pub fn start(mut self, start: f64) -> Self { self.start = start; self }

    /// Rotations around the hue wheel over the range of the ramp.
    pub fn rot(mut self, rot: f64) -> Self { self.rot = rot; self }

    /// Gamma factor (> 0) emphasizing darker (< 1) or lighter (> 1)
    /// colors.
    pub fn gamma(mut self, gamma: f64) -> Self { self.gamma = gamma; self }

    /// Saturation of the colors, in \[0, 1\].
    pub fn hue(mut self, hue: f64) -> Self { self.hue = hue; self }

    /// Intensity of the darkest color, in \[0, 1\].
    pub fn dark(mut self, dark: f64) -> Self { self.dark = dark; self }

    /// Intensity of the lightest color, in \[0, 1\].
    pub fn light(mut self, light: f64) -> Self { self.light = light; self }

    /// Go from light to dark instead of dark to light.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_range("cubehelix start", self.start, 0., 3.)?;
        check_range("cubehelix hue", self.hue, 0., 1.)?;
        check_range("cubehelix dark", self.dark, 0., 1.)?;
        check_range("cubehelix light", self.light, 0., 1.)?;
        if self.dark > self.light {
            return Err(Error::InputValidation(format!(
                "cubehelix dark = {} is above light = {}", self.dark, self.light)))
        }
        if !self.rot.is_finite() {
            return Err(Error::InputValidation(
                format!("cubehelix rot = {} is not finite", self.rot)))
        }
        if !(self.gamma > 0. && self.gamma.is_finite()) {
            return Err(Error::InputValidation(
                format!("cubehelix gamma = {} must be > 0", self.gamma)))
        }
        Ok(())
    }

    /// Gamma corrected intensity at `x` ∈ \[0, 1\].  Up to rounding of
    /// the helix coefficients, it is the luma of [`Cubehelix::at`]
    /// whenever no component is clamped.
    pub fn lightness(&self, x: f64) -> f64 { x.powf(self.gamma) }

    /// Color of the helix at intensity `x` ∈ \[0, 1\] (before the
    /// `dark`, `light` rescaling).
    pub fn at(&self, x: f64) -> Color {
        let xg = self.lightness(x);
        let a = self.hue * xg * (1. - xg) / 2.;
        let (sin, cos) = (2. * PI * (self.start / 3. + self.rot * x)).sin_cos();
        Color::clamped(xg + a * (-0.14861 * cos + 1.78277 * sin),
                       xg + a * (-0.29227 * cos - 0.90649 * sin),
                       xg + a * (1.97294 * cos))
    }

    #[inline]
    fn forward(&self, t: f64) -> Color {
        let t = clamp01(t);
        self.at((1. - t) * self.dark + t * self.light)
    }
}

impl ColorRange for Cubehelix {
    fn color(&self, t: f64) -> Color {
        self.forward(if self.reverse { 1. - t } else { t })
    }

    fn palette(&self, n: usize) -> Palette {
        let p: Palette = sample_positions(n).map(|t| self.forward(t)).collect();
        if self.reverse { p.reversed() } else { p }
    }
}

/// Return `n` cubehelix colors whose intensities are evenly spaced
/// between `dark` and `light` (from `light` to `dark` if `reverse`).
pub fn cubehelix_ramp(n: usize, start: f64, rot: f64, gamma: f64,
                      dark: f64, light: f64, reverse: bool) -> Result<Palette> {
    let ch = Cubehelix::default().start(start).rot(rot).gamma(gamma)
        .dark(dark).light(light).reverse(reverse);
    ch.validate()?;
    Ok(ch.palette(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn windows_blue() -> Color { Color::from_hex("#3778bf").unwrap() }

    #[test]
    fn blend() {
        let b = Blend::new(vec![Color::BLACK, Color::WHITE, Color::BLACK]).unwrap();
        assert_eq!(b.color(0.), Color::BLACK);
        assert_eq!(b.color(0.5), Color::WHITE);
        assert_eq!(b.color(1.), Color::BLACK);
        assert_eq!(b.color(0.25), Color::gray(0.5));
        assert_eq!(b.color(7.), Color::BLACK);
        let single = Blend::new(vec![Color::WHITE]).unwrap();
        assert_eq!(single.palette(3).as_hex(), vec!["#ffffff"; 3]);
        assert!(Blend::new(vec![]).is_err());
        assert!(blend_palette(&[], 3).is_err());
    }

    #[test]
    fn light_and_dark_ends() {
        let light = SequentialRamp::light(windows_blue());
        let dark = SequentialRamp::dark(windows_blue());
        assert!((light.gray().to_husl().l - 95.).abs() < 1e-6);
        assert!((dark.gray().to_husl().l - 15.).abs() < 1e-6);
        let p = light.palette(6);
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], light.gray());
        assert_eq!(p[5], windows_blue());
        let p = dark.palette(6);
        assert_eq!(p[0], dark.gray());
        assert_eq!(p[5], windows_blue());
    }

    #[test]
    fn ramp_lightness_is_monotonic() {
        let p = SequentialRamp::light(windows_blue()).palette(10);
        for w in p.colors().windows(2) {
            assert!(w[0].to_hls().l >= w[1].to_hls().l);
        }
        let p = SequentialRamp::dark(windows_blue()).palette(10);
        for w in p.colors().windows(2) {
            assert!(w[0].to_hls().l <= w[1].to_hls().l);
        }
    }

    #[test]
    fn reverse_symmetry() {
        for n in [0, 1, 2, 5, 6, 11] {
            for end in [RampEnd::Light, RampEnd::Dark] {
                let fwd = sequential_ramp([0.2, 0.6, 0.3], InputSpace::Rgb,
                                          end, n, false).unwrap();
                let bwd = sequential_ramp([0.2, 0.6, 0.3], InputSpace::Rgb,
                                          end, n, true).unwrap();
                assert_eq!(bwd, fwd.reversed());
            }
        }
        let r = SequentialRamp::light(windows_blue()).reverse(true);
        assert_eq!(r.color(0.), windows_blue());
    }

    #[test]
    fn ramp_input_spaces() {
        let husl = sequential_ramp([250., 80., 50.], InputSpace::Husl,
                                   RampEnd::Dark, 4, false).unwrap();
        assert_eq!(husl[3], husl_to_rgb(250., 80., 50.));
        assert!(sequential_ramp([2., 0., 0.], InputSpace::Rgb,
                                RampEnd::Dark, 4, false).is_err());
        assert!(sequential_ramp([0., 1.5, 0.], InputSpace::Hls,
                                RampEnd::Dark, 4, false).is_err());
    }

    #[test]
    fn cubehelix_monotonic_luma() {
        let p = cubehelix_ramp(10, 0., 0.4, 1., 0.15, 0.85, false).unwrap();
        assert_eq!(p.len(), 10);
        for w in p.colors().windows(2) {
            assert!(w[0].luma() <= w[1].luma() + 1e-12,
                    "{} > {}", w[0].luma(), w[1].luma());
        }
        let ch = Cubehelix::default();
        for (i, t) in sample_positions(10).enumerate() {
            let x = 0.15 + t * 0.7;
            // The helix is luma neutral for weights (0.30, 0.59, 0.11).
            assert!((p[i].luma() - ch.lightness(x)).abs() < 2e-3);
        }
    }

    #[test]
    fn cubehelix_dark_above_light() {
        assert!(matches!(cubehelix_ramp(5, 0., 0.4, 1., 0.9, 0.1, false),
                         Err(Error::InputValidation(_))));
        // Equal ends give a constant ramp.
        let p = cubehelix_ramp(3, 0., 0.4, 1., 0.5, 0.5, false).unwrap();
        assert_eq!(p[0], p[2]);
    }

    #[test]
    fn cubehelix_reverse() {
        for n in [0, 1, 6, 9] {
            let fwd = cubehelix_ramp(n, 1., -0.5, 0.8, 0.1, 0.9, false).unwrap();
            let bwd = cubehelix_ramp(n, 1., -0.5, 0.8, 0.1, 0.9, true).unwrap();
            assert_eq!(bwd, fwd.reversed());
        }
    }

    #[test]
    fn cubehelix_gray_when_no_hue() {
        let p = Cubehelix::default().hue(0.).palette(5);
        for c in p {
            assert_eq!(c.r(), c.g());
            assert_eq!(c.g(), c.b());
        }
    }

    #[test]
    fn cubehelix_validation() {
        assert!(cubehelix_ramp(5, 3.5, 0.4, 1., 0.15, 0.85, false).is_err());
        assert!(cubehelix_ramp(5, 0., 0.4, 0., 0.15, 0.85, false).is_err());
        assert!(cubehelix_ramp(5, 0., 0.4, 1., -0.1, 0.85, false).is_err());
        assert!(cubehelix_ramp(5, 0., f64::NAN, 1., 0.15, 0.85, false).is_err());
        assert!(cubehelix_ramp(5, 0., 0.4, 1., 0.15, 1.2, false).is_err());
        assert!(cubehelix_ramp(0, 0., 0.4, 1., 0.15, 0.85, false).unwrap().is_empty());
    }

    #[test]
    fn cubehelix_colormap_is_continuous() {
        // The colormap uses the helix itself, not the sampled colors.
        let ch = Cubehelix::default().rot(-1.);
        assert_eq!(ch.color(0.3), ch.at((1. - 0.3) * 0.15 + 0.3 * 0.85));
        assert_eq!(ch.reverse(true).color(0.), ch.at(0.85));
    }
}
