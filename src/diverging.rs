//! Diverging palettes: two sequential ramps meeting at a neutral
//! midpoint.

use serde::{Deserialize, Serialize};
use crate::color::{clamp01, Color};
use crate::error::{check_range, Result};
use crate::space::husl_to_rgb;
use crate::{ColorRange, Palette, RampEnd, SequentialRamp};

/// Brightness of the midpoint of a diverging palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Center {
    /// Near white midpoint.
    #[default]
    Light,
    /// Near black midpoint.
    Dark,
}

impl Center {
    fn midpoint(self) -> Color {
        match self {
            Center::Light => Color::gray(0.95),
            Center::Dark => Color::gray(0.133),
        }
    }

    fn end(self) -> RampEnd {
        match self { Center::Light => RampEnd::Light, Center::Dark => RampEnd::Dark }
    }
}

/// Width (as a fraction of a half palette) of the transition from the
/// neutral midpoint to the gray end of each ramp.
const TRANSITION: f64 = 1. / 128.;

/// One half of a diverging palette, parametrized by the distance `u`
/// ∈ \[0, 1\] from the midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Half {
    mid: Color,
    ramp: SequentialRamp,
    band: f64, // neutral band, in [0, 1/2]
}

impl Half {
    fn at(&self, u: f64) -> Color {
        let u = clamp01(u);
        if u <= self.band {
            self.mid
        } else if u < self.band + TRANSITION {
            self.mid.mix(&self.ramp.gray(), (u - self.band) / TRANSITION)
        } else {
            let start = self.band + TRANSITION;
            self.ramp.color((u - start) / (1. - start))
        }
    }
}

/// A diverging palette between the HUSL hues `h_neg` and `h_pos`.
///
/// Each half is a [`SequentialRamp`] seeded by the HUSL color
/// `(h, saturation, lightness)`.  Both halves share the same
/// saturation and lightness, hence swapping `h_neg` and `h_pos`
/// exactly reverses the palette.  The halves meet at a neutral color,
/// light gray or dark gray depending on [`Center`]; the neutral band
/// takes `sep / 256` of each half.
///
/// Defaults: `saturation = 75`, `lightness = 50` (HUSL units),
/// `sep = 1`, [`Center::Light`].
///
/// # Example
///
/// ```
/// use palette_brewery::{ColorRange, Diverging};
/// let p = Diverging::new(220., 20.).palette(7);
/// assert_eq!(p.len(), 7);
/// assert_eq!(p[3].to_hls().s, 0.);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diverging {
    h_neg: f64,
    h_pos: f64,
    #[serde(default = "default_saturation")]
    saturation: f64,
    #[serde(default = "default_lightness")]
    lightness: f64,
    #[serde(default = "default_sep")]
    sep: f64,
    #[serde(default)]
    center: Center,
}

fn default_saturation() -> f64 { 75. }
fn default_lightness() -> f64 { 50. }
fn default_sep() -> f64 { 1. }

impl Diverging {
    pub fn new(h_neg: f64, h_pos: f64) -> Self {
        Diverging { h_neg, h_pos, saturation: default_saturation(),
                    lightness: default_lightness(), sep: default_sep(),
                    center: Center::Light }
    }

    /// HUSL saturation of the extremes, in \[0, 100\].
    pub fn saturation(mut self, s: f64) -> Self { self.saturation = s; self }

    /// HUSL lightness of the extremes, in \[0, 100\].
    pub fn lightness(mut self, l: f64) -> Self { self.lightness = l; self }

    /// Width of the neutral band (≥ 0).
    pub fn sep(mut self, sep: f64) -> Self { self.sep = sep; self }

    pub fn center(mut self, center: Center) -> Self { self.center = center; self }

    pub fn validate(&self) -> Result<()> {
        check_range("diverging negative hue", self.h_neg, f64::MIN, f64::MAX)?;
        check_range("diverging positive hue", self.h_pos, f64::MIN, f64::MAX)?;
        check_range("diverging saturation", self.saturation, 0., 100.)?;
        check_range("diverging lightness", self.lightness, 0., 100.)?;
        check_range("diverging sep", self.sep, 0., f64::MAX)?;
        Ok(())
    }

    fn half(&self, h: f64) -> Half {
        let seed = husl_to_rgb(h, self.saturation, self.lightness);
        Half { mid: self.center.midpoint(),
               ramp: SequentialRamp::new(seed, self.center.end()),
               band: (self.sep / 256.).min(0.5) }
    }

    /// The color of the extreme on the negative side.
    pub fn negative(&self) -> Color { self.half(self.h_neg).at(1.) }

    /// The color of the extreme on the positive side.
    pub fn positive(&self) -> Color { self.half(self.h_pos).at(1.) }
}

impl ColorRange for Diverging {
    /// `t = 0.` is the negative extreme, `t = 0.5` the midpoint and
    /// `t = 1.` the positive extreme.
    fn color(&self, t: f64) -> Color {
        let t = clamp01(t);
        if t < 0.5 { self.half(self.h_neg).at(1. - 2. * t) }
        else { self.half(self.h_pos).at(2. * t - 1.) }
    }

    /// The first `⌈n/2⌉` colors descend the negative ramp towards the
    /// midpoint and the last `⌈n/2⌉` ones ascend the positive ramp;
    /// for odd `n` the midpoint is shared.  Color `i` and color
    /// `n - 1 - i` are at the same distance from the midpoint.
    fn palette(&self, n: usize) -> Palette {
        let neg = self.half(self.h_neg);
        let pos = self.half(self.h_pos);
        let last = n.saturating_sub(1);
        let denom = last.max(1) as f64;
        (0 .. n).map(|i| {
            // Distance from the midpoint, computed identically for `i`
            // and `last - i`.
            let u = (2 * i).abs_diff(last) as f64 / denom;
            if 2 * i < last { neg.at(u) } else { pos.at(u) }
        }).collect()
    }
}

/// Return `n` colors going from the HUSL hue `h_neg` to `h_pos`
/// through a neutral midpoint.  See [`Diverging`].
pub fn diverging_palette(h_neg: f64, h_pos: f64, n: usize, saturation: f64,
                         lightness: f64, sep: f64, center: Center)
                         -> Result<Palette> {
    let d = Diverging::new(h_neg, h_pos).saturation(saturation)
        .lightness(lightness).sep(sep).center(center);
    d.validate()?;
    Ok(d.palette(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seven_colors() {
        let p = diverging_palette(220., 20., 7, 75., 50., 1., Center::Light).unwrap();
        assert_eq!(p.len(), 7);
        assert_eq!(p[3], Color::gray(0.95));
        assert_eq!(p[3].to_hls().s, 0.);
        // Extremes are the seeds.
        let (neg, pos) = (p[0].to_husl(), p[6].to_husl());
        assert!((neg.h - 220.).abs() < 1e-6 && (pos.h - 20.).abs() < 1e-6);
        assert!((neg.l - pos.l).abs() < 1e-6, "{neg:?} vs {pos:?}");
        assert!((neg.s - 75.).abs() < 1e-6);
        assert_eq!(p[0], Diverging::new(220., 20.).negative());
        // Lightness decreases away from the midpoint.
        assert!(p[2].luma() > p[1].luma() && p[1].luma() > p[0].luma());
        assert!(p[4].luma() > p[5].luma() && p[5].luma() > p[6].luma());
    }

    #[test]
    fn swapping_hues_reverses() {
        for n in [0, 1, 2, 5, 6, 7, 12] {
            for center in [Center::Light, Center::Dark] {
                let a = diverging_palette(250., 30., n, 80., 55., 3., center).unwrap();
                let b = diverging_palette(30., 250., n, 80., 55., 3., center).unwrap();
                assert_eq!(a.len(), n);
                assert_eq!(b, a.clone().reversed());
                if n > 0 { assert_eq!(a[0], b[n - 1]); }
            }
        }
    }

    #[test]
    fn even_lengths_have_no_midpoint() {
        let p = Diverging::new(145., 300.).palette(6);
        assert!(p.iter().all(|c| *c != Color::gray(0.95)));
        assert!(p[2].luma() > p[0].luma() && p[3].luma() > p[5].luma());
    }

    #[test]
    fn dark_center() {
        let d = Diverging::new(145., 300.).center(Center::Dark);
        assert_eq!(d.palette(5)[2], Color::gray(0.133));
        assert_eq!(d.color(0.5), Color::gray(0.133));
        assert!(d.color(0.).luma() > d.color(0.45).luma());
    }

    #[test]
    fn sep_widens_neutral_band() {
        let narrow = Diverging::new(220., 20.).sep(1.);
        let wide = Diverging::new(220., 20.).sep(64.);
        let mid = Color::gray(0.95);
        assert!(narrow.color(0.45) != mid);
        assert_eq!(wide.color(0.45), mid);
        assert_eq!(wide.color(0.55), mid);
        assert!(wide.color(0.2) != mid);
    }

    #[test]
    fn validation() {
        assert!(diverging_palette(220., 20., 5, 120., 50., 1., Center::Light).is_err());
        assert!(diverging_palette(220., 20., 5, 75., -1., 1., Center::Light).is_err());
        assert!(diverging_palette(220., 20., 5, 75., 50., -1., Center::Light).is_err());
        assert!(diverging_palette(f64::NAN, 20., 5, 75., 50., 1., Center::Light).is_err());
    }
}
