//! Conversions between RGB and the cylindrical spaces HLS and HUSL.
//!
//! Hues are always in degrees, in \[0, 360).  HLS lightness and
//! saturation are in \[0, 1\]; HUSL saturation and lightness are in
//! \[0, 100\].

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::color::{clamp01, Color};
use crate::error::{check_range, Error, Result};

/// Reduce the hue `h` (in degrees) to \[0, 360).
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.);
    // `rem_euclid` may round up to exactly 360 for tiny negative `h`.
    if h >= 360. { 0. } else { h }
}

/// Hue, lightness, saturation coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hls {
    /// Hue in degrees.
    pub h: f64,
    /// Lightness in \[0, 1\].
    pub l: f64,
    /// Saturation in \[0, 1\].
    pub s: f64,
}

impl Hls {
    pub fn from_rgb(c: Color) -> Hls {
        let [r, g, b] = c.to_array();
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let l = (minc + maxc) / 2.;
        if minc == maxc {
            return Hls { h: 0., l, s: 0. }
        }
        let delta = maxc - minc;
        let s = if l <= 0.5 { delta / (maxc + minc) }
                else { delta / (2. - maxc - minc) };
        let rc = (maxc - r) / delta;
        let gc = (maxc - g) / delta;
        let bc = (maxc - b) / delta;
        let h = if r == maxc { bc - gc }
                else if g == maxc { 2. + rc - bc }
                else { 4. + gc - rc };
        Hls { h: normalize_hue(60. * h), l, s }
    }

    /// Convert to RGB.  Fails if `l` or `s` is outside \[0, 1\].
    pub fn to_rgb(&self) -> Result<Color> {
        check_range("HLS lightness", self.l, 0., 1.)?;
        check_range("HLS saturation", self.s, 0., 1.)?;
        if !self.h.is_finite() {
            return Err(Error::InputValidation(
                format!("HLS hue = {} is not finite", self.h)))
        }
        Ok(self.to_rgb_clamped())
    }

    /// Convert to RGB, assuming the coordinates are valid.
    pub(crate) fn to_rgb_clamped(&self) -> Color {
        let (l, s) = (clamp01(self.l), clamp01(self.s));
        if s == 0. {
            return Color::gray(l)
        }
        let m2 = if l <= 0.5 { l * (1. + s) } else { l + s - l * s };
        let m1 = 2. * l - m2;
        let h = normalize_hue(self.h) / 360.;
        Color::clamped(hls_value(m1, m2, h + 1. / 3.),
                       hls_value(m1, m2, h),
                       hls_value(m1, m2, h - 1. / 3.))
    }
}

fn hls_value(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.);
    if hue < 1. / 6. { m1 + (m2 - m1) * hue * 6. }
    else if hue < 0.5 { m2 }
    else if hue < 2. / 3. { m1 + (m2 - m1) * (2. / 3. - hue) * 6. }
    else { m1 }
}

/// HUSL (human-friendly HSL) coordinates: a hue, saturation,
/// lightness reparametrization of CIE LCh(uv) in which the saturation
/// is the fraction of the maximum chroma reachable in sRGB for the
/// given hue and lightness.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Husl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in \[0, 100\].
    pub s: f64,
    /// Lightness in \[0, 100\].
    pub l: f64,
}

// sRGB (D65) ↔ CIE XYZ
const M: [[f64; 3]; 3] = [
    [ 3.240969941904521, -1.537383177570093, -0.498610760293   ],
    [-0.96924363628087,   1.87596750150772,   0.041555057407175],
    [ 0.055630079696993, -0.20397695888897,   1.056971514242878],
];
const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595,  0.35758433938387, 0.18048078840183 ],
    [0.21263900587151,  0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966 ],
];
const REF_U: f64 = 0.19783000664283;
const REF_V: f64 = 0.46831999493879;
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// Lines `(slope, intercept)` bounding the sRGB gamut in the (u, v)
/// chroma plane at lightness `l`.
fn gamut_bounds(l: f64) -> [(f64, f64); 6] {
    let sub1 = (l + 16.).powi(3) / 1560896.;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };
    let mut bounds = [(0., 0.); 6];
    for (c, &[m1, m2, m3]) in M.iter().enumerate() {
        for t in 0 .. 2 {
            let t = t as f64;
            let top1 = (284517. * m1 - 94839. * m3) * sub2;
            let top2 = (838422. * m3 + 769860. * m2 + 731718. * m1) * l * sub2
                - 769860. * t * l;
            let bottom = (632260. * m3 - 126452. * m2) * sub2 + 126452. * t;
            bounds[2 * c + t as usize] = (top1 / bottom, top2 / bottom);
        }
    }
    bounds
}

/// Largest chroma displayable in sRGB for lightness `l` and hue `h`
/// (degrees).
fn max_chroma(l: f64, h: f64) -> f64 {
    let (sin, cos) = h.to_radians().sin_cos();
    gamut_bounds(l).iter()
        .map(|&(slope, intercept)| intercept / (sin - slope * cos))
        .filter(|len| *len >= 0.)
        .fold(f64::INFINITY, f64::min)
}

#[inline]
fn to_linear(c: f64) -> f64 {
    if c > 0.04045 { ((c + 0.055) / 1.055).powf(2.4) } else { c / 12.92 }
}

#[inline]
fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 { 12.92 * c } else { 1.055 * c.powf(1. / 2.4) - 0.055 }
}

#[inline]
fn dot(m: &[f64; 3], v: [f64; 3]) -> f64 {
    m[0] * v[0] + m[1] * v[1] + m[2] * v[2]
}

fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON { y * KAPPA } else { 116. * y.cbrt() - 16. }
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8. { l / KAPPA } else { ((l + 16.) / 116.).powi(3) }
}

/// CIE LCh(uv): lightness, chroma, hue (degrees).
fn rgb_to_lch(c: Color) -> [f64; 3] {
    let lin = c.to_array().map(to_linear);
    let [x, y, z] = M_INV.map(|row| dot(&row, lin));
    let l = y_to_l(y);
    if l == 0. {
        return [0., 0., 0.]
    }
    let d = x + 15. * y + 3. * z;
    let u = 13. * l * (4. * x / d - REF_U);
    let v = 13. * l * (9. * y / d - REF_V);
    let h = normalize_hue(v.atan2(u).to_degrees());
    [l, u.hypot(v), h]
}

fn lch_to_rgb([l, c, h]: [f64; 3]) -> Color {
    if l <= 0. {
        return Color::BLACK
    }
    let (sin, cos) = h.to_radians().sin_cos();
    let var_u = c * cos / (13. * l) + REF_U;
    let var_v = c * sin / (13. * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9. * y * var_u) / ((var_u - 4.) * var_v - var_u * var_v);
    let z = (9. * y - 15. * var_v * y - var_v * x) / (3. * var_v);
    let [r, g, b] = M.map(|row| from_linear(dot(&row, [x, y, z])));
    Color::clamped(r, g, b)
}

impl Husl {
    pub fn from_rgb(c: Color) -> Husl {
        let [l, chroma, h] = rgb_to_lch(c);
        if l > 99.9999999 {
            return Husl { h, s: 0., l: 100. }
        }
        if l < 0.00000001 {
            return Husl { h, s: 0., l: 0. }
        }
        Husl { h, s: (chroma / max_chroma(l, h) * 100.).min(100.), l }
    }

    /// Convert to RGB.  HUSL covers more than the sRGB gamut (and its
    /// coordinates are not checked): components falling outside
    /// \[0, 1\] are clamped.
    pub fn to_rgb(&self) -> Color {
        let h = if self.h.is_finite() { normalize_hue(self.h) } else { 0. };
        let s = if self.s.is_nan() { 0. } else { self.s.clamp(0., 100.) };
        let l = if self.l.is_nan() { 0. } else { self.l.clamp(0., 100.) };
        if l > 99.9999999 {
            return Color::WHITE
        }
        if l < 0.00000001 {
            return Color::BLACK
        }
        lch_to_rgb([l, max_chroma(l, h) / 100. * s, h])
    }
}

/// Convert an RGB color to HLS.
///
/// The RGB input is a [`Color`] and therefore already validated;
/// raw components are checked by [`Color::new`].
#[inline]
pub fn rgb_to_hls(c: Color) -> Hls { Hls::from_rgb(c) }

/// Convert HLS coordinates to RGB.  The hue `h` is in degrees,
/// `l` and `s` must be in \[0, 1\].
#[inline]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> Result<Color> {
    Hls { h, l, s }.to_rgb()
}

/// Convert an RGB color to HUSL.
#[inline]
pub fn rgb_to_husl(c: Color) -> Husl { Husl::from_rgb(c) }

/// Convert HUSL coordinates to RGB (hue in degrees, `s` and `l` in
/// \[0, 100\]).  Out-of-gamut results are clamped to \[0, 1\].
#[inline]
pub fn husl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    Husl { h, s, l }.to_rgb()
}

/// The space in which color coordinates are given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum InputSpace {
    /// `[r, g, b]`, components in \[0, 1\].
    Rgb,
    /// `[h, l, s]`, hue in degrees, `l` and `s` in \[0, 1\].
    Hls,
    /// `[h, s, l]`, hue in degrees, `s` and `l` in \[0, 100\].
    Husl,
}

impl InputSpace {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSpace::Rgb => "rgb",
            InputSpace::Hls => "hls",
            InputSpace::Husl => "husl",
        }
    }

    /// Convert the coordinates `x` expressed in this space to a color.
    /// RGB and HLS coordinates are checked, HUSL ones are clamped.
    pub fn to_color(self, [a, b, c]: [f64; 3]) -> Result<Color> {
        match self {
            InputSpace::Rgb => Color::new(a, b, c),
            InputSpace::Hls => hls_to_rgb(a, b, c),
            InputSpace::Husl => Ok(husl_to_rgb(a, b, c)),
        }
    }
}

impl FromStr for InputSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(InputSpace::Rgb),
            "hls" => Ok(InputSpace::Hls),
            "husl" | "hsluv" => Ok(InputSpace::Husl),
            _ => Err(Error::InputValidation(
                format!("unrecognized input space {s:?}"))),
        }
    }
}

impl TryFrom<String> for InputSpace {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<InputSpace> for &'static str {
    fn from(s: InputSpace) -> Self { s.as_str() }
}

impl fmt::Display for InputSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color, eps: f64) -> bool {
        a.to_array().iter().zip(b.to_array())
            .all(|(x, y)| (x - y).abs() <= eps)
    }

    fn grid() -> impl Iterator<Item = Color> {
        let steps = [0., 0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95, 1.];
        steps.into_iter().flat_map(move |r| {
            steps.into_iter().flat_map(move |g| {
                steps.into_iter().map(move |b| Color::clamped(r, g, b))
            })
        })
    }

    #[test]
    fn hls_primaries() {
        let red = rgb_to_hls(Color::new(1., 0., 0.).unwrap());
        assert_eq!(red, Hls { h: 0., l: 0.5, s: 1. });
        let blue = rgb_to_hls(Color::new(0., 0., 1.).unwrap());
        assert!((blue.h - 240.).abs() < 1e-12);
        let gray = rgb_to_hls(Color::gray(0.3));
        assert_eq!((gray.h, gray.s), (0., 0.));
        assert!((gray.l - 0.3).abs() < 1e-15);
    }

    #[test]
    fn hls_round_trip() {
        for c in grid() {
            let Hls { h, l, s } = rgb_to_hls(c);
            let c1 = hls_to_rgb(h, l, s).unwrap();
            assert!(close(c, c1, 1e-6), "{c:?} -> {c1:?}");
        }
    }

    #[test]
    fn hls_validation() {
        assert!(hls_to_rgb(0., 1.1, 0.5).is_err());
        assert!(hls_to_rgb(0., 0.5, -0.1).is_err());
        assert!(hls_to_rgb(f64::NAN, 0.5, 0.5).is_err());
        // Hues wrap around.
        assert_eq!(hls_to_rgb(-240., 0.5, 1.).unwrap(),
                   hls_to_rgb(120., 0.5, 1.).unwrap());
    }

    #[test]
    fn husl_known_values() {
        // Reference values of the HUSL/HSLuv test suite.
        let red = rgb_to_husl(Color::new(1., 0., 0.).unwrap());
        assert!((red.h - 12.177).abs() < 1e-3, "{red:?}");
        assert!((red.s - 100.).abs() < 1e-6);
        assert!((red.l - 53.237).abs() < 1e-3);
        let white = rgb_to_husl(Color::WHITE);
        assert_eq!((white.s, white.l), (0., 100.));
        let black = rgb_to_husl(Color::BLACK);
        assert_eq!((black.s, black.l), (0., 0.));
    }

    #[test]
    fn husl_round_trip() {
        for c in grid() {
            let Husl { h, s, l } = rgb_to_husl(c);
            let c1 = husl_to_rgb(h, s, l);
            assert!(close(c, c1, 1e-6), "{c:?} -> {:?} -> {c1:?}",
                    rgb_to_husl(c));
        }
    }

    #[test]
    fn husl_clamps() {
        for (h, s, l) in [(0., 150., 50.), (250., 100., 120.),
                          (30., -10., -5.), (f64::NAN, 50., 50.)] {
            let c = husl_to_rgb(h, s, l);
            assert!(c.to_array().iter().all(|x| (0. ..= 1.).contains(x)));
        }
    }

    #[test]
    fn input_spaces() {
        assert_eq!("HUSL".parse::<InputSpace>(), Ok(InputSpace::Husl));
        assert!(matches!("lab".parse::<InputSpace>(), Err(Error::InputValidation(_))));
        assert_eq!(InputSpace::Hls.to_color([0., 0.5, 1.]).unwrap(),
                   Color::new(1., 0., 0.).unwrap());
        assert!(InputSpace::Rgb.to_color([0., 0., 1.01]).is_err());
        let sp: InputSpace = serde_json::from_str("\"hls\"").unwrap();
        assert_eq!(sp, InputSpace::Hls);
        assert!(serde_json::from_str::<InputSpace>("\"cmyk\"").is_err());
        assert_eq!(serde_json::to_string(&InputSpace::Husl).unwrap(), "\"husl\"");
    }

    #[test]
    fn husl_saturation_is_relative() {
        // Full saturation reaches the gamut boundary: one component
        // saturates.
        for h in [0., 60., 130., 200., 280.] {
            let c = husl_to_rgb(h, 100., 60.);
            let [r, g, b] = c.to_array();
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            assert!(max > 0.999 || min < 0.001, "h = {h}: {c:?}");
        }
    }
}
