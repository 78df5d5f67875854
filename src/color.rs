//! The canonical color value.

use std::fmt;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::error::{check_range, Error, Result};
use crate::space::{Hls, Husl};

/// An sRGB color with components in \[0, 1\].
///
/// `Color` is an immutable value.  The invariant that every component
/// lies in \[0, 1\] is established by the constructors: [`Color::new`]
/// rejects out of range components while [`Color::clamped`] saturates
/// them.  HLS, HUSL, hexadecimal and named colors are all views
/// convertible to and from this form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0. } else { x.clamp(0., 1.) }
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color { r: 0., g: 0., b: 0. };
    /// Pure white.
    pub const WHITE: Color = Color { r: 1., g: 1., b: 1. };

    /// Return the color with red, green and blue components `r`, `g`,
    /// `b`, or an [`Error::InputValidation`] if one of them is not in
    /// \[0, 1\].
    ///
    /// # Example
    ///
    /// ```
    /// use palette_brewery::Color;
    /// let c = Color::new(0.2, 0.4, 0.6).unwrap();
    /// assert_eq!(c.to_hex(), "#336699");
    /// assert!(Color::new(1.2, 0., 0.).is_err());
    /// ```
    pub fn new(r: f64, g: f64, b: f64) -> Result<Color> {
        Ok(Color { r: check_range("red", r, 0., 1.)?,
                   g: check_range("green", g, 0., 1.)?,
                   b: check_range("blue", b, 0., 1.)? })
    }

    /// Same as [`Color::new`] but components are clamped to \[0, 1\]
    /// (NaN becomes 0).
    #[inline]
    pub fn clamped(r: f64, g: f64, b: f64) -> Color {
        Color { r: clamp01(r), g: clamp01(g), b: clamp01(b) }
    }

    /// Gray of intensity `x` (clamped to \[0, 1\]).
    #[inline]
    pub fn gray(x: f64) -> Color { Color::clamped(x, x, x) }

    /// Color from 8 bits per channel components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r: r as f64 / 255., g: g as f64 / 255., b: b as f64 / 255. }
    }

    /// Parse `"#rrggbb"` or `"#rgb"` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Color> {
        let bad = || Error::InputValidation(format!("{s:?} is not a hex color"));
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) { return Err(bad()) }
        let digit = |i: usize, len: usize| {
            u8::from_str_radix(&hex[i .. i + len], 16).map_err(|_| bad())
        };
        match hex.len() {
            6 => Ok(Color::from_rgb8(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
            3 => {
                let (r, g, b) = (digit(0, 1)?, digit(1, 1)?, digit(2, 1)?);
                Ok(Color::from_rgb8(17 * r, 17 * g, 17 * b))
            }
            _ => Err(bad()),
        }
    }

    /// Red component.
    #[inline]
    pub fn r(&self) -> f64 { self.r }

    /// Green component.
    #[inline]
    pub fn g(&self) -> f64 { self.g }

    /// Blue component.
    #[inline]
    pub fn b(&self) -> f64 { self.b }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] { [self.r, self.g, self.b] }

    /// Round the components to 8 bits.
    pub fn to_rgb8(&self) -> RGB8 {
        let q = |x: f64| (255. * x).round() as u8;
        RGB8 { r: q(self.r), g: q(self.g), b: q(self.b) }
    }

    /// Lowercase `"#rrggbb"` representation.
    pub fn to_hex(&self) -> String {
        let RGB8 { r, g, b } = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Perceived brightness (Rec. 601 weights), in \[0, 1\].
    #[inline]
    pub fn luma(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linear interpolation in RGB: `t == 0.` gives `self`, `t == 1.`
    /// gives `other`.
    pub fn mix(&self, other: &Color, t: f64) -> Color {
        let l = |a: f64, b: f64| (1. - t) * a + t * b;
        Color::clamped(l(self.r, other.r), l(self.g, other.g),
                       l(self.b, other.b))
    }

    /// HLS coordinates of the color.
    #[inline]
    pub fn to_hls(&self) -> Hls { Hls::from_rgb(*self) }

    /// HUSL coordinates of the color.
    #[inline]
    pub fn to_husl(&self) -> Husl { Husl::from_rgb(*self) }

    /// Multiply the HLS saturation by `prop` ∈ \[0, 1\].
    pub fn desaturate(&self, prop: f64) -> Result<Color> {
        let prop = check_range("desaturation proportion", prop, 0., 1.)?;
        let hls = self.to_hls();
        Ok(Hls { s: hls.s * prop, ..hls }.to_rgb_clamped())
    }

    /// The same hue and lightness with full HLS saturation.
    pub fn saturate(&self) -> Color {
        Hls { s: 1., ..self.to_hls() }.to_rgb_clamped()
    }

    /// Replace some of the HLS coordinates of the color.
    pub fn set_hls_values(&self, h: Option<f64>, l: Option<f64>,
                          s: Option<f64>) -> Result<Color> {
        let hls = self.to_hls();
        Hls { h: h.unwrap_or(hls.h),
              l: l.unwrap_or(hls.l),
              s: s.unwrap_or(hls.s) }.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<[f64; 3]> for Color {
    type Error = Error;

    fn try_from([r, g, b]: [f64; 3]) -> Result<Self> { Color::new(r, g, b) }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self { c.to_array() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(Color::new(0., 0.5, 1.).is_ok());
        assert!(matches!(Color::new(-0.1, 0., 0.),
                         Err(Error::InputValidation(_))));
        assert!(Color::new(0., f64::NAN, 0.).is_err());
        assert_eq!(Color::clamped(-1., 2., f64::NAN), Color::new(0., 1., 0.).unwrap());
    }

    #[test]
    fn hex() {
        let c = Color::from_hex("#d9544d").unwrap();
        assert_eq!(c, Color::from_rgb8(0xd9, 0x54, 0x4d));
        assert_eq!(c.to_hex(), "#d9544d");
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#ABCDEF").unwrap().to_hex(), "#abcdef");
        for bad in ["", "#12345", "#ggg", "#12345678", "#ééé"] {
            assert!(Color::from_hex(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::from_rgb8(10, 20, 30);
        let b = Color::from_rgb8(200, 100, 0);
        assert_eq!(a.mix(&b, 0.), a);
        assert_eq!(a.mix(&b, 1.), b);
    }

    #[test]
    fn desaturate() {
        let red = Color::new(1., 0., 0.).unwrap();
        let gray = red.desaturate(0.).unwrap();
        assert!((gray.r() - 0.5).abs() < 1e-12);
        assert_eq!(gray.r(), gray.g());
        assert_eq!(gray.g(), gray.b());
        assert!(red.desaturate(1.5).is_err());
        let dull = Color::new(0.6, 0.4, 0.4).unwrap();
        let vivid = dull.saturate();
        assert!((vivid.to_hls().s - 1.).abs() < 1e-12);
    }

    #[test]
    fn set_hls() {
        let red = Color::new(1., 0., 0.).unwrap();
        let green = red.set_hls_values(Some(120.), None, None).unwrap();
        assert!((green.g() - 1.).abs() < 1e-12 && green.r().abs() < 1e-12);
        assert!(red.set_hls_values(None, Some(2.), None).is_err());
    }

    #[test]
    fn serde_array() {
        let c: Color = serde_json::from_str("[0.25, 0.5, 1.0]").unwrap();
        assert_eq!(c, Color::new(0.25, 0.5, 1.).unwrap());
        assert!(serde_json::from_str::<Color>("[0.25, 0.5, 1.5]").is_err());
        assert_eq!(serde_json::to_string(&c).unwrap(), "[0.25,0.5,1.0]");
    }
}
