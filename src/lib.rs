//! Color palettes for data visualization.
//!
//! - Qualitative: [`CircularPalette`] (evenly spaced hues in HLS or
//!   HUSL), curated sets ([`curated`]) and lists of named colors
//!   ([`named_list_palette`]).
//! - Sequential: [`SequentialRamp`] (light or dark ramps towards a seed
//!   color), [`Cubehelix`] and [`Blend`].
//! - Diverging: [`Diverging`].
//!
//! Discrete palettes are [`Palette`]s; continuous colormaps implement
//! [`ColorRange`].  Requests by name or described by a configuration
//! are handled by [`PaletteRequest`] (see [`PaletteName`] for the
//! string syntax) and the default palette is managed by a
//! [`PaletteContext`].
//!
//! Colors are [`Color`] values whose components are in \[0, 1\]; the
//! color spaces are in the [`space`] module and named colors (xkcd
//! survey and CSS) in the [`named`] module.

use std::ops::Index;
use rgb::{RGB, RGB8, RGB16, RGBA8, RGBA16};
use serde::{Deserialize, Serialize};

mod error;
mod color;
pub mod space;
pub mod named;
mod palettes;
mod qualitative;
mod sequential;
mod diverging;
mod request;
mod context;

pub use error::{Error, Result};
pub use color::Color;
pub use palettes::ty::PaletteType;
pub use qualitative::{circular_palette, curated, curated_names,
                      named_list_palette, CircularPalette, HueSpace};
pub use sequential::{blend_palette, cubehelix_ramp, sequential_ramp,
                     Blend, Cubehelix, RampEnd, SequentialRamp};
pub use diverging::{diverging_palette, Center, Diverging};
pub use space::InputSpace;
pub use request::{ColorSpec, Colormap, PaletteName, PaletteOutput,
                  PaletteRequest, PaletteSpec};
pub use context::{PaletteContext, PaletteGuard};

/// A continuous range of colors parametrized by reals in \[0, 1\]
/// (a colormap).
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values of
    /// `t` outside this interval are clamped.
    fn color(&self, t: f64) -> Color;

    /// Same as [`ColorRange::color`] in another color encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_brewery::{ColorRange, Cubehelix};
    /// let c: RGB8 = Cubehelix::default().rgb(0.5);
    /// ```
    fn rgb<C: RGBColor>(&self, t: f64) -> C where Self: Sized {
        C::from_color(self.color(t))
    }

    /// Sample the range at `n` evenly spaced points, the first one
    /// being `t = 0.` and the last one `t = 1.`.
    fn palette(&self, n: usize) -> Palette where Self: Sized {
        sample_positions(n).map(|t| self.color(t)).collect()
    }

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self>
    where Self: Sized {
        // `a` or `b` NaN will give an iterator yielding NaN.
        let finite = |x: f64| x.clamp(f64::MIN, f64::MAX);
        Range { cmap: self, a: finite(a), b: finite(b), n, ks: 0 .. n }
    }
}

/// The positions `k / (n - 1)`, `k = 0, …, n - 1` (only `0.` if `n == 1`).
pub(crate) fn sample_positions(n: usize) -> impl DoubleEndedIterator<Item = f64> {
    let last = n.saturating_sub(1).max(1) as f64;
    (0 .. n).map(move |k| k as f64 / last)
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
#[derive(Debug)]
pub struct Range<R> {
    cmap: R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    n: usize,
    ks: std::ops::Range<usize>, // positions not yet consumed
}

impl<R: ColorRange> Range<R> {
    /// The point and color at position `k < self.n`.
    fn at(&self, k: usize) -> (f64, Color) {
        let last = self.n - 1;
        if k == 0 {
            return (self.a, self.cmap.color(0.))
        }
        if k == last {
            return (self.b, self.cmap.color(1.))
        }
        let t = k as f64 / last as f64;
        let mut x = ((last - k) as f64 * self.a + k as f64 * self.b) / last as f64;
        if x.is_infinite() {
            x = (1. - t) * self.a + t * self.b;
        }
        (x, self.cmap.color(t))
    }
}

impl<R: ColorRange> Iterator for Range<R> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.ks.next()?;
        Some(self.at(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.ks.size_hint() }
}

impl<R: ColorRange> ExactSizeIterator for Range<R> {}

impl<R: ColorRange> DoubleEndedIterator for Range<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let k = self.ks.next_back()?;
        Some(self.at(k))
    }
}

/// Color encodings a palette can be exported to.
pub trait RGBColor: Sized {
    /// Return the color as a [`Color`] (components in \[0, 1\]).
    fn to_color(&self) -> Color;

    /// Create a color from a [`Color`].
    fn from_color(c: Color) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        Self::from_color(Color::gray(self.to_color().luma()))
    }
}

impl RGBColor for Color {
    #[inline]
    fn to_color(&self) -> Color { *self }

    #[inline]
    fn from_color(c: Color) -> Self { c }
}

impl RGBColor for RGB<f64> {
    /// Components outside \[0, 1\] are clamped.
    #[inline]
    fn to_color(&self) -> Color { Color::clamped(self.r, self.g, self.b) }

    #[inline]
    fn from_color(c: Color) -> Self { RGB { r: c.r(), g: c.g(), b: c.b() } }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_color(&self) -> Color { Color::from_rgb8(self.r, self.g, self.b) }

    #[inline]
    fn from_color(c: Color) -> Self { c.to_rgb8() }
}

fn quantize16(x: f64) -> u16 { (65535. * x).round() as u16 }

impl RGBColor for RGB16 {
    #[inline]
    fn to_color(&self) -> Color {
        Color::clamped(self.r as f64 / 65535., self.g as f64 / 65535.,
                       self.b as f64 / 65535.)
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        RGB16 { r: quantize16(c.r()), g: quantize16(c.g()), b: quantize16(c.b()) }
    }
}

impl RGBColor for RGBA8 {
    /// The alpha channel is ignored.
    #[inline]
    fn to_color(&self) -> Color { Color::from_rgb8(self.r, self.g, self.b) }

    /// The color is opaque.
    #[inline]
    fn from_color(c: Color) -> Self {
        let RGB8 { r, g, b } = c.to_rgb8();
        RGBA8 { r, g, b, a: 255 }
    }
}

impl RGBColor for RGBA16 {
    /// The alpha channel is ignored.
    #[inline]
    fn to_color(&self) -> Color {
        Color::clamped(self.r as f64 / 65535., self.g as f64 / 65535.,
                       self.b as f64 / 65535.)
    }

    /// The color is opaque.
    #[inline]
    fn from_color(c: Color) -> Self {
        RGBA16 { r: quantize16(c.r()), g: quantize16(c.g()),
                 b: quantize16(c.b()), a: u16::MAX }
    }
}

/// A finite, ordered sequence of colors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self { Palette { colors } }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn get(&self, i: usize) -> Option<Color> { self.colors.get(i).copied() }

    pub fn colors(&self) -> &[Color] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }

    /// Returns the colors of the palette in the encoding `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_brewery::curated;
    /// let deep: Vec<RGB8> = curated("deep", 3).unwrap().to_rgb();
    /// assert_eq!(deep[0], RGB8::new(0x4c, 0x72, 0xb0));
    /// ```
    pub fn to_rgb<C: RGBColor>(&self) -> Vec<C> {
        self.colors.iter().map(|&c| C::from_color(c)).collect()
    }

    /// The colors as `"#rrggbb"` strings.
    pub fn as_hex(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }

    /// The same colors in reverse order.
    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }

    /// A palette of `n` colors repeating `self` from the start.
    /// Fails if `n > 0` and the palette is empty.
    pub fn cycle(&self, n: usize) -> Result<Palette> {
        if self.is_empty() && n > 0 {
            return Err(Error::InputValidation(
                format!("cannot take {n} colors from an empty palette")))
        }
        Ok(self.colors.iter().copied().cycle().take(n).collect())
    }

    /// Multiply the HLS saturation of every color by `prop` ∈ \[0, 1\].
    pub fn desaturate(&self, prop: f64) -> Result<Palette> {
        self.colors.iter().map(|c| c.desaturate(prop)).collect()
    }

    /// Returns a colormap interpolating linearly between the colors of
    /// the palette.  Fails if the palette is empty.
    pub fn gradient(&self) -> Result<Blend> { Blend::new(self.colors.clone()) }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Palette { colors: iter.into_iter().collect() }
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, i: usize) -> &Color { &self.colors[i] }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self { Palette { colors } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Gray ramp from black to white.
    struct Grays;

    impl ColorRange for Grays {
        fn color(&self, t: f64) -> Color { Color::gray(t) }
    }

    #[test]
    fn range() {
        for (i, (x, c)) in Grays.range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(Grays.color(x), c);
        }
        assert_eq!(Grays.range(0., 1., 0).count(), 0);
        assert_eq!(Grays.range(2., -2., 5).len(), 5);
        let back: Vec<_> = Grays.range(0., 4., 5).rev().map(|(x, _)| x).collect();
        assert_eq!(back, vec![4., 3., 2., 1., 0.]);
        let mut r = Grays.range(f64::NEG_INFINITY, f64::INFINITY, 3);
        assert_eq!(r.next_back().map(|(x, _)| x), Some(f64::MAX));
        assert_eq!(r.len(), 2);
        assert_eq!(r.next().map(|(x, _)| x), Some(f64::MIN));
        assert_eq!(r.next(), Some((0., Grays.color(0.5))));
        assert_eq!(r.next(), None);
        assert_eq!(r.next_back(), None);
    }

    #[test]
    fn sample() {
        assert_eq!(Grays.palette(0).len(), 0);
        assert_eq!(Grays.palette(1), Palette::new(vec![Color::BLACK]));
        let p = Grays.palette(3);
        assert_eq!(p.as_hex(), vec!["#000000", "#808080", "#ffffff"]);
    }

    #[test]
    fn cycle() {
        let p = Grays.palette(3);
        let c = p.cycle(7).unwrap();
        assert_eq!(c.len(), 7);
        for i in 0 .. 7 { assert_eq!(c[i], p[i % 3]); }
        assert_eq!(p.cycle(2).unwrap().colors(), &p.colors()[.. 2]);
        assert!(Palette::default().cycle(0).unwrap().is_empty());
        assert!(Palette::default().cycle(1).is_err());
    }

    #[test]
    fn encodings() {
        let c = Color::from_rgb8(12, 200, 255);
        assert_eq!(RGB8::from_color(c), RGB8::new(12, 200, 255));
        assert_eq!(RGBA8::from_color(c).a, 255);
        assert_eq!(RGB16::from_color(Color::WHITE), RGB16::new(65535, 65535, 65535));
        assert_eq!(RGB16::new(0, 65535, 0).to_color(), Color::new(0., 1., 0.).unwrap());
        let gray = RGB8::new(255, 0, 0).to_gray();
        assert_eq!((gray.r, gray.g, gray.b), (76, 76, 76));
    }
}
