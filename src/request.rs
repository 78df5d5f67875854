//! Palette requests: by name, by list of colors or by generator
//! parameters, for discrete or continuous consumers.

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::color::{clamp01, Color};
use crate::error::{check_range, Error, Result};
use crate::named;
use crate::qualitative::{self, default_palette};
use crate::space::InputSpace;
use crate::{Blend, CircularPalette, ColorRange, Cubehelix, Diverging,
            Palette, RampEnd, SequentialRamp};

/// Number of colors of generated palettes when none is requested.
const DEFAULT_LEN: usize = 6;

/// A color as written in a request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string (`"#3778bf"`), CSS keyword, xkcd name or
    /// `"xkcd:<name>"`.
    Text(String),
    /// RGB components in \[0, 1\].
    Rgb([f64; 3]),
    /// Coordinates in the given space.
    Coords { space: InputSpace, value: [f64; 3] },
}

impl ColorSpec {
    pub fn resolve(&self) -> Result<Color> {
        match self {
            ColorSpec::Text(s) => named::parse_color(s),
            &ColorSpec::Rgb([r, g, b]) => Color::new(r, g, b),
            &ColorSpec::Coords { space, value } => space.to_color(value),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self { ColorSpec::Text(s.to_string()) }
}

impl From<Color> for ColorSpec {
    fn from(c: Color) -> Self { ColorSpec::Rgb(c.to_array()) }
}

fn resolve_all(colors: &[ColorSpec]) -> Result<Palette> {
    colors.iter().map(ColorSpec::resolve).collect()
}

/// The palette families a name can refer to.
///
/// Names are parsed with [`FromStr`]:
///
/// - a built-in set such as `"deep"`, `"Set2"` or `"Blues"`
///   (see [`curated_names`][crate::curated_names]);
/// - `"hls"`, `"husl"`: evenly spaced hues;
/// - `"ch:<key>=<value>,…"`: cubehelix with keys `start`/`s`, `rot`/`r`,
///   `gamma`/`g`, `hue`/`h`, `light`/`l` and `dark`/`d`;
/// - `"light:<color>"`, `"dark:<color>"`: ramp towards `<color>`;
/// - `"blend:<color>,<color>,…"`: linear blend of the colors;
/// - `"<name>_r"`: the palette `<name>` reversed;
/// - `"<name>_d"`: blend of the first two colors of `<name>` towards a
///   dark gray.
///
/// Any other name is [`PaletteName::External`], a colormap that only
/// the rendering layer knows about.
///
/// # Example
///
/// ```
/// use palette_brewery::PaletteName;
/// let p: PaletteName = "ch:s=.25,rot=-.25_r".parse().unwrap();
/// assert_eq!(p.palette(5).unwrap().len(), 5);
/// let ext: PaletteName = "viridis".parse().unwrap();
/// assert_eq!(ext, PaletteName::External("viridis".into()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteName {
    Curated(&'static str),
    Hls,
    Husl,
    Cubehelix(Cubehelix),
    Ramp(SequentialRamp),
    Blend(Blend),
    Reversed(Box<PaletteName>),
    DarkVariant(Box<PaletteName>),
    External(String),
}

/// Strip a trailing `_r`.
fn strip_reverse(s: &str) -> (&str, bool) {
    match s.strip_suffix("_r") {
        Some(s) => (s, true),
        None => (s, false),
    }
}

fn parse_cubehelix(args: &str) -> Result<Cubehelix> {
    let (args, reverse) = strip_reverse(args);
    let mut ch = Cubehelix::default().reverse(reverse);
    for arg in args.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            Error::InputValidation(format!(
                "cubehelix argument {arg:?} is not of the form key=value"))
        })?;
        let (key, value) = (key.trim(), value.trim());
        let x: f64 = value.parse().map_err(|_| Error::InputValidation(
            format!("cubehelix {key} = {value:?} is not a number")))?;
        ch = match key {
            "start" | "s" => ch.start(x),
            "rot" | "r" => ch.rot(x),
            "gamma" | "g" => ch.gamma(x),
            "hue" | "h" => ch.hue(x),
            "light" | "l" => ch.light(x),
            "dark" | "d" => ch.dark(x),
            _ => return Err(Error::InputValidation(
                format!("unknown cubehelix parameter {key:?}"))),
        };
    }
    ch.validate()?;
    Ok(ch)
}

impl FromStr for PaletteName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if let Some(args) = name.strip_prefix("ch:") {
            return Ok(PaletteName::Cubehelix(parse_cubehelix(args)?))
        }
        for (prefix, end) in [("light:", RampEnd::Light), ("dark:", RampEnd::Dark)] {
            if let Some(seed) = name.strip_prefix(prefix) {
                let (seed, reverse) = strip_reverse(seed);
                let seed = named::parse_color(seed)?;
                return Ok(PaletteName::Ramp(
                    SequentialRamp::new(seed, end).reverse(reverse)))
            }
        }
        if let Some(colors) = name.strip_prefix("blend:") {
            let (colors, reverse) = strip_reverse(colors);
            let colors = colors.split(',').map(named::parse_color)
                .collect::<Result<Vec<_>>>()?;
            let blend = PaletteName::Blend(Blend::new(colors)?);
            return Ok(if reverse { PaletteName::Reversed(Box::new(blend)) }
                      else { blend })
        }
        match name {
            "hls" => return Ok(PaletteName::Hls),
            "husl" => return Ok(PaletteName::Husl),
            _ => (),
        }
        if let Some(p) = qualitative::lookup(name) {
            return Ok(PaletteName::Curated(p.name))
        }
        // Suffixes of an external colormap are left to the rendering layer.
        let external = || PaletteName::External(name.to_string());
        if let Some(base) = name.strip_suffix("_r") {
            return match base.parse::<PaletteName>()? {
                PaletteName::External(_) => Ok(external()),
                p => Ok(PaletteName::Reversed(Box::new(p))),
            }
        }
        if let Some(base) = name.strip_suffix("_d") {
            return match base.parse::<PaletteName>()? {
                PaletteName::External(_) => Ok(external()),
                p => Ok(PaletteName::DarkVariant(Box::new(p))),
            }
        }
        Ok(external())
    }
}

/// Dark end of the `_d` palettes.
fn dark_gray() -> Color { Color::from_rgb8(0x33, 0x33, 0x33) }

impl PaletteName {
    /// Number of colors returned when none is requested: 6, except for
    /// qualitative sets other than the default themes, which return
    /// all their colors.
    pub fn default_len(&self) -> usize {
        match self {
            PaletteName::Curated(name) =>
                qualitative::lookup(name).map_or(DEFAULT_LEN, |p| p.default_len()),
            PaletteName::Reversed(p) => p.default_len(),
            _ => DEFAULT_LEN,
        }
    }

    /// `n` colors of the palette.
    pub fn palette(&self, n: usize) -> Result<Palette> {
        match self {
            PaletteName::Curated(name) => qualitative::curated(name, n),
            PaletteName::Hls => Ok(CircularPalette::hls().palette(n)),
            PaletteName::Husl => Ok(CircularPalette::husl().palette(n)),
            PaletteName::Cubehelix(ch) => Ok(ch.palette(n)),
            PaletteName::Ramp(r) => Ok(r.palette(n)),
            PaletteName::Blend(b) => Ok(b.palette(n)),
            PaletteName::Reversed(p) => Ok(p.palette(n)?.reversed()),
            PaletteName::DarkVariant(p) => Ok(p.dark_blend()?.palette(n)),
            PaletteName::External(name) =>
                Err(Error::UnknownPaletteName(name.clone())),
        }
    }

    /// The palette as a continuous colormap.
    pub fn colormap(&self) -> Result<Colormap> {
        Ok(match self {
            PaletteName::Curated(name) => {
                let base = qualitative::lookup(name)
                    .ok_or_else(|| Error::UnknownPaletteName(name.to_string()))?
                    .base();
                Colormap::Blend(base.gradient()?)
            }
            PaletteName::Hls => Colormap::Circular(CircularPalette::hls()),
            PaletteName::Husl => Colormap::Circular(CircularPalette::husl()),
            PaletteName::Cubehelix(ch) => Colormap::Cubehelix(*ch),
            PaletteName::Ramp(r) => Colormap::Ramp(*r),
            PaletteName::Blend(b) => Colormap::Blend(b.clone()),
            PaletteName::Reversed(p) => Colormap::Reversed(Box::new(p.colormap()?)),
            PaletteName::DarkVariant(p) => Colormap::Blend(p.dark_blend()?),
            PaletteName::External(name) =>
                return Err(Error::UnknownPaletteName(name.clone())),
        })
    }

    fn dark_blend(&self) -> Result<Blend> {
        let mut colors = self.palette(2)?.colors().to_vec();
        colors.push(dark_gray());
        Blend::new(colors)
    }
}

/// A continuous colormap built by one of the generators.
#[derive(Clone, Debug, PartialEq)]
pub enum Colormap {
    Blend(Blend),
    Ramp(SequentialRamp),
    Cubehelix(Cubehelix),
    Diverging(Diverging),
    Circular(CircularPalette),
    /// The inner colormap read from `t = 1` to `t = 0`.
    Reversed(Box<Colormap>),
}

impl Colormap {
    /// The same colormap read backwards.
    pub fn reversed(self) -> Self {
        match self {
            Colormap::Reversed(c) => *c,
            c => Colormap::Reversed(Box::new(c)),
        }
    }
}

macro_rules! colormap_from { ($($ty: ident),*) => {
    $( impl From<$ty> for Colormap {
        fn from(c: $ty) -> Self { Colormap::$ty(c) }
    } )*
}}
colormap_from!(Blend, Cubehelix, Diverging);

impl From<SequentialRamp> for Colormap {
    fn from(c: SequentialRamp) -> Self { Colormap::Ramp(c) }
}

impl From<CircularPalette> for Colormap {
    fn from(c: CircularPalette) -> Self { Colormap::Circular(c) }
}

impl ColorRange for Colormap {
    fn color(&self, t: f64) -> Color {
        match self {
            Colormap::Blend(c) => c.color(t),
            Colormap::Ramp(c) => c.color(t),
            Colormap::Cubehelix(c) => c.color(t),
            Colormap::Diverging(c) => c.color(t),
            Colormap::Circular(c) => c.color(t),
            Colormap::Reversed(c) => c.color(1. - clamp01(t)),
        }
    }

    fn palette(&self, n: usize) -> Palette {
        match self {
            Colormap::Blend(c) => c.palette(n),
            Colormap::Ramp(c) => c.palette(n),
            Colormap::Cubehelix(c) => c.palette(n),
            Colormap::Diverging(c) => c.palette(n),
            Colormap::Circular(c) => c.palette(n),
            Colormap::Reversed(c) => c.palette(n).reversed(),
        }
    }
}

/// How to build a palette.
///
/// As a configuration value, the variant is given by the `"kind"` field:
///
/// ```
/// use palette_brewery::PaletteSpec;
/// let spec: PaletteSpec = serde_json::from_str(
///     r#"{"kind": "diverging", "h_neg": 220, "h_pos": 20, "sep": 10}"#).unwrap();
/// assert!(matches!(spec, PaletteSpec::Diverging(_)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaletteSpec {
    /// The current default palette (see
    /// [`PaletteContext`][crate::PaletteContext]).
    #[default]
    Current,
    /// A palette name, see [`PaletteName`].
    Name { name: String },
    /// An explicit list of colors, repeated if more colors are requested.
    Colors { colors: Vec<ColorSpec> },
    Circular(CircularPalette),
    Cubehelix(Cubehelix),
    /// A light or dark ramp towards `seed`.
    Ramp {
        seed: ColorSpec,
        #[serde(default)]
        end: RampEnd,
        #[serde(default)]
        reverse: bool,
    },
    Diverging(Diverging),
}

impl PaletteSpec {
    pub fn name(name: impl Into<String>) -> Self {
        PaletteSpec::Name { name: name.into() }
    }

    pub fn colors<C: Into<ColorSpec>>(colors: impl IntoIterator<Item = C>) -> Self {
        PaletteSpec::Colors { colors: colors.into_iter().map(Into::into).collect() }
    }

    /// `n` colors (or the natural number of colors of `self`),
    /// `current` being the default palette.
    pub(crate) fn palette(&self, n: Option<usize>, current: &Palette)
                          -> Result<Palette> {
        match self {
            PaletteSpec::Current => current.cycle(n.unwrap_or(current.len())),
            PaletteSpec::Name { name } => {
                let p: PaletteName = name.parse()?;
                p.palette(n.unwrap_or_else(|| p.default_len()))
            }
            PaletteSpec::Colors { colors } => {
                let p = resolve_all(colors)?;
                p.cycle(n.unwrap_or(p.len()))
            }
            PaletteSpec::Circular(c) => {
                c.validate()?;
                Ok(c.palette(n.unwrap_or(DEFAULT_LEN)))
            }
            PaletteSpec::Cubehelix(ch) => {
                ch.validate()?;
                Ok(ch.palette(n.unwrap_or(DEFAULT_LEN)))
            }
            PaletteSpec::Ramp { seed, end, reverse } => {
                let ramp = SequentialRamp::new(seed.resolve()?, *end).reverse(*reverse);
                Ok(ramp.palette(n.unwrap_or(DEFAULT_LEN)))
            }
            PaletteSpec::Diverging(d) => {
                d.validate()?;
                Ok(d.palette(n.unwrap_or(DEFAULT_LEN)))
            }
        }
    }

    pub(crate) fn colormap(&self, current: &Palette) -> Result<PaletteOutput> {
        let cmap = match self {
            PaletteSpec::Current => Colormap::Blend(current.gradient()?),
            PaletteSpec::Name { name } => match name.parse::<PaletteName>()? {
                PaletteName::External(name) => return Ok(PaletteOutput::External(name)),
                p => p.colormap()?,
            },
            PaletteSpec::Colors { colors } => Colormap::Blend(resolve_all(colors)?.gradient()?),
            PaletteSpec::Circular(c) => { c.validate()?; Colormap::Circular(*c) }
            PaletteSpec::Cubehelix(ch) => { ch.validate()?; Colormap::Cubehelix(*ch) }
            PaletteSpec::Ramp { seed, end, reverse } => Colormap::Ramp(
                SequentialRamp::new(seed.resolve()?, *end).reverse(*reverse)),
            PaletteSpec::Diverging(d) => { d.validate()?; Colormap::Diverging(*d) }
        };
        Ok(PaletteOutput::Continuous(cmap))
    }
}

/// The result of a [`PaletteRequest`].
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteOutput {
    Discrete(Palette),
    Continuous(Colormap),
    /// A colormap name unknown to this crate, passed through to the
    /// rendering layer.
    External(String),
}

impl PaletteOutput {
    pub fn into_palette(self) -> Option<Palette> {
        match self { PaletteOutput::Discrete(p) => Some(p), _ => None }
    }

    pub fn into_colormap(self) -> Option<Colormap> {
        match self { PaletteOutput::Continuous(c) => Some(c), _ => None }
    }
}

/// A request for a palette, as issued by the rendering layer.
///
/// # Example
///
/// ```
/// use palette_brewery::{PaletteRequest, PaletteSpec};
/// let req = PaletteRequest::new(PaletteSpec::name("deep_r")).n_colors(3);
/// let p = req.build().unwrap().into_palette().unwrap();
/// assert_eq!(p[2].to_hex(), "#4c72b0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteRequest {
    #[serde(default)]
    pub spec: PaletteSpec,
    /// Number of colors; the natural size of the palette if absent.
    /// Ignored for colormaps.
    #[serde(default)]
    pub n_colors: Option<isize>,
    /// Proportion in \[0, 1\] by which the HLS saturation of every
    /// color is multiplied.
    #[serde(default)]
    pub desat: Option<f64>,
    /// Return a continuous colormap instead of a list of colors.
    #[serde(default)]
    pub as_cmap: bool,
}

impl PaletteRequest {
    pub fn new(spec: PaletteSpec) -> Self {
        PaletteRequest { spec, .. Default::default() }
    }

    /// Request the palette called `name` (see [`PaletteName`]).
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(PaletteSpec::name(name))
    }

    pub fn n_colors(mut self, n: isize) -> Self { self.n_colors = Some(n); self }

    pub fn desat(mut self, prop: f64) -> Self { self.desat = Some(prop); self }

    /// Ask for a colormap rather than discrete colors.
    pub fn continuous(mut self) -> Self { self.as_cmap = true; self }

    fn count(&self) -> Result<Option<usize>> {
        self.n_colors.map(|n| usize::try_from(n).map_err(|_| Error::InputValidation(
            format!("number of colors = {n} is negative")))).transpose()
    }

    /// Build the palette, [`PaletteSpec::Current`] being the first 6
    /// colors of `"deep"`.
    pub fn build(&self) -> Result<PaletteOutput> {
        self.build_with(&default_palette())
    }

    /// Build the palette, `current` being the default palette.
    pub(crate) fn build_with(&self, current: &Palette) -> Result<PaletteOutput> {
        let n = self.count()?;
        if let Some(prop) = self.desat {
            check_range("desat", prop, 0., 1.)?;
        }
        debug!(spec = ?self.spec, n_colors = ?n, desat = ?self.desat,
               as_cmap = self.as_cmap, "building palette");
        if self.as_cmap {
            if self.desat.is_some() {
                return Err(Error::InputValidation(
                    "desat only applies to discrete palettes".into()))
            }
            return self.spec.colormap(current)
        }
        let p = self.spec.palette(n, current)?;
        match self.desat {
            Some(prop) => Ok(PaletteOutput::Discrete(p.desaturate(prop)?)),
            None => Ok(PaletteOutput::Discrete(p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::curated;

    fn name(s: &str) -> PaletteName { s.parse().unwrap() }

    fn discrete(req: PaletteRequest) -> Palette {
        req.build().unwrap().into_palette().unwrap()
    }

    #[test]
    fn parse_names() {
        assert_eq!(name("deep"), PaletteName::Curated("deep"));
        assert_eq!(name("dark"), PaletteName::Curated("dark"));
        assert_eq!(name("hls"), PaletteName::Hls);
        assert_eq!(name("husl"), PaletteName::Husl);
        assert_eq!(name("Set2_r"),
                   PaletteName::Reversed(Box::new(PaletteName::Curated("Set2"))));
        assert_eq!(name("Blues_d"),
                   PaletteName::DarkVariant(Box::new(PaletteName::Curated("Blues"))));
        assert_eq!(name("viridis"), PaletteName::External("viridis".into()));
        assert_eq!(name("viridis_r"), PaletteName::External("viridis_r".into()));
        assert_eq!(name("Deep"), PaletteName::External("Deep".into()));
        let blue = Color::from_hex("#3778bf").unwrap();
        assert_eq!(name("light:xkcd:windows blue"),
                   PaletteName::Ramp(SequentialRamp::light(blue)));
        assert_eq!(name("dark:#3778bf_r"),
                   PaletteName::Ramp(SequentialRamp::dark(blue).reverse(true)));
        assert_eq!(name("blend:red,#0000ff"),
                   PaletteName::Blend(Blend::new(vec![Color::new(1., 0., 0.).unwrap(),
                                                      Color::new(0., 0., 1.).unwrap()])
                                      .unwrap()));
    }

    #[test]
    fn parse_cubehelix_names() {
        assert_eq!(name("ch:"), PaletteName::Cubehelix(Cubehelix::default()));
        assert_eq!(name("ch:s=.25, rot=-.25,l=0.9_r"),
                   PaletteName::Cubehelix(Cubehelix::default().start(0.25).rot(-0.25)
                                          .light(0.9).reverse(true)));
        assert_eq!(name("ch:start=2,r=1,gamma=.5,h=.3,d=0,light=1"),
                   PaletteName::Cubehelix(Cubehelix::default().start(2.).rot(1.)
                                          .gamma(0.5).hue(0.3).dark(0.).light(1.)));
        for bad in ["ch:x=1", "ch:s=abc", "ch:s", "ch:s=4", "ch:gamma=0",
                    "ch:d=.9,l=.1"] {
            assert!(matches!(bad.parse::<PaletteName>(),
                             Err(Error::InputValidation(_))), "{bad}");
        }
    }

    #[test]
    fn parse_errors() {
        assert_eq!("light:blurpel".parse::<PaletteName>(),
                   Err(Error::UnknownColorName("blurpel".into())));
        assert!("light:blurple".parse::<PaletteName>().is_ok());
        assert!("blend:red,#12".parse::<PaletteName>().is_err());
        assert_eq!(name("viridis").palette(3),
                   Err(Error::UnknownPaletteName("viridis".into())));
    }

    #[test]
    fn reversed_names_are_exact() {
        for base in ["deep", "Set3", "Blues", "RdBu", "hls", "husl",
                     "ch:s=.5,r=-.7", "light:seagreen", "dark:#5a9",
                     "blend:red,white,blue", "muted_d"] {
            for n in [0, 1, 4, 7, 15] {
                let fwd = name(base).palette(n).unwrap();
                let bwd = name(&format!("{base}_r")).palette(n).unwrap();
                assert_eq!(bwd, fwd.reversed(), "{base}, n = {n}");
            }
        }
        // `_r` inside the prefixed forms has the same effect.
        assert_eq!(name("ch:s=.5_r").palette(6).unwrap(),
                   name("ch:s=.5").palette(6).unwrap().reversed());
    }

    #[test]
    fn dark_variant() {
        let deep = curated("deep", 2).unwrap();
        let p = name("deep_d").palette(3).unwrap();
        assert_eq!(p.colors(), &[deep[0], deep[1], dark_gray()]);
        assert_eq!(name("deep_d").default_len(), 6);
    }

    #[test]
    fn default_lengths() {
        assert_eq!(discrete(PaletteRequest::named("deep")), curated("deep", 6).unwrap());
        assert_eq!(discrete(PaletteRequest::named("colorblind_r")).len(), 6);
        assert_eq!(discrete(PaletteRequest::named("tab10")).len(), 10);
        assert_eq!(discrete(PaletteRequest::named("deep6_r")).len(), 6);
        assert_eq!(discrete(PaletteRequest::named("Paired")).len(), 12);
        assert_eq!(discrete(PaletteRequest::named("Blues")).len(), 6);
        assert_eq!(discrete(PaletteRequest::named("hls")).len(), 6);
        assert_eq!(discrete(PaletteRequest::named("ch:")).len(), 6);
        assert_eq!(discrete(PaletteRequest::default()), curated("deep", 6).unwrap());
    }

    #[test]
    fn counts() {
        let req = PaletteRequest::named("husl");
        assert_eq!(discrete(req.clone().n_colors(0)).len(), 0);
        assert_eq!(discrete(req.clone().n_colors(9)).len(), 9);
        assert!(matches!(req.n_colors(-1).build(), Err(Error::InputValidation(_))));
        let p = discrete(PaletteRequest::new(PaletteSpec::colors(["red", "blue"]))
                         .n_colors(5));
        assert_eq!(p.as_hex(), vec!["#ff0000", "#0000ff", "#ff0000", "#0000ff", "#ff0000"]);
    }

    #[test]
    fn desaturation() {
        let p = discrete(PaletteRequest::named("bright").n_colors(4).desat(0.5));
        let base = curated("bright", 4).unwrap();
        for (c, b) in p.iter().zip(&base) {
            assert!((c.to_hls().s - 0.5 * b.to_hls().s).abs() < 1e-9);
        }
        assert!(PaletteRequest::named("bright").desat(1.5).build().is_err());
        assert!(PaletteRequest::named("bright").desat(0.5).continuous().build().is_err());
    }

    #[test]
    fn colormaps() {
        let out = PaletteRequest::named("viridis").continuous().build().unwrap();
        assert_eq!(out, PaletteOutput::External("viridis".into()));
        assert!(PaletteRequest::named("viridis").build().is_err());

        let cmap = PaletteRequest::named("ch:r=-.5_r").continuous().build().unwrap()
            .into_colormap().unwrap();
        let ch = Cubehelix::default().rot(-0.5);
        assert_eq!(cmap.color(0.), ch.color(1.));
        assert_eq!(cmap.color(0.3), ch.reverse(true).color(0.3));

        let cmap = name("Blues_r").colormap().unwrap();
        assert_eq!(cmap.color(0.), Color::from_hex("#08306b").unwrap());
        assert_eq!(cmap.palette(4), name("Blues").colormap().unwrap().palette(4).reversed());
    }

    #[test]
    fn colormap_conversions() {
        let ch = Cubehelix::default().rot(-0.3);
        let cmap = Colormap::from(ch);
        assert_eq!(cmap.color(0.25), ch.color(0.25));
        let rev = cmap.clone().reversed();
        assert_eq!(rev.color(0.25), ch.color(0.75));
        assert_eq!(rev.palette(5), ch.palette(5).reversed());
        assert_eq!(rev.reversed(), cmap);
        let d: Colormap = Diverging::new(220., 20.).into();
        assert_eq!(d.color(0.5), Color::gray(0.95));
    }

    #[test]
    fn json_requests() {
        let req: PaletteRequest = serde_json::from_str(r##"{
            "spec": {"kind": "colors",
                     "colors": ["#3778bf", "xkcd:amber", [0, 0.5, 1],
                                {"space": "husl", "value": [12.177, 100, 53.237]}]},
            "n_colors": 4
        }"##).unwrap();
        let p = discrete(req);
        assert_eq!(&p.as_hex()[.. 3], &["#3778bf", "#feb308", "#0080ff"]);
        assert_eq!(p[3].to_hex(), "#ff0000");

        let req: PaletteRequest = serde_json::from_str(
            r#"{"spec": {"kind": "diverging", "h_neg": 220, "h_pos": 20}, "n_colors": 7}"#)
            .unwrap();
        assert_eq!(discrete(req)[3], Color::gray(0.95));

        let req: PaletteRequest = serde_json::from_str(
            r#"{"spec": {"kind": "ramp", "seed": "seagreen", "reverse": true}}"#).unwrap();
        let p = discrete(req);
        assert_eq!(p.len(), 6);
        assert_eq!(p[0], named::parse_color("seagreen").unwrap());

        let req: PaletteRequest = serde_json::from_str(
            r#"{"spec": {"kind": "cubehelix", "rot": -0.5}, "as_cmap": true}"#).unwrap();
        assert!(matches!(req.build(), Ok(PaletteOutput::Continuous(Colormap::Cubehelix(_)))));

        let bad = serde_json::from_str::<InputSpace>(r#""lab""#);
        assert!(bad.unwrap_err().to_string().contains("invalid input"));
        let req: PaletteRequest = serde_json::from_str(
            r#"{"spec": {"kind": "circular", "space": "hls", "lightness": 2, "saturation": 0.5}}"#)
            .unwrap();
        assert!(matches!(req.build(), Err(Error::InputValidation(_))));
    }

    #[test]
    fn request_round_trip() {
        let req = PaletteRequest::new(PaletteSpec::Diverging(
            Diverging::new(145., 300.).sep(20.))).n_colors(8);
        let json = serde_json::to_string(&req).unwrap();
        let back: PaletteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
