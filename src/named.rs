//! Named colors.
//!
//! Two read-only tables are provided: the 949 colors of the
//! [xkcd color survey](https://xkcd.com/color/rgb/) and the 147 CSS
//! (W3C extended) color keywords.  They are built on first use and
//! never modified afterwards, so they can be read from several threads
//! without synchronization.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::palettes;

/// An immutable map from lowercase color names to colors.
#[derive(Debug)]
pub struct NamedColorTable {
    colors: HashMap<&'static str, Color>,
}

impl NamedColorTable {
    fn new(data: &'static [(&'static str, [u8; 3])]) -> Self {
        let colors = data.iter()
            .map(|&(name, [r, g, b])| (name, Color::from_rgb8(r, g, b)))
            .collect();
        NamedColorTable { colors }
    }

    /// Look up `name`, ignoring ASCII case.  No other normalization is
    /// performed (no fuzzy matching, spaces are significant).
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Same as [`NamedColorTable::get`] but fails with
    /// [`Error::UnknownColorName`].
    pub fn resolve(&self, name: &str) -> Result<Color> {
        self.get(name).ok_or_else(|| Error::UnknownColorName(name.to_string()))
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Iterate on the (name, color) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> + '_ {
        self.colors.iter().map(|(&n, &c)| (n, c))
    }
}

lazy_static! {
    static ref XKCD: NamedColorTable = NamedColorTable::new(&palettes::XKCD);
    static ref CSS: NamedColorTable = NamedColorTable::new(&palettes::CSS);
}

/// The xkcd color survey table.
pub fn xkcd() -> &'static NamedColorTable { &XKCD }

/// The CSS color keywords table.
pub fn css() -> &'static NamedColorTable { &CSS }

/// Return the color named `name` in the xkcd color survey.
///
/// # Example
///
/// ```
/// use palette_brewery::{named, Color};
/// let c = named::resolve("Pale Red").unwrap();
/// assert_eq!(c, Color::from_rgb8(0xd9, 0x54, 0x4d));
/// assert!(named::resolve("pale redd").is_err());
/// ```
pub fn resolve(name: &str) -> Result<Color> { XKCD.resolve(name) }

/// Return the CSS color keyword `name`.
pub fn css_color(name: &str) -> Result<Color> { CSS.resolve(name) }

/// Parse a textual color specification: `"#rrggbb"` or `"#rgb"`,
/// `"xkcd:<name>"`, a CSS keyword or, failing that, an xkcd name.
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        Color::from_hex(s)
    } else if let Some(name) = s.strip_prefix("xkcd:") {
        resolve(name)
    } else {
        CSS.get(s).map_or_else(|| resolve(s), Ok)
    }
}

/// Resolve every name of `names` in the xkcd table.
pub fn xkcd_palette<S: AsRef<str>>(names: &[S]) -> Result<Vec<Color>> {
    names.iter().map(|n| resolve(n.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables() {
        assert_eq!(xkcd().len(), 949);
        assert_eq!(css().len(), 147);
        assert!(xkcd().iter().all(|(n, _)| n == n.to_ascii_lowercase()));
    }

    #[test]
    fn pale_red() {
        let c = resolve("pale red").unwrap();
        assert_eq!(c.to_array(), [217. / 255., 84. / 255., 77. / 255.]);
    }

    #[test]
    fn case_insensitive_exact() {
        assert_eq!(resolve("WINDOWS BLUE").unwrap(),
                   Color::from_hex("#3778bf").unwrap());
        assert_eq!(resolve("windowsblue"),
                   Err(Error::UnknownColorName("windowsblue".into())));
        assert!(resolve(" windows blue").is_err());
    }

    #[test]
    fn parse() {
        // CSS names take precedence over xkcd ones.
        assert_eq!(parse_color("red").unwrap(), Color::new(1., 0., 0.).unwrap());
        assert_eq!(parse_color("xkcd:red").unwrap(), Color::from_hex("#e50000").unwrap());
        assert_eq!(parse_color("amber").unwrap(), Color::from_hex("#feb308").unwrap());
        assert_eq!(parse_color("#0000ff").unwrap(), Color::new(0., 0., 1.).unwrap());
        assert!(matches!(parse_color("#00f0"), Err(Error::InputValidation(_))));
        assert!(matches!(parse_color("nope"), Err(Error::UnknownColorName(_))));
    }

    #[test]
    fn palette_of_names() {
        let p = xkcd_palette(&["windows blue", "amber", "greyish"]).unwrap();
        assert_eq!(p.len(), 3);
        assert!(xkcd_palette(&["windows blue", "not a color"]).is_err());
    }
}
