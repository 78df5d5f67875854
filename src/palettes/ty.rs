use serde::{Deserialize, Serialize};

/// A named, fixed list of colors.
pub(crate) struct CuratedData {
    pub(crate) name: &'static str,
    pub(crate) typ: PaletteType,
    pub(crate) rgb: &'static [[u8; 3]], // Invariant: length ≥ 2
}

/// Type of a built-in palette family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteType {
    /// Sequential: ordered data progressing from low to high.  The
    /// colors are control points of a ramp; requesting `n` colors
    /// samples the interpolated ramp.
    Seq,
    /// Diverging: two sequential ramps meeting at a light critical
    /// value.  Sampled like [`PaletteType::Seq`].
    Div,
    /// Qualitative: unordered categories told apart by hue.  The
    /// colors are used as is and repeat from the start when more are
    /// requested than the set holds.
    Qual
}
