use thiserror::Error;

/// Errors raised by palette and color constructors.
///
/// All errors are reported at the point of the offending call; nothing
/// is recovered or replaced by a default color internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A numeric parameter is out of range (negative count, color
    /// component outside \[0, 1\], …) or a textual parameter is
    /// malformed (bad hex string, unknown input space, …).
    #[error("invalid input: {0}")]
    InputValidation(String),
    /// The color name is not in the named color table.
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),
    /// The palette (or colormap) family is not known to this crate.
    #[error("unknown palette name: {0:?}")]
    UnknownPaletteName(String),
}

/// Result type of the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return an [`Error::InputValidation`] unless `x` lies in
/// \[`lo`, `hi`\] (NaN is rejected).
pub(crate) fn check_range(what: &str, x: f64, lo: f64, hi: f64) -> Result<f64> {
    if (lo ..= hi).contains(&x) {
        Ok(x)
    } else {
        Err(Error::InputValidation(
            format!("{what} = {x} not in [{lo}, {hi}]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_bounds() {
        assert_eq!(check_range("x", 0., 0., 1.), Ok(0.));
        assert_eq!(check_range("x", 1., 0., 1.), Ok(1.));
        assert!(check_range("x", 1.5, 0., 1.).is_err());
        assert!(check_range("x", f64::NAN, 0., 1.).is_err());
    }

    #[test]
    fn messages() {
        let e = Error::UnknownColorName("blurpel".into());
        assert_eq!(e.to_string(), "unknown color name: \"blurpel\"");
    }
}
