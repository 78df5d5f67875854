//! The default palette, as explicit scoped state.

use std::ops::{Deref, DerefMut};
use tracing::trace;
use crate::error::Result;
use crate::qualitative::default_palette;
use crate::{Palette, PaletteOutput, PaletteRequest};

/// Holds the default palette used by [`PaletteSpec::Current`] requests.
///
/// The default can be replaced with [`PaletteContext::set_palette`] or
/// overridden for the lifetime of a [`PaletteGuard`] returned by
/// [`PaletteContext::scoped`]; the previous default is restored when
/// the guard is dropped, whether the scope ends normally, through `?`
/// or by a panic.
///
/// [`PaletteSpec::Current`]: crate::PaletteSpec::Current
///
/// # Example
///
/// ```
/// use palette_brewery::{ColorRange, CircularPalette, PaletteContext,
///                       PaletteRequest};
/// let mut ctx = PaletteContext::new();
/// let husl = CircularPalette::husl().palette(4);
/// {
///     let scope = ctx.scoped(husl.clone());
///     let p = scope.color_palette(&PaletteRequest::default()).unwrap();
///     assert_eq!(p.into_palette().unwrap(), husl);
/// }
/// assert_eq!(ctx.current().len(), 6); // "deep" again
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteContext {
    base: Palette,
    overrides: Vec<Palette>, // innermost last
}

impl Default for PaletteContext {
    fn default() -> Self { PaletteContext::with_base(default_palette()) }
}

impl PaletteContext {
    /// A context whose default is the first 6 colors of `"deep"`.
    pub fn new() -> Self { Self::default() }

    pub fn with_base(base: Palette) -> Self {
        PaletteContext { base, overrides: Vec::new() }
    }

    /// The palette currently in effect.
    pub fn current(&self) -> &Palette {
        self.overrides.last().unwrap_or(&self.base)
    }

    /// Number of active scopes.
    pub fn depth(&self) -> usize { self.overrides.len() }

    /// Replace the palette currently in effect.  Inside a scope, only
    /// the scope's palette is replaced: the change ends with the scope.
    pub fn set_palette(&mut self, palette: Palette) {
        trace!(depth = self.depth(), len = palette.len(), "set palette");
        match self.overrides.last_mut() {
            Some(p) => *p = palette,
            None => self.base = palette,
        }
    }

    /// Make `palette` the default until the returned guard is dropped.
    pub fn scoped(&mut self, palette: Palette) -> PaletteGuard<'_> {
        let depth = self.depth();
        trace!(depth, len = palette.len(), "push palette scope");
        self.overrides.push(palette);
        PaletteGuard { ctx: self, depth }
    }

    /// Run `f` with `palette` as the default.
    pub fn with_palette<T>(&mut self, palette: Palette,
                           f: impl FnOnce(&mut PaletteContext) -> T) -> T {
        let mut scope = self.scoped(palette);
        f(&mut *scope)
    }

    /// Build the palette described by `req`, the current palette being
    /// used for [`PaletteSpec::Current`][crate::PaletteSpec::Current].
    pub fn color_palette(&self, req: &PaletteRequest) -> Result<PaletteOutput> {
        req.build_with(self.current())
    }
}

/// A scope overriding the default palette of a [`PaletteContext`].
///
/// Dereferences to the context, so that requests and nested scopes
/// go through the guard.
#[derive(Debug)]
pub struct PaletteGuard<'a> {
    ctx: &'a mut PaletteContext,
    depth: usize, // number of overrides before this scope
}

impl Deref for PaletteGuard<'_> {
    type Target = PaletteContext;

    fn deref(&self) -> &PaletteContext { &*self.ctx }
}

impl DerefMut for PaletteGuard<'_> {
    fn deref_mut(&mut self) -> &mut PaletteContext { &mut *self.ctx }
}

impl Drop for PaletteGuard<'_> {
    fn drop(&mut self) {
        trace!(depth = self.depth, "pop palette scope");
        self.ctx.overrides.truncate(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use pretty_assertions::assert_eq;
    use crate::{curated, CircularPalette, ColorRange, Error, PaletteSpec};

    fn husl() -> Palette { CircularPalette::husl().palette(6) }

    #[test]
    fn nested_scopes() {
        let mut ctx = PaletteContext::new();
        let deep = curated("deep", 6).unwrap();
        assert_eq!(ctx.current(), &deep);
        {
            let mut outer = ctx.scoped(husl());
            assert_eq!(outer.current(), &husl());
            {
                let inner = outer.scoped(curated("Set1", 9).unwrap());
                assert_eq!(inner.depth(), 2);
                assert_eq!(inner.current().len(), 9);
            }
            assert_eq!(outer.depth(), 1);
            assert_eq!(outer.current(), &husl());
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.current(), &deep);
    }

    #[test]
    fn set_palette_inside_scope_is_undone() {
        let mut ctx = PaletteContext::new();
        let pastel = curated("pastel", 10).unwrap();
        ctx.with_palette(husl(), |ctx| {
            ctx.set_palette(curated("dark", 10).unwrap());
            assert_eq!(ctx.current(), &curated("dark", 10).unwrap());
        });
        assert_eq!(ctx.current(), &curated("deep", 6).unwrap());
        ctx.set_palette(pastel.clone());
        assert_eq!(ctx.current(), &pastel);
    }

    fn failing(ctx: &mut PaletteContext) -> Result<Palette> {
        let scope = ctx.scoped(husl());
        let out = scope.color_palette(&PaletteRequest::named("no_such_palette"))?;
        Ok(out.into_palette().unwrap_or_default())
    }

    #[test]
    fn restored_on_error() {
        let mut ctx = PaletteContext::new();
        assert_eq!(failing(&mut ctx),
                   Err(Error::UnknownPaletteName("no_such_palette".into())));
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.current(), &curated("deep", 6).unwrap());
    }

    #[test]
    fn restored_on_panic() {
        let mut ctx = PaletteContext::new();
        let r = catch_unwind(AssertUnwindSafe(|| {
            let _scope = ctx.scoped(husl());
            panic!("rendering failed");
        }));
        assert!(r.is_err());
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.current(), &curated("deep", 6).unwrap());
    }

    #[test]
    fn current_requests() {
        let mut ctx = PaletteContext::new();
        ctx.set_palette(curated("Set2", 8).unwrap());
        let req = PaletteRequest::new(PaletteSpec::Current).n_colors(10);
        let p = ctx.color_palette(&req).unwrap().into_palette().unwrap();
        assert_eq!(p.len(), 10);
        assert_eq!(p[8], p[0]);
        let cmap = ctx.color_palette(&req.continuous()).unwrap().into_colormap().unwrap();
        assert_eq!(cmap.color(0.), p[0]);
        assert_eq!(cmap.color(1.), p[7]);
    }
}
