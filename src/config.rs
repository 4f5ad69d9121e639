//! Registry configuration.

use std::path::PathBuf;
use crate::{Builtin, DEFAULT_STEPS, LUT_SIZE};

/// Settings of a [`PaletteRegistry`](crate::PaletteRegistry).
///
/// ```
/// use lut_brewery::{Builtin, RegistryConfig};
/// let cfg = RegistryConfig::new().lut_size(64).fallback(Builtin::Gray);
/// assert_eq!(cfg.get_lut_size(), 64);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    lut_size: usize,
    step_count: usize,
    fallback: Builtin,
    search_paths: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig { lut_size: LUT_SIZE, step_count: DEFAULT_STEPS,
                         fallback: Builtin::Matlab, search_paths: vec![] }
    }
}

impl RegistryConfig {
    pub fn new() -> Self { Self::default() }

    /// Number of entries of the interpolated built-in palettes and of
    /// the LUTs built from imported files.  Sizes below 2 are raised
    /// to 2.
    pub fn lut_size(mut self, n: usize) -> Self {
        self.lut_size = n.max(2);
        self
    }

    /// Number of colors of the auto-generated "_step" palettes
    /// (at least 1).
    pub fn step_count(mut self, n: usize) -> Self {
        self.step_count = n.max(1);
        self
    }

    /// Palette returned by
    /// [`PaletteRegistry::name_to_id`](crate::PaletteRegistry::name_to_id)
    /// for unknown names.
    pub fn fallback(mut self, b: Builtin) -> Self {
        self.fallback = b;
        self
    }

    /// Add a directory scanned by
    /// [`PaletteRegistry::register_search_paths`](crate::PaletteRegistry::register_search_paths).
    pub fn search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    #[inline]
    pub fn get_lut_size(&self) -> usize { self.lut_size }
    #[inline]
    pub fn get_step_count(&self) -> usize { self.step_count }
    #[inline]
    pub fn get_fallback(&self) -> Builtin { self.fallback }
    #[inline]
    pub fn get_search_paths(&self) -> &[PathBuf] { &self.search_paths }
}
