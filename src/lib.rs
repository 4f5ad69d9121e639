//! Color lookup tables (LUTs) for mapping scalar data to colors.
//!
//! - LUT builders: [`build_lut_linear_interpolate`],
//!   [`build_lut_stepped`], [`build_lut_steps_from_colors`],
//!   [`build_lut_from_segments`], [`build_lut_from_function`],
//!   [`build_cube_helix_lut`], and the transforms [`reverse`],
//!   [`subsample`] and [`modify`].
//! - [`PaletteRegistry`]: a thread-safe catalogue of named LUTs,
//!   pre-populated with the [`Builtin`] palettes and extensible at
//!   runtime, from memory or from CSV/XML palette files.
//!
//! A LUT is a plain `Vec<RGBA8>`.  Index 0 corresponds to the low end of
//! the data range and the last index to the high end.
//!
//! ```
//! use lut_brewery::{build_lut_linear_interpolate, PaletteList, rgb};
//! let nodes: PaletteList = vec![(0., rgb(0, 0, 0)),
//!                               (1., rgb(255, 255, 255))].into();
//! let lut = build_lut_linear_interpolate(&nodes, 256);
//! assert_eq!(lut[255], rgb(255, 255, 255));
//! ```

pub use ::rgb::RGBA8;

mod build;
mod config;
mod error;
mod import;
mod palettes;
mod registry;

pub use build::{
    build_cube_helix_lut, build_lut_from_channels, build_lut_from_function,
    build_lut_from_segments, build_lut_from_segments_sorted,
    build_lut_linear_interpolate, build_lut_linear_interpolate_sorted,
    build_lut_stepped, build_lut_stepped_sorted, build_lut_steps_from_colors,
    darker, lighter, modify, modify_indexed, reverse, subsample,
    ChannelFunctions, CubeHelix, LinSegment, PaletteList, PaletteNode,
};
pub use config::RegistryConfig;
pub use error::{PaletteError, PaletteResult};
pub use import::{parse_csv, parse_xml, ImportIssue, ImportReport,
                 PaletteFormat, ParsedPalette};
pub use palettes::Builtin;
pub use palettes::ty::{PaletteEntry, PaletteId, PaletteRef};
pub use registry::PaletteRegistry;

/// A lookup table: colors for equally spaced values of the data range.
pub type Lut = Vec<RGBA8>;

/// Default number of entries of a LUT.
pub const LUT_SIZE: usize = 256;

/// Default number of entries of an auto-generated "_step" palette.
pub const DEFAULT_STEPS: usize = 5;

/// Opaque color with the given red, green and blue components.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> RGBA8 { RGBA8 { r, g, b, a: 255 } }

/// Color from a packed `0xAARRGGBB` value.
#[inline]
pub const fn from_argb32(c: u32) -> RGBA8 {
    RGBA8 { r: (c >> 16) as u8, g: (c >> 8) as u8, b: c as u8,
            a: (c >> 24) as u8 }
}

/// Packs the color as `0xAARRGGBB`.
#[inline]
pub const fn to_argb32(c: RGBA8) -> u32 {
    (c.a as u32) << 24 | (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
}

/// The color with its alpha channel set to 255.
#[inline]
pub const fn opaque(c: RGBA8) -> RGBA8 { RGBA8 { a: 255, ..c } }

/// Gray value (luma) of the color.
pub fn luma(c: RGBA8) -> u8 {
    let x = 0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64;
    x.round().clamp(0., 255.) as u8
}

/// Convert the color to grayscale, keeping its alpha.
pub fn to_gray(c: RGBA8) -> RGBA8 {
    let x = luma(c);
    RGBA8 { r: x, g: x, b: x, a: c.a }
}

/// Returns the red, green, blue or alpha value of `c` for `ch` equal
/// to 0, 1, 2 or 3 respectively.  Any other channel index returns the
/// gray value of the color (see [`luma`]).
pub fn channel(c: RGBA8, ch: usize) -> u8 {
    match ch {
        0 => c.r,
        1 => c.g,
        2 => c.b,
        3 => c.a,
        _ => luma(c),
    }
}

/// Returns `c` with the red, green, blue or alpha value (`ch` equal to
/// 0, 1, 2 or 3) replaced by `value`.  Other channel indices leave the
/// color unchanged.
pub fn with_channel(c: RGBA8, ch: usize, value: u8) -> RGBA8 {
    match ch {
        0 => RGBA8 { r: value, ..c },
        1 => RGBA8 { g: value, ..c },
        2 => RGBA8 { b: value, ..c },
        3 => RGBA8 { a: value, ..c },
        _ => c,
    }
}

/// Convert a value in \[0, 1\] (clamped) to an 8-bit channel value.
/// The value is truncated, not rounded.
#[inline]
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    if x.is_nan() { 0 } else { (255. * x.clamp(0., 1.)) as u8 }
}

/// A “continuous” range of colors parametrized by reals.
pub trait ColorRange {
    /// Returns the color corresponding to `x`.
    fn rgba(&self, x: f64) -> RGBA8;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self, a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Sample `n` colors between `a` and `b` (included) into a LUT.
    fn to_lut(self, a: f64, b: f64, n: usize) -> crate::Lut
    where Self: Sized {
        self.range(a, b, n).map(|(_, c)| c).collect()
    }
}

impl<R: ColorRange + ?Sized> ColorRange for &R {
    #[inline]
    fn rgba(&self, x: f64) -> RGBA8 { (**self).rgba(x) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R> {
    range: R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R> Range<R> where R: ColorRange {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn rgba(&self, k: usize) -> (f64, RGBA8) {
        let x = if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            x
        };
        (x, self.range.rgba(x))
    }
}

impl<R> Iterator for Range<R> where R: ColorRange {
    type Item = (f64, RGBA8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgba(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R> ExactSizeIterator for Range<R> where R: ColorRange {}

impl<R> DoubleEndedIterator for Range<R> where R: ColorRange {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgba(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Hue ramp red → yellow → green → cyan → blue → magenta → red for
/// `x` ∈ \[0., 1.\].
#[derive(Clone, Copy, Debug, Default)]
pub struct Hue;

impl ColorRange for Hue {
    fn rgba(&self, x: f64) -> RGBA8 {
        let t = 6. * x;
        let f = 255. * t.fract();
        let ti = t.trunc().rem_euclid(6.);
        let (r, g, b) = {
            if ti == 0.      { (255., f, 0.) }
            else if ti == 1. { (255. - f, 255., 0.) }
            else if ti == 2. { (0., 255., f) }
            else if ti == 3. { (0., 255. - f, 255.) }
            else if ti == 4. { (f, 0., 255.) }
            else             { (255., 0., 255. - f) }
        };
        rgb(r as u8, g as u8, b as u8)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_range() {
        for (i, (x, c)) in Hue.range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(Hue.rgba(x), c);
        }
    }

    #[test]
    fn range_is_double_ended() {
        let fwd: Vec<_> = Hue.range(0., 1., 7).collect();
        let mut bwd: Vec<_> = Hue.range(0., 1., 7).rev().collect();
        bwd.reverse();
        assert_eq!(fwd, bwd);
        assert_eq!(Hue.range(0., 1., 7).len(), 7);
        assert_eq!(Hue.range(0., 1., 0).count(), 0);
    }

    #[test]
    fn channels() {
        let c = RGBA8 { r: 10, g: 20, b: 30, a: 40 };
        assert_eq!((channel(c, 0), channel(c, 1), channel(c, 2), channel(c, 3)),
                   (10, 20, 30, 40));
        assert_eq!(channel(c, 4), luma(c));
        assert_eq!(with_channel(c, 1, 99), RGBA8 { g: 99, ..c });
        assert_eq!(with_channel(c, 3, 0), RGBA8 { a: 0, ..c });
        assert_eq!(with_channel(c, 7, 99), c);
    }

    #[test]
    fn packed_colors() {
        let c = from_argb32(0xFFB2182B);
        assert_eq!(c, rgb(0xB2, 0x18, 0x2B));
        assert_eq!(to_argb32(c), 0xFFB2182B);
        assert_eq!(opaque(RGBA8 { r: 1, g: 2, b: 3, a: 0 }), rgb(1, 2, 3));
    }

    #[test]
    fn gray_of_white_is_white() {
        assert_eq!(to_gray(rgb(255, 255, 255)), rgb(255, 255, 255));
        assert_eq!(luma(rgb(0, 0, 0)), 0);
    }
}
