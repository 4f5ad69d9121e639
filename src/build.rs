//! Builders turning palette descriptions into LUTs.
//!
//! Every builder is total: it never panics and always returns a LUT
//! (possibly of transparent black entries) for degenerate input.

use std::f64::consts::PI;
use crate::{ColorRange, Lut, RGBA8, from_argb32, unit_to_u8};

/// A color anchored at a position of the data range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteNode {
    pub position: f64,
    pub color: RGBA8,
}

impl PaletteNode {
    #[inline]
    pub fn new(position: f64, color: RGBA8) -> Self {
        PaletteNode { position, color }
    }
}

/// An ordered list of [`PaletteNode`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaletteList {
    nodes: Vec<PaletteNode>,
}

impl PaletteList {
    pub fn new() -> Self { PaletteList { nodes: Vec::new() } }

    /// Append a node at `position`.
    pub fn push(&mut self, position: f64, color: RGBA8) {
        self.nodes.push(PaletteNode { position, color })
    }

    /// Append a node, choosing its position automatically: the first
    /// node goes at 0, the second one 1 further, and later nodes one
    /// average spacing past the current maximum.
    pub fn push_color(&mut self, color: RGBA8) {
        let position = match self.min_max_position() {
            None => 0.,
            Some((lo, hi)) if self.nodes.len() == 1 || hi == lo => hi + 1.,
            Some((lo, hi)) => hi + (hi - lo) / (self.nodes.len() - 1) as f64,
        };
        self.push(position, color)
    }

    /// Smallest and largest node position, if any.
    pub fn min_max_position(&self) -> Option<(f64, f64)> {
        let mut it = self.nodes.iter().map(|n| n.position);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    #[inline]
    pub fn len(&self) -> usize { self.nodes.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteNode> {
        self.nodes.iter()
    }

    pub fn as_slice(&self) -> &[PaletteNode] { &self.nodes }

    /// The node colors, in list order.
    pub fn colors(&self) -> impl Iterator<Item = RGBA8> + '_ {
        self.nodes.iter().map(|n| n.color)
    }

    /// Stable sort of the nodes by ascending position.
    pub fn sort(&mut self) {
        self.nodes.sort_by(|n1, n2| n1.position.total_cmp(&n2.position))
    }

    /// A sorted copy of the list (see [`PaletteList::sort`]).
    pub fn sorted(&self) -> Self {
        let mut l = self.clone();
        l.sort();
        l
    }
}

impl From<Vec<PaletteNode>> for PaletteList {
    fn from(nodes: Vec<PaletteNode>) -> Self { PaletteList { nodes } }
}

impl From<Vec<(f64, RGBA8)>> for PaletteList {
    fn from(v: Vec<(f64, RGBA8)>) -> Self { v.into_iter().collect() }
}

/// Nodes given as packed `0xAARRGGBB` literals.
impl From<&[(f64, u32)]> for PaletteList {
    fn from(v: &[(f64, u32)]) -> Self {
        v.iter().map(|&(p, c)| (p, from_argb32(c))).collect()
    }
}

impl FromIterator<(f64, RGBA8)> for PaletteList {
    fn from_iter<I: IntoIterator<Item = (f64, RGBA8)>>(iter: I) -> Self {
        PaletteList { nodes: iter.into_iter()
                      .map(|(position, color)| PaletteNode { position, color })
                      .collect() }
    }
}

/// Colors only; positions are assigned with [`PaletteList::push_color`].
impl FromIterator<RGBA8> for PaletteList {
    fn from_iter<I: IntoIterator<Item = RGBA8>>(iter: I) -> Self {
        let mut l = PaletteList::new();
        for c in iter { l.push_color(c) }
        l
    }
}

impl<'a> IntoIterator for &'a PaletteList {
    type Item = &'a PaletteNode;
    type IntoIter = std::slice::Iter<'a, PaletteNode>;
    fn into_iter(self) -> Self::IntoIter { self.nodes.iter() }
}

/// One breakpoint of a single-channel piecewise linear function.  The
/// channel reaches `end_previous` when arriving at `position` and
/// leaves it at `start_next`, which allows discontinuities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinSegment {
    pub position: f64,
    pub end_previous: u8,
    pub start_next: u8,
}

impl LinSegment {
    #[inline]
    pub fn new(position: f64, end_previous: u8, start_next: u8) -> Self {
        LinSegment { position, end_previous, start_next }
    }

    /// Same as [`LinSegment::new`] with the channel values given in
    /// \[0, 1\].
    pub fn unit(position: f64, end_previous: f64, start_next: f64) -> Self {
        LinSegment { position,
                     end_previous: unit_to_u8(end_previous),
                     start_next: unit_to_u8(start_next) }
    }
}

/// Functions `f64 → [0, 1]` giving the red, green, blue and
/// (optionally) alpha channels.  Values outside \[0, 1\] are clamped.
#[derive(Clone, Copy, Debug)]
pub struct ChannelFunctions<R, G, B, A = fn(f64) -> f64> {
    pub red: R,
    pub green: G,
    pub blue: B,
    pub alpha: Option<A>,
}

impl<R, G, B> ChannelFunctions<R, G, B>
where R: Fn(f64) -> f64, G: Fn(f64) -> f64, B: Fn(f64) -> f64 {
    /// Opaque colors from three channel functions.
    pub fn new(red: R, green: G, blue: B) -> Self {
        ChannelFunctions { red, green, blue, alpha: None }
    }
}

impl<R, G, B, A> ChannelFunctions<R, G, B, A>
where R: Fn(f64) -> f64, G: Fn(f64) -> f64, B: Fn(f64) -> f64,
      A: Fn(f64) -> f64 {
    /// Set the alpha channel function.
    pub fn with_alpha<A2>(self, alpha: A2) -> ChannelFunctions<R, G, B, A2>
    where A2: Fn(f64) -> f64 {
        ChannelFunctions { red: self.red, green: self.green, blue: self.blue,
                           alpha: Some(alpha) }
    }
}

impl<R, G, B, A> ColorRange for ChannelFunctions<R, G, B, A>
where R: Fn(f64) -> f64, G: Fn(f64) -> f64, B: Fn(f64) -> f64,
      A: Fn(f64) -> f64 {
    fn rgba(&self, x: f64) -> RGBA8 {
        RGBA8 { r: unit_to_u8((self.red)(x)),
                g: unit_to_u8((self.green)(x)),
                b: unit_to_u8((self.blue)(x)),
                a: self.alpha.as_ref().map_or(255, |a| unit_to_u8(a(x))) }
    }
}

/// Parameters of D. A. Green's cube-helix color scheme (Bull. Astr.
/// Soc. India, 39, 289–295, 2011).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeHelix {
    pub start: f64,
    pub rotation: f64,
    pub gamma: f64,
    pub lambda: (f64, f64),
    pub saturation: (f64, f64),
}

impl CubeHelix {
    /// Cube-helix with the given start color and number of rotations,
    /// `gamma = 1`, the full lightness range and a saturation of 1.2.
    pub fn new(start: f64, rotation: f64) -> Self {
        CubeHelix { start, rotation, gamma: 1., lambda: (0., 1.),
                    saturation: (1.2, 1.2) }
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Restrict the lightness to \[`min`, `max`\].
    pub fn lambda(mut self, min: f64, max: f64) -> Self {
        self.lambda = (min, max);
        self
    }

    /// Let the saturation vary linearly from `min` to `max`.
    pub fn saturation(mut self, min: f64, max: f64) -> Self {
        self.saturation = (min, max);
        self
    }
}

impl ColorRange for CubeHelix {
    fn rgba(&self, t: f64) -> RGBA8 {
        let t = t.clamp(0., 1.);
        let l = self.lambda.0 + t * (self.lambda.1 - self.lambda.0);
        let s = self.saturation.0 + t * (self.saturation.1 - self.saturation.0);
        let lg = l.powf(self.gamma);
        let phi = 2. * PI * (self.start / 3. + self.rotation * l);
        let a = s * lg * (1. - lg) / 2.;
        let (cp, sp) = (phi.cos(), phi.sin());
        RGBA8 { r: unit_to_u8(lg + a * (-0.14861 * cp + 1.78277 * sp)),
                g: unit_to_u8(lg + a * (-0.29227 * cp - 0.90649 * sp)),
                b: unit_to_u8(lg + a * (1.97294 * cp)),
                a: 255 }
    }
}

/// Relative position of `v` in \[`p1`, `p2`\].
#[inline]
fn rel(v: f64, p1: f64, p2: f64) -> f64 {
    if p2 == p1 { 0. } else { (v - p1) / (p2 - p1) }
}

#[inline]
fn lerp_u8(y1: u8, y2: u8, t: f64) -> u8 {
    let y = y1 as f64 + t * (y2 as f64 - y1 as f64);
    if y.is_nan() { 0 } else { y.clamp(0., 255.) as u8 }
}

/// Sweep `size` values over the node positions `pos`, calling `f(i, j1,
/// j2, rel)` for every LUT entry `i` lying between nodes `j1` and `j2`.
/// `pos` must be sorted and have at least 2 elements.
fn sweep(pos: &[f64], size: usize, mut f: impl FnMut(usize, usize, usize, f64)) {
    let n = pos.len();
    let dmin = pos[0];
    let dmax = pos[n - 1];
    let div = if size > 2 { (size - 2) as f64 } else { 1. };
    let delta = (dmax - dmin) / div;
    let (mut j1, mut j2) = (0, 1);
    for i in 0 .. size {
        let v = dmin + i as f64 * delta;
        while j2 < n - 1 && v > pos[j2] {
            j1 += 1;
            j2 += 1;
        }
        f(i, j1, j2, rel(v, pos[j1], pos[j2]))
    }
}

/// Interpolate linearly between the nodes of `items`, which must be
/// sorted by position.  The first entry has the color of the first
/// node and the last entry the one of the last node.  With fewer than
/// two nodes, `size` transparent black entries are returned.
pub fn build_lut_linear_interpolate_sorted(items: &PaletteList, size: usize) -> Lut {
    let mut lut = vec![RGBA8::default(); size];
    let nodes = items.as_slice();
    if nodes.len() <= 1 || size == 0 { return lut }
    let pos: Vec<f64> = nodes.iter().map(|n| n.position).collect();
    sweep(&pos, size, |i, j1, j2, t| {
        let (c1, c2) = (nodes[j1].color, nodes[j2].color);
        lut[i] = RGBA8 { r: lerp_u8(c1.r, c2.r, t), g: lerp_u8(c1.g, c2.g, t),
                         b: lerp_u8(c1.b, c2.b, t), a: lerp_u8(c1.a, c2.a, t) };
    });
    lut[size - 1] = nodes[nodes.len() - 1].color;
    lut
}

/// Same as [`build_lut_linear_interpolate_sorted`] but sorts `items`
/// first.
pub fn build_lut_linear_interpolate(items: &PaletteList, size: usize) -> Lut {
    build_lut_linear_interpolate_sorted(&items.sorted(), size)
}

/// Staircase LUT of exactly `size` entries: entry `i` takes the color
/// of the last node whose position is not past the `i`-th of `size`
/// evenly spaced sample points.  `items` must be sorted by position.
pub fn build_lut_stepped_sorted(items: &PaletteList, size: usize) -> Lut {
    let mut lut = vec![RGBA8::default(); size];
    let nodes = items.as_slice();
    if nodes.len() <= 1 || size == 0 { return lut }
    let dmin = nodes[0].position;
    let dmax = nodes[nodes.len() - 1].position;
    let div = if size > 1 { (size - 1) as f64 } else { 1. };
    let mut j = 0;
    for (i, c) in lut.iter_mut().enumerate() {
        let v = if i + 1 == size { dmax }
                else { dmin + i as f64 * (dmax - dmin) / div };
        while j + 1 < nodes.len() && nodes[j + 1].position <= v { j += 1 }
        *c = nodes[j].color;
    }
    lut
}

/// Same as [`build_lut_stepped_sorted`] but sorts `items` first.
pub fn build_lut_stepped(items: &PaletteList, size: usize) -> Lut {
    build_lut_stepped_sorted(&items.sorted(), size)
}

/// One LUT entry per node, in ascending position order.
pub fn build_lut_steps_from_colors(items: &PaletteList) -> Lut {
    items.sorted().colors().collect()
}

fn fill_channel(lut: &mut [RGBA8], ch: usize, seg: &[LinSegment]) {
    let size = lut.len();
    match seg {
        [] => (),
        [s] => {
            for c in lut.iter_mut() {
                *c = crate::with_channel(*c, ch, s.start_next)
            }
        }
        _ => {
            let pos: Vec<f64> = seg.iter().map(|s| s.position).collect();
            sweep(&pos, size, |i, j1, j2, t| {
                let y = lerp_u8(seg[j1].start_next, seg[j2].end_previous, t);
                lut[i] = crate::with_channel(lut[i], ch, y);
            });
            if let (Some(c), Some(s)) = (lut.last_mut(), seg.last()) {
                *c = crate::with_channel(*c, ch, s.end_previous);
            }
        }
    }
}

/// Build an opaque LUT from one piecewise linear function per color
/// channel.  The segment lists must be sorted by position.  An empty
/// list sets its channel to 0; a single segment sets the whole channel
/// to its `start_next` value.
pub fn build_lut_from_segments_sorted(
    red: &[LinSegment], green: &[LinSegment], blue: &[LinSegment], size: usize,
) -> Lut {
    let mut lut = vec![RGBA8 { r: 0, g: 0, b: 0, a: 255 }; size];
    fill_channel(&mut lut, 0, red);
    fill_channel(&mut lut, 1, green);
    fill_channel(&mut lut, 2, blue);
    lut
}

/// Same as [`build_lut_from_segments_sorted`] but sorts the segment
/// lists first.
pub fn build_lut_from_segments(
    red: &[LinSegment], green: &[LinSegment], blue: &[LinSegment], size: usize,
) -> Lut {
    let sort = |s: &[LinSegment]| {
        let mut s = s.to_vec();
        s.sort_by(|a, b| a.position.total_cmp(&b.position));
        s
    };
    build_lut_from_segments_sorted(&sort(red), &sort(green), &sort(blue), size)
}

struct Sampled<F>(F);

impl<F: Fn(f64) -> RGBA8> ColorRange for Sampled<F> {
    #[inline]
    fn rgba(&self, x: f64) -> RGBA8 { (self.0)(x) }
}

/// Sample `f` at `size` evenly spaced points of \[`vmin`, `vmax`\]
/// (bounds included).
pub fn build_lut_from_function<F>(f: F, size: usize, vmin: f64, vmax: f64) -> Lut
where F: Fn(f64) -> RGBA8 {
    Sampled(f).to_lut(vmin, vmax, size)
}

/// Sample channel functions, see [`ChannelFunctions`].
pub fn build_lut_from_channels<R, G, B, A>(
    f: &ChannelFunctions<R, G, B, A>, size: usize, vmin: f64, vmax: f64,
) -> Lut
where R: Fn(f64) -> f64, G: Fn(f64) -> f64, B: Fn(f64) -> f64,
      A: Fn(f64) -> f64 {
    f.to_lut(vmin, vmax, size)
}

/// Cube-helix LUT with `size` entries.
pub fn build_cube_helix_lut(params: &CubeHelix, size: usize) -> Lut {
    params.to_lut(0., 1., size)
}

/// A reversed copy of `lut`.
pub fn reverse(lut: &[RGBA8]) -> Lut {
    lut.iter().rev().copied().collect()
}

/// Pick `n` entries of `lut`: entry `i` is `lut[round(i (len-1) / n)]`.
pub fn subsample(lut: &[RGBA8], n: usize) -> Lut {
    if lut.is_empty() || n == 0 { return Vec::new() }
    let last = lut.len() - 1;
    (0 .. n).map(|i| {
        let k = (i as f64 * last as f64 / n as f64).round() as usize;
        lut[k.min(last)]
    }).collect()
}

/// Apply `f` to every entry of `lut`.
pub fn modify(lut: &[RGBA8], f: impl Fn(RGBA8) -> RGBA8) -> Lut {
    lut.iter().map(|&c| f(c)).collect()
}

/// Apply `f` to every entry of `lut` together with its index.
pub fn modify_indexed(lut: &[RGBA8], f: impl Fn(usize, RGBA8) -> RGBA8) -> Lut {
    lut.iter().enumerate().map(|(i, &c)| f(i, c)).collect()
}

#[inline]
fn scale(c: RGBA8, k: f64) -> RGBA8 {
    let s = |x: u8| (x as f64 * k).round().clamp(0., 255.) as u8;
    RGBA8 { r: s(c.r), g: s(c.g), b: s(c.b), a: c.a }
}

/// Darker color; `factor` is in percent, 150 returning a color with
/// 2/3 of the brightness.  Factors ≤ 0 return the color unchanged.
pub fn darker(c: RGBA8, factor: u32) -> RGBA8 {
    if factor == 0 { return c }
    scale(c, 100. / factor as f64)
}

/// Lighter color; `factor` is in percent, 150 mixing in 1/3 of white.
pub fn lighter(c: RGBA8, factor: u32) -> RGBA8 {
    if factor <= 100 { return c }
    let t = 1. - 100. / factor as f64;
    RGBA8 { r: lerp_u8(c.r, 255, t), g: lerp_u8(c.g, 255, t),
            b: lerp_u8(c.b, 255, t), a: c.a }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::rgb;

    const BLACK: RGBA8 = rgb(0, 0, 0);
    const WHITE: RGBA8 = rgb(255, 255, 255);
    const RED: RGBA8 = rgb(255, 0, 0);
    const GREEN: RGBA8 = rgb(0, 255, 0);
    const BLUE: RGBA8 = rgb(0, 0, 255);

    fn gray_ramp() -> PaletteList {
        vec![(0., BLACK), (1., WHITE)].into()
    }

    #[test]
    fn linear_black_to_white() {
        let lut = build_lut_linear_interpolate(&gray_ramp(), 256);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], BLACK);
        assert_eq!(lut[255], WHITE);
        assert!((127 ..= 128).contains(&lut[128].r), "{:?}", lut[128]);
        assert_eq!(lut[128].r, lut[128].g);
        assert_eq!(lut[128].g, lut[128].b);
        assert!(lut.windows(2).all(|w| w[0].r <= w[1].r));
    }

    #[test]
    fn linear_sorts_its_input() {
        let l: PaletteList = vec![(1., WHITE), (0., BLACK)].into();
        assert_eq!(build_lut_linear_interpolate(&l, 64),
                   build_lut_linear_interpolate_sorted(&gray_ramp(), 64));
    }

    #[test]
    fn linear_endpoints_hold_for_any_size() {
        let l: PaletteList = vec![(-3., RED), (0.5, GREEN), (7., BLUE)].into();
        for size in 1 .. 40 {
            let lut = build_lut_linear_interpolate(&l, size);
            assert_eq!(lut.len(), size);
            assert_eq!(lut[size - 1], BLUE);
            if size > 1 { assert_eq!(lut[0], RED) }
        }
    }

    #[test]
    fn linear_interpolates_alpha() {
        let l: PaletteList = vec![(0., RGBA8 { r: 0, g: 0, b: 0, a: 0 }),
                                  (1., RGBA8 { r: 0, g: 0, b: 0, a: 255 })].into();
        let lut = build_lut_linear_interpolate(&l, 11);
        assert_eq!(lut[0].a, 0);
        assert!(lut[5].a > 100 && lut[5].a < 200);
        assert_eq!(lut[10].a, 255);
    }

    #[test]
    fn duplicate_positions_jump() {
        let l: PaletteList = vec![(0., RED), (0.5, RED), (0.5, BLUE),
                                  (1., BLUE)].into();
        let lut = build_lut_linear_interpolate(&l, 100);
        assert_eq!(lut[10], RED);
        assert_eq!(lut[90], BLUE);
    }

    #[test]
    fn degenerate_inputs() {
        let zero = vec![RGBA8::default(); 7];
        assert_eq!(build_lut_linear_interpolate(&PaletteList::new(), 7), zero);
        let one: PaletteList = vec![(0.3, RED)].into();
        assert_eq!(build_lut_linear_interpolate(&one, 7), zero);
        assert_eq!(build_lut_stepped(&one, 7), zero);
        assert!(build_lut_linear_interpolate(&gray_ramp(), 0).is_empty());
        assert!(build_lut_stepped(&gray_ramp(), 0).is_empty());
        assert!(build_lut_steps_from_colors(&PaletteList::new()).is_empty());
    }

    #[test]
    fn stepped_has_exact_size() {
        let l: PaletteList = vec![(0., RED), (1., GREEN), (2., BLUE)].into();
        let lut = build_lut_stepped(&l, 9);
        assert_eq!(lut.len(), 9);
        assert_eq!(lut, [RED, RED, RED, RED, GREEN, GREEN, GREEN, GREEN, BLUE]);
    }

    #[test]
    fn steps_from_colors_ignores_size() {
        let l: PaletteList = vec![(2., BLUE), (0., RED), (1., GREEN)].into();
        assert_eq!(build_lut_steps_from_colors(&l), [RED, GREEN, BLUE]);
    }

    #[test]
    fn push_color_positions() {
        let l: PaletteList = [RED, GREEN, BLUE, WHITE].into_iter().collect();
        let pos: Vec<f64> = l.iter().map(|n| n.position).collect();
        assert_eq!(pos, [0., 1., 2., 3.]);
        let mut l: PaletteList = vec![(0., RED), (4., GREEN)].into();
        l.push_color(BLUE);
        assert_eq!(l.min_max_position(), Some((0., 8.)));
    }

    #[test]
    fn packed_literals() {
        let l = PaletteList::from(&[(0., 0xFFB2182B), (1., 0x802166AC)][..]);
        assert_eq!(l.as_slice()[0].color, rgb(0xB2, 0x18, 0x2B));
        assert_eq!(l.as_slice()[1].color.a, 0x80);
    }

    #[test]
    fn segments() {
        let r = [LinSegment::unit(0., 0., 0.), LinSegment::unit(1., 1., 1.)];
        let g = [LinSegment::new(0., 0, 200)];
        let lut = build_lut_from_segments(&r, &g, &[], 256);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], rgb(0, 200, 0));
        assert_eq!(lut[255], rgb(255, 200, 0));
        assert!(lut.windows(2).all(|w| w[0].r <= w[1].r));
    }

    #[test]
    fn segments_discontinuity() {
        let r = [LinSegment::unit(0., 0., 0.), LinSegment::unit(0.5, 0., 1.),
                 LinSegment::unit(1., 1., 1.)];
        let lut = build_lut_from_segments(&r, &r, &r, 101);
        assert_eq!(lut[20], BLACK);
        assert_eq!(lut[80], WHITE);
    }

    #[test]
    fn functional_clamps_and_truncates() {
        let f = ChannelFunctions::new(|x: f64| x, |x: f64| 2. * x - 1.,
                                      |_: f64| 1.5);
        let lut = build_lut_from_channels(&f, 3, 0., 1.);
        assert_eq!(lut, [rgb(0, 0, 255), rgb(127, 0, 255), rgb(255, 255, 255)]);
        let a = f.with_alpha(|x: f64| 1. - x);
        assert_eq!(a.rgba(1.).a, 0);
        let lut = build_lut_from_function(|x| rgb(x as u8, 0, 0), 5, 0., 4.);
        assert_eq!(lut.iter().map(|c| c.r).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn cube_helix_goes_black_to_white() {
        let lut = build_cube_helix_lut(&CubeHelix::new(0.5, -1.5), 256);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], BLACK);
        assert_eq!(lut[255], WHITE);
        let light = |c: &RGBA8| crate::luma(*c) as f64;
        assert_abs_diff_eq!(light(&lut[128]), 128., epsilon = 30.);
    }

    #[test]
    fn reverse_is_an_involution() {
        let lut = build_lut_linear_interpolate(&gray_ramp(), 17);
        assert_eq!(reverse(&reverse(&lut)), lut);
        assert_eq!(reverse(&lut)[0], WHITE);
    }

    #[test]
    fn subsample_stride() {
        let lut: Lut = (0 ..= 255).map(|i| rgb(i as u8, 0, 0)).collect();
        let s = subsample(&lut, 5);
        assert_eq!(s.len(), 5);
        for (i, c) in s.iter().enumerate() {
            let k = (i as f64 * 255. / 5.).round() as usize;
            assert_eq!(*c, lut[k]);
        }
        assert!(subsample(&lut, 0).is_empty());
        assert!(subsample(&[], 3).is_empty());
        assert_eq!(subsample(&lut, 1000).len(), 1000);
    }

    #[test]
    fn modifiers() {
        let lut = vec![RED, BLUE];
        assert_eq!(modify(&lut, crate::to_gray).len(), 2);
        let idx = modify_indexed(&lut, |i, c| RGBA8 { a: i as u8, ..c });
        assert_eq!(idx[1].a, 1);
        assert_eq!(darker(rgb(150, 30, 0), 150), rgb(100, 20, 0));
        assert_eq!(lighter(BLACK, 150), rgb(85, 85, 85));
        assert_eq!(darker(RED, 0), RED);
    }
}
