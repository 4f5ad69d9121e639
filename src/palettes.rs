//! Built-in palettes.

use std::{f64::consts::PI, sync::Arc};
use crate::{
    Lut, Hue, ColorRange, from_argb32,
    build::{build_cube_helix_lut, build_lut_from_channels,
            build_lut_from_segments, build_lut_linear_interpolate,
            build_lut_steps_from_colors, darker, lighter, modify, reverse,
            subsample, ChannelFunctions, CubeHelix, LinSegment, PaletteList},
};

pub(crate) mod ty;
use ty::{PaletteEntry, PaletteId};

macro_rules! builtins {
    ($($(#[$m: meta])* $v: ident $(= $id: literal)? => $name: literal,
       $human: literal $(, [$($alias: literal),*])?;)*) => {
        /// Palettes available in every
        /// [`PaletteRegistry`](crate::PaletteRegistry).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        pub enum Builtin {
            $( $(#[$m])* $v $(= $id)?, )*
        }

        impl Builtin {
            /// All built-in palettes, by increasing id.
            pub const ALL: &'static [Builtin] = &[ $(Builtin::$v),* ];

            /// Machine-readable name, used for configuration files.
            pub fn name(self) -> &'static str {
                match self { $(Builtin::$v => $name),* }
            }

            /// Name for display in user interfaces.
            pub fn human_name(self) -> &'static str {
                match self { $(Builtin::$v => $human),* }
            }

            /// Legacy names also designating this palette.
            pub fn aliases(self) -> &'static [&'static str] {
                match self { $(Builtin::$v => &[$($($alias),*)?]),* }
            }
        }
    }
}

builtins! {
    Gray => "gray", "gray";
    InvGray => "invgray", "inv. gray";
    Red => "red", "red";
    InvRed => "invred", "inv. red";
    Green => "green", "green";
    InvGreen => "invgreen", "inv. green";
    Blue => "blue", "blue";
    InvBlue => "invblue", "inv. blue";
    Cyan => "cyan", "cyan";
    InvCyan => "invcyan", "inv. cyan";
    Yellow => "yellow", "yellow";
    InvYellow => "invyellow", "inv. yellow";
    Magenta => "magenta", "magenta";
    InvMagenta => "invmagenta", "inv. magenta";
    Matlab => "Matlab", "Matlab", ["jet"];
    InvMatlab => "invMatlab", "inv. Matlab", ["invjet"];
    Rygb => "RYGB", "RYGB";
    InvRygb => "invRYGB", "inv. RYGB";
    Hsv => "HSV", "HSV";
    InvHsv => "invHSV", "inv. HSV";
    Rainbow => "rainbow", "rainbow";
    InvRainbow => "invrainbow", "inv. rainbow";
    AfmHot => "AFMhot", "AFM hot", ["hot"];
    InvAfmHot => "invAFMhot", "inv. AFM hot", ["invhot"];
    Ocean => "ocean", "ocean";
    InvOcean => "invocean", "inv. ocean";
    TrafficLight => "trafficlight", "trafficlight";
    InvTrafficLight => "invtrafficlight", "inv. trafficl.";
    Bone => "bone", "bone";
    Cool => "cool", "cool";
    Copper => "copper", "copper";
    Autumn => "autumn", "autumn";
    Seismic => "seismic", "seismic";
    SeismicStep => "seismic_step", "seismic (steps)";
    Terrain => "terrain", "terrain";
    TerrainStep => "terrain_step", "terrain (steps)";
    Viridis => "viridis", "viridis";
    InvViridis => "invviridis", "inv. viridis";
    ViridisStep => "viridis_step", "viridis (steps)";
    InvViridisStep => "invviridis_step", "inv. viridis (steps)";
    Magma => "magma", "magma";
    InvMagma => "invmagma", "inv. magma";
    MagmaStep => "magma_step", "magma (steps)";
    InvMagmaStep => "invmagma_step", "inv. magma (steps)";
    Inferno => "inferno", "inferno";
    InvInferno => "invinferno", "inv. inferno";
    InfernoStep => "inferno_step", "inferno (steps)";
    InvInfernoStep => "invinferno_step", "inv. inferno (steps)";
    Plasma => "plasma", "plasma";
    InvPlasma => "invplasma", "inv. plasma";
    PlasmaStep => "plasma_step", "plasma (steps)";
    InvPlasmaStep => "invplasma_step", "inv. plasma (steps)";
    /// Color-blind safe, from <https://lospec.com/palette-list/ibm-color-blind-safe>.
    IbmColorBlindSafe => "IBMColorBlindSafe", "IBM color-blind safe";
    IbmColorBlindSafeStep => "IBMColorBlindSafe_step",
        "IBM color-blind safe (steps)";
    /// M. Okabe and K. Ito, “How to make figures and presentations that
    /// are friendly to color blind people”, University of Tokyo, 2002.
    OkabeItoStep => "OkabeIto_step", "Okabe-Ito (steps)";
    OkabeItoDarkerStep => "OkabeItoDarker_step", "Okabe-Ito darker (steps)";
    OkabeItoLighterStep => "OkabeItoLighter_step", "Okabe-Ito lighter (steps)";
    /// Default color cycle for graphs.
    DefaultStep => "default_step", "default graph colors (steps)";
    /// Cube-helix with the parameters of Green's paper: start 0.5,
    /// rotation -1.5, gamma 1 and saturation 1.2.
    CubeHelixClassic => "CubeHelixClassic", "CubeHelix classic";
    CubeHelixClassicStep => "CubeHelixClassic_step", "CubeHelix classic (steps)";
    CubeHelix1 => "CubeHelix1", "CubeHelix 1";
    CubeHelix1Step => "CubeHelix1_step", "CubeHelix 1 (steps)";
    CubeHelix2 => "CubeHelix2", "CubeHelix 2";
    CubeHelix2Step => "CubeHelix2_step", "CubeHelix 2 (steps)";
    CubeHelix3 => "CubeHelix3", "CubeHelix 3";
    CubeHelix3Step => "CubeHelix3_step", "CubeHelix 3 (steps)";
    BlMaYe => "BlMaYe", "BlMaYe", ["BlueMagentaYellow"];
    YeMaBl => "YeMaBl", "YeMaBl", ["YellowMagentaBlue"];
    BlYe => "BlYe", "BlYe", ["BlueYellow"];
    YeBl => "YeBl", "YeBl", ["YellowBlue"];
    BlueWhiteRed => "bluewhitered", "blue-white-red";
    RedWhiteBlue => "redwhiteblue", "red-white-blue";
    BBlRdYe => "BBlRdYe", "BBlRdYe", ["BlackBlueRedYellow"];
    GnRdVi => "GnRdVi", "GnRdVi", ["GreenRedViolet"];
    BwPrint => "BWprint", "BW print", ["BlackBlueVioletYellowWhite"];
    InvBwPrint => "invBWprint", "inv. BW print", ["WhiteYellowVioletBlueBlack"];
    BrBG => "BrBG", "BrBG", ["BrownGreen"];
    PuOr => "PuOr", "PuOr", ["OrangeWhitePurple"];
    GreenBlue => "greenblue", "green-blue";
    BlueGreen => "bluegreen", "blue-green";
    YeGnBu => "YeGnBu", "YeGnBu", ["YellowGreenBlue"];
    StepsBrBG => "stepsBrBG", "steps: BrBG";
    StepsPuOr => "stepsPuOr", "steps: PuOr";
    StepsGnBl => "stepsGnBl", "steps: GnBl";
    StepsBlGn => "stepsBlGn", "steps: BlGn";
    StepsYeGnBu => "stepsYeGnBu", "steps: YeGnBu";
    CyanWhite => "cyanwhite", "cyan-white";
    WhiteCyan => "whitecyan", "white-cyan";
    YellowWhite => "yellowwhite", "yellow-white";
    WhiteYellow => "whiteyellow", "white-yellow";
    MagentaWhite => "magentawhite", "magenta-white";
    WhiteMagenta => "whitemagenta", "white-magenta";
    BlueGreenRed => "bluegreenred", "blue-green-red";
    RedGreenBlue => "redgreenblue", "red-green-blue";
    MagentaYellow => "magentayellow", "magenta-yellow";
    YellowMagenta => "yellowmagenta", "yellow-magenta";
    RedBlue => "redblue", "red-blue";
    BlueRed => "bluered", "blue-red";
    /// White with alpha increasing from transparent to opaque.
    Alpha = 64_998 => "alpha", "alpha";
    /// White with alpha decreasing from opaque to transparent.
    InvertedAlpha = 64_999 => "invAlpha", "inv. alpha";
}

// Literal palette data, packed as 0xAARRGGBB.

const RED_WHITE_BLUE: [u32; 8] = [
    0xFFB2182B, 0xFFD6604D, 0xFFF4A582, 0xFFFDDBC7,
    0xFFD1E5F0, 0xFF92C5DE, 0xFF4393C3, 0xFF2166AC];
const BR_BG: [u32; 8] = [
    0xFF8C510A, 0xFFBF812D, 0xFFDFC27D, 0xFFF6E8C3,
    0xFFC7EAE5, 0xFF80CDC1, 0xFF35978F, 0xFF01665E];
const PU_OR: [u32; 9] = [
    0xFFB35806, 0xFFE08214, 0xFFFDB863, 0xFFFEE0B6, 0xFFF7F7F7,
    0xFFD8DAEB, 0xFFB2ABD2, 0xFF8073AC, 0xFF542788];
const YE_GN_BU: [u32; 9] = [
    0xFFFFFFD9, 0xFFEDF8B1, 0xFFC7E9B4, 0xFF7FCDBB, 0xFF41B6C4,
    0xFF1D91C0, 0xFF225EA8, 0xFF253494, 0xFF081D58];
const GREEN_BLUE: [u32; 9] = [
    0xFFF7FCF0, 0xFFE0F3DB, 0xFFCCEBC5, 0xFFA8DDB5, 0xFF7BCCC4,
    0xFF4EB3D3, 0xFF2B8CBE, 0xFF0868AC, 0xFF084081];

// Perceptually uniform maps of matplotlib
// (https://github.com/BIDS/colormap), 11 evenly spaced anchors.
const VIRIDIS: [u32; 11] = [
    0xFF440154, 0xFF482475, 0xFF414487, 0xFF355F8D, 0xFF2A788E, 0xFF21918C,
    0xFF22A884, 0xFF44BF70, 0xFF7AD151, 0xFFBDDF26, 0xFFFDE725];
const MAGMA: [u32; 11] = [
    0xFF000004, 0xFF140E36, 0xFF3B0F70, 0xFF641A80, 0xFF8C2981, 0xFFB73779,
    0xFFDE4968, 0xFFF7705C, 0xFFFE9F6D, 0xFFFECF92, 0xFFFCFDBF];
const INFERNO: [u32; 11] = [
    0xFF000004, 0xFF160B39, 0xFF420A68, 0xFF6A176E, 0xFF932667, 0xFFBC3754,
    0xFFDD513A, 0xFFF37819, 0xFFFCA50A, 0xFFF6D746, 0xFFFCFFA4];
const PLASMA: [u32; 11] = [
    0xFF0D0887, 0xFF41049D, 0xFF6A00A8, 0xFF8F0DA4, 0xFFB12A90, 0xFFCC4778,
    0xFFE16462, 0xFFF2844B, 0xFFFCA636, 0xFFFCCE25, 0xFFF0F921];

const IBM_COLOR_BLIND_SAFE: [u32; 5] = [
    0xFF648FFF, 0xFF785EF0, 0xFFDC267F, 0xFFFE6100, 0xFFFFB000];
const OKABE_ITO: [u32; 8] = [
    0xFF000000, 0xFFE69F00, 0xFF56B4E9, 0xFF009E73,
    0xFFF0E442, 0xFF0072B2, 0xFFD55E00, 0xFFCC79A7];
const DEFAULT_CYCLE: [u32; 12] = [
    0xFFFF0000, 0xFF008000, 0xFF0000FF, 0xFFFF00FF, 0xFFFF8C00, 0xFF000080,
    0xFFB22222, 0xFF006400, 0xFF8B008B, 0xFF483D8B, 0xFF800000, 0xFF008B8B];

// (position, red, green, blue) with channels in [0, 1].
const SEISMIC: [(f64, f64, f64, f64); 5] = [
    (0., 0., 0., 0.3), (0.25, 0., 0., 1.), (0.5, 1., 1., 1.),
    (0.75, 1., 0., 0.), (1., 0.5, 0., 0.)];
const TERRAIN: [(f64, f64, f64, f64); 6] = [
    (0., 0.2, 0.2, 0.6), (0.15, 0., 0.6, 1.), (0.25, 0., 0.8, 0.4),
    (0.5, 1., 1., 0.6), (0.75, 0.5, 0.36, 0.33), (1., 1., 1., 1.)];

// (position, end_previous, start_next) with channels in [0, 1].
type Segments = [(f64, f64, f64)];
const BONE: [&Segments; 3] = [
    &[(0., 0., 0.), (0.746032, 0.652778, 0.652778), (1., 1., 1.)],
    &[(0., 0., 0.), (0.365079, 0.319444, 0.319444),
      (0.746032, 0.777778, 0.777778), (1., 1., 1.)],
    &[(0., 0., 0.), (0.365079, 0.444444, 0.444444), (1., 1., 1.)]];
const COPPER: [&Segments; 3] = [
    &[(0., 0., 0.), (0.809524, 1., 1.), (1., 1., 1.)],
    &[(0., 0., 0.), (1., 0.7812, 0.7812)],
    &[(0., 0., 0.), (1., 0.4975, 0.4975)]];

fn colors(table: &[u32]) -> Lut {
    table.iter().map(|&c| from_argb32(c)).collect()
}

/// Nodes evenly spaced in the order of `table`.
fn even_nodes(table: &[u32]) -> PaletteList {
    table.iter().map(|&c| from_argb32(c)).collect()
}

fn unit_nodes(table: &[(f64, f64, f64, f64)]) -> PaletteList {
    let u = crate::unit_to_u8;
    table.iter().map(|&(p, r, g, b)| (p, crate::rgb(u(r), u(g), u(b))))
        .collect()
}

fn segments(s: &[&Segments; 3], size: usize) -> Lut {
    let seg = |s: &Segments| -> Vec<LinSegment> {
        s.iter().map(|&(p, e, n)| LinSegment::unit(p, e, n)).collect()
    };
    build_lut_from_segments(&seg(s[0]), &seg(s[1]), &seg(s[2]), size)
}

fn channels(r: impl Fn(f64) -> f64, g: impl Fn(f64) -> f64,
            b: impl Fn(f64) -> f64, size: usize) -> Lut {
    build_lut_from_channels(&ChannelFunctions::new(r, g, b), size, 0., 1.)
}

/// Gnuplot's `rgbformulae` 30 (the first component of BlMaYe).
#[inline]
fn gp30(v: f64) -> f64 { v / 0.32 - 0.78125 }

#[inline]
fn in_unit(x: f64) -> bool { (0. ..= 1.).contains(&x) }

fn bl_ma_ye_blue(v: f64) -> f64 {
    [4. * v, -2. * v + 1.84, v / 0.08 - 11.5].into_iter()
        .find(|&b| in_unit(b)).unwrap_or(1.)
}

fn bw_print_blue(v: f64) -> f64 {
    if v < 0.25 { 4. * v }
    else if v < 0.42 { 1. }
    else if v < 0.92 { -2. * v + 1.84 }
    else { v / 0.08 - 11.5 }
}

impl Builtin {
    /// The last built-in palette before the special ones.
    pub const LAST_REGULAR: Builtin = Builtin::BlueRed;

    /// Numeric id of the palette.
    #[inline]
    pub const fn id(self) -> PaletteId { PaletteId(self as u32) }

    /// The built-in palette with the given id, if any.
    pub fn from_id(id: PaletteId) -> Option<Builtin> {
        Builtin::ALL.binary_search_by_key(&id, |b| b.id()).ok()
            .map(|i| Builtin::ALL[i])
    }

    /// Whether the palette is a short list of distinct colors (its
    /// LUT does not have the requested size).
    pub fn is_stepped(self) -> bool {
        use Builtin::*;
        matches!(self, SeismicStep | TerrainStep | ViridisStep | InvViridisStep
                 | MagmaStep | InvMagmaStep | InfernoStep | InvInfernoStep
                 | PlasmaStep | InvPlasmaStep | IbmColorBlindSafeStep
                 | OkabeItoStep | OkabeItoDarkerStep | OkabeItoLighterStep
                 | DefaultStep | CubeHelixClassicStep | CubeHelix1Step
                 | CubeHelix2Step | CubeHelix3Step | StepsBrBG | StepsPuOr
                 | StepsGnBl | StepsBlGn | StepsYeGnBu)
    }

    /// Build the LUT of the palette.  Continuous palettes have `size`
    /// entries; the "_step" variants of continuous palettes have
    /// `steps` entries and the other stepped palettes one entry per
    /// color of their definition.
    pub fn build(self, size: usize, steps: usize) -> Lut {
        use Builtin::*;
        let inv = |b: Builtin| reverse(&b.build(size, steps));
        let lin = |l: &PaletteList| build_lut_linear_interpolate(l, size);
        let lin_rev = |t: &[u32]| {
            let n = t.len() as f64;
            build_lut_linear_interpolate(
                &t.iter().enumerate()
                    .map(|(i, &c)| (n - i as f64, from_argb32(c))).collect(),
                size)
        };
        let step = |b: Builtin| subsample(&b.build(size, steps), steps);
        let helix = |h: CubeHelix, n: usize| build_cube_helix_lut(&h, n);
        match self {
            Gray => channels(|v| v, |v| v, |v| v, size),
            Red => channels(|v| v, |_| 0., |_| 0., size),
            Green => channels(|_| 0., |v| v, |_| 0., size),
            Blue => channels(|_| 0., |_| 0., |v| v, size),
            Cyan => channels(|v| 0.5 * v, |v| v, |v| v, size),
            Yellow => channels(|v| v, |v| v, |_| 0., size),
            Magenta => channels(|v| v, |_| 0., |v| v, size),
            Matlab => channels(|v| 1.5 - 4. * (v - 0.75).abs(),
                               |v| 1.5 - 4. * (v - 0.5).abs(),
                               |v| 1.5 - 4. * (v - 0.25).abs(), size),
            Rygb => channels(|v| 3.125 * v - 0.78125, |v| (PI * v).sin(),
                             |v| 1. - 3. * v, size),
            Hsv => Hue.to_lut(0., 1., size),
            Rainbow => channels(|v| (2. * v - 0.5).abs(), |v| (PI * v).sin(),
                                |v| (0.5 * PI * v).cos(), size),
            AfmHot => channels(|v| 3. * v, |v| 3. * v - 1., |v| 3. * v - 2.,
                               size),
            Ocean => channels(|v| 3. * v - 2., |v| (1.5 * v - 0.5).abs(),
                              |v| v, size),
            TrafficLight => channels(
                |v| if v < 0.5 {
                    (128. * (PI * (2. * v - 0.5)).sin() + 128.) / 255.
                } else { 1. },
                |v| if v < 0.5 { (512. * v + 128.) / 255. }
                    else { (512. - 512. * v) / 255. },
                |_| 0., size),
            InvGray => inv(Gray),
            InvRed => inv(Red),
            InvGreen => inv(Green),
            InvBlue => inv(Blue),
            InvCyan => inv(Cyan),
            InvYellow => inv(Yellow),
            InvMagenta => inv(Magenta),
            InvMatlab => inv(Matlab),
            InvRygb => inv(Rygb),
            InvHsv => inv(Hsv),
            InvRainbow => inv(Rainbow),
            InvAfmHot => inv(AfmHot),
            InvOcean => inv(Ocean),
            InvTrafficLight => inv(TrafficLight),
            Bone => segments(&BONE, size),
            Cool => channels(|v| v, |v| 1. - v, |_| 1., size),
            Copper => segments(&COPPER, size),
            Autumn => channels(|_| 1., |v| v, |_| 0., size),
            Seismic => lin(&unit_nodes(&SEISMIC)),
            SeismicStep => build_lut_steps_from_colors(&unit_nodes(&SEISMIC)),
            Terrain => lin(&unit_nodes(&TERRAIN)),
            TerrainStep => build_lut_steps_from_colors(&unit_nodes(&TERRAIN)),
            Viridis => lin(&even_nodes(&VIRIDIS)),
            Magma => lin(&even_nodes(&MAGMA)),
            Inferno => lin(&even_nodes(&INFERNO)),
            Plasma => lin(&even_nodes(&PLASMA)),
            InvViridis => inv(Viridis),
            InvMagma => inv(Magma),
            InvInferno => inv(Inferno),
            InvPlasma => inv(Plasma),
            ViridisStep => step(Viridis),
            MagmaStep => step(Magma),
            InfernoStep => step(Inferno),
            PlasmaStep => step(Plasma),
            InvViridisStep => inv(ViridisStep),
            InvMagmaStep => inv(MagmaStep),
            InvInfernoStep => inv(InfernoStep),
            InvPlasmaStep => inv(PlasmaStep),
            IbmColorBlindSafe => lin(&even_nodes(&IBM_COLOR_BLIND_SAFE)),
            IbmColorBlindSafeStep => colors(&IBM_COLOR_BLIND_SAFE),
            OkabeItoStep => colors(&OKABE_ITO),
            OkabeItoDarkerStep => modify(&colors(&OKABE_ITO), |c| darker(c, 150)),
            OkabeItoLighterStep => modify(&colors(&OKABE_ITO), |c| lighter(c, 150)),
            DefaultStep => colors(&DEFAULT_CYCLE),
            CubeHelixClassic => helix(CubeHelix::new(0.5, -1.5), size),
            CubeHelixClassicStep => helix(CubeHelix::new(0.5, -1.5), steps),
            CubeHelix1 => helix(CubeHelix::new(0.5, -1.5).lambda(0.2, 0.8), size),
            CubeHelix1Step =>
                helix(CubeHelix::new(0.5, -1.5).lambda(0.2, 0.8), steps),
            CubeHelix2 =>
                helix(CubeHelix::new(1.5, -1.).saturation(1., 1.5), size),
            CubeHelix2Step =>
                helix(CubeHelix::new(1.5, -1.).saturation(1., 1.5), steps),
            CubeHelix3 => helix(CubeHelix::new(2., 1.).lambda(0.1, 0.9), size),
            CubeHelix3Step =>
                helix(CubeHelix::new(2., 1.).lambda(0.1, 0.9), steps),
            BlMaYe => channels(gp30, |v| 2. * v - 0.84, bl_ma_ye_blue, size),
            YeMaBl => inv(BlMaYe),
            BlYe => channels(|v| v.sqrt().sqrt(), |v| (0.5 * PI * v).sin(),
                             |v| (0.5 * PI * v).cos(), size),
            YeBl => inv(BlYe),
            BlueWhiteRed => lin_rev(&RED_WHITE_BLUE),
            RedWhiteBlue => lin(&even_nodes(&RED_WHITE_BLUE)),
            BBlRdYe => channels(|v| v.sqrt(), |v| v * v * v,
                                |v| (2. * PI * v).sin(), size),
            GnRdVi => channels(|v| v, |v| (v - 0.5).abs(), |v| v.powi(4), size),
            BwPrint => channels(gp30, gp30, bw_print_blue, size),
            InvBwPrint => inv(BwPrint),
            BrBG => lin(&even_nodes(&BR_BG)),
            PuOr => lin(&even_nodes(&PU_OR)),
            GreenBlue => lin(&even_nodes(&GREEN_BLUE)),
            BlueGreen => lin_rev(&GREEN_BLUE),
            YeGnBu => lin(&even_nodes(&YE_GN_BU)),
            StepsBrBG => colors(&BR_BG),
            StepsPuOr => colors(&PU_OR),
            StepsGnBl => colors(&GREEN_BLUE),
            StepsBlGn => reverse(&colors(&GREEN_BLUE)),
            StepsYeGnBu => colors(&YE_GN_BU),
            CyanWhite => channels(|v| v, |_| 1., |_| 1., size),
            WhiteCyan => inv(CyanWhite),
            YellowWhite => channels(|_| 1., |_| 1., |v| v, size),
            WhiteYellow => inv(YellowWhite),
            MagentaWhite => channels(|_| 1., |v| v, |_| 1., size),
            WhiteMagenta => inv(MagentaWhite),
            BlueGreenRed => lin(&even_nodes(&[0xFF0000FF, 0xFF008000, 0xFFFF0000])),
            RedGreenBlue => lin(&even_nodes(&[0xFFFF0000, 0xFF008000, 0xFF0000FF])),
            MagentaYellow => lin(&even_nodes(&[0xFFFF00FF, 0xFFFFFF00])),
            YellowMagenta => lin(&even_nodes(&[0xFFFFFF00, 0xFFFF00FF])),
            RedBlue => lin(&even_nodes(&[0xFFFF0000, 0xFF0000FF])),
            BlueRed => lin(&even_nodes(&[0xFF0000FF, 0xFFFF0000])),
            Alpha => build_lut_from_channels(
                &ChannelFunctions::new(|_: f64| 1., |_: f64| 1., |_: f64| 1.)
                    .with_alpha(|v: f64| v), size, 0., 1.),
            InvertedAlpha => inv(Alpha),
        }
    }
}

/// Build the table of all built-in palettes.
pub(crate) fn default_entries(size: usize, steps: usize) -> Vec<PaletteEntry> {
    Builtin::ALL.iter().map(|&b| PaletteEntry {
        id: b.id(),
        name: b.name().to_string(),
        human_name: b.human_name().to_string(),
        aliases: b.aliases().to_vec(),
        lut: Arc::new(b.build(size, steps)),
    }).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rgb, RGBA8, DEFAULT_STEPS, LUT_SIZE};
    use std::collections::HashSet;

    #[test]
    fn ids_are_sorted_and_dense() {
        for (i, b) in Builtin::ALL.iter().take_while(|&&b| b <= Builtin::LAST_REGULAR)
            .enumerate() {
            assert_eq!(b.id(), PaletteId(i as u32), "{:?}", b);
        }
        assert!(Builtin::ALL.windows(2).all(|w| w[0].id() < w[1].id()));
        assert_eq!(Builtin::ALL.len(),
                   PaletteId::FIRST_USER_PALETTE.0 as usize + 2);
        for &b in Builtin::ALL {
            assert_eq!(Builtin::from_id(b.id()), Some(b));
        }
        assert_eq!(Builtin::from_id(PaletteId::FIRST_USER_PALETTE), None);
        assert_eq!(Builtin::Alpha.id(), PaletteId(64_998));
        assert_eq!(Builtin::InvertedAlpha.id(), PaletteId(64_999));
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for &b in Builtin::ALL {
            for n in std::iter::once(b.name()).chain(b.aliases().iter().copied()) {
                assert!(seen.insert(n.to_lowercase()), "duplicate {}", n);
            }
        }
    }

    #[test]
    fn sizes() {
        for &b in Builtin::ALL {
            let lut = b.build(LUT_SIZE, DEFAULT_STEPS);
            if b.is_stepped() {
                assert!(!lut.is_empty() && lut.len() < LUT_SIZE, "{:?}", b);
            } else {
                assert_eq!(lut.len(), LUT_SIZE, "{:?}", b);
            }
        }
        assert_eq!(Builtin::ViridisStep.build(LUT_SIZE, 7).len(), 7);
        assert_eq!(Builtin::CubeHelix2Step.build(LUT_SIZE, 4).len(), 4);
        assert_eq!(Builtin::OkabeItoStep.build(LUT_SIZE, 3).len(), 8);
    }

    #[test]
    fn endpoints() {
        let lut = Builtin::Gray.build(256, 5);
        assert_eq!((lut[0], lut[255]), (rgb(0, 0, 0), rgb(255, 255, 255)));
        let lut = Builtin::Matlab.build(256, 5);
        assert_eq!(lut[0].b, 127);
        assert_eq!(lut[255].r, 127);
        let lut = Builtin::RedWhiteBlue.build(256, 5);
        assert_eq!(lut[0], rgb(0xB2, 0x18, 0x2B));
        assert_eq!(lut[255], rgb(0x21, 0x66, 0xAC));
        let lut = Builtin::BlueWhiteRed.build(256, 5);
        assert_eq!(lut[0], rgb(0x21, 0x66, 0xAC));
        assert_eq!(lut[255], rgb(0xB2, 0x18, 0x2B));
        let lut = Builtin::Viridis.build(256, 5);
        assert_eq!(lut[255], rgb(0xFD, 0xE7, 0x25));
        assert_eq!(Builtin::StepsBlGn.build(256, 5)[0], rgb(0x08, 0x40, 0x81));
    }

    #[test]
    fn inverted_variants_are_reversed() {
        use Builtin::*;
        for (a, b) in [(Gray, InvGray), (Matlab, InvMatlab), (Hsv, InvHsv),
                       (BlMaYe, YeMaBl), (Plasma, InvPlasma),
                       (CyanWhite, WhiteCyan), (Alpha, InvertedAlpha)] {
            assert_eq!(reverse(&a.build(64, 5)), b.build(64, 5), "{:?}", a);
        }
    }

    #[test]
    fn alpha_ramps() {
        let lut = Builtin::Alpha.build(256, 5);
        assert_eq!(lut[0], RGBA8 { r: 255, g: 255, b: 255, a: 0 });
        assert_eq!(lut[255], RGBA8 { r: 255, g: 255, b: 255, a: 255 });
        assert_eq!(Builtin::InvertedAlpha.build(256, 5)[0].a, 255);
    }

    #[test]
    fn okabe_ito_variants() {
        let base = Builtin::OkabeItoStep.build(256, 5);
        let dark = Builtin::OkabeItoDarkerStep.build(256, 5);
        let light = Builtin::OkabeItoLighterStep.build(256, 5);
        for ((b, d), l) in base.iter().zip(&dark).zip(&light) {
            assert!(crate::luma(*d) <= crate::luma(*b));
            assert!(crate::luma(*l) >= crate::luma(*b));
        }
    }

    #[test]
    fn default_table() {
        let e = default_entries(32, 3);
        assert_eq!(e.len(), Builtin::ALL.len());
        assert_eq!(e[0].name, "gray");
        assert_eq!(e[Builtin::Matlab as usize].aliases, ["jet"]);
        assert_eq!(e[Builtin::Matlab as usize].lut.len(), 32);
    }
}
