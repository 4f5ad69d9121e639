//! Palette files: CSV color tables and XML color maps.
//!
//! CSV files hold one node per line, either `R, G, B` or
//! `position, R, G, B`:
//!
//! ```text
//! # black to red
//! 0, 0, 0
//! 255, 0, 0
//! ```
//!
//! XML files hold one or more color maps (at any depth of the
//! document):
//!
//! ```text
//! <ColorMaps>
//!   <ColorMap name="fire" space="RGB">
//!     <Point x="0" r="0" g="0" b="0"/>
//!     <Point x="1" r="1" g="0.5" b="0"/>
//!   </ColorMap>
//! </ColorMaps>
//! ```

use std::path::Path;
use log::warn;
use quick_xml::{events::{BytesStart, Event}, Reader};
use thiserror::Error;
use crate::{
    build::{build_lut_linear_interpolate, build_lut_stepped, PaletteList},
    rgb, Lut, PaletteError, PaletteId, PaletteResult,
};

/// Format of a palette file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteFormat {
    Csv,
    Xml,
}

impl PaletteFormat {
    /// Format deduced from the file extension: `.xml` files are
    /// [`PaletteFormat::Xml`], everything else (`.csv`, `.pal`,
    /// `.rgb`,…) is [`PaletteFormat::Csv`].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("xml") => PaletteFormat::Xml,
            _ => PaletteFormat::Csv,
        }
    }
}

/// A palette read from a file, before it is turned into a LUT.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPalette {
    pub name: String,
    /// Nodes sorted by position.
    pub nodes: PaletteList,
}

impl ParsedPalette {
    /// Build a LUT of `size` entries, interpolating linearly between
    /// the nodes or as a staircase.
    pub fn to_lut(&self, size: usize, interpolate: bool) -> Lut {
        if interpolate { build_lut_linear_interpolate(&self.nodes, size) }
        else { build_lut_stepped(&self.nodes, size) }
    }
}

/// Problems found while importing palettes.  Apart from
/// [`ImportIssue::RegistryFull`], which ends the import, they do not
/// abort it: the offending row, color map or file is skipped.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ImportIssue {
    #[error("line {line}: cannot parse {text:?}")]
    MalformedRow { line: usize, text: String },
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnMismatch { line: usize, expected: usize, found: usize },
    #[error("palette {palette:?}: {nodes} node(s), at least 2 needed")]
    TooFewNodes { palette: String, nodes: usize },
    #[error("palette {palette:?}: unsupported color space {space:?}")]
    UnsupportedColorSpace { palette: String, space: String },
    #[error("palette {palette:?}: invalid value {value:?} for attribute {attribute:?}")]
    InvalidAttribute { palette: String, attribute: String, value: String },
    #[error("{path}: {message}")]
    UnreadableFile { path: String, message: String },
    #[error("palette {palette:?}: no palette id left")]
    RegistryFull { palette: String },
}

/// Outcome of registering palettes from text or files.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    /// Ids of the registered palettes, in registration order.
    pub ids: Vec<PaletteId>,
    pub issues: Vec<ImportIssue>,
}

impl ImportReport {
    /// Whether everything was imported without issues.
    pub fn is_clean(&self) -> bool { self.issues.is_empty() }

    pub(crate) fn append(&mut self, mut other: ImportReport) {
        self.ids.append(&mut other.ids);
        self.issues.append(&mut other.issues);
    }

    /// Whether registration stopped because the registry ran out of ids.
    pub(crate) fn is_full(&self) -> bool {
        self.issues.iter().any(|i| matches!(i, ImportIssue::RegistryFull { .. }))
    }
}

/// 8-bit channel value of `x` in `[0,1]`, rounded.
fn unit_channel(x: f64) -> u8 { (255. * x).round().clamp(0., 255.) as u8 }

/// Parse a (finite) floating point number, accepting a decimal comma
/// when `decimal_comma` is set.
fn number(s: &str, decimal_comma: bool) -> Option<f64> {
    let x: f64 = if decimal_comma { s.replace(',', ".").parse().ok()? }
                 else { s.parse().ok()? };
    if x.is_finite() { Some(x) } else { None }
}

/// Split a CSV row into numbers.  Tabs and semicolons separate fields
/// first (commas are then decimal commas); otherwise commas separate
/// fields, unless the comma separated fields contain blanks, in which
/// case fields are separated by whitespace and commas are decimal.
fn split_row(line: &str) -> Option<Vec<f64>> {
    let fields = |sep: &dyn Fn(char) -> bool, decimal_comma: bool| {
        line.split(sep).map(str::trim).filter(|f| !f.is_empty())
            .map(|f| number(f, decimal_comma)).collect::<Option<Vec<_>>>()
    };
    if line.contains(['\t', ';']) {
        fields(&|c| c == '\t' || c == ';', true)
    } else if line.contains(',')
        && line.split(',').all(|f| !f.trim().contains(char::is_whitespace)) {
        fields(&|c| c == ',', false)
    } else {
        fields(&char::is_whitespace, true)
    }
}

/// Parse a CSV palette named `name`.  Returns `None` (and a
/// [`ImportIssue::TooFewNodes`] issue) when fewer than 2 rows are
/// usable.
pub fn parse_csv(text: &str, name: &str) -> (Option<ParsedPalette>, Vec<ImportIssue>) {
    let mut issues = Vec::new();
    let mut rows = Vec::new(); // (line number, values)
    for (i, line) in text.lines().enumerate() {
        let l = line.trim();
        if l.is_empty() || l.starts_with('#') { continue }
        match split_row(l) {
            Some(v) => rows.push((i + 1, v)),
            None => {
                warn!("{}: skipping line {}: {:?}", name, i + 1, l);
                issues.push(ImportIssue::MalformedRow { line: i + 1,
                                                        text: l.to_string() })
            }
        }
    }
    // The last well formed row gives the layout.
    let columns = rows.iter().rev().map(|(_, v)| v.len())
        .find(|&n| n == 3 || n == 4).unwrap_or(3);
    rows.retain(|(line, v)| {
        if v.len() == columns { return true }
        warn!("{}: skipping line {}: {} columns", name, line, v.len());
        issues.push(ImportIssue::ColumnMismatch { line: *line, expected: columns,
                                                  found: v.len() });
        false
    });
    if rows.len() < 2 {
        warn!("{}: only {} usable row(s)", name, rows.len());
        issues.push(ImportIssue::TooFewNodes { palette: name.to_string(),
                                               nodes: rows.len() });
        return (None, issues)
    }
    let c0 = columns - 3;
    let rgb255 = rows.iter().any(|(_, v)| v[c0 ..].iter().any(|&x| x > 1.));
    let scale = if rgb255 { 1. } else { 255. };
    let ch = |x: f64| (x * scale).round().clamp(0., 255.) as u8;
    let mut nodes: PaletteList = rows.iter().enumerate().map(|(i, (_, v))| {
        let pos = if columns == 4 { v[0] } else { i as f64 };
        (pos, rgb(ch(v[c0]), ch(v[c0 + 1]), ch(v[c0 + 2])))
    }).collect();
    nodes.sort();
    (Some(ParsedPalette { name: name.to_string(), nodes }), issues)
}

/// A color map being read.
struct Partial {
    name: String,
    rgb: bool,
    nodes: PaletteList,
}

fn attr_number(e: &BytesStart, key: &[u8], palette: &str,
               issues: &mut Vec<ImportIssue>) -> f64 {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            let value = String::from_utf8_lossy(&attr.value);
            return number(value.trim(), true).unwrap_or_else(|| {
                issues.push(ImportIssue::InvalidAttribute {
                    palette: palette.to_string(),
                    attribute: String::from_utf8_lossy(key).into(),
                    value: value.to_string() });
                0.
            })
        }
    }
    0.
}

fn color_map_start(e: &BytesStart, number: usize,
                   issues: &mut Vec<ImportIssue>) -> Partial {
    let mut name = format!("palette {}", number);
    let mut space = String::from("RGB");
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"name" => name = String::from_utf8_lossy(&attr.value).into(),
            b"space" => space = String::from_utf8_lossy(&attr.value).into(),
            _ => {}
        }
    }
    let rgb = space.trim().eq_ignore_ascii_case("RGB");
    if !rgb {
        warn!("color map {:?}: unsupported color space {:?}", name, space);
        issues.push(ImportIssue::UnsupportedColorSpace { palette: name.clone(),
                                                         space });
    }
    Partial { name, rgb, nodes: PaletteList::new() }
}

fn color_map_end(map: Partial, maps: &mut Vec<ParsedPalette>,
                 issues: &mut Vec<ImportIssue>) {
    if !map.rgb { return }
    if map.nodes.len() < 2 {
        warn!("color map {:?}: {} point(s), skipped", map.name, map.nodes.len());
        issues.push(ImportIssue::TooFewNodes { palette: map.name,
                                               nodes: map.nodes.len() });
        return
    }
    maps.push(ParsedPalette { name: map.name, nodes: map.nodes.sorted() })
}

/// Parse every `ColorMap` element of an XML document.  Color maps
/// with a color space other than RGB or fewer than 2 points are
/// skipped with an issue.  Malformed XML is an error.
///
/// The `k`-th color map of the document (counting from 0) is named
/// `"palette {first_number + k}"` when it has no `name` attribute.
pub fn parse_xml(text: &str, first_number: usize)
                 -> PaletteResult<(Vec<ParsedPalette>, Vec<ImportIssue>)> {
    let mut xml = Reader::from_reader(text.as_bytes());
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut maps = Vec::new();
    let mut issues = Vec::new();
    let mut seen = 0;
    let mut current: Option<Partial> = None;
    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"ColorMap" => {
                if let Some(map) = current.take() {
                    color_map_end(map, &mut maps, &mut issues)
                }
                current = Some(color_map_start(e, first_number + seen, &mut issues));
                seen += 1;
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"ColorMap" => {
                let map = color_map_start(e, first_number + seen, &mut issues);
                seen += 1;
                color_map_end(map, &mut maps, &mut issues)
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.name().as_ref() == b"Point" => {
                    if let Some(map) = current.as_mut() {
                        let p = &map.name;
                        let x = attr_number(e, b"x", p, &mut issues);
                        let r = attr_number(e, b"r", p, &mut issues);
                        let g = attr_number(e, b"g", p, &mut issues);
                        let b = attr_number(e, b"b", p, &mut issues);
                        map.nodes.push(x, rgb(unit_channel(r), unit_channel(g),
                                              unit_channel(b)));
                    }
                }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"ColorMap" => {
                if let Some(map) = current.take() {
                    color_map_end(map, &mut maps, &mut issues)
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(PaletteError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    if let Some(map) = current.take() {
        color_map_end(map, &mut maps, &mut issues)
    }
    Ok((maps, issues))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::RGBA8;

    const BLACK: RGBA8 = rgb(0, 0, 0);
    const RED: RGBA8 = rgb(255, 0, 0);

    fn colors(p: &ParsedPalette) -> Vec<RGBA8> { p.nodes.colors().collect() }

    #[test]
    fn format_from_path() {
        assert_eq!(PaletteFormat::from_path("a/b.XML"), PaletteFormat::Xml);
        assert_eq!(PaletteFormat::from_path("b.pal"), PaletteFormat::Csv);
        assert_eq!(PaletteFormat::from_path("noext"), PaletteFormat::Csv);
    }

    #[test]
    fn csv_black_to_red() {
        let (p, issues) = parse_csv("0,0,0\n255,0,0", "br");
        let p = p.unwrap();
        assert!(issues.is_empty());
        assert_eq!(colors(&p), [BLACK, RED]);
        let lut = p.to_lut(256, true);
        assert_eq!((lut[0], lut[255]), (BLACK, RED));
    }

    #[test]
    fn csv_unit_range_and_positions() {
        let text = "# pos r g b\n0.0 0 0 0\n\n0.5\t1\t0\t0\n1.0 0 0 1\n";
        let (p, issues) = parse_csv(text, "u");
        let p = p.unwrap();
        assert!(issues.is_empty(), "{:?}", issues);
        let pos: Vec<f64> = p.nodes.iter().map(|n| n.position).collect();
        assert_eq!(pos, [0., 0.5, 1.]);
        assert_eq!(colors(&p), [BLACK, RED, rgb(0, 0, 255)]);
    }

    #[test]
    fn csv_decimal_commas() {
        let (p, _) = parse_csv("0,5;1;0;0\n0;0;0;0\n", "dc");
        let p = p.unwrap();
        assert_eq!(p.nodes.as_slice()[1].position, 0.5);
        assert_eq!(colors(&p), [BLACK, RED]);
        let (p, _) = parse_csv("0,25 0,5 0 0\n1 1 1 1\n", "ws");
        let n = p.unwrap().nodes.as_slice()[0];
        assert_eq!((n.position, n.color.r), (0.25, 128));
    }

    #[test]
    fn csv_bad_rows_are_reported() {
        let text = "0,0,0\nfoo,bar\n1,2\n255,255,255\n";
        let (p, issues) = parse_csv(text, "bad");
        assert_eq!(p.unwrap().nodes.len(), 2);
        assert_eq!(issues, [
            ImportIssue::MalformedRow { line: 2, text: "foo,bar".into() },
            ImportIssue::ColumnMismatch { line: 3, expected: 3, found: 2 }]);
    }

    #[test]
    fn csv_too_few_rows() {
        let (p, issues) = parse_csv("# nothing\n1,0,0\n", "one");
        assert!(p.is_none());
        assert_eq!(issues, [ImportIssue::TooFewNodes { palette: "one".into(),
                                                       nodes: 1 }]);
        assert!(parse_csv("", "empty").0.is_none());
    }

    #[test]
    fn csv_rows_are_sorted() {
        let (p, _) = parse_csv("1 255 0 0\n0 0 0 0\n", "s");
        assert_eq!(colors(&p.unwrap()), [BLACK, RED]);
    }

    #[test]
    fn xml_color_maps() {
        let text = r#"<?xml version="1.0"?>
            <ColorMaps>
              <ColorMap name="fire" space="rgb">
                <Point x="1" r="1" g="0" b="0"/>
                <Point x="0" r="0" g="0" b="0"/>
              </ColorMap>
              <Group>
                <ColorMap space="RGB">
                  <Point x="0" r="0,5" g="0" b="0"></Point>
                  <Point x="1" b="1"/>
                </ColorMap>
              </Group>
              <ColorMap name="lab" space="Lab">
                <Point x="0"/><Point x="1"/>
              </ColorMap>
              <ColorMap name="lonely"><Point x="0"/></ColorMap>
              <ColorMap name="void"/>
            </ColorMaps>"#;
        let (maps, issues) = parse_xml(text, 1).unwrap();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].name, "fire");
        assert_eq!(colors(&maps[0]), [BLACK, RED]);
        assert_eq!(maps[1].name, "palette 2");
        assert_eq!(colors(&maps[1]), [rgb(128, 0, 0), rgb(0, 0, 255)]);
        assert_eq!(issues, [
            ImportIssue::UnsupportedColorSpace { palette: "lab".into(),
                                                 space: "Lab".into() },
            ImportIssue::TooFewNodes { palette: "lonely".into(), nodes: 1 },
            ImportIssue::TooFewNodes { palette: "void".into(), nodes: 0 }]);
    }

    #[test]
    fn xml_invalid_attribute() {
        let text = r#"<ColorMap name="m"><Point x="zero"/><Point x="1" r="1"/></ColorMap>"#;
        let (maps, issues) = parse_xml(text, 1).unwrap();
        assert_eq!(maps.len(), 1);
        assert_eq!(issues, [ImportIssue::InvalidAttribute {
            palette: "m".into(), attribute: "x".into(), value: "zero".into() }]);
    }

    #[test]
    fn xml_malformed() {
        let r = parse_xml("<ColorMap><Point x=\"0\"></ColorMap>", 1);
        assert!(matches!(r, Err(PaletteError::Xml(_))));
    }

    #[test]
    fn xml_and_csv_agree() {
        let xml = r#"<ColorMap name="c">
                       <Point x="0" r="0.5" g="0.999" b="0.2"/>
                       <Point x="1" r="1" g="1" b="1"/>
                     </ColorMap>"#;
        let (maps, _) = parse_xml(xml, 1).unwrap();
        let (p, _) = parse_csv("0 0.5 0.999 0.2\n1 1 1 1\n", "c");
        let p = p.unwrap();
        assert_eq!(colors(&maps[0]), colors(&p));
        assert_eq!(colors(&p)[0], rgb(128, 255, 51));
    }

    #[test]
    fn xml_unnamed_maps_are_numbered_from_first_number() {
        let text = "<M><ColorMap><Point x=\"0\"/><Point x=\"1\"/></ColorMap>\
                    <ColorMap><Point x=\"0\"/><Point x=\"1\"/></ColorMap></M>";
        let (maps, _) = parse_xml(text, 40).unwrap();
        let names: Vec<&str> = maps.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["palette 40", "palette 41"]);
    }
}
