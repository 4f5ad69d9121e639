use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use lut_brewery::{PaletteRegistry, RGBA8, to_gray};

type Err = Box<dyn Error>;

fn css_string(c: RGBA8) -> String {
    format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, c.a as f64 / 255.)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGBA8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(to_gray(c)))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Renders every palette of the global registry (plus the palette
/// files of the directories given on the command line) to
/// `palettes.html`.
fn main() -> Result<(), Err> {
    let reg = PaletteRegistry::global();
    for dir in env::args().skip(1) {
        let report = reg.register_from_dir(&dir, true)?;
        for issue in &report.issues {
            eprintln!("{}: {}", dir, issue);
        }
    }
    let mut fh = BufWriter::new(File::create("palettes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>lut-brewery: {} palettes</title>\n\
                  </head>\n\
                  <body style=\"background-color: #f0f0f0\">",
             reg.len())?;
    for id in reg.ids() {
        let Some(e) = reg.entry(id) else { continue };
        let width = if e.lut.len() <= 32 { 40 } else { 1 };
        let comment = format!("{} <code>{}</code> (id {}, {} colors)",
                              e.human_name, e.name, id, e.lut.len());
        table_of_colors(&mut fh, &e.lut, width, &comment)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
