// Regenerate ../src/palettes.rs (run from the tools/ directory) from
// - rgb.txt: the xkcd color survey, https://xkcd.com/color/rgb.txt
// - w3c.txt: the CSS extended color keywords,
// - curated.hjson: the built-in palettes.

use std::{collections::BTreeMap,
          env,
          fs::{self, File},
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value;

type Err = Box<dyn Error>;

fn error<T>(msg: String) -> Result<T, Err> {
    Err(format!("palette-brewery-tools: {msg}").into())
}

/// Convert colors such as "#4c72b0" to `[0x4c, 0x72, 0xb0]`.
fn parse_hex(s: &str) -> Result<[u8; 3], Err> {
    let hex = match s.trim().strip_prefix('#') {
        Some(h) if h.len() == 6 && h.is_ascii() => h,
        _ => return error(format!("not a color “{s}”")),
    };
    let c = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16);
    Ok([c(0)?, c(2)?, c(4)?])
}

/// Read lines "name  #rrggbb", skipping empty lines and comments.
fn read_names(path: &str) -> Result<Vec<(String, [u8; 3])>, Err> {
    let mut colors = vec![];
    for line in fs::read_to_string(path)?.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue }
        match line.rsplit_once(char::is_whitespace) {
            Some((name, hex)) => colors.push((name.trim().to_string(),
                                              parse_hex(hex)?)),
            None => return error(format!("{path}: bad line “{line}”")),
        }
    }
    Ok(colors)
}

#[derive(Debug)]
struct Curated {
    typ: &'static str,
    rgb: Vec<[u8; 3]>,
}

type CuratedMap = BTreeMap<String, Curated>;

fn read_curated(path: &str) -> Result<CuratedMap, Err> {
    let json: Value = serde_hjson::from_reader(File::open(path)?)?;
    let Value::Object(m) = json else {
        return error(format!("{path}: not an object"))
    };
    let mut map = CuratedMap::new();
    for (name, p) in m.into_iter() {
        let Value::Object(p) = p else {
            return error(format!("{name}: not an object"))
        };
        let typ = match p.get("type") {
            Some(Value::String(t)) if t == "qual" => "Qual",
            Some(Value::String(t)) if t == "seq" => "Seq",
            Some(Value::String(t)) if t == "div" => "Div",
            t => return error(format!("{name}: bad type {t:?}")),
        };
        let rgb = match p.get("colors") {
            Some(Value::Array(a)) => a.iter().map(|v| match v {
                Value::String(c) => parse_hex(c),
                _ => error(format!("{name}: {v:?} is not a color")),
            }).collect::<Result<Vec<_>, _>>()?,
            _ => return error(format!("{name}: no colors")),
        };
        if rgb.len() < 2 {
            return error(format!("{name}: less than 2 colors"))
        }
        map.insert(name, Curated { typ, rgb });
    }
    Ok(map)
}

fn write_names(fh: &mut impl Write, var: &str, comment: &str,
               colors: &[(String, [u8; 3])]) -> Result<(), Err> {
    writeln!(fh, "\n// {comment}\n\
                  // Number of colors: {n}\n\
                  pub(crate) static {var}: [(&str, [u8; 3]); {n}] = [",
             n = colors.len())?;
    for (name, [r, g, b]) in colors {
        writeln!(fh, "    ({name:?}, [{r:#04x}, {g:#04x}, {b:#04x}]),")?;
    }
    writeln!(fh, "];")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let xkcd = read_names("rgb.txt")?;
    let css = read_names("w3c.txt")?;
    let curated = read_curated("curated.hjson")?;

    let mut fh = BufWriter::new(File::create("../src/palettes.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  pub(crate) mod ty;\n\
                  use ty::*;",
             env::args().next().unwrap_or_default())?;

    write_names(&mut fh, "XKCD",
                "xkcd color survey — https://xkcd.com/color/rgb/", &xkcd)?;
    write_names(&mut fh, "CSS",
                "W3C extended color keywords — https://www.w3.org/TR/css3-color/",
                &css)?;

    writeln!(fh, "\n// Curated palettes\n\
                  // Number of palettes: {n}\n\
                  pub(crate) static CURATED: [CuratedData; {n}] = [",
             n = curated.len())?;
    for (name, p) in &curated {
        write!(fh, "    CuratedData {{\n        \
                    name: {name:?},\n        \
                    typ: PaletteType::{},\n        \
                    rgb: &[", p.typ)?;
        for (i, [r, g, b]) in p.rgb.iter().enumerate() {
            if i > 0 { write!(fh, ", ")? }
            write!(fh, "[{r:#04x}, {g:#04x}, {b:#04x}]")?;
        }
        writeln!(fh, "],\n    }},")?;
    }
    writeln!(fh, "];")?;
    Ok(())
}
