use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use palette_brewery::{self as pb, ColorRange, RGBColor, Palette,
                      PaletteName, PaletteRequest};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
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
                 css_string(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, p: &Palette, width: u32,
           comment: &str) -> Result<(), Err> {
    table_of_colors(fh, &p.to_rgb::<RGB8>(), width, comment)
}

/// Discrete colors, then the continuous colormap.
fn named(fh: &mut impl Write, name: &str, n: usize) -> Result<(), Err> {
    let p: PaletteName = name.parse()?;
    palette(fh, &p.palette(n)?, 40, &format!("{name} ({n} colors)"))?;
    let cmap = p.colormap()?;
    let colors: Vec<RGB8> = cmap.range(0., 1., 256).map(|(_, c)| c.to_rgb8())
        .collect();
    table_of_colors(fh, &colors, 1, "(continuous)")
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("palettes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Palette_brewery: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Circular palettes</h3>")?;
    for space in [pb::HueSpace::Hls, pb::HueSpace::Husl] {
        for n in [6, 12] {
            let p = pb::circular_palette(space, n, 0.6, 0.65)?;
            palette(&mut fh, &p, 40, &format!("{space:?}, {n} hues"))?;
        }
    }

    writeln!(fh, "<h3>Curated palettes</h3>")?;
    for (name, typ) in pb::curated_names() {
        if typ == pb::PaletteType::Qual {
            let p = pb::curated(name, 10)?;
            palette(&mut fh, &p, 40, &format!("{name} (cycled to 10 colors)"))?;
        }
    }
    let p = pb::named_list_palette(&["windows blue", "amber", "greyish",
                                     "faded green", "dusty purple"])?;
    palette(&mut fh, &p, 40, "xkcd colors")?;

    writeln!(fh, "<h3>Sequential palettes</h3>")?;
    for name in ["Blues", "Greens", "light:seagreen", "dark:xkcd:amber_r",
                 "ch:", "ch:s=-.2,r=.6", "ch:start=2,rot=0,l=.95",
                 "blend:#7AB,#EDA", "muted_d"] {
        named(&mut fh, name, 8)?;
    }

    writeln!(fh, "<h3>Diverging palettes</h3>")?;
    named(&mut fh, "RdBu", 9)?;
    for (h_neg, h_pos, center) in [(220., 20., pb::Center::Light),
                                   (145., 300., pb::Center::Light),
                                   (250., 30., pb::Center::Dark)] {
        let d = pb::Diverging::new(h_neg, h_pos).center(center);
        palette(&mut fh, &d.palette(9), 40,
                &format!("{h_neg}° → {h_pos}°, {center:?} center"))?;
        let colors: Vec<RGB8> = d.range(0., 1., 256).map(|(_, c)| c.to_rgb8())
            .collect();
        table_of_colors(&mut fh, &colors, 1, "(continuous)")?;
    }

    writeln!(fh, "<h3>Requests</h3>")?;
    let req: PaletteRequest = serde_json::from_str(
        r#"{"spec": {"kind": "cubehelix", "start": 0.5, "rot": -0.75},
            "n_colors": 10, "desat": 0.7}"#)?;
    if let Some(p) = req.build()?.into_palette() {
        palette(&mut fh, &p, 40, "cubehelix request, desaturated")?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
