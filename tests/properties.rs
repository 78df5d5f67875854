use pretty_assertions::assert_eq;
use palette_brewery::{self as pb, space, named, Center, Color, ColorRange,
                      Error, HueSpace, InputSpace, PaletteContext,
                      PaletteName, PaletteRequest, PaletteSpec, RampEnd};

fn close(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

fn rgb_grid(k: usize) -> impl Iterator<Item = Color> {
    let x = move |i: usize| i as f64 / (k - 1) as f64;
    (0 .. k * k * k).map(move |i| {
        Color::new(x(i % k), x(i / k % k), x(i / (k * k))).unwrap()
    })
}

#[test]
fn color_space_round_trips() {
    for c in rgb_grid(11) {
        let hls = space::rgb_to_hls(c);
        let back = space::hls_to_rgb(hls.h, hls.l, hls.s).unwrap();
        let husl = space::rgb_to_husl(c);
        let back_husl = space::husl_to_rgb(husl.h, husl.s, husl.l);
        for (x, y, z) in [(c.r(), back.r(), back_husl.r()),
                          (c.g(), back.g(), back_husl.g()),
                          (c.b(), back.b(), back_husl.b())] {
            assert!(close(x, y, 1e-6), "HLS {c:?} → {hls:?} → {back:?}");
            assert!(close(x, z, 1e-6), "HUSL {c:?} → {husl:?} → {back_husl:?}");
        }
    }
}

#[test]
fn every_family_has_the_requested_length() {
    let names = ["deep", "colorblind6", "Set3", "tab10", "Blues", "RdBu",
                 "hls", "husl", "ch:", "ch:s=2,r=-1,g=.7_r", "light:navy",
                 "dark:xkcd:rust", "blend:red,white", "pastel_d", "Paired_r"];
    for n in [0, 1, 2, 3, 7, 16, 40] {
        for name in names {
            let p: PaletteName = name.parse().unwrap();
            assert_eq!(p.palette(n).unwrap().len(), n, "{name}");
        }
        assert_eq!(pb::circular_palette(HueSpace::Husl, n, 0.5, 0.5).unwrap().len(), n);
        assert_eq!(pb::cubehelix_ramp(n, 0., 0.4, 1., 0.15, 0.85, true).unwrap().len(), n);
        assert_eq!(pb::sequential_ramp([0.3, 0.5, 0.1], InputSpace::Rgb,
                                       RampEnd::Dark, n, false).unwrap().len(), n);
        assert_eq!(pb::diverging_palette(10., 200., n, 90., 60., 5., Center::Dark)
                   .unwrap().len(), n);
    }
}

#[test]
fn curated_sets_cycle() {
    for (name, typ) in pb::curated_names() {
        if typ != pb::PaletteType::Qual { continue }
        let p = pb::curated(name, 40).unwrap();
        // Size of the set: the first color comes back.
        let k = (1 .. 40).find(|&k| p[k] == p[0]).unwrap();
        assert!(k >= PaletteName::Curated(name).default_len(), "{name}");
        let base = pb::curated(name, k).unwrap();
        for i in 0 .. p.len() { assert_eq!(p[i], base[i % k], "{name}[{i}]"); }
    }
}

#[test]
fn sequential_reverse_symmetry() {
    for space in [InputSpace::Rgb, InputSpace::Hls, InputSpace::Husl] {
        let seed = match space {
            InputSpace::Rgb => [0.8, 0.3, 0.1],
            InputSpace::Hls => [200., 0.4, 0.7],
            InputSpace::Husl => [130., 90., 45.],
        };
        for n in [1, 4, 9] {
            let fwd = pb::sequential_ramp(seed, space, RampEnd::Light, n, false).unwrap();
            let bwd = pb::sequential_ramp(seed, space, RampEnd::Light, n, true).unwrap();
            assert_eq!(bwd, fwd.reversed());
        }
    }
}

#[test]
fn diverging_symmetry() {
    for n in [2, 5, 8, 11] {
        let a = pb::diverging_palette(220., 20., n, 75., 50., 1., Center::Light).unwrap();
        let b = pb::diverging_palette(20., 220., n, 75., 50., 1., Center::Light).unwrap();
        assert_eq!(a[0], b[n - 1]);
        assert_eq!(a, b.reversed());
    }
}

#[test]
fn cubehelix_lightness_is_monotonic() {
    for (start, rot, gamma) in [(0., 0.4, 1.), (2.5, -1.5, 0.6), (1., 3., 1.4),
                                (0.5, -0.75, 1.), (3., 1., 0.8)] {
        let ch = pb::Cubehelix::default().start(start).rot(rot).gamma(gamma);
        let p = pb::cubehelix_ramp(40, start, rot, gamma, 0.15, 0.85, false).unwrap();
        for i in 1 .. p.len() {
            assert!(p[i - 1].luma() <= p[i].luma() + 1e-12,
                    "start = {start}, rot = {rot}, gamma = {gamma}, i = {i}");
        }
        assert_eq!(p[0], ch.at(0.15));
        assert_eq!(p[39], ch.at(0.85));
        let r = pb::cubehelix_ramp(40, start, rot, gamma, 0.15, 0.85, true).unwrap();
        assert_eq!(r, p.reversed());
    }
}

#[test]
fn scenario_hls_three_hues() {
    let p = pb::circular_palette(HueSpace::Hls, 3, 0.5, 0.7).unwrap();
    assert_eq!(p.as_hex(), vec!["#d92626", "#26d926", "#2626d9"]);
    for (c, h) in p.iter().zip([0., 120., 240.]) {
        let hls = c.to_hls();
        assert!(close(hls.h, h, 1e-9) && close(hls.l, 0.5, 1e-12)
                && close(hls.s, 0.7, 1e-12), "{hls:?}");
    }
}

#[test]
fn scenario_pale_red() {
    let c = named::resolve("pale red").unwrap();
    assert_eq!(c.to_array(), [217. / 255., 84. / 255., 77. / 255.]);
    assert_eq!(named::resolve("PALE RED"), Ok(c));
    assert_eq!(named::resolve("palered"), Err(Error::UnknownColorName("palered".into())));
}

#[test]
fn scenario_diverging_seven() {
    let p = pb::diverging_palette(220., 20., 7, 75., 50., 1., Center::Light).unwrap();
    assert_eq!(p.len(), 7);
    assert!(p[3].to_hls().s < 1e-12);
    let q = pb::diverging_palette(20., 220., 7, 75., 50., 1., Center::Light).unwrap();
    for i in 0 .. 7 { assert_eq!(p[i], q[6 - i]); }
}

#[test]
fn reversal_suffix() {
    for name in ["deep", "Greens", "husl", "ch:r=.8", "light:#a3c", "muted6"] {
        let fwd = PaletteRequest::named(name).n_colors(7).build().unwrap();
        let bwd = PaletteRequest::named(format!("{name}_r")).n_colors(7).build().unwrap();
        assert_eq!(bwd.into_palette().unwrap(), fwd.into_palette().unwrap().reversed());
    }
}

#[test]
fn errors() {
    assert!(matches!(Color::new(1.2, 0., 0.), Err(Error::InputValidation(_))));
    assert!(matches!("lab".parse::<InputSpace>(), Err(Error::InputValidation(_))));
    assert!(matches!(PaletteRequest::named("deep").n_colors(-3).build(),
                     Err(Error::InputValidation(_))));
    assert_eq!(pb::curated("Spectral", 3), Err(Error::UnknownPaletteName("Spectral".into())));
    assert!(matches!(pb::named_list_palette(&["not a color"]),
                     Err(Error::UnknownColorName(_))));
}

#[test]
fn scoped_default_palette() {
    let mut ctx = PaletteContext::new();
    let current = PaletteRequest::new(PaletteSpec::Current).n_colors(3);
    let before = ctx.color_palette(&current).unwrap();
    let husl = pb::CircularPalette::husl().palette(5);
    let inside = ctx.with_palette(husl.clone(), |ctx| ctx.color_palette(&current)).unwrap();
    assert_eq!(inside.into_palette().unwrap().colors(), &husl.colors()[.. 3]);
    assert_eq!(ctx.color_palette(&current).unwrap(), before);
}
