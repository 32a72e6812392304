//! Parse-back property tests over the emitted SVG.
//!
//! Everything here re-reads the document with an XML parser rather than
//! string-matching, so the assertions hold against the actual markup
//! structure the synthesizer guarantees.

use std::collections::HashSet;

use rand::Rng;
use svgrad::params::{color_to_param, param_to_color};
use svgrad::{synthesize, GradientOptions, Palette, REPETITIONS};

fn parse(svg: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(svg).expect("emitted markup must parse")
}

/// Pull the numeric arguments out of one `name(a b ...)` segment of a
/// transform attribute.
fn transform_args(transform: &str, name: &str, nth: usize) -> Vec<f64> {
    let mut found = 0;
    let mut rest = transform;
    while let Some(start) = rest.find(name) {
        let after = &rest[start + name.len()..];
        if after.starts_with('(') {
            if found == nth {
                let end = after.find(')').expect("unclosed transform segment");
                return after[1..end]
                    .split_whitespace()
                    .map(|t| t.parse().expect("numeric transform argument"))
                    .collect();
            }
            found += 1;
        }
        rest = &rest[start + name.len()..];
    }
    panic!("transform segment {name}#{nth} not found in {transform:?}");
}

#[test]
fn layer_counts_match_palette_size() {
    let palette = Palette::new(vec!["#112233".into(), "#445566".into(), "tomato".into()]).unwrap();
    let svg = synthesize(&palette, &GradientOptions::default());
    let doc = parse(&svg);

    let gradients = doc
        .descendants()
        .filter(|n| n.has_tag_name("radialGradient"))
        .count();
    assert_eq!(gradients, REPETITIONS * 3);

    let layer_rects = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect") && n.attribute("class").is_some())
        .count();
    assert_eq!(layer_rects, REPETITIONS * 3);

    // clip rect + background are the only other rects
    let all_rects = doc.descendants().filter(|n| n.has_tag_name("rect")).count();
    assert_eq!(all_rects, REPETITIONS * 3 + 2);
}

#[test]
fn each_gradient_id_defined_once_per_repetition() {
    let palette = Palette::new(vec!["#112233".into(), "#445566".into()]).unwrap();
    let svg = synthesize(&palette, &GradientOptions::default());
    let doc = parse(&svg);

    for i in 0..2 {
        let id = format!("rg{i}");
        let defs = doc
            .descendants()
            .filter(|n| n.has_tag_name("radialGradient") && n.attribute("id") == Some(id.as_str()))
            .count();
        // duplicate ids are tolerated by renderers; url(#rg{i}) resolves to
        // the first definition in document order
        assert_eq!(defs, REPETITIONS, "{id}");
    }
}

#[test]
fn stylesheet_binds_background_and_classes() {
    let palette = Palette::new(vec!["#112233".into(), "#445566".into()]).unwrap();
    let svg = synthesize(&palette, &GradientOptions::default());
    let doc = parse(&svg);

    let style = doc
        .descendants()
        .find(|n| n.has_tag_name("style"))
        .and_then(|n| n.text())
        .expect("style element");
    assert!(style.contains("#bg {fill:#112233}"));
    assert!(style.contains(".rect0 {fill:url(#rg0)}"));
    assert!(style.contains(".rect1 {fill:url(#rg1)}"));
    assert!(!style.contains(".rect2"));
}

#[test]
fn gradient_stops_fade_to_transparent() {
    let palette = Palette::new(vec!["#ABCDEF".into()]).unwrap();
    let svg = synthesize(&palette, &GradientOptions::default());
    let doc = parse(&svg);

    for gradient in doc.descendants().filter(|n| n.has_tag_name("radialGradient")) {
        let stops: Vec<_> = gradient.children().filter(|n| n.has_tag_name("stop")).collect();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].attribute("offset"), Some("0%"));
        assert_eq!(stops[0].attribute("stop-color"), Some("#ABCDEF"));
        assert_eq!(stops[0].attribute("stop-opacity"), None);
        assert_eq!(stops[1].attribute("offset"), Some("100%"));
        assert_eq!(stops[1].attribute("stop-color"), Some("#ABCDEF"));
        assert_eq!(stops[1].attribute("stop-opacity"), Some("0"));
    }
}

#[test]
fn consecutive_calls_differ() {
    let palette = Palette::default();
    let opts = GradientOptions::default();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        assert!(seen.insert(synthesize(&palette, &opts)), "duplicate output");
    }
}

#[test]
fn random_draws_stay_in_range() {
    let palette = Palette::new(vec!["#101010".into(), "#202020".into()]).unwrap();
    let opts = GradientOptions::default();
    for _ in 0..50 {
        let svg = synthesize(&palette, &opts);
        let doc = parse(&svg);

        for gradient in doc.descendants().filter(|n| n.has_tag_name("radialGradient")) {
            let fx: f64 = gradient.attribute("fx").unwrap().parse().unwrap();
            assert!((0.0..0.5).contains(&fx), "fx out of range: {fx}");
            assert_eq!(gradient.attribute("fy"), Some("0.5"));
        }

        for rect in doc
            .descendants()
            .filter(|n| n.has_tag_name("rect") && n.attribute("class").is_some())
        {
            let transform = rect.attribute("transform").unwrap();
            let scale = transform_args(transform, "scale", 0);
            assert!((0.7..=1.5).contains(&scale[0]), "sx out of range");
            assert!((0.7..=1.5).contains(&scale[1]), "sy out of range");
            let skew = transform_args(transform, "skewX", 0);
            assert!((-10.0..=10.0).contains(&skew[0]), "skew out of range");
            // draws are in [0,360) but the two-decimal formatting can round
            // the top of the range up to 360.00
            let rot = transform_args(transform, "rotate", 0);
            assert!((0.0..=360.0).contains(&rot[0]), "rotation out of range");
            // the middle translate carries the random drift; first and last
            // recenter around the canvas center
            let drift = transform_args(transform, "translate", 1);
            assert!((-200.0..=200.0).contains(&drift[0]), "tx out of range");
            assert!((-200.0..=200.0).contains(&drift[1]), "ty out of range");
            assert_eq!(transform_args(transform, "translate", 0), [300.0, 200.0]);
            assert_eq!(transform_args(transform, "translate", 2), [-300.0, -200.0]);
        }
    }
}

#[test]
fn round_trip_scenario() {
    let palette = Palette::new(vec!["#112233".into(), "#445566".into()]).unwrap();
    let opts = GradientOptions {
        width: 800.0,
        height: 200.0,
        ..Default::default()
    };
    let svg = synthesize(&palette, &opts);
    let doc = parse(&svg);

    let root = doc.root_element();
    assert_eq!(root.attribute("viewBox"), Some("0 0 800 200"));
    assert_eq!(root.attribute("width"), Some("800"));
    assert_eq!(root.attribute("height"), Some("200"));

    let gradients = doc
        .descendants()
        .filter(|n| n.has_tag_name("radialGradient"))
        .count();
    assert_eq!(gradients, 6);
    let layer_rects = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect") && n.attribute("class").is_some())
        .count();
    assert_eq!(layer_rects, 6);

    let style = doc
        .descendants()
        .find(|n| n.has_tag_name("style"))
        .and_then(|n| n.text())
        .unwrap();
    assert!(style.contains("#bg {fill:#112233}"));
}

#[test]
fn token_codec_round_trips_hex_colors() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let color = format!("#{:06X}", rng.random_range(0u32..0x1000000));
        assert_eq!(param_to_color(&color_to_param(&color)), color);
        let lower = color.to_lowercase();
        assert_eq!(param_to_color(&color_to_param(&lower)), lower);
    }
}
