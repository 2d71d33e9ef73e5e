use tweenkit_value::{
    make_color_interpolator, make_interpolator, parse_border_radius, parse_color, parse_rotation,
    parse_translation, split_magnitude, Corner, InterpolateOptions, Magnitude, Rgba, ValueError,
};

fn byte_opts() -> InterpolateOptions {
    InterpolateOptions::rounded(0).with_min(0.0).with_max(255.0)
}

#[test]
fn channel_interpolation_hits_both_endpoints() {
    for (start, end) in [(0.0, 255.0), (255.0, 0.0), (17.0, 200.0), (90.0, 90.0)] {
        let i = make_interpolator(start, end, byte_opts());
        assert_eq!(i.sample(0.0), start, "start {start}->{end}");
        assert_eq!(i.sample(1.0), end, "end {start}->{end}");
    }
}

#[test]
fn unbounded_interpolation_extrapolates() {
    let i = make_interpolator(0.0, 10.0, InterpolateOptions::default());
    assert_eq!(i.sample(1.5), 15.0);
    assert_eq!(i.sample(-1.0), -10.0);
}

#[test]
fn magnitude_text_is_stable_across_units() {
    let units = [
        "px", "%", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "in", "pt",
        "pc", "deg", "rad", "grad", "turn",
    ];
    for unit in units {
        for value in [0.0, 1.0, -3.5, 1234.125] {
            let m = Magnitude::new(value, Some(unit));
            assert_eq!(split_magnitude(&m.to_string()).unwrap(), m, "{m}");
        }
    }
}

#[test]
fn color_parse_and_midpoint() {
    assert_eq!(parse_color("#ff0000").unwrap(), Rgba::new(255, 0, 0, 255));
    let mid = make_color_interpolator("#000000", "#ffffff").unwrap();
    assert_eq!(mid.sample_css(0.5), "rgba(128,128,128,255)");
}

#[test]
fn border_radius_two_value_expansion() {
    let r = parse_border_radius("10px 20px").unwrap();
    let ten = Corner::circular(Magnitude::new(10.0, Some("px")));
    let twenty = Corner::circular(Magnitude::new(20.0, Some("px")));
    assert_eq!(r.top_left, ten);
    assert_eq!(r.bottom_right, ten);
    assert_eq!(r.top_right, twenty);
    assert_eq!(r.bottom_left, twenty);
}

#[test]
fn named_axis_rotation() {
    let r = parse_rotation("x 45deg").unwrap();
    assert_eq!(r.axis, [1.0, 0.0, 0.0]);
    assert_eq!(r.angle, Magnitude::new(45.0, Some("deg")));
}

#[test]
fn composite_errors_are_typed() {
    assert!(matches!(
        parse_rotation("10deg 20deg 30deg"),
        Err(ValueError::UnsupportedSyntax { property: "rotate", .. })
    ));
    assert!(matches!(
        parse_translation("1px 2.2.2px"),
        Err(ValueError::MalformedValue { .. })
    ));
    assert!(matches!(
        parse_color("hsl(1,2%,3%)"),
        Err(ValueError::UnsupportedColorSyntax { .. })
    ));
}

#[test]
fn values_serialize_to_json() {
    let r = parse_rotation("y 10deg").unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "axis": [0.0, 1.0, 0.0], "angle": { "value": 10.0, "unit": "deg" } })
    );
    let back: tweenkit_value::Rotation = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
