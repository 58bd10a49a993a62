use svgpoly::{transform_str, RenderConfig};

#[test]
fn test_config_drop_degenerate() {
    let cfg = RenderConfig {
        keep_degenerate: false,
        ..Default::default()
    };
    let input = r#"<svg><polyline points="5,5"/><polyline/><polyline points="0 0 1 1"/></svg>"#;
    let expected = r#"<svg><path d="M 0 0 L 1 1"/></svg>"#;
    assert_eq!(transform_str(input, &cfg).unwrap(), expected);
}

#[test]
fn test_config_debug() {
    let cfg = RenderConfig {
        debug: true,
        ..Default::default()
    };
    let input = r#"<polyline id="a" points="0,0 3,4"/>"#;
    let expected = r#"<path id="a" d="M 0 0 L 3 4" data-src-points="0,0 3,4"/>"#;
    assert_eq!(transform_str(input, &cfg).unwrap(), expected);
}
