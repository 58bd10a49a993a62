use assertables::{assert_contains, assert_not_contains};
use svgpoly::{polyline_commands, transform_str_default, PathCommand, Point};

#[test]
fn test_polyline_simple() {
    let input = r#"<polyline points="0,0 10,0 10,10"/>"#;
    let expected = r#"<path d="M 0 0 L 10 0 L 10 10"/>"#;
    assert_eq!(transform_str_default(input).unwrap(), expected);
}

#[test]
fn test_polyline_space_separated() {
    let input = r#"<polyline points="0 0 10 0 10 10 0 10"/>"#;
    let expected = r#"<path d="M 0 0 L 10 0 L 10 10 L 0 10"/>"#;
    assert_eq!(transform_str_default(input).unwrap(), expected);

    let cmds = polyline_commands("0 0 10 0 10 10 0 10").unwrap();
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0., 0.)));
    assert_eq!(cmds[3], PathCommand::LineTo(Point::new(0., 10.)));
}

#[test]
fn test_polyline_single_point() {
    let input = r#"<polyline points="5,5"/>"#;
    assert_eq!(transform_str_default(input).unwrap(), r#"<path d=""/>"#);
    assert!(polyline_commands("5,5").unwrap().is_empty());
}

#[test]
fn test_polyline_no_points() {
    let input = r#"<polyline class="thin"/>"#;
    assert_eq!(
        transform_str_default(input).unwrap(),
        r#"<path class="thin" d=""/>"#
    );
}

#[test]
fn test_polyline_attrs_kept() {
    let input = r#"<svg>
  <polyline id="p1" points="1,1 2,3" stroke="red" fill="none"/>
  <rect width="3" height="4"/>
</svg>"#;
    let output = transform_str_default(input).unwrap();
    assert_contains!(
        output,
        r#"<path id="p1" d="M 1 1 L 2 3" stroke="red" fill="none"/>"#
    );
    assert_contains!(output, r#"<rect width="3" height="4"/>"#);
    assert_not_contains!(output, "polyline");
    assert_not_contains!(output, "points=");
}

#[test]
fn test_polyline_units_and_decimals() {
    let input = r#"<polyline points="0,0 1in,0.5 -1.25e1,2pc"/>"#;
    let expected = r#"<path d="M 0 0 L 96 0.5 L -12.5 32"/>"#;
    assert_eq!(transform_str_default(input).unwrap(), expected);
}

#[test]
fn test_polygon_untouched() {
    let input = r#"<polygon points="0,0 1,1 1,0"/>"#;
    assert_eq!(transform_str_default(input).unwrap(), input);
}

#[test]
fn test_passthrough() {
    let input = r#"<svg xmlns="http://www.w3.org/2000/svg">
<!-- a comment -->
<text x="1">a &amp; b</text>
</svg>"#;
    assert_eq!(transform_str_default(input).unwrap(), input);
}
