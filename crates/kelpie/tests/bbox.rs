//! Path-level bounding boxes, view-box strings and box fitting.

use kelpie::SvgPath;

#[test]
fn line_bbox() {
    let bbox = SvgPath::parse("M10 10 L20 30").get_bounding_box();
    assert_eq!(bbox.min_x(), Some(10.0));
    assert_eq!(bbox.min_y(), Some(10.0));
    assert_eq!(bbox.width(), 10.0);
    assert_eq!(bbox.height(), 20.0);
}

#[test]
fn horizontal_and_vertical_segments() {
    assert_eq!(
        SvgPath::parse("M0 0H10v5").to_view_box_string(None),
        "0 0 10 5"
    );
}

#[test]
fn quadratic_curves_contribute_extrema() {
    assert_eq!(
        SvgPath::parse("M0 0Q3 0 1 0").to_view_box_string(None),
        "0 0 1.8 0"
    );
}

#[test]
fn cubic_curves_contribute_extrema() {
    assert_eq!(
        SvgPath::parse("M0 0C-70 0 210 0 100 0").to_view_box_string(Some(0)),
        "-11 0 137 0"
    );
}

#[test]
fn smooth_curves_and_arcs_are_normalized_first() {
    // A full circle of radius 75 centred at (100, 100).
    assert_eq!(
        SvgPath::parse("M 100, 100 m -75, 0 a 75,75 0 1,0 150,0 a 75,75 0 1,0 -150,0")
            .to_view_box_string(Some(0)),
        "25 25 150 150"
    );
}

#[test]
fn empty_path_has_empty_view_box() {
    assert_eq!(SvgPath::parse("").to_view_box_string(None), "0 0 0 0");
}

#[test]
fn bounding_box_reflects_pending_transforms_without_consuming_them() {
    let mut path = SvgPath::parse("M0 0L10 10");
    path.scale(2.0, 2.0);

    assert_eq!(path.to_view_box_string(None), "0 0 20 20");
    // The pending transform is still queued on the original path.
    assert_eq!(path.to_string(), "M0 0L20 20");
}

#[test]
fn to_box_scales_into_the_target() {
    assert_eq!(
        SvgPath::parse("M0 0 L10 20").to_box("0 0 100 200").to_string(),
        "M0 0L100 200"
    );
}

#[test]
fn to_box_move_translates_only() {
    assert_eq!(
        SvgPath::parse("M10 10 L20 30").to_box("0 0 10 20 move xMinYMin").to_string(),
        "M0 0L10 20"
    );
}

#[test]
fn to_box_slice_covers_the_target() {
    // Source box 10 × 20; destination 100 × 100 → slice scales by 10.
    assert_eq!(
        SvgPath::parse("M0 0 L10 20")
            .to_box("0 0 100 100 slice xMinYMin")
            .to_string(),
        "M0 0L100 200"
    );
}
