//! Path scanning: formats, implicit repetition, error taxonomy, recovery.

use kelpie::{ParseError, SvgPath};

fn roundtrip(input: &str) -> String {
    SvgPath::parse(input).to_string()
}

#[test]
fn empty_string() {
    let mut path = SvgPath::parse("");
    assert_eq!(path.to_string(), "");
    assert!(path.last_error().is_none());
}

#[test]
fn line_terminators() {
    assert_eq!(roundtrip("M0\r 0\n\u{1680}l2-3\nz"), "M0 0l2-3z");
}

#[test]
fn params_formats() {
    assert_eq!(roundtrip("M 0.0 0.0"), "M0 0");
    assert_eq!(roundtrip("M 1e2 0"), "M100 0");
    assert_eq!(roundtrip("M 1e+2 0"), "M100 0");
    assert_eq!(roundtrip("M +1e+2 0"), "M100 0");
    assert_eq!(roundtrip("M 1e-2 0"), "M0.01 0");
    assert_eq!(roundtrip("M 0.1e-2 0"), "M0.001 0");
    assert_eq!(roundtrip("M .1e-2 0"), "M0.001 0");
    assert_eq!(roundtrip("M0.6.5"), "M0.6 0.5");
}

#[test]
fn repeated_commands() {
    assert_eq!(roundtrip("M 0 0 100 100"), "M0 0L100 100");
    assert_eq!(roundtrip("m 0 0 100 100"), "M0 0l100 100");
    assert_eq!(roundtrip("M 0 0 R 1 1 2 2"), "M0 0R1 1 2 2");
    assert_eq!(roundtrip("M 0 0 r 1 1 2 2"), "M0 0r1 1 2 2");
}

#[test]
fn arc_flags_may_be_glued() {
    assert_eq!(
        roundtrip("M 0 0 a.625.625 0 01.84-.925"),
        "M0 0a0.625 0.625 0 0 1 0.84-0.925"
    );
}

#[test]
fn leading_relative_moveto_becomes_absolute() {
    assert_eq!(roundtrip("m 10 10 l 20 20"), "M10 10l20 20");
}

#[test]
fn errors() {
    let err = |input: &str| SvgPath::parse(input).last_error().cloned();

    assert_eq!(
        err("0"),
        Some(ParseError::BadCommand {
            command: '0',
            pos: 0
        })
    );
    assert_eq!(
        err("U"),
        Some(ParseError::BadCommand {
            command: 'U',
            pos: 0
        })
    );
    assert_eq!(
        err("M0 0G 1"),
        Some(ParseError::BadCommand {
            command: 'G',
            pos: 4
        })
    );
    assert_eq!(err("z"), Some(ParseError::MustStartWithMoveto));
    assert_eq!(err("M+"), Some(ParseError::BadParamStart { pos: 2 }));
    assert_eq!(err("M00"), Some(ParseError::LeadingZero { pos: 1 }));
    assert_eq!(err("M0e"), Some(ParseError::InvalidExponent { pos: 3 }));
    assert_eq!(err("M0"), Some(ParseError::MissingParam { pos: 2 }));
    assert_eq!(err("M0,0,"), Some(ParseError::MissingParam { pos: 5 }));
    assert_eq!(err("M0 .e3"), Some(ParseError::InvalidExponent { pos: 4 }));
    assert_eq!(err("M0 0a2 2 2 2 2 2 2"), Some(ParseError::BadArcFlag { pos: 11 }));
}

#[test]
fn error_messages_carry_the_offset() {
    let path = SvgPath::parse("M0 0G 1");
    let err = path.last_error().expect("error recorded");
    assert_eq!(err.to_string(), "bad command `G` (at pos 4)");
    assert_eq!(err.pos(), Some(4));

    let path = SvgPath::parse("z");
    let err = path.last_error().expect("error recorded");
    assert_eq!(err.to_string(), "path should start with `M` or `m`");
    assert_eq!(err.pos(), None);
}

#[test]
fn keeps_valid_segment_prefix() {
    assert_eq!(roundtrip("M0 0G 1"), "M0 0");
    assert_eq!(roundtrip("z"), "");
    assert_eq!(roundtrip("M0 0L+"), "M0 0");
    assert_eq!(roundtrip("M0 0L00"), "M0 0");
    assert_eq!(roundtrip("M0 0L0e"), "M0 0");
    assert_eq!(roundtrip("M0 0L0"), "M0 0");
    assert_eq!(roundtrip("M0,0,"), "M0 0");
    assert_eq!(roundtrip("M0 0L0 .e3"), "M0 0");
    assert_eq!(roundtrip("M0 0a2 2 2 2 2 2 2"), "M0 0");
}

#[test]
fn partial_path_stays_usable() {
    let mut path = SvgPath::parse("M10 10 L20 20 G");
    assert!(path.last_error().is_some());
    assert_eq!(path.scale(2.0, 2.0).to_string(), "M20 20L40 40");
}
