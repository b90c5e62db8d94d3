//! Path data scanner.
//!
//! Ported from `svgpath/lib/path_parse.js`, reworked onto a local cursor
//! struct so parses are reentrant. Scanning stops at the first error; the
//! segments finalized before it are kept.

use crate::error::ParseError;
use crate::segment::Segment;

pub(crate) struct Parsed {
    pub segments: Vec<Segment>,
    pub err: Option<ParseError>,
}

/// Whitespace and line terminators, matching the JS scanner's set
/// (ASCII whitespace, NBSP, LS/PS and the Unicode space separators).
fn is_space(ch: char) -> bool {
    matches!(
        ch,
        '\u{0A}' | '\u{0D}' | '\u{2028}' | '\u{2029}' // Line terminators
            | '\u{20}' | '\u{09}' | '\u{0B}' | '\u{0C}' | '\u{A0}'
            | '\u{1680}' | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn is_command(ch: char) -> bool {
    matches!(
        ch.to_ascii_lowercase(),
        'm' | 'z' | 'l' | 'h' | 'v' | 'c' | 's' | 'q' | 't' | 'a' | 'r'
    )
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_digit_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'+' || b == b'-' || b == b'.'
}

fn param_count(cmd: char) -> usize {
    match cmd.to_ascii_lowercase() {
        'a' => 7,
        'c' => 6,
        'h' | 'v' => 1,
        'q' | 's' => 4,
        // Catmull-Rom takes a variable list; it is scanned pair by pair.
        'l' | 'm' | 'r' | 't' => 2,
        _ => 0, // z
    }
}

struct State<'a> {
    path: &'a str,
    index: usize,
    max: usize,
    segments: Vec<Segment>,
    err: Option<ParseError>,
    param: f64,
    segment_start: usize,
    data: Vec<f64>,
}

impl<'a> State<'a> {
    fn new(path: &'a str) -> State<'a> {
        State {
            path,
            index: 0,
            max: path.len(),
            segments: Vec::new(),
            err: None,
            param: 0.0,
            segment_start: 0,
            data: Vec::new(),
        }
    }

    fn byte(&self, index: usize) -> u8 {
        if index < self.max {
            self.path.as_bytes()[index]
        } else {
            0
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.path[index..].chars().next()
    }

    fn skip_spaces(&mut self) {
        while self.index < self.max {
            let Some(ch) = self.char_at(self.index) else {
                break;
            };
            if !is_space(ch) {
                break;
            }
            self.index += ch.len_utf8();
        }
    }

    fn scan_flag(&mut self) {
        match self.byte(self.index) {
            b'0' => {
                self.param = 0.0;
                self.index += 1;
            }
            b'1' => {
                self.param = 1.0;
                self.index += 1;
            }
            _ => self.err = Some(ParseError::BadArcFlag { pos: self.index }),
        }
    }

    fn scan_param(&mut self) {
        let start = self.index;
        let mut index = start;

        if index >= self.max {
            self.err = Some(ParseError::MissingParam { pos: index });
            return;
        }

        let mut b = self.byte(index);
        if b == b'+' || b == b'-' {
            index += 1;
            b = self.byte(index);
        }

        // This logic is shamelessly borrowed from Esprima.
        if !is_digit(b) && b != b'.' {
            self.err = Some(ParseError::BadParamStart { pos: index });
            return;
        }

        let mut has_ceiling = false;
        let mut has_decimal = false;
        let mut has_dot = false;

        if b != b'.' {
            let zero_first = b == b'0';
            index += 1;

            // A number starting with `0` such as `09` is illegal.
            if zero_first && is_digit(self.byte(index)) {
                self.err = Some(ParseError::LeadingZero { pos: start });
                return;
            }

            while is_digit(self.byte(index)) {
                index += 1;
                has_ceiling = true;
            }
            b = self.byte(index);
        }

        if b == b'.' {
            has_dot = true;
            index += 1;
            while is_digit(self.byte(index)) {
                index += 1;
                has_decimal = true;
            }
            b = self.byte(index);
        }

        if b == b'e' || b == b'E' {
            if has_dot && !has_ceiling && !has_decimal {
                self.err = Some(ParseError::InvalidExponent { pos: index });
                return;
            }

            index += 1;
            b = self.byte(index);
            if b == b'+' || b == b'-' {
                index += 1;
            }
            if is_digit(self.byte(index)) {
                while is_digit(self.byte(index)) {
                    index += 1;
                }
            } else {
                self.err = Some(ParseError::InvalidExponent { pos: index });
                return;
            }
        }

        self.index = index;
        self.param = self.path[start..index].parse().unwrap_or(0.0);
    }

    fn finalize_segment(&mut self) {
        let Some(mut cmd) = self.char_at(self.segment_start) else {
            return;
        };

        let mut data = std::mem::take(&mut self.data);
        let mut chunk = param_count(cmd);

        // Implicit command repetition: surplus parameters after `M`/`m`
        // continue as `L`/`l`.
        if cmd.to_ascii_lowercase() == 'm' && data.len() > 2 {
            self.segments.push(build_segment(cmd, &data[..2]));
            data.drain(..2);
            cmd = if cmd == 'm' { 'l' } else { 'L' };
            chunk = 2;
        }

        if cmd.to_ascii_lowercase() == 'r' {
            self.segments.push(Segment::CatmullRom {
                abs: cmd == 'R',
                points: data,
            });
            return;
        }

        let mut rest = &data[..];
        loop {
            if rest.len() < chunk {
                break;
            }
            self.segments.push(build_segment(cmd, &rest[..chunk]));
            if chunk == 0 {
                break;
            }
            rest = &rest[chunk..];
        }
    }

    fn scan_segment(&mut self) {
        self.segment_start = self.index;
        let Some(cmd) = self.char_at(self.index) else {
            return;
        };

        if !is_command(cmd) {
            self.err = Some(ParseError::BadCommand {
                command: cmd,
                pos: self.index,
            });
            return;
        }

        let is_arc = cmd.to_ascii_lowercase() == 'a';
        let need_params = param_count(cmd);

        self.index += cmd.len_utf8();
        self.skip_spaces();

        self.data.clear();

        if need_params == 0 {
            // Z
            self.finalize_segment();
            return;
        }

        let mut comma_found = false;
        loop {
            for i in (1..=need_params).rev() {
                if is_arc && (i == 3 || i == 4) {
                    self.scan_flag();
                } else {
                    self.scan_param();
                }
                if self.err.is_some() {
                    return;
                }
                self.data.push(self.param);

                comma_found = false;
                self.skip_spaces();

                if self.byte(self.index) == b',' {
                    self.index += 1;
                    self.skip_spaces();
                    comma_found = true;
                }
            }

            // After `,` a param is mandatory.
            if comma_found {
                continue;
            }

            if self.index >= self.max {
                break;
            }

            // Stop on next segment.
            if !is_digit_start(self.byte(self.index)) {
                break;
            }
        }

        self.finalize_segment();
    }
}

fn build_segment(cmd: char, chunk: &[f64]) -> Segment {
    let abs = cmd.is_ascii_uppercase();
    match cmd.to_ascii_lowercase() {
        'm' => Segment::MoveTo {
            abs,
            x: chunk[0],
            y: chunk[1],
        },
        'l' => Segment::LineTo {
            abs,
            x: chunk[0],
            y: chunk[1],
        },
        'h' => Segment::HorizontalTo { abs, x: chunk[0] },
        'v' => Segment::VerticalTo { abs, y: chunk[0] },
        'c' => Segment::CurveTo {
            abs,
            x1: chunk[0],
            y1: chunk[1],
            x2: chunk[2],
            y2: chunk[3],
            x: chunk[4],
            y: chunk[5],
        },
        's' => Segment::SmoothCurveTo {
            abs,
            x2: chunk[0],
            y2: chunk[1],
            x: chunk[2],
            y: chunk[3],
        },
        'q' => Segment::QuadraticTo {
            abs,
            x1: chunk[0],
            y1: chunk[1],
            x: chunk[2],
            y: chunk[3],
        },
        't' => Segment::SmoothQuadraticTo {
            abs,
            x: chunk[0],
            y: chunk[1],
        },
        'a' => Segment::Arc {
            abs,
            rx: chunk[0],
            ry: chunk[1],
            rotation: chunk[2],
            large_arc: chunk[3] != 0.0,
            sweep: chunk[4] != 0.0,
            x: chunk[5],
            y: chunk[6],
        },
        _ => Segment::Close { abs },
    }
}

pub(crate) fn parse_path(input: &str) -> Parsed {
    let mut state = State::new(input);

    state.skip_spaces();
    while state.index < state.max && state.err.is_none() {
        state.scan_segment();
    }

    if state.err.is_none()
        && !state.segments.is_empty()
        && !matches!(state.segments[0], Segment::MoveTo { .. })
    {
        state.err = Some(ParseError::MustStartWithMoveto);
        state.segments.clear();
    }

    // A leading `m` has no previous point and is equivalent to `M`.
    if let Some(Segment::MoveTo { abs, .. }) = state.segments.first_mut() {
        *abs = true;
    }

    if let Some(err) = &state.err {
        tracing::debug!(%err, kept = state.segments.len(), "path data rejected");
    }

    Parsed {
        segments: state.segments,
        err: state.err,
    }
}
