//! Path segment model.

/// One drawing command plus its parameters.
///
/// `abs` mirrors the command-letter case: `true` for the uppercase
/// (absolute) form, `false` for the lowercase (relative) form. `R`/`r` is
/// the Catmull-Rom extension command and carries a variable, even-length
/// coordinate list.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    MoveTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    LineTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    HorizontalTo {
        abs: bool,
        x: f64,
    },
    VerticalTo {
        abs: bool,
        y: f64,
    },
    CurveTo {
        abs: bool,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCurveTo {
        abs: bool,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticTo {
        abs: bool,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    Arc {
        abs: bool,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    CatmullRom {
        abs: bool,
        points: Vec<f64>,
    },
    Close {
        abs: bool,
    },
}

impl Segment {
    pub fn is_abs(&self) -> bool {
        match *self {
            Segment::MoveTo { abs, .. }
            | Segment::LineTo { abs, .. }
            | Segment::HorizontalTo { abs, .. }
            | Segment::VerticalTo { abs, .. }
            | Segment::CurveTo { abs, .. }
            | Segment::SmoothCurveTo { abs, .. }
            | Segment::QuadraticTo { abs, .. }
            | Segment::SmoothQuadraticTo { abs, .. }
            | Segment::Arc { abs, .. }
            | Segment::CatmullRom { abs, .. }
            | Segment::Close { abs } => abs,
        }
    }

    /// Command letter as serialized, case encoding absolute vs. relative.
    pub fn letter(&self) -> char {
        let lower = match self {
            Segment::MoveTo { .. } => 'm',
            Segment::LineTo { .. } => 'l',
            Segment::HorizontalTo { .. } => 'h',
            Segment::VerticalTo { .. } => 'v',
            Segment::CurveTo { .. } => 'c',
            Segment::SmoothCurveTo { .. } => 's',
            Segment::QuadraticTo { .. } => 'q',
            Segment::SmoothQuadraticTo { .. } => 't',
            Segment::Arc { .. } => 'a',
            Segment::CatmullRom { .. } => 'r',
            Segment::Close { .. } => 'z',
        };
        if self.is_abs() {
            lower.to_ascii_uppercase()
        } else {
            lower
        }
    }

    /// Push the parameters in serialization order. Arc flags are pushed as
    /// `0`/`1` numbers.
    pub(crate) fn push_params(&self, out: &mut Vec<f64>) {
        match self {
            Segment::MoveTo { x, y, .. }
            | Segment::LineTo { x, y, .. }
            | Segment::SmoothQuadraticTo { x, y, .. } => out.extend([*x, *y]),
            Segment::HorizontalTo { x, .. } => out.push(*x),
            Segment::VerticalTo { y, .. } => out.push(*y),
            Segment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                ..
            } => out.extend([*x1, *y1, *x2, *y2, *x, *y]),
            Segment::SmoothCurveTo { x2, y2, x, y, .. } => out.extend([*x2, *y2, *x, *y]),
            Segment::QuadraticTo { x1, y1, x, y, .. } => out.extend([*x1, *y1, *x, *y]),
            Segment::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => out.extend([
                *rx,
                *ry,
                *rotation,
                if *large_arc { 1.0 } else { 0.0 },
                if *sweep { 1.0 } else { 0.0 },
                *x,
                *y,
            ]),
            Segment::CatmullRom { points, .. } => out.extend_from_slice(points),
            Segment::Close { .. } => {}
        }
    }
}
