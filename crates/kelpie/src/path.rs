//! The path object: segment list, pending transforms, and every operation
//! that reads or rewrites segments.

use crate::arc::arc_to_cubic;
use crate::bbox::BoundingBox;
use crate::ellipse::Ellipse;
use crate::error::ParseError;
use crate::fmt::{round_fixed, write_number};
use crate::matrix::AffineMatrix;
use crate::parse::parse_path;
use crate::segment::Segment;
use crate::transform::TransformStack;

/// Visitor verdict for one segment during [`SvgPath::iterate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Visit {
    /// Keep the segment (including any in-place edits the visitor made).
    Keep,
    /// Swap the segment for the given run. An empty run removes it.
    Replace(Vec<Segment>),
    /// Remove the segment.
    Drop,
}

/// A mutable SVG path: an owned segment sequence plus a queue of pending
/// transforms.
///
/// Transform calls ([`translate`](SvgPath::translate),
/// [`scale`](SvgPath::scale), [`rotate`](SvgPath::rotate), …) only push onto
/// the queue; the first read (serialization, [`round`](SvgPath::round),
/// [`abs`](SvgPath::abs), bounding box, [`iterate`](SvgPath::iterate), …)
/// folds the queue into one matrix and rewrites all segments in a single
/// pass, so chained transforms stay cheap.
///
/// ```
/// use kelpie::SvgPath;
///
/// let mut path = SvgPath::parse("M10 10 L15 15");
/// assert_eq!(path.scale(2.0, 2.0).to_string(), "M20 20L30 30");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgPath {
    segments: Vec<Segment>,
    err: Option<ParseError>,
    stack: Vec<TransformStack>,
}

impl SvgPath {
    /// Parse path data. Never fails: on malformed input the longest valid
    /// segment prefix is kept and the error is recorded for
    /// [`last_error`](SvgPath::last_error).
    pub fn parse(input: &str) -> SvgPath {
        let parsed = parse_path(input);
        SvgPath {
            segments: parsed.segments,
            err: parsed.err,
            stack: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> SvgPath {
        SvgPath {
            segments,
            err: None,
            stack: Vec::new(),
        }
    }

    /// Segments parsed so far. Pending transforms are not reflected until a
    /// read forces evaluation.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The parse error recorded for this path, if any.
    pub fn last_error(&self) -> Option<&ParseError> {
        self.err.as_ref()
    }

    // ---- iteration engine -------------------------------------------------

    /// Walk all segments once, tracking the absolute pen position before
    /// each segment, after folding pending transforms into the coordinates.
    ///
    /// The visitor receives `(segment, index, x, y)` with `(x, y)` the
    /// absolute position *before* the segment; it may edit the segment in
    /// place and/or replace it with a run of segments. Replacements never
    /// affect the position tracking of the current pass.
    pub fn iterate<F>(&mut self, visitor: F) -> &mut SvgPath
    where
        F: FnMut(&mut Segment, usize, f64, f64) -> Visit,
    {
        self.eval_stack();
        self.iterate_inner(visitor);
        self
    }

    /// Like [`iterate`](SvgPath::iterate) but keeps pending transforms
    /// queued instead of evaluating them first.
    pub fn iterate_lazy<F>(&mut self, visitor: F) -> &mut SvgPath
    where
        F: FnMut(&mut Segment, usize, f64, f64) -> Visit,
    {
        self.iterate_inner(visitor);
        self
    }

    fn iterate_inner<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Segment, usize, f64, f64) -> Visit,
    {
        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut contour_x = 0.0_f64;
        let mut contour_y = 0.0_f64;
        let mut replacements: Vec<(usize, Vec<Segment>)> = Vec::new();

        for index in 0..self.segments.len() {
            match visitor(&mut self.segments[index], index, x, y) {
                Visit::Keep => {}
                Visit::Replace(run) => replacements.push((index, run)),
                Visit::Drop => replacements.push((index, Vec::new())),
            }

            // Track the absolute pen position from the visited segment;
            // relative forms add their deltas to the running point.
            let seg = &self.segments[index];
            let rel = !seg.is_abs();
            match seg {
                Segment::MoveTo { x: sx, y: sy, .. } => {
                    x = sx + if rel { x } else { 0.0 };
                    y = sy + if rel { y } else { 0.0 };
                    contour_x = x;
                    contour_y = y;
                }
                Segment::HorizontalTo { x: sx, .. } => {
                    x = sx + if rel { x } else { 0.0 };
                }
                Segment::VerticalTo { y: sy, .. } => {
                    y = sy + if rel { y } else { 0.0 };
                }
                Segment::Close { .. } => {
                    x = contour_x;
                    y = contour_y;
                }
                Segment::CatmullRom { points, .. } => {
                    if let [.., px, py] = points[..] {
                        x = px + if rel { x } else { 0.0 };
                        y = py + if rel { y } else { 0.0 };
                    }
                }
                Segment::LineTo { x: sx, y: sy, .. }
                | Segment::CurveTo { x: sx, y: sy, .. }
                | Segment::SmoothCurveTo { x: sx, y: sy, .. }
                | Segment::QuadraticTo { x: sx, y: sy, .. }
                | Segment::SmoothQuadraticTo { x: sx, y: sy, .. }
                | Segment::Arc { x: sx, y: sy, .. } => {
                    x = sx + if rel { x } else { 0.0 };
                    y = sy + if rel { y } else { 0.0 };
                }
            }
        }

        if replacements.is_empty() {
            return;
        }

        let mut out = Vec::with_capacity(self.segments.len());
        let mut pending = replacements.into_iter().peekable();
        for (index, seg) in std::mem::take(&mut self.segments).into_iter().enumerate() {
            if pending.peek().is_some_and(|(replace_at, _)| *replace_at == index) {
                if let Some((_, run)) = pending.next() {
                    out.extend(run);
                }
            } else {
                out.push(seg);
            }
        }
        self.segments = out;
    }

    // ---- pending transform queue ------------------------------------------

    fn push_stack(&mut self, stack: TransformStack) -> &mut SvgPath {
        if !stack.is_empty() {
            self.stack.push(stack);
        }
        self
    }

    /// Fold every pending transform into one matrix and run the rewrite
    /// pass. First-called transforms apply first to raw coordinates.
    fn eval_stack(&mut self) {
        if self.stack.is_empty() {
            return;
        }

        let mut combined = AffineMatrix::IDENTITY;
        for stack in self.stack.iter().rev() {
            combined = combined.compose(stack.to_matrix());
        }
        tracing::trace!(entries = self.stack.len(), "folding pending transforms");
        self.stack.clear();

        if combined.is_identity() {
            return;
        }
        self.apply_matrix(combined);
    }

    fn apply_matrix(&mut self, m: AffineMatrix) {
        let flip_sweep = m.determinant() < 0.0;

        self.iterate_inner(|seg, index, x, y| {
            match *seg {
                // Asymmetric commands first: a transformed horizontal or
                // vertical move may stop being axis-aligned, which upgrades
                // the segment to a generic line.
                Segment::HorizontalTo { abs: false, x: dx } => {
                    let (px, py) = m.apply(dx, 0.0, true);
                    Visit::Replace(vec![if py == 0.0 {
                        Segment::HorizontalTo { abs: false, x: px }
                    } else {
                        Segment::LineTo {
                            abs: false,
                            x: px,
                            y: py,
                        }
                    }])
                }
                Segment::HorizontalTo { abs: true, x: hx } => {
                    let (px, py) = m.apply(hx, y, false);
                    let (_, cur_y) = m.apply(x, y, false);
                    Visit::Replace(vec![if py == cur_y {
                        Segment::HorizontalTo { abs: true, x: px }
                    } else {
                        Segment::LineTo {
                            abs: true,
                            x: px,
                            y: py,
                        }
                    }])
                }
                Segment::VerticalTo { abs: false, y: dy } => {
                    let (px, py) = m.apply(0.0, dy, true);
                    Visit::Replace(vec![if px == 0.0 {
                        Segment::VerticalTo { abs: false, y: py }
                    } else {
                        Segment::LineTo {
                            abs: false,
                            x: px,
                            y: py,
                        }
                    }])
                }
                Segment::VerticalTo { abs: true, y: vy } => {
                    let (px, py) = m.apply(x, vy, false);
                    let (cur_x, _) = m.apply(x, y, false);
                    Visit::Replace(vec![if px == cur_x {
                        Segment::VerticalTo { abs: true, y: py }
                    } else {
                        Segment::LineTo {
                            abs: true,
                            x: px,
                            y: py,
                        }
                    }])
                }
                Segment::Arc {
                    abs,
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x: ax,
                    y: ay,
                } => {
                    let ellipse = Ellipse::new(rx, ry, rotation).transform([m.a, m.b, m.c, m.d]);

                    // A flipped image runs the arc the other way round.
                    let sweep = if flip_sweep { !sweep } else { sweep };

                    let (px, py) = m.apply(ax, ay, !abs);

                    // Zero-length arcs draw nothing, but are kept as empty
                    // lines to avoid collisions with `S A S` and the like.
                    let coincident = if abs {
                        ax == x && ay == y
                    } else {
                        ax == 0.0 && ay == 0.0
                    };

                    if coincident || ellipse.is_degenerate() {
                        tracing::debug!(index, "arc degenerated to a line under transform");
                        Visit::Replace(vec![Segment::LineTo {
                            abs,
                            x: px,
                            y: py,
                        }])
                    } else {
                        Visit::Replace(vec![Segment::Arc {
                            abs,
                            rx: ellipse.rx,
                            ry: ellipse.ry,
                            rotation: ellipse.ax,
                            large_arc,
                            sweep,
                            x: px,
                            y: py,
                        }])
                    }
                }
                // The very first moveto of a path is positioned absolutely
                // even in its relative spelling: there is no previous point.
                Segment::MoveTo {
                    abs: false,
                    x: mx,
                    y: my,
                } if index == 0 => {
                    let (px, py) = m.apply(mx, my, false);
                    Visit::Replace(vec![Segment::MoveTo {
                        abs: false,
                        x: px,
                        y: py,
                    }])
                }
                Segment::Close { .. } => Visit::Keep,
                ref other => {
                    let rel = !other.is_abs();
                    let mut mapped = other.clone();
                    map_pairs(&mut mapped, |px, py| m.apply(px, py, rel));
                    Visit::Replace(vec![mapped])
                }
            }
        });
    }

    // ---- transforms -------------------------------------------------------

    /// Translate by `(tx, ty)`.
    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.translate(tx, ty);
        self.push_stack(stack)
    }

    /// Scale by `(sx, sy)`.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.scale(sx, sy);
        self.push_stack(stack)
    }

    /// Rotate by `angle_deg` degrees about `(cx, cy)`.
    pub fn rotate(&mut self, angle_deg: f64, cx: f64, cy: f64) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.rotate(angle_deg, cx, cy);
        self.push_stack(stack)
    }

    pub fn skew_x(&mut self, angle_deg: f64) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.skew_x(angle_deg);
        self.push_stack(stack)
    }

    pub fn skew_y(&mut self, angle_deg: f64) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.skew_y(angle_deg);
        self.push_stack(stack)
    }

    /// Apply an arbitrary affine matrix `[a, b, c, d, e, f]`.
    pub fn matrix(&mut self, m: [f64; 6]) -> &mut SvgPath {
        let mut stack = TransformStack::new();
        stack.matrix(AffineMatrix::from_array(m));
        self.push_stack(stack)
    }

    /// Apply an SVG/CSS `transform` attribute string, e.g.
    /// `"translate(100,100) scale(2,3)"` (first function outermost).
    pub fn transform(&mut self, transform_string: &str) -> &mut SvgPath {
        if transform_string.trim().is_empty() {
            return self;
        }
        self.push_stack(TransformStack::parse(transform_string))
    }

    // ---- normalization ----------------------------------------------------

    /// Convert segments to the absolute (uppercase) form.
    pub fn abs(&mut self) -> &mut SvgPath {
        self.iterate(|seg, _index, x, y| {
            if !seg.is_abs() {
                set_abs(seg, true);
                match seg {
                    // V is the only command with shifted coordinate parity.
                    Segment::VerticalTo { y: sy, .. } => *sy += y,
                    Segment::HorizontalTo { x: sx, .. } => *sx += x,
                    // Arc: touch the endpoint only.
                    Segment::Arc { x: sx, y: sy, .. } => {
                        *sx += x;
                        *sy += y;
                    }
                    Segment::Close { .. } => {}
                    seg => map_pairs(seg, |px, py| (px + x, py + y)),
                }
            }
            Visit::Keep
        })
    }

    /// Convert segments to the relative (lowercase) form. The first `M`
    /// stays as is.
    pub fn rel(&mut self) -> &mut SvgPath {
        self.iterate(|seg, index, x, y| {
            if seg.is_abs() {
                if index == 0 && matches!(seg, Segment::MoveTo { .. }) {
                    return Visit::Keep;
                }
                set_abs(seg, false);
                match seg {
                    Segment::VerticalTo { y: sy, .. } => *sy -= y,
                    Segment::HorizontalTo { x: sx, .. } => *sx -= x,
                    Segment::Arc { x: sx, y: sy, .. } => {
                        *sx -= x;
                        *sy -= y;
                    }
                    Segment::Close { .. } => {}
                    seg => map_pairs(seg, |px, py| (px - x, py - y)),
                }
            }
            Visit::Keep
        })
    }

    /// Expand smooth curves (`S`/`s`, `T`/`t`) into their generic forms by
    /// reflecting the previous control point.
    pub fn unshort(&mut self) -> &mut SvgPath {
        // (control − endpoint) of the previous segment, valid for both the
        // absolute and the relative spelling.
        #[derive(Clone, Copy)]
        enum Prev {
            Other,
            Quad(f64, f64),
            Cubic(f64, f64),
        }
        let mut prev = Prev::Other;

        self.iterate(|seg, index, x, y| {
            // First command is M; nothing to reflect yet.
            if index > 0 {
                match *seg {
                    Segment::SmoothQuadraticTo { abs, x: ex, y: ey } => {
                        let (pdx, pdy) = match prev {
                            Prev::Quad(dx, dy) => (dx, dy),
                            _ => (0.0, 0.0),
                        };
                        let (mut cx, mut cy) = (-pdx, -pdy);
                        if abs {
                            cx += x;
                            cy += y;
                        }
                        *seg = Segment::QuadraticTo {
                            abs,
                            x1: cx,
                            y1: cy,
                            x: ex,
                            y: ey,
                        };
                    }
                    Segment::SmoothCurveTo {
                        abs,
                        x2,
                        y2,
                        x: ex,
                        y: ey,
                    } => {
                        let (pdx, pdy) = match prev {
                            Prev::Cubic(dx, dy) => (dx, dy),
                            _ => (0.0, 0.0),
                        };
                        let (mut cx, mut cy) = (-pdx, -pdy);
                        if abs {
                            cx += x;
                            cy += y;
                        }
                        *seg = Segment::CurveTo {
                            abs,
                            x1: cx,
                            y1: cy,
                            x2,
                            y2,
                            x: ex,
                            y: ey,
                        };
                    }
                    _ => {}
                }
            }

            prev = match *seg {
                Segment::QuadraticTo { x1, y1, x, y, .. } => Prev::Quad(x1 - x, y1 - y),
                Segment::CurveTo { x2, y2, x, y, .. } => Prev::Cubic(x2 - x, y2 - y),
                _ => Prev::Other,
            };
            Visit::Keep
        })
    }

    /// Replace every arc with a run of cubic Bézier curves. Arcs that draw
    /// nothing become plain lines.
    pub fn unarc(&mut self) -> &mut SvgPath {
        self.iterate(|seg, _index, x, y| {
            let Segment::Arc {
                abs,
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x: ax,
                y: ay,
            } = *seg
            else {
                return Visit::Keep;
            };

            let (end_x, end_y) = if abs { (ax, ay) } else { (x + ax, y + ay) };
            let curves = arc_to_cubic(x, y, end_x, end_y, large_arc, sweep, rx, ry, rotation);

            // Degenerate arcs can be ignored by the renderer, but should
            // not be dropped to avoid collisions with `S A S` and so on.
            if curves.is_empty() {
                return Visit::Replace(vec![Segment::LineTo {
                    abs,
                    x: ax,
                    y: ay,
                }]);
            }

            Visit::Replace(
                curves
                    .iter()
                    .map(|c| Segment::CurveTo {
                        abs: true,
                        x1: c[2],
                        y1: c[3],
                        x2: c[4],
                        y2: c[5],
                        x: c[6],
                        y: c[7],
                    })
                    .collect(),
            )
        })
    }

    /// Round coordinates to `precision` decimals (arc rotations get two
    /// extra decimals; arc flags are untouched).
    ///
    /// The residual of each rounded endpoint is carried into the next
    /// relative segment so cumulative drift stays bounded; `Z` restores the
    /// residual recorded at the contour's moveto.
    pub fn round(&mut self, precision: u8) -> &mut SvgPath {
        self.eval_stack();

        let mut contour_dx = 0.0_f64;
        let mut contour_dy = 0.0_f64;
        let mut dx = 0.0_f64;
        let mut dy = 0.0_f64;

        for seg in &mut self.segments {
            let rel = !seg.is_abs();
            match seg {
                Segment::HorizontalTo { x, .. } => {
                    if rel {
                        *x += dx;
                    }
                    dx = *x - round_fixed(*x, precision);
                    *x = round_fixed(*x, precision);
                }
                Segment::VerticalTo { y, .. } => {
                    if rel {
                        *y += dy;
                    }
                    dy = *y - round_fixed(*y, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::Close { .. } => {
                    dx = contour_dx;
                    dy = contour_dy;
                }
                Segment::MoveTo { x, y, .. } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    contour_dx = dx;
                    contour_dy = dy;
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::Arc {
                    rx,
                    ry,
                    rotation,
                    x,
                    y,
                    ..
                } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    *rx = round_fixed(*rx, precision);
                    *ry = round_fixed(*ry, precision);
                    *rotation = round_fixed(*rotation, precision.saturating_add(2));
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::CatmullRom { points, .. } => {
                    if let [.., px, py] = &mut points[..] {
                        if rel {
                            *px += dx;
                            *py += dy;
                        }
                        dx = *px - round_fixed(*px, precision);
                        dy = *py - round_fixed(*py, precision);
                    }
                    for v in points {
                        *v = round_fixed(*v, precision);
                    }
                }
                Segment::LineTo { x, y, .. } | Segment::SmoothQuadraticTo { x, y, .. } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                    ..
                } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    for v in [x1, y1, x2, y2] {
                        *v = round_fixed(*v, precision);
                    }
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::SmoothCurveTo { x2, y2, x, y, .. } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    *x2 = round_fixed(*x2, precision);
                    *y2 = round_fixed(*y2, precision);
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
                Segment::QuadraticTo { x1, y1, x, y, .. } => {
                    if rel {
                        *x += dx;
                        *y += dy;
                    }
                    dx = *x - round_fixed(*x, precision);
                    dy = *y - round_fixed(*y, precision);
                    *x1 = round_fixed(*x1, precision);
                    *y1 = round_fixed(*y1, precision);
                    *x = round_fixed(*x, precision);
                    *y = round_fixed(*y, precision);
                }
            }
        }

        self
    }

    // ---- bounding box -----------------------------------------------------

    /// Bounding box of the path. Works on a normalized throwaway clone
    /// (absolute coordinates, smooth curves and arcs expanded), so the path
    /// itself is unmodified.
    pub fn get_bounding_box(&self) -> BoundingBox {
        let mut path = self.clone();
        path.abs().unshort().unarc();

        let mut bbox = BoundingBox::new();
        path.iterate(|seg, _index, x, y| {
            match *seg {
                Segment::MoveTo { x: sx, y: sy, .. } | Segment::LineTo { x: sx, y: sy, .. } => {
                    bbox.add_point(sx, sy);
                }
                Segment::HorizontalTo { x: sx, .. } => {
                    bbox.add_x(sx);
                }
                Segment::VerticalTo { y: sy, .. } => {
                    bbox.add_y(sy);
                }
                Segment::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x: ex,
                    y: ey,
                    ..
                } => {
                    bbox.add_x_c([x, x1, x2, ex]);
                    bbox.add_y_c([y, y1, y2, ey]);
                }
                Segment::QuadraticTo {
                    x1,
                    y1,
                    x: ex,
                    y: ey,
                    ..
                } => {
                    bbox.add_x_q([x, x1, ex]);
                    bbox.add_y_q([y, y1, ey]);
                }
                Segment::CatmullRom { ref points, .. } => {
                    for pair in points.chunks_exact(2) {
                        bbox.add_point(pair[0], pair[1]);
                    }
                }
                _ => {}
            }
            Visit::Keep
        });
        bbox
    }

    /// View-box string (`"min-x min-y width height"`) of the bounding box.
    pub fn to_view_box_string(&self, precision: Option<u8>) -> String {
        self.get_bounding_box().to_view_box_string(precision)
    }

    /// Queue the transform that fits the path's bounding box into the box
    /// described by `fit_spec` (see [`BoundingBox::matrix_to_box`]).
    pub fn to_box(&mut self, fit_spec: &str) -> &mut SvgPath {
        let m = self.get_bounding_box().matrix_to_box(fit_spec);
        let mut stack = TransformStack::new();
        stack.matrix(m);
        self.push_stack(stack)
    }

    // ---- serialization ----------------------------------------------------

    /// Serialize to canonical path syntax: segments joined without
    /// redundant spaces, repeated command letters elided (except movetos).
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&mut self) -> String {
        self.eval_stack();

        let mut out = String::with_capacity(self.segments.len() * 16);
        let mut buf = ryu_js::Buffer::new();
        let mut params: Vec<f64> = Vec::with_capacity(8);
        let mut prev_cmd = '\0';

        for seg in &self.segments {
            let cmd = seg.letter();
            let cmd_skipped = cmd == prev_cmd && cmd != 'm' && cmd != 'M';

            if !cmd_skipped {
                // Keep the space in `z m`: some importers (FontForge) choke
                // on the glued form.
                if cmd == 'm' && prev_cmd == 'z' {
                    out.push(' ');
                }
                out.push(cmd);
            }

            params.clear();
            seg.push_params(&mut params);
            for (pos, &val) in params.iter().enumerate() {
                // The space is skipped right after a command letter and
                // before a negative value.
                let space = if pos == 0 { cmd_skipped } else { true };
                if space && val >= 0.0 {
                    out.push(' ');
                }
                write_number(&mut out, &mut buf, val);
            }

            prev_cmd = cmd;
        }

        out
    }
}

/// Apply `f` to every (x, y) parameter pair of a symmetric segment.
fn map_pairs<F>(seg: &mut Segment, mut f: F)
where
    F: FnMut(f64, f64) -> (f64, f64),
{
    match seg {
        Segment::MoveTo { x, y, .. }
        | Segment::LineTo { x, y, .. }
        | Segment::SmoothQuadraticTo { x, y, .. } => {
            (*x, *y) = f(*x, *y);
        }
        Segment::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            ..
        } => {
            (*x1, *y1) = f(*x1, *y1);
            (*x2, *y2) = f(*x2, *y2);
            (*x, *y) = f(*x, *y);
        }
        Segment::SmoothCurveTo { x2, y2, x, y, .. } => {
            (*x2, *y2) = f(*x2, *y2);
            (*x, *y) = f(*x, *y);
        }
        Segment::QuadraticTo { x1, y1, x, y, .. } => {
            (*x1, *y1) = f(*x1, *y1);
            (*x, *y) = f(*x, *y);
        }
        Segment::CatmullRom { points, .. } => {
            for pair in points.chunks_exact_mut(2) {
                (pair[0], pair[1]) = f(pair[0], pair[1]);
            }
        }
        Segment::HorizontalTo { .. }
        | Segment::VerticalTo { .. }
        | Segment::Arc { .. }
        | Segment::Close { .. } => {}
    }
}

fn set_abs(seg: &mut Segment, value: bool) {
    match seg {
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
        | Segment::Close { abs } => *abs = value,
    }
}
