//! Axis-aligned bounding box over points and Bézier extrema.
//!
//! Ported from the `svgpath` bounding-box extension (`lib/box.js`): the box
//! widens monotonically as points and curve components are added; quadratic
//! and cubic components contribute their interior extrema in closed form.

use std::sync::OnceLock;

use regex::Regex;

use crate::fmt::{round_fixed, write_number};
use crate::matrix::AffineMatrix;

/// Precision for considering a cubic polynomial as a quadratic one.
const EPSILON: f64 = 1e-8;

/// Axis-aligned bounding box.
///
/// Both axes start undefined; an undefined box reports 0 × 0 size. The box
/// never shrinks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    x: Option<(f64, f64)>,
    y: Option<(f64, f64)>,
}

/// `[min, max]` of `a0·(1-t)² + a1·2·(1-t)·t + a2·t²` for t in [0, 1].
fn minmax_q(a: [f64; 3]) -> (f64, f64) {
    let min = a[0].min(a[2]);
    let max = a[0].max(a[2]);

    let inside = if a[1] > a[0] { a[2] >= a[1] } else { a[2] <= a[1] };
    if inside {
        // No extremum in ]0, 1[.
        return (min, max);
    }

    // Check if the extremum E is min or max.
    let e = (a[0] * a[2] - a[1] * a[1]) / (a[0] - 2.0 * a[1] + a[2]);
    if e < min { (e, max) } else { (min, e) }
}

/// `[min, max]` of the cubic Bernstein polynomial over `a` for t in [0, 1].
fn minmax_c(a: [f64; 4]) -> (f64, f64) {
    // If the polynomial is (almost) quadratic and not cubic.
    let k = a[0] - 3.0 * a[1] + 3.0 * a[2] - a[3];
    if k.abs() < EPSILON {
        return minmax_q([
            a[0],
            -0.5 * a[0] + 1.5 * a[1],
            a[0] - 3.0 * a[1] + 3.0 * a[2],
        ]);
    }

    // The reduced discriminant of the derivative.
    let t = -a[0] * a[2] + a[0] * a[3] - a[1] * a[2] - a[1] * a[3] + a[1] * a[1] + a[2] * a[2];

    // If the polynomial is monotone in [0, 1].
    if t <= 0.0 {
        return (a[0].min(a[3]), a[0].max(a[3]));
    }
    let s = t.sqrt();

    let mut min = a[0].min(a[3]);
    let mut max = a[0].max(a[3]);

    let l = a[0] - 2.0 * a[1] + a[2];
    // Check both local extrema, keeping only roots in ]0, 1[.
    for r in [(l + s) / k, (l - s) / k] {
        if r > 0.0 && r < 1.0 {
            let q = a[0] * (1.0 - r) * (1.0 - r) * (1.0 - r)
                + a[1] * 3.0 * (1.0 - r) * (1.0 - r) * r
                + a[2] * 3.0 * (1.0 - r) * r * r
                + a[3] * r * r * r;
            if q < min {
                min = q;
            }
            if q > max {
                max = q;
            }
        }
    }

    (min, max)
}

impl BoundingBox {
    pub fn new() -> BoundingBox {
        BoundingBox::default()
    }

    /// Parse a view-box string like `"-10 10 300 400"`. Returns the
    /// undefined box when fewer than four numbers can be read.
    pub fn from_view_box(s: &str) -> BoundingBox {
        let nums: Vec<f64> = s
            .split_whitespace()
            .take(4)
            .map_while(|t| t.parse::<f64>().ok())
            .collect();

        let mut bbox = BoundingBox::new();
        if let [x, y, w, h] = nums[..] {
            bbox.add_x(x).add_x(x + w).add_y(y).add_y(y + h);
        }
        bbox
    }

    pub fn is_undefined(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    pub fn min_x(&self) -> Option<f64> {
        self.x.map(|(min, _)| min)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.x.map(|(_, max)| max)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.y.map(|(min, _)| min)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.y.map(|(_, max)| max)
    }

    pub fn width(&self) -> f64 {
        self.x.map_or(0.0, |(min, max)| max - min)
    }

    pub fn height(&self) -> f64 {
        self.y.map_or(0.0, |(min, max)| max - min)
    }

    pub fn add_x(&mut self, x: f64) -> &mut BoundingBox {
        self.x = match self.x {
            None => Some((x, x)),
            Some((min, max)) => Some((min.min(x), max.max(x))),
        };
        self
    }

    pub fn add_y(&mut self, y: f64) -> &mut BoundingBox {
        self.y = match self.y {
            None => Some((y, y)),
            Some((min, max)) => Some((min.min(y), max.max(y))),
        };
        self
    }

    pub fn add_point(&mut self, x: f64, y: f64) -> &mut BoundingBox {
        self.add_x(x).add_y(y)
    }

    /// Add the x component of a quadratic curve `[p0, p1, p2]`.
    pub fn add_x_q(&mut self, a: [f64; 3]) -> &mut BoundingBox {
        let (min, max) = minmax_q(a);
        self.add_x(min).add_x(max)
    }

    /// Add the y component of a quadratic curve `[p0, p1, p2]`.
    pub fn add_y_q(&mut self, a: [f64; 3]) -> &mut BoundingBox {
        let (min, max) = minmax_q(a);
        self.add_y(min).add_y(max)
    }

    /// Add the x component of a cubic curve `[p0, p1, p2, p3]`.
    pub fn add_x_c(&mut self, a: [f64; 4]) -> &mut BoundingBox {
        let (min, max) = minmax_c(a);
        self.add_x(min).add_x(max)
    }

    /// Add the y component of a cubic curve `[p0, p1, p2, p3]`.
    pub fn add_y_c(&mut self, a: [f64; 4]) -> &mut BoundingBox {
        let (min, max) = minmax_c(a);
        self.add_y(min).add_y(max)
    }

    /// `"min-x min-y width height"`. The undefined box prints `"0 0 0 0"`.
    /// With `precision` the numbers are printed `toFixed`-style (trailing
    /// zeros kept), otherwise as shortest JS numbers.
    pub fn to_view_box_string(&self, precision: Option<u8>) -> String {
        let (Some((min_x, _)), Some((min_y, _))) = (self.x, self.y) else {
            return "0 0 0 0".to_string();
        };

        let values = [min_x, min_y, self.width(), self.height()];
        let mut out = String::new();
        match precision {
            None => {
                let mut buf = ryu_js::Buffer::new();
                for (i, v) in values.into_iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    write_number(&mut out, &mut buf, v);
                }
            }
            Some(pr) => {
                use std::fmt::Write as _;
                for (i, v) in values.into_iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    let _ = write!(out, "{:.*}", usize::from(pr), round_fixed(v, pr));
                }
            }
        }
        out
    }

    /// The transform that fits this box into the box described by
    /// `parameters`: a view-box quad optionally followed by an action and an
    /// alignment, e.g. `"100 0 200 300 meet xMidYMin"`.
    ///
    /// Actions: `fit` (= `none`; aspect ratio not preserved), `meet` (the
    /// default; preserve ratio, scale as much as possible while staying
    /// inside), `slice` (preserve ratio, scale as little as possible while
    /// covering), `move` (translate only). Alignment `x(Min|Mid|Max)` and
    /// `y(Min|Mid|Max)` is case-insensitive and defaults to mid.
    ///
    /// Returns identity when either box is undefined or the destination quad
    /// cannot be parsed.
    pub fn matrix_to_box(&self, parameters: &str) -> AffineMatrix {
        let dst = view_box_quad_re()
            .find(parameters)
            .map(|m| BoundingBox::from_view_box(m.as_str()))
            .unwrap_or_default();

        let (Some((src_min_x, src_max_x)), Some((src_min_y, src_max_y))) = (self.x, self.y) else {
            return AffineMatrix::IDENTITY;
        };
        let (Some((dst_min_x, dst_max_x)), Some((dst_min_y, dst_max_y))) = (dst.x, dst.y) else {
            return AffineMatrix::IDENTITY;
        };

        let action = action_re()
            .find(parameters)
            .map_or("meet", |m| m.as_str());
        // `none` is accepted for compatibility with `preserveAspectRatio`.
        let action = if action == "none" { "fit" } else { action };

        let (width, height) = (self.width(), self.height());
        let (rx, ry) = match action {
            "fit" => (
                if width != 0.0 { dst.width() / width } else { 1.0 },
                if height != 0.0 { dst.height() / height } else { 1.0 },
            ),
            "slice" if width != 0.0 && height != 0.0 => {
                let r = (dst.width() / width).max(dst.height() / height);
                (r, r)
            }
            "move" => (1.0, 1.0),
            // `meet`, and `slice` of a flat box.
            _ => {
                let r = if width == 0.0 && height == 0.0 {
                    1.0
                } else {
                    (dst.width() / width).min(dst.height() / height)
                };
                (r, r)
            }
        };

        let origin = |pos: &str, min: f64, max: f64| match pos {
            "min" => min,
            "max" => max,
            _ => (min + max) / 2.0,
        };

        let pos_x = position(parameters, x_align_re());
        let pos_y = position(parameters, y_align_re());

        let src_x = origin(pos_x, src_min_x, src_max_x);
        let dst_x = origin(pos_x, dst_min_x, dst_max_x);
        let src_y = origin(pos_y, src_min_y, src_max_y);
        let dst_y = origin(pos_y, dst_min_y, dst_max_y);

        // Equivalent to translate(-srcX, -srcY), scale(rx, ry),
        // translate(dstX, dstY).
        AffineMatrix::from_array([rx, 0.0, 0.0, ry, dst_x - rx * src_x, dst_y - ry * src_y])
    }
}

fn position(parameters: &str, re: &Regex) -> &'static str {
    match re
        .captures(parameters)
        .map(|caps| caps[1].to_ascii_lowercase())
        .as_deref()
    {
        Some("min") => "min",
        Some("max") => "max",
        _ => "mid",
    }
}

fn view_box_quad_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-\d.\s]+").expect("valid regex"))
}

fn action_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"fit|none|meet|slice|move").expect("valid regex"))
}

fn x_align_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)x(Min|Mid|Max)").expect("valid regex"))
}

fn y_align_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)y(Min|Mid|Max)").expect("valid regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_box_is_undefined_with_zero_size() {
        let b = BoundingBox::new();
        assert!(b.is_undefined());
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn parse_from_string() {
        let b = BoundingBox::from_view_box("-1 2 4 5");
        assert_eq!(b.min_x(), Some(-1.0));
        assert_eq!(b.max_x(), Some(3.0));
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.min_y(), Some(2.0));
        assert_eq!(b.max_y(), Some(7.0));
        assert_eq!(b.height(), 5.0);
    }

    #[test]
    fn add_points_monotonically_widens() {
        let mut b = BoundingBox::new();
        b.add_point(1.0, 1.0);
        assert_eq!((b.width(), b.height()), (0.0, 0.0));

        b.add_x(2.0);
        assert_eq!((b.width(), b.height()), (1.0, 0.0));

        b.add_y(3.0);
        assert_eq!((b.width(), b.height()), (1.0, 2.0));

        b.add_point(4.0, -5.0);
        assert_eq!(b.min_x(), Some(1.0));
        assert_eq!(b.max_x(), Some(4.0));
        assert_eq!(b.min_y(), Some(-5.0));
        assert_eq!(b.max_y(), Some(3.0));
        assert_eq!((b.width(), b.height()), (3.0, 8.0));
    }

    #[test]
    fn quadratic_extrema() {
        let mut b = BoundingBox::new();
        b.add_x_q([0.0, 3.0, 1.0]);
        assert_eq!(b.min_x(), Some(0.0));
        assert_eq!(b.max_x(), Some(1.8));

        let mut b = BoundingBox::new();
        b.add_y_q([0.0, -2.0, 1.0]);
        assert_eq!(b.min_y(), Some(-0.8));
        assert_eq!(b.max_y(), Some(1.0));
    }

    #[test]
    fn cubic_extrema() {
        let mut b = BoundingBox::new();
        b.add_x_c([0.0, -70.0, 210.0, 100.0]);
        assert_eq!(b.min_x().map(|v| v.round()), Some(-11.0));
        assert_eq!(b.max_x().map(|v| v.round()), Some(126.0));
        assert_eq!(b.width().round(), 137.0);

        let mut b = BoundingBox::new();
        b.add_y_c([0.0, 1.0, 2.0, 3.0]);
        assert_eq!(b.min_y(), Some(0.0));
        assert_eq!(b.max_y(), Some(3.0));
    }

    #[test]
    fn view_box_string() {
        let mut b = BoundingBox::new();
        b.add_x_c([0.0, -70.0, 210.0, 100.0]);
        b.add_y_c([0.0, -30.0, 70.0, 40.0]);
        assert_eq!(b.to_view_box_string(Some(0)), "-11 -6 137 51");

        assert_eq!(BoundingBox::new().to_view_box_string(None), "0 0 0 0");
        assert_eq!(
            BoundingBox::from_view_box("-10 20 30 50").to_view_box_string(None),
            "-10 20 30 50"
        );
    }

    #[test]
    fn matrix_to_put_in_a_box() {
        let b = BoundingBox::from_view_box("-10 0 40 50");

        // Default is meet xMidYMid.
        let m = b.matrix_to_box("0 0 100 200");
        assert_eq!(m.to_array(), [2.5, 0.0, 0.0, 2.5, 25.0, 37.5]);

        let m = b.matrix_to_box("0 0 100 200 slice xMinYMax");
        assert_eq!(m.to_array(), [4.0, 0.0, 0.0, 4.0, 40.0, 0.0]);

        let m = b.matrix_to_box("0 0 100 200 fit");
        assert_eq!(m.to_array(), [2.5, 0.0, 0.0, 4.0, 25.0, 0.0]);

        let m = b.matrix_to_box("0 0 100 200 move xMinYmid");
        assert_eq!(m.to_array(), [1.0, 0.0, 0.0, 1.0, 10.0, 75.0]);
    }
}
