//! Transform stack and SVG/CSS `transform` attribute parsing.

use std::sync::OnceLock;

use regex::Regex;

use crate::matrix::AffineMatrix;

/// Ordered queue of affine transforms.
///
/// Pushing follows SVG `transform="t1 t2 t3"` semantics: the first pushed
/// entry is outermost and the last pushed is applied first to raw points.
/// No-op transforms (identity matrix, zero translate/rotate/skew, unit
/// scale) are elided at push time so an effect-free stack stays empty.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    queue: Vec<AffineMatrix>,
}

impl TransformStack {
    pub fn new() -> TransformStack {
        TransformStack::default()
    }

    /// Parse an SVG/CSS-style transform string, e.g.
    /// `"translate(10 50) rotate(-45) scale(2)"`.
    ///
    /// Recognized functions and arities: `matrix`:6, `translate`:1|2,
    /// `scale`:1|2, `rotate`:1|3, `skewX`:1, `skewY`:1. A function call
    /// whose argument count matches no declared arity is silently dropped,
    /// as are stray tokens between calls.
    pub fn parse(input: &str) -> TransformStack {
        let mut stack = TransformStack::new();

        for caps in transform_fn_re().captures_iter(input) {
            let name = &caps[1];
            let args: Vec<f64> = arg_split_re()
                .split(&caps[2])
                .map(|v| {
                    // JS `Number('')` is 0; anything else non-numeric is NaN.
                    if v.is_empty() {
                        0.0
                    } else {
                        v.parse::<f64>().unwrap_or(f64::NAN)
                    }
                })
                .collect();

            match (name, args.len()) {
                ("matrix", 6) => stack.matrix(AffineMatrix::from_array([
                    args[0], args[1], args[2], args[3], args[4], args[5],
                ])),
                ("translate", 1) => stack.translate(args[0], 0.0),
                ("translate", 2) => stack.translate(args[0], args[1]),
                ("scale", 1) => stack.scale(args[0], args[0]),
                ("scale", 2) => stack.scale(args[0], args[1]),
                ("rotate", 1) => stack.rotate(args[0], 0.0, 0.0),
                ("rotate", 3) => stack.rotate(args[0], args[1], args[2]),
                ("skewX", 1) => stack.skew_x(args[0]),
                ("skewY", 1) => stack.skew_y(args[0]),
                _ => {}
            }
        }

        stack
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn matrix(&mut self, m: AffineMatrix) {
        if !m.is_identity() {
            self.queue.push(m);
        }
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        if tx != 0.0 || ty != 0.0 {
            self.queue.push(AffineMatrix::translation(tx, ty));
        }
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        if sx != 1.0 || sy != 1.0 {
            self.queue.push(AffineMatrix::scaling(sx, sy));
        }
    }

    pub fn rotate(&mut self, angle_deg: f64, cx: f64, cy: f64) {
        if angle_deg != 0.0 {
            self.translate(cx, cy);
            self.queue.push(AffineMatrix::rotation(angle_deg));
            self.translate(-cx, -cy);
        }
    }

    pub fn skew_x(&mut self, angle_deg: f64) {
        if angle_deg != 0.0 {
            self.queue.push(AffineMatrix::skew_x(angle_deg));
        }
    }

    pub fn skew_y(&mut self, angle_deg: f64) {
        if angle_deg != 0.0 {
            self.queue.push(AffineMatrix::skew_y(angle_deg));
        }
    }

    /// Fold the queue into one matrix. The empty stack folds to identity.
    pub fn to_matrix(&self) -> AffineMatrix {
        let mut combined = AffineMatrix::IDENTITY;
        for m in &self.queue {
            combined = combined.compose(*m);
        }
        combined
    }
}

fn transform_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(matrix|translate|scale|rotate|skewX|skewY)\s*\(\s*(.+?)\s*\)")
            .expect("valid regex")
    })
}

fn arg_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,]+").expect("valid regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_transforms_are_elided() {
        let mut stack = TransformStack::new();
        stack.matrix(AffineMatrix::IDENTITY);
        stack.translate(0.0, 0.0);
        stack.scale(1.0, 1.0);
        stack.rotate(0.0, 10.0, 10.0);
        stack.skew_x(0.0);
        stack.skew_y(0.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn last_pushed_applies_first() {
        let mut stack = TransformStack::new();
        stack.translate(10.0, 20.0);
        stack.scale(2.0, 3.0);
        assert_eq!(stack.to_matrix().to_array(), [2.0, 0.0, 0.0, 3.0, 10.0, 20.0]);
    }

    #[test]
    fn parse_composes_left_to_right() {
        let m = TransformStack::parse("translate(100,100) scale(2,3)").to_matrix();
        assert_eq!(m.apply(10.0, 10.0, false), (120.0, 130.0));
    }

    #[test]
    fn parse_drops_wrong_arities() {
        let stack = TransformStack::parse(
            "rotate(10,0) scale(10,10,1) translate(10,10,0) skewX(10,0) skewY(10,0) matrix(0)",
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn rotate_about_center_queues_three_entries() {
        let mut stack = TransformStack::new();
        stack.rotate(90.0, 10.0, 10.0);
        let (x, y) = stack.to_matrix().apply(15.0, 10.0, false);
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 15.0).abs() < 1e-9);
    }
}
