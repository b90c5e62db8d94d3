//! Number formatting and rounding with JS semantics.
//!
//! Serialized output must match what the JS toolchain prints for the same
//! doubles, so coordinates go through `ryu-js` (ECMAScript `String(Number)`)
//! rather than Rust's default float formatting, which can pick a different
//! shortest round-trippable decimal.

/// Append `v` formatted as JS `String(Number)` would print it.
pub(crate) fn write_number(out: &mut String, buf: &mut ryu_js::Buffer, mut v: f64) {
    if !v.is_finite() {
        out.push_str(if v.is_nan() {
            "NaN"
        } else if v > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        });
        return;
    }
    if v == -0.0 {
        v = 0.0;
    }
    out.push_str(buf.format_finite(v));
}

/// `+value.toFixed(precision)`: round to `precision` decimals, ties toward +∞.
pub(crate) fn round_fixed(v: f64, precision: u8) -> f64 {
    let scale = 10f64.powi(i32::from(precision));
    (v * scale + 0.5).floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(v: f64) -> String {
        let mut out = String::new();
        let mut buf = ryu_js::Buffer::new();
        write_number(&mut out, &mut buf, v);
        out
    }

    #[test]
    fn matches_js_number_to_string() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(100.0), "100");
        assert_eq!(fmt(0.625), "0.625");
        assert_eq!(fmt(0.001), "0.001");
        assert_eq!(fmt(1e21), "1e+21");
        assert_eq!(fmt(-0.925), "-0.925");
    }

    #[test]
    fn round_fixed_ties_go_up() {
        assert_eq!(round_fixed(0.5, 0), 1.0);
        assert_eq!(round_fixed(2.5, 0), 3.0);
        assert_eq!(round_fixed(-2.5, 0), -2.0);
        assert_eq!(round_fixed(-0.8, 0), -1.0);
        assert_eq!(round_fixed(10.456, 2), 10.46);
        assert_eq!(round_fixed(30.0, 2), 30.0);
    }
}
