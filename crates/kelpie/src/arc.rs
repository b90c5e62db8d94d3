//! Elliptical arc to cubic Bézier conversion.
//!
//! Ported from `svgpath/lib/a2c.js`: the standard endpoint-to-center
//! parameterization from the SVG implementation notes
//! (<https://www.w3.org/TR/SVG11/implnote.html#ArcImplementationNotes>),
//! followed by per-quadrant Bézier approximation.

#![allow(clippy::too_many_arguments)]

use std::f64::consts::TAU;

/// Angle between two unit vectors.
///
/// Since we measure angles between radii of circular arcs, the math skips
/// length normalization. The dot product is clamped to [-1, 1] because
/// rounding errors (e.g. -1.0000000000000002) would turn `acos` into NaN.
fn unit_vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let sign = if ux * vy - uy * vx < 0.0 { -1.0 } else { 1.0 };
    let dot = (ux * vx + uy * vy).clamp(-1.0, 1.0);

    sign * dot.acos()
}

/// Endpoint to center parameterization: `(cx, cy, theta1, delta_theta)`.
fn get_arc_center(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    fa: bool,
    fs: bool,
    rx: f64,
    ry: f64,
    sin_phi: f64,
    cos_phi: f64,
) -> (f64, f64, f64, f64) {
    // Step 1.
    //
    // Move the ellipse so origin is the midpoint between our two points,
    // then rotate to line up the ellipse axes with the coordinate axes.
    let x1p = cos_phi * (x1 - x2) / 2.0 + sin_phi * (y1 - y2) / 2.0;
    let y1p = -sin_phi * (x1 - x2) / 2.0 + cos_phi * (y1 - y2) / 2.0;

    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let x1p_sq = x1p * x1p;
    let y1p_sq = y1p * y1p;

    // Step 2.
    //
    // Compute the center of the ellipse (cx', cy') in the new coordinate
    // system. The radicant can dip just below zero from rounding errors
    // (e.g. -1.38e-17), which would make the square root NaN.
    let mut radicant = (rx_sq * ry_sq) - (rx_sq * y1p_sq) - (ry_sq * x1p_sq);

    if radicant < 0.0 {
        radicant = 0.0;
    }

    radicant /= (rx_sq * y1p_sq) + (ry_sq * x1p_sq);
    let radicant = radicant.sqrt() * if fa == fs { -1.0 } else { 1.0 };

    let cxp = radicant * rx / ry * y1p;
    let cyp = radicant * -ry / rx * x1p;

    // Step 3: transform back to the original coordinate system.
    let cx = cos_phi * cxp - sin_phi * cyp + (x1 + x2) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (y1 + y2) / 2.0;

    // Step 4: compute angles (theta1, delta_theta).
    let v1x = (x1p - cxp) / rx;
    let v1y = (y1p - cyp) / ry;
    let v2x = (-x1p - cxp) / rx;
    let v2y = (-y1p - cyp) / ry;

    let theta1 = unit_vector_angle(1.0, 0.0, v1x, v1y);
    let mut delta_theta = unit_vector_angle(v1x, v1y, v2x, v2y);

    if !fs && delta_theta > 0.0 {
        delta_theta -= TAU;
    }
    if fs && delta_theta < 0.0 {
        delta_theta += TAU;
    }

    (cx, cy, theta1, delta_theta)
}

/// Approximate one unit-circle arc segment with a cubic Bézier,
/// see <http://math.stackexchange.com/questions/873224>.
fn approximate_unit_arc(theta1: f64, delta_theta: f64) -> [f64; 8] {
    let alpha = 4.0 / 3.0 * (delta_theta / 4.0).tan();

    let x1 = theta1.cos();
    let y1 = theta1.sin();
    let x2 = (theta1 + delta_theta).cos();
    let y2 = (theta1 + delta_theta).sin();

    [
        x1,
        y1,
        x1 - y1 * alpha,
        y1 + x1 * alpha,
        x2 + y2 * alpha,
        y2 - x2 * alpha,
        x2,
        y2,
    ]
}

/// Convert an elliptical arc given in endpoint parameterization to a run of
/// cubic Bézier curves, each `[x0, y0, x1c, y1c, x2c, y2c, x, y]` in
/// absolute coordinates.
///
/// Returns no curves for zero radii or coincident endpoints; per SVG spec a
/// zero-length arc draws nothing and callers degrade it to a line.
pub(crate) fn arc_to_cubic(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    large_arc: bool,
    sweep: bool,
    rx: f64,
    ry: f64,
    phi_deg: f64,
) -> Vec<[f64; 8]> {
    let (sin_phi, cos_phi) = (phi_deg * TAU / 360.0).sin_cos();

    let x1p = cos_phi * (x1 - x2) / 2.0 + sin_phi * (y1 - y2) / 2.0;
    let y1p = -sin_phi * (x1 - x2) / 2.0 + cos_phi * (y1 - y2) / 2.0;

    if x1p == 0.0 && y1p == 0.0 {
        // We're asked to draw a line to itself.
        return Vec::new();
    }

    if rx == 0.0 || ry == 0.0 {
        return Vec::new();
    }

    // Compensate out-of-range radii.
    let mut rx = rx.abs();
    let mut ry = ry.abs();

    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        rx *= lambda.sqrt();
        ry *= lambda.sqrt();
    }

    let (cx, cy, theta1, delta_theta) = get_arc_center(x1, y1, x2, y2, large_arc, sweep, rx, ry, sin_phi, cos_phi);

    // Split the arc so each piece spans at most τ/4 (90°), keeping the
    // Bézier approximation error small.
    let segments = ((delta_theta.abs() / (TAU / 4.0)).ceil() as usize).max(1);
    let delta_theta = delta_theta / segments as f64;

    let mut theta = theta1;
    let mut result = Vec::with_capacity(segments);
    for _ in 0..segments {
        result.push(approximate_unit_arc(theta, delta_theta));
        theta += delta_theta;
    }

    // The result is in zero-centered unit coordinates; map back through
    // scale(rx, ry), rotate(phi), translate(cx, cy).
    for curve in &mut result {
        for point in curve.chunks_exact_mut(2) {
            let x = point[0] * rx;
            let y = point[1] * ry;

            point[0] = cos_phi * x - sin_phi * y + cx;
            point[1] = sin_phi * x + cos_phi * y + cy;
        }
    }

    result
}
