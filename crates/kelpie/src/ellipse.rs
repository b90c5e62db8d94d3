//! Ellipse under an affine map.
//!
//! Ported from `svgpath/lib/ellipse.js`: an arc's implicit ellipse is the
//! image of the unit circle under rotate(ax)·scale(rx,ry), so applying a
//! linear map means analysing `M·Mᵀ` of the composed 2×2 matrix.

const EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Ellipse {
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation, degrees.
    pub ax: f64,
}

impl Ellipse {
    pub(crate) fn new(rx: f64, ry: f64, ax: f64) -> Ellipse {
        Ellipse { rx, ry, ax }
    }

    /// Apply the linear part `[a, b, c, d]` of an affine transform.
    pub(crate) fn transform(mut self, m: [f64; 4]) -> Ellipse {
        let (sin, cos) = self.ax.to_radians().sin_cos();

        // m × rotate(ax) × scale(rx, ry) applied to the unit circle.
        let ma = [
            self.rx * (m[0] * cos + m[2] * sin),
            self.rx * (m[1] * cos + m[3] * sin),
            self.ry * (-m[0] * sin + m[2] * cos),
            self.ry * (-m[1] * sin + m[3] * cos),
        ];

        // ma * transpose(ma) = [ J L ]
        //                      [ L K ]
        // L is calculated later (if the image is not a circle).
        let j = ma[0] * ma[0] + ma[2] * ma[2];
        let k = ma[1] * ma[1] + ma[3] * ma[3];

        // The discriminant of the characteristic polynomial of ma * transpose(ma).
        let d = ((ma[0] - ma[3]) * (ma[0] - ma[3]) + (ma[2] + ma[1]) * (ma[2] + ma[1]))
            * ((ma[0] + ma[3]) * (ma[0] + ma[3]) + (ma[2] - ma[1]) * (ma[2] - ma[1]));

        // The "mean eigenvalue".
        let jk = (j + k) / 2.0;

        // If the image is (almost) a circle.
        if d < EPSILON * jk {
            self.rx = jk.sqrt();
            self.ry = self.rx;
            self.ax = 0.0;
            return self;
        }

        let l = ma[0] * ma[1] + ma[2] * ma[3];

        let d = d.sqrt();

        // {l1, l2} = the two eigenvalues of ma * transpose(ma).
        let l1 = jk + d / 2.0;
        let l2 = jk - d / 2.0;

        // The x-axis rotation angle is the argument of the l1-eigenvector.
        self.ax = if l.abs() < EPSILON && (l1 - k).abs() < EPSILON {
            90.0
        } else {
            let t = if l.abs() > (l1 - k).abs() {
                (l1 - j) / l
            } else {
                l / (l1 - k)
            };
            t.atan().to_degrees()
        };

        // ax in [0, 90] keeps (rx, ry); ax in (-90, 0) exchanges the axes.
        if self.ax >= 0.0 {
            self.rx = l1.sqrt();
            self.ry = l2.sqrt();
        } else {
            self.ax += 90.0;
            self.rx = l2.sqrt();
            self.ry = l1.sqrt();
        }

        self
    }

    /// True when one principal axis has collapsed relative to the other.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.rx < EPSILON * self.ry || self.ry < EPSILON * self.rx
    }
}
