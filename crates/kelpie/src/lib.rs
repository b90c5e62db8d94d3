#![forbid(unsafe_code)]

//! SVG path data toolkit.
//!
//! Design goals:
//! - 1:1 behavioral parity with the JS `svgpath` library (including its
//!   bounding-box extension), down to byte-identical serialized output
//! - malformed input never panics: parsing keeps the longest valid segment
//!   prefix and records the error on the path
//! - transform chains are folded lazily into a single matrix, so any number
//!   of chained calls costs one segment-rewrite pass
//!
//! ```
//! use kelpie::SvgPath;
//!
//! let mut path = SvgPath::parse("M0 0 L 10 10");
//! path.translate(-5.0, -5.0).scale(2.0, 2.0).round(0);
//! assert_eq!(path.to_string(), "M-10-10L10 10");
//! ```

mod arc;
mod bbox;
mod ellipse;
mod error;
mod fmt;
mod matrix;
mod parse;
mod path;
mod segment;
mod transform;

pub use bbox::BoundingBox;
pub use error::ParseError;
pub use matrix::AffineMatrix;
pub use path::{SvgPath, Visit};
pub use segment::Segment;
pub use transform::TransformStack;
