#![warn(bare_trait_objects)]

//!
//! # bezier_intersect
//!
//! Computes the points where a quadratic or cubic bezier curve meets a line segment or an
//! axis-aligned bounding box, for hit-testing, collision queries and path clipping.
//!
//! Intersections are found by projecting the curve's power-basis coefficients onto the
//! implicit form of a line, which reduces the problem to finding the real roots of a
//! polynomial of degree 3 or lower. The closed-form solver used for this is available
//! directly in the `polynomial` module.
//!
//! Every operation is a pure function of its inputs: degenerate geometry (zero-length
//! segments, tangent or parallel lines) produces an empty result rather than an error.
//!

pub mod bezier;
pub mod line;
pub mod polynomial;
pub mod consts;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::BezierCurve;
pub use self::line::Line;
