use super::super::coordinate::*;

use itertools::Itertools;

///
/// The quadratic bezier weighted basis function
///
#[inline]
pub fn quadratic_basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let t_squared           = t*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;

    w1*one_minus_t_squared
        + w2*(2.0*one_minus_t*t)
        + w3*t_squared
}

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn cubic_basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}

///
/// The power-basis coefficients of a quadratic bezier curve, in ascending order of degree
///
/// Expanding the Bernstein blending functions collects the control points into the vector
/// coefficients of `(w1 - 2*w2 + w3)*t^2 + (-2*w1 + 2*w2)*t + w1`
///
pub fn quadratic_power_basis<Point: Coordinate>(w1: Point, w2: Point, w3: Point) -> Vec<Point> {
    vec![
        w1,
        w1*(-2.0) + w2*2.0,
        w1 + w2*(-2.0) + w3
    ]
}

///
/// The power-basis coefficients of a cubic bezier curve, in ascending order of degree
///
/// Expanding the Bernstein blending functions collects the control points into the vector
/// coefficients of `(-w1 + 3*w2 - 3*w3 + w4)*t^3 + (3*w1 - 6*w2 + 3*w3)*t^2 + (-3*w1 + 3*w2)*t + w1`
///
pub fn cubic_power_basis<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> Vec<Point> {
    vec![
        w1,
        w1*(-3.0) + w2*3.0,
        w1*3.0 + w2*(-6.0) + w3*3.0,
        w1*(-1.0) + w2*3.0 + w3*(-3.0) + w4
    ]
}

///
/// Evaluates a bezier curve at t by repeated linear interpolation of its control points
///
/// This works for any number of control points, each pass lerping between the adjacent
/// points of the previous one until a single point is left. It's preferred to evaluating
/// the power basis directly as it stays accurate near the ends of the curve. The points
/// slice must not be empty.
///
pub fn de_casteljau<Point: Coordinate>(t: f64, points: &[Point]) -> Point {
    let mut points = points.to_vec();

    while points.len() > 1 {
        points = points.iter()
            .tuple_windows()
            .map(|(w1, w2)| *w1 + (*w2-*w1)*t)
            .collect();
    }

    points[0]
}
