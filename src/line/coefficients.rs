use super::line::*;
use super::super::coordinate::*;

///
/// For a two-dimensional line, computes the coefficients of the implicit line equation
/// ax+by+c=0
///
/// (a, b) is the normal of the line and c is its signed area term. The coefficients are
/// left unnormalised: projecting a polynomial onto them preserves exact zeros for
/// axis-aligned lines, which is what lets the root solver reduce the degree of the
/// resulting equation. A line whose start and end points are the same will return
/// (0, 0, 0).
///
pub fn line_coefficients_2d<P: Coordinate+Coordinate2D, L: Line<Point=P>>(line: &L) -> (f64, f64, f64) {
    let (from, to)  = line.points();

    let a           = from.y() - to.y();
    let b           = to.x() - from.x();
    let c           = from.x()*to.y() - to.x()*from.y();

    (a, b, c)
}
