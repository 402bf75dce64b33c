use super::super::curve::*;
use super::super::basis::*;
use super::super::super::line::*;
use super::super::super::coordinate::*;
use super::super::super::polynomial::*;

///
/// Finds the points where a curve intersects a line segment
///
/// The curve's power-basis coefficients are projected onto the implicit form of the line,
/// which turns the intersection into finding the roots of a one-dimensional polynomial.
/// Roots within the curve are then evaluated and kept if the resulting point is within
/// the extent of the segment itself.
///
/// Points are returned in the order their roots were found, which is not necessarily the
/// order they appear along the curve. A segment that's tangent to the curve produces a
/// single point (see `solve_polynomial_roots` for how repeated roots are counted).
///
pub fn curve_intersects_line<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> Vec<C::Point>
where C::Point: Coordinate2D {
    line_intersections(curve, line).collect()
}

///
/// True if a curve intersects a line segment anywhere
///
/// This stops at the first intersection found, so when only existence matters it's
/// cheaper than checking the results of `curve_intersects_line`.
///
pub fn curve_intersects_line_any<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> bool
where C::Point: Coordinate2D {
    line_intersections(curve, line).next().is_some()
}

///
/// The intersections between a curve and a line segment, produced lazily so that an
/// existence check can stop at the first valid root
///
fn line_intersections<C: BezierCurve, L: Line<Point=C::Point>>(curve: &C, line: &L) -> impl Iterator<Item=C::Point>
where C::Point: Coordinate2D {
    let (p1, p2)    = line.points();

    // Implicit form of the line: ax + by + c = 0
    let (a, b, c)   = line_coefficients_2d(line);

    // Projecting the curve's coefficients onto the line's normal produces the polynomial
    // whose roots are the t values where the curve meets the infinite line
    let curve_basis     = curve.power_basis();
    let mut polynomial  = curve_basis.iter()
        .map(|coefficient| a*coefficient.x() + b*coefficient.y())
        .collect::<Vec<_>>();
    polynomial[0] += c;

    let roots           = solve_polynomial_roots(&polynomial);

    // Extent of the segment, for checking that a point on the infinite line is within the
    // segment itself
    let min             = C::Point::from_smallest_components(p1, p2);
    let max             = C::Point::from_biggest_components(p1, p2);

    let control_points  = curve.control_polygon();

    roots.into_iter()
        .filter_map(move |t| {
            // Roots outside the curve are not intersections
            if 0.0 <= t && t <= 1.0 {
                let point = de_casteljau(t, &control_points);

                // Vertical and horizontal segments are checked on a single axis: the
                // evaluated point carries enough error that the general test can reject
                // genuine intersections on the axis the segment doesn't span
                let within_segment = if p1.x() == p2.x() {
                    min.y() <= point.y() && point.y() <= max.y()
                } else if p1.y() == p2.y() {
                    min.x() <= point.x() && point.x() <= max.x()
                } else {
                    point.x() >= min.x() && point.y() >= min.y() && point.x() <= max.x() && point.y() <= max.y()
                };

                if within_segment {
                    return Some(point);
                }
            }

            None
        })
}
