use super::curve_line::*;
use super::super::curve::*;
use super::super::super::geo::*;
use super::super::super::coordinate::*;

///
/// Finds the points where a curve crosses the boundary of an axis-aligned bounding box
///
/// Each of the box's four edges is tested in a fixed order (bottom, right, top, left) and
/// every crossing found is returned, so a curve that enters and leaves the box produces
/// one point per boundary crossing. A curve that is entirely inside the box crosses no
/// edge and produces nothing: use `curve_intersects_bbox_any` to test for overlap rather
/// than boundary crossings.
///
/// The bounds must have their minimum point at or below their maximum point on every
/// axis; this is the caller's responsibility and is not checked here.
///
pub fn curve_intersects_bbox<C: BezierCurve, B: BoundingBox<Point=C::Point>>(curve: &C, bounds: &B) -> Vec<C::Point>
where C::Point: Coordinate2D {
    let mut intersections = vec![];

    for edge in bbox_edges(bounds).iter() {
        intersections.extend(curve_intersects_line(curve, edge));
    }

    intersections
}

///
/// True if a curve intersects an axis-aligned bounding box anywhere
///
/// A curve endpoint inside the box (bounds inclusive) is an immediate witness: such a
/// curve either crosses the boundary somewhere or is contained entirely. Otherwise the
/// four edges are tested in the same order as `curve_intersects_bbox`, stopping at the
/// first hit.
///
pub fn curve_intersects_bbox_any<C: BezierCurve, B: BoundingBox<Point=C::Point>>(curve: &C, bounds: &B) -> bool
where C::Point: Coordinate2D {
    if bounds.contains(&curve.start_point()) || bounds.contains(&curve.end_point()) {
        return true;
    }

    bbox_edges(bounds).iter()
        .any(|edge| curve_intersects_line_any(curve, edge))
}

///
/// The edges of a bounding box as line segments, in bottom, right, top, left order
///
fn bbox_edges<B: BoundingBox>(bounds: &B) -> [(B::Point, B::Point); 4]
where B::Point: Coordinate2D {
    let min             = bounds.min();
    let max             = bounds.max();

    let bottom_right    = B::Point::from_components(&[max.x(), min.y()]);
    let top_left        = B::Point::from_components(&[min.x(), max.y()]);

    [
        (min, bottom_right),
        (bottom_right, max),
        (top_left, max),
        (min, top_left)
    ]
}
