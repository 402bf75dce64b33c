use super::basis::*;
use super::super::geo::*;
use super::super::coordinate::*;

///
/// Trait implemented by things representing a bezier curve
///
pub trait BezierCurve: Geo+Clone+Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// Every control point of this curve in order, starting with the start point and
    /// finishing with the end point
    ///
    fn control_polygon(&self) -> Vec<Self::Point>;

    ///
    /// The power-basis coefficients of this curve, in ascending order of degree (the curve
    /// evaluates to `c0 + c1*t + c2*t^2 + ...` at parameter t)
    ///
    fn power_basis(&self) -> Vec<Self::Point>;

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        de_casteljau(t, &self.control_polygon())
    }
}

///
/// Represents a quadratic bezier curve (a single control point)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticBezier<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_point:  Coord,
    pub end_point:      Coord
}

impl<Coord: Coordinate> QuadraticBezier<Coord> {
    ///
    /// Creates a new quadratic bezier curve from its points
    ///
    pub fn from_points(start: Coord, control_point: Coord, end: Coord) -> QuadraticBezier<Coord> {
        QuadraticBezier {
            start_point:    start,
            control_point:  control_point,
            end_point:      end
        }
    }
}

impl<Coord: Coordinate> Geo for QuadraticBezier<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurve for QuadraticBezier<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_polygon(&self) -> Vec<Coord> {
        vec![self.start_point, self.control_point, self.end_point]
    }

    #[inline]
    fn power_basis(&self) -> Vec<Coord> {
        quadratic_power_basis(self.start_point, self.control_point, self.end_point)
    }
}

///
/// Represents a cubic bezier curve (two control points)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_points: (Coord, Coord),
    pub end_point:      Coord
}

impl<Coord: Coordinate> CubicBezier<Coord> {
    ///
    /// Creates a new cubic bezier curve from its points
    ///
    pub fn from_points(start: Coord, (control_point1, control_point2): (Coord, Coord), end: Coord) -> CubicBezier<Coord> {
        CubicBezier {
            start_point:    start,
            control_points: (control_point1, control_point2),
            end_point:      end
        }
    }
}

impl<Coord: Coordinate> Geo for CubicBezier<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurve for CubicBezier<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_polygon(&self) -> Vec<Coord> {
        vec![self.start_point, self.control_points.0, self.control_points.1, self.end_point]
    }

    #[inline]
    fn power_basis(&self) -> Vec<Coord> {
        cubic_power_basis(self.start_point, self.control_points.0, self.control_points.1, self.end_point)
    }
}
