//!
//! # Traits for basic geometric definitions
//!
//! `Geo` is the base trait for anything with a coordinate type: curves, lines and bounding
//! boxes all implement it to say what they use for points. Keeping the coordinate type as
//! an associated type is what lets the intersection functions work with any 2D point
//! representation rather than just the `Coord2` type supplied here.
//!
//! `BoundingBox` describes axis-aligned bounding boxes. It's also a trait, so callers can
//! intersect curves against their own box representation as well as the default `Bounds`
//! type (or a simple pair of points, which also implements it).
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;
