mod curve;
mod basis;
mod intersection;

pub use self::curve::*;
pub use self::basis::*;
pub use self::intersection::*;
