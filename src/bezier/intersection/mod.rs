mod curve_line;
mod curve_bbox;

pub use self::curve_line::*;
pub use self::curve_bbox::*;
