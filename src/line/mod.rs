mod line;
mod coefficients;

pub use self::line::*;
pub use self::coefficients::*;

pub use super::geo::*;
