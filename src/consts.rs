/// Polynomial coefficients with a magnitude at or below this value are treated as zero when
/// deciding the effective degree of a polynomial: a cubic whose leading terms vanish (as happens
/// when a curve is projected onto an axis-aligned line) is solved as a quadratic or linear
/// equation instead
pub const COEFFICIENT_TOLERANCE: f64 = 1e-12;

/// How close the discriminant of a depressed cubic must be to 0 before it is snapped to exactly
/// 0 and treated as the repeated-root case. This is much looser than `COEFFICIENT_TOLERANCE` as
/// the discriminant accumulates floating-point noise that would otherwise make a near-tangent
/// intersection read as a pair of complex roots and disappear
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-6;
