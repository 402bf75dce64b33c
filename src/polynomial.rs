use super::consts::*;

///
/// Finds the real roots of a polynomial of degree 3 or lower
///
/// Coefficients are supplied in ascending order of degree, so `coefficients[k]` is the
/// coefficient of `t^k`. Leading coefficients whose magnitude is at or below
/// `COEFFICIENT_TOLERANCE` are ignored, reducing the effective degree: this means a caller
/// can always pass the coefficients of a cubic and have it solved as a quadratic or linear
/// equation when the higher-order terms vanish.
///
/// The roots are returned in no particular order and are not clipped to any range. A
/// polynomial that reduces to a constant has no roots, as does one of degree higher than 3
/// (this solver is closed-form only). Repeated roots are reported once rather than with
/// their multiplicity: a quadratic with a zero discriminant returns a single value, and a
/// cubic on the double-root boundary returns two values. Callers that count intersections
/// at a tangency will see that count.
///
pub fn solve_polynomial_roots(coefficients: &[f64]) -> Vec<f64> {
    let mut results = vec![];

    if coefficients.is_empty() {
        return results;
    }

    // Ignore negligible leading coefficients to find the effective degree
    let mut degree = coefficients.len()-1;
    while degree > 0 && coefficients[degree].abs() <= COEFFICIENT_TOLERANCE {
        degree -= 1;
    }

    match degree {
        1 => solve_linear(coefficients[0], coefficients[1], &mut results),
        2 => solve_quadratic(coefficients[0], coefficients[1], coefficients[2], &mut results),
        3 => solve_cubic(coefficients[0], coefficients[1], coefficients[2], coefficients[3], &mut results),

        // Constants have no roots, and anything above degree 3 has no closed form here
        _ => { }
    }

    results
}

///
/// Root of c1*t + c0 = 0
///
fn solve_linear(c0: f64, c1: f64, results: &mut Vec<f64>) {
    if c1 != 0.0 {
        results.push(-c0/c1);
    }
}

///
/// Real roots of c2*t^2 + c1*t + c0 = 0
///
fn solve_quadratic(c0: f64, c1: f64, c2: f64, results: &mut Vec<f64>) {
    // Normalise to t^2 + b*t + c
    let b               = c1/c2;
    let c               = c0/c2;
    let discriminant    = b*b - 4.0*c;

    if discriminant > 0.0 {
        let e = discriminant.sqrt();

        results.push(0.5 * (-b+e));
        results.push(0.5 * (-b-e));
    } else if discriminant == 0.0 {
        // Double root, reported once
        results.push(0.5 * -b);
    }
}

///
/// Real roots of c3*t^3 + c2*t^2 + c1*t + c0 = 0
///
fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64, results: &mut Vec<f64>) {
    // Normalise, then substitute t = s - c2/3 to get the depressed cubic s^3 + a*s + b
    let c2      = c2/c3;
    let c1      = c1/c3;
    let c0      = c0/c3;

    let a       = (3.0*c1 - c2*c2)/3.0;
    let b       = (2.0*c2*c2*c2 - 9.0*c1*c2 + 27.0*c0)/27.0;
    let offset  = c2/3.0;
    let half_b  = b/2.0;

    let mut discriminant = b*b/4.0 + a*a*a/27.0;

    // Snap to the repeated-root case when the discriminant is within the tolerance
    if discriminant.abs() <= DISCRIMINANT_TOLERANCE {
        discriminant = 0.0;
    }

    if discriminant > 0.0 {
        // One real root, from the signed cube roots of the two half-terms
        let e       = discriminant.sqrt();
        let root    = (-half_b + e).cbrt() + (-half_b - e).cbrt();

        results.push(root - offset);
    } else if discriminant < 0.0 {
        // Three real roots, via the trigonometric form
        let distance    = (-a/3.0).sqrt();
        let angle       = f64::atan2((-discriminant).sqrt(), -half_b)/3.0;
        let cos_angle   = angle.cos();
        let sin_angle   = angle.sin();
        let sqrt_3      = 3.0_f64.sqrt();

        results.push(2.0*distance*cos_angle - offset);
        results.push(-distance*(cos_angle + sqrt_3*sin_angle) - offset);
        results.push(-distance*(cos_angle - sqrt_3*sin_angle) - offset);
    } else {
        // Repeated root boundary: the double root is reported once, so only two values
        let tmp = (-half_b).cbrt();

        results.push(2.0*tmp - offset);
        results.push(-tmp - offset);
    }
}
