use bezier_intersect::*;
use bezier_intersect::bezier::*;

///
/// Evaluates vector power-basis coefficients at t
///
fn evaluate_power_basis(coefficients: &[Coord2], t: f64) -> Coord2 {
    let mut power   = 1.0;
    let mut sum     = Coord2::origin();

    for coefficient in coefficients.iter() {
        sum     = sum + *coefficient*power;
        power   = power*t;
    }

    sum
}

#[test]
fn quadratic_power_basis_matches_bernstein_evaluation() {
    let (w1, w2, w3)    = (Coord2(0.0, 0.0), Coord2(150.0, 100.0), Coord2(300.0, 0.0));
    let coefficients    = quadratic_power_basis(w1, w2, w3);

    assert!(coefficients.len() == 3);

    for t in 0..=16 {
        let t           = (t as f64)/16.0;

        let power       = evaluate_power_basis(&coefficients, t);
        let bernstein   = quadratic_basis(t, w1, w2, w3);

        assert!(power.distance_to(&bernstein) < 1e-9);
    }
}

#[test]
fn cubic_power_basis_matches_bernstein_evaluation() {
    let (w1, w2, w3, w4)    = (Coord2(0.0, 0.0), Coord2(100.0, 100.0), Coord2(200.0, 100.0), Coord2(300.0, 0.0));
    let coefficients        = cubic_power_basis(w1, w2, w3, w4);

    assert!(coefficients.len() == 4);

    for t in 0..=16 {
        let t           = (t as f64)/16.0;

        let power       = evaluate_power_basis(&coefficients, t);
        let bernstein   = cubic_basis(t, w1, w2, w3, w4);

        assert!(power.distance_to(&bernstein) < 1e-9);
    }
}

#[test]
fn quadratic_power_basis_constant_term_is_the_start_point() {
    let coefficients = quadratic_power_basis(Coord2(1.0, 2.0), Coord2(5.0, 7.0), Coord2(9.0, 2.0));

    assert!(coefficients[0] == Coord2(1.0, 2.0));
}

#[test]
fn cubic_power_basis_of_a_straight_segment_has_no_higher_terms() {
    // Control points evenly spaced along a line leave only the linear term
    let coefficients = cubic_power_basis(Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 2.0), Coord2(3.0, 3.0));

    assert!(coefficients[2] == Coord2(0.0, 0.0));
    assert!(coefficients[3] == Coord2(0.0, 0.0));
}

#[test]
fn de_casteljau_matches_quadratic_basis() {
    let (w1, w2, w3) = (Coord2(2.0, -1.0), Coord2(5.0, 3.0), Coord2(8.0, 0.0));

    for t in 0..=16 {
        let t           = (t as f64)/16.0;

        let point       = de_casteljau(t, &[w1, w2, w3]);
        let expected    = quadratic_basis(t, w1, w2, w3);

        assert!(point.distance_to(&expected) < 1e-9);
    }
}

#[test]
fn de_casteljau_matches_cubic_basis() {
    let (w1, w2, w3, w4) = (Coord2(0.0, 2.0), Coord2(0.0, 20.0), Coord2(10.0, -10.0), Coord2(10.0, 8.0));

    for t in 0..=16 {
        let t           = (t as f64)/16.0;

        let point       = de_casteljau(t, &[w1, w2, w3, w4]);
        let expected    = cubic_basis(t, w1, w2, w3, w4);

        assert!(point.distance_to(&expected) < 1e-9);
    }
}

#[test]
fn de_casteljau_hits_the_endpoints() {
    let points = [Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0)];

    assert!(de_casteljau(0.0, &points) == Coord2(1.0, 1.0));
    assert!(de_casteljau(1.0, &points) == Coord2(2.0, 2.0));
}

#[test]
fn de_casteljau_of_a_single_point_is_that_point() {
    assert!(de_casteljau(0.5, &[Coord2(4.0, 2.0)]) == Coord2(4.0, 2.0));
}
