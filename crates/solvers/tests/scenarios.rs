//! End-to-end critical-point searches on textbook functions.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_relative_eq;

use enclose_core::{Interval, derivatives, function};
use enclose_solvers::{
    extrema::{self, Extremum, HigherOrderTest, Location, SecondDerivativeTest},
    newton::{self, Config, Status},
};

fn domain(lo: f64, hi: f64) -> Interval {
    Interval::new(lo, hi).expect("valid domain")
}

fn power(x: Interval, n: i32) -> Interval {
    x.powi(n).unwrap_or(Interval::ENTIRE)
}

fn config() -> Config {
    Config::with_tolerance(1e-3).expect("valid tolerance")
}

#[test]
fn square_on_symmetric_domain() {
    let f = derivatives(|x| 2.0 * x, |_| Interval::point(2.0));

    let found = extrema::find_unobserved(&f, domain(-2.0, 2.0), &config(), &SecondDerivativeTest)
        .expect("search should succeed");

    assert!(found.converged());
    assert_eq!(found.points.len(), 3);

    let vertex = &found.points[1];
    assert!(vertex.enclosure().contains(0.0));
    assert_eq!(vertex.classification(), Extremum::Minimum);

    let left = &found.points[0];
    let right = &found.points[2];
    assert_eq!((left.representative(), left.classification()), (-2.0, Extremum::Maximum));
    assert_eq!((right.representative(), right.classification()), (2.0, Extremum::Maximum));
}

#[test]
fn sine_over_one_period() {
    let f = derivatives(Interval::cos, |x: Interval| -x.sin());
    let config = config();

    let found = extrema::find_unobserved(&f, domain(0.0, TAU), &config, &SecondDerivativeTest)
        .expect("search should succeed");

    assert!(found.converged());
    let interior: Vec<_> = found.interior().collect();
    assert_eq!(interior.len(), 2);

    assert_relative_eq!(interior[0].representative(), FRAC_PI_2, epsilon = config.tolerance());
    assert_eq!(interior[0].classification(), Extremum::Maximum);

    assert_relative_eq!(
        interior[1].representative(),
        3.0 * FRAC_PI_2,
        epsilon = config.tolerance()
    );
    assert_eq!(interior[1].classification(), Extremum::Minimum);
}

#[test]
fn cube_never_guesses() {
    let f = derivatives(
        |x| 3.0 * power(x, 2),
        |x| 6.0 * x,
    );

    for classifier in [HigherOrderTest::new(2), HigherOrderTest::default()] {
        let found = extrema::find_unobserved(&f, domain(-1.0, 1.0), &config(), &classifier)
            .expect("search should succeed");

        let origin = found.point_near(0.0, 1e-3).expect("stationary point at 0");
        assert_eq!(origin.location(), Location::Interior);
        assert_eq!(origin.classification(), Extremum::Unknown);
    }
}

#[test]
fn constant_derivative_reports_no_convergence() {
    let f = derivatives(|_| Interval::point(3.0), |_| Interval::ZERO);

    let solution = newton::solve_unobserved(&f, domain(-5.0, 5.0), &config())
        .expect("solve should succeed");

    assert!(!solution.converged());
    assert!(solution.enclosures.is_empty());
}

#[test]
fn stationary_points_of_a_double_well() {
    // f(x) = x⁴ - 2x², with minima at ±1 and a maximum at 0.
    let f = function(
        |x: Interval| power(x, 4) - 2.0 * power(x, 2),
        |x: Interval| 4.0 * power(x, 3) - 4.0 * x,
        |x: Interval| 12.0 * power(x, 2) - 4.0,
    );

    let found = extrema::find_unobserved(&f, domain(-2.0, 2.5), &config(), &SecondDerivativeTest)
        .expect("search should succeed");

    assert!(found.converged());
    for (x, kind) in [
        (-1.0, Extremum::Minimum),
        (0.0, Extremum::Maximum),
        (1.0, Extremum::Minimum),
    ] {
        let point = found.point_near(x, 1e-3).expect("stationary point");
        assert!(point.enclosure().contains(x));
        assert_eq!(point.classification(), kind);
    }

    let minimum = extrema::global_minimum(&f, domain(-2.0, 2.5), &config())
        .expect("search should succeed");
    assert_eq!(minimum.status, Status::Converged);
    assert_relative_eq!(minimum.point.representative().abs(), 1.0, epsilon = 1e-3);
    assert!(minimum.value.hi() < -0.99);
}

#[test]
fn reports_read_like_point_listings() {
    let f = derivatives(Interval::cos, |x: Interval| -x.sin());

    let found = extrema::find_unobserved(&f, domain(0.0, PI), &config(), &SecondDerivativeTest)
        .expect("search should succeed");

    let lines: Vec<String> = found.points.iter().map(ToString::to_string).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Point 0 ± 0, type = Minimum");
    assert!(lines[1].starts_with("Point 1.57"));
    assert!(lines[1].ends_with("type = Maximum"));
}
