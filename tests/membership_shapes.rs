use fuzzy_aqi::FuzzyAqiError;
use fuzzy_aqi::membership::MembershipFunction;

fn sweep(from: f64, to: f64) -> impl Iterator<Item = f64> {
    let n = 2000;
    (0..=n).map(move |i| from + (to - from) * i as f64 / n as f64)
}

fn shapes() -> Vec<MembershipFunction> {
    vec![
        MembershipFunction::triangular(15.0, 45.0, 75.0).unwrap(),
        MembershipFunction::triangular(0.0, 0.0, 10.0).unwrap(),
        MembershipFunction::triangular(0.0, 10.0, 10.0).unwrap(),
        MembershipFunction::triangular(5.0, 5.0, 5.0).unwrap(),
        MembershipFunction::trapezoidal(0.0, 0.0, 15.0, 45.0).unwrap(),
        MembershipFunction::trapezoidal(185.0, 315.0, 445.0, 445.0).unwrap(),
        MembershipFunction::trapezoidal(1.0, 1.0, 1.0, 1.0).unwrap(),
    ]
}

#[test]
fn membership_stays_within_unit_interval() {
    for mf in shapes() {
        for x in sweep(-1000.0, 1000.0) {
            let m = mf.evaluate(x);
            assert!((0.0..=1.0).contains(&m), "{mf} at {x} gave {m}");
        }
        for x in [f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN, f64::NAN] {
            let m = mf.evaluate(x);
            assert!((0.0..=1.0).contains(&m), "{mf} at {x} gave {m}");
        }
    }
}

#[test]
fn triangle_peaks_at_its_middle_point() {
    let mf = MembershipFunction::triangular(15.0, 45.0, 75.0).unwrap();
    assert_eq!(mf.evaluate(45.0), 1.0);
    assert_eq!(mf.evaluate(30.0), 0.5);
    assert_eq!(mf.evaluate(60.0), 0.5);
}

#[test]
fn trapezoid_plateau_is_full_membership() {
    let mf = MembershipFunction::trapezoidal(0.0, 0.0, 15.0, 45.0).unwrap();
    for x in sweep(0.0, 15.0) {
        assert_eq!(mf.evaluate(x), 1.0, "at {x}");
    }
    assert_eq!(mf.evaluate(30.0), 0.5);
}

#[test]
fn nothing_outside_the_support() {
    let tri = MembershipFunction::triangular(15.0, 45.0, 75.0).unwrap();
    let trap = MembershipFunction::trapezoidal(185.0, 315.0, 445.0, 445.0).unwrap();
    for x in sweep(-500.0, 15.0) {
        assert_eq!(tri.evaluate(x), 0.0, "at {x}");
    }
    for x in sweep(75.0, 500.0) {
        assert_eq!(tri.evaluate(x), 0.0, "at {x}");
    }
    assert_eq!(trap.evaluate(185.0), 0.0);
    assert_eq!(trap.evaluate(445.5), 0.0);
    assert_eq!(trap.evaluate(1e9), 0.0);
}

#[test]
fn coinciding_points_are_vertical_edges() {
    // left shoulder: full membership right at the edge
    let left = MembershipFunction::trapezoidal(0.0, 0.0, 25.0, 75.0).unwrap();
    assert_eq!(left.evaluate(0.0), 1.0);
    assert_eq!(left.evaluate(-0.001), 0.0);
    // right shoulder closing at the universe maximum
    let right = MembershipFunction::trapezoidal(390.0, 470.0, 550.0, 550.0).unwrap();
    assert_eq!(right.evaluate(550.0), 1.0);
    assert_eq!(right.evaluate(550.001), 0.0);
    // fully degenerate shapes are a single point
    let spike = MembershipFunction::triangular(5.0, 5.0, 5.0).unwrap();
    assert_eq!(spike.evaluate(5.0), 1.0);
    assert_eq!(spike.evaluate(4.999), 0.0);
    assert_eq!(spike.evaluate(5.001), 0.0);
}

#[test]
fn out_of_order_points_are_rejected() {
    assert!(matches!(
        MembershipFunction::triangular(10.0, 5.0, 20.0),
        Err(FuzzyAqiError::Configuration(_))
    ));
    assert!(matches!(
        MembershipFunction::trapezoidal(0.0, 10.0, 5.0, 20.0),
        Err(FuzzyAqiError::Configuration(_))
    ));
    assert!(matches!(
        MembershipFunction::trapezoidal(0.0, f64::NAN, 5.0, 20.0),
        Err(FuzzyAqiError::Configuration(_))
    ));
    // built directly, the variant is still checked when used as a term
    assert!(MembershipFunction::Triangular(3.0, 2.0, 1.0).validate().is_err());
}
