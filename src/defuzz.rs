use crate::aggregate::SampledCurve;

/// Samples within this distance of the curve maximum count as the plateau.
/// Absolute, so near-ties from floating-point noise stay in.
const PLATEAU_TOLERANCE: f64 = 1e-6;

/// Reduces an aggregated curve to one crisp value by mean of maxima.
///
/// The result is the midpoint between the outermost samples of the maximal
/// plateau. An empty curve, or one no rule lifted above zero, yields 0.0.
pub fn mean_of_maxima(curve: &SampledCurve) -> f64 {
    let Some(max) = curve.memberships().iter().copied().reduce(f64::max) else {
        return 0.;
    };

    if max == 0. {
        return 0.;
    }

    let mut plateau = curve
        .iter()
        .filter(|&(_, m)| max - m <= PLATEAU_TOLERANCE)
        .map(|(s, _)| s);

    let Some(left) = plateau.next() else {
        return 0.;
    };
    let right = plateau.last().unwrap_or(left);

    (left + right) / 2.
}

#[test]
fn test_flat_top_midpoint() {
    let samples: Vec<f64> = (0..=100).map(|i| i as f64 / 10.).collect();
    let memberships = samples
        .iter()
        .map(|&s| if (4.0..=6.0).contains(&s) { 1. } else { 0.2 })
        .collect();
    let curve = SampledCurve::from_parts(samples, memberships);

    assert_eq!(mean_of_maxima(&curve), 5.);
}

#[test]
fn test_single_peak() {
    let curve = SampledCurve::from_parts(vec![0., 1., 2.], vec![0.1, 0.9, 0.1]);

    assert_eq!(mean_of_maxima(&curve), 1.);
}

#[test]
fn test_near_ties_join_the_plateau() {
    let curve = SampledCurve::from_parts(vec![0., 1., 2.], vec![0.9, 0.9 - 1e-9, 0.2]);

    assert_eq!(mean_of_maxima(&curve), 0.5);
}

#[test]
fn test_empty_curve() {
    assert_eq!(mean_of_maxima(&SampledCurve::default()), 0.);
}

#[test]
fn test_all_zero_curve() {
    let curve = SampledCurve::from_parts(vec![1., 2., 3.], vec![0., 0., 0.]);

    assert_eq!(mean_of_maxima(&curve), 0.);
}
