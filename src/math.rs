use num::Float;

/// Evaluates a piecewise-linear membership function at `x`.
///
/// Knots may arrive in any order; they are sorted by x before evaluation.
/// Fewer than two knots always yields zero.
pub fn membership<F: Float>(x: F, points: &[(F, F)]) -> F {
    let mut sorted = points.to_vec();

    sorted.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).expect("not to find unsortable floats"));

    membership_sorted(x, &sorted)
}

/// Evaluation path for knots already sorted by x.
///
/// Outside the knot span the curve holds the outermost knot's y (flat
/// extrapolation, so an open-ended term like "at most cold" stays active).
/// A zero-width segment yields the midpoint of its two y values.
pub(crate) fn membership_sorted<F: Float>(x: F, points: &[(F, F)]) -> F {
    if points.len() < 2 {
        return F::zero();
    }

    let (first_x, first_y) = points[0];
    let (last_x, last_y) = points[points.len() - 1];

    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    for pair in points.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];

        if x1 <= x && x <= x2 {
            let dx = x2 - x1;

            if dx == F::zero() {
                return (y1 + y2) / (F::one() + F::one());
            }

            return y1 + (y2 - y1) * (x - x1) / dx;
        }
    }

    F::zero()
}

#[test]
fn test_membership_interpolates_between_knots() {
    let points = [(0., 0.), (10., 1.)];

    assert_eq!(membership(5., &points), 0.5);
    assert_eq!(membership(2.5, &points), 0.25);
}

#[test]
fn test_membership_extrapolates_flat() {
    let points = [(10., 0.3), (20., 0.9)];

    assert_eq!(membership(-100., &points), 0.3);
    assert_eq!(membership(10., &points), 0.3);
    assert_eq!(membership(20., &points), 0.9);
    assert_eq!(membership(150., &points), 0.9);
}

#[test]
fn test_membership_sorts_unsorted_knots() {
    let points = [(25., 0.), (0., 1.), (15., 1.)];

    assert_eq!(membership(19., &points), 0.6);
}

#[test]
fn test_membership_degenerate_knot_sets() {
    assert_eq!(membership::<f64>(3., &[]), 0.);
    assert_eq!(membership(3., &[(3., 1.)]), 0.);
}
