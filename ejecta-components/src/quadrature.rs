//! Fixed-grid quadrature helpers.

use ndarray::{Array1, ArrayView1, s};

/// Returns `n` evenly spaced samples over `[start, stop]`.
///
/// Both endpoints are included and the last sample is exactly `stop`, even
/// when accumulated spacing would land a rounding error away from it.
#[must_use]
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    let mut grid = Array1::linspace(start, stop, n);
    if let Some(last) = grid.last_mut() {
        *last = stop;
    }
    grid
}

/// Integrates sampled values `y` over abscissas `x` with the composite
/// trapezoidal rule.
///
/// Fewer than two samples integrate to zero. The abscissas need not be evenly
/// spaced; a decreasing grid yields a negated integral.
///
/// # Panics
///
/// Panics if `y` and `x` have different lengths.
#[must_use]
pub(crate) fn trapezoid(y: ArrayView1<'_, f64>, x: ArrayView1<'_, f64>) -> f64 {
    assert_eq!(y.len(), x.len(), "trapezoid needs one sample per abscissa");
    if x.len() < 2 {
        return 0.0;
    }

    let widths = &x.slice(s![1..]) - &x.slice(s![..-1]);
    let heights = &y.slice(s![1..]) + &y.slice(s![..-1]);
    (widths * heights / 2.0).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn linspace_includes_both_endpoints() {
        let grid = linspace(0.1, 0.7, 20);

        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0], 0.1);
        assert_eq!(grid[19], 0.7);
        assert_relative_eq!(grid[1] - grid[0], 0.6 / 19.0, max_relative = 1e-12);
    }

    #[test]
    fn linspace_over_a_point_repeats_it() {
        let grid = linspace(3.0, 3.0, 5);
        assert!(grid.iter().all(|&t| t == 3.0));
    }

    #[test]
    fn trapezoid_is_exact_for_linear_integrands() {
        let x = linspace(0.0, 2.0, 7);
        let y = x.mapv(|t| 3.0 * t + 1.0);

        assert_relative_eq!(trapezoid(y.view(), x.view()), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn trapezoid_handles_uneven_spacing() {
        let x = array![0.0, 1.0, 3.0];
        let y = array![0.0, 2.0, 2.0];

        // 1 * (0 + 2) / 2 + 2 * (2 + 2) / 2
        assert_relative_eq!(trapezoid(y.view(), x.view()), 5.0);
    }

    #[test]
    fn trapezoid_of_short_series_is_zero() {
        assert_eq!(trapezoid(array![4.0].view(), array![1.0].view()), 0.0);
        assert_eq!(
            trapezoid(Array1::<f64>::zeros(0).view(), Array1::zeros(0).view()),
            0.0
        );
    }

    #[test]
    #[should_panic(expected = "one sample per abscissa")]
    fn trapezoid_rejects_unpaired_samples() {
        let _ = trapezoid(array![1.0, 2.0].view(), array![0.0, 1.0, 2.0].view());
    }

    #[test]
    fn nan_abscissa_poisons_the_integral() {
        let x = array![f64::NAN, 1.0];
        let y = array![0.0, 0.0];

        assert!(trapezoid(y.view(), x.view()).is_nan());
    }
}
