use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};
use tracing::trace;

use super::InterpError;

/// A luminosity series prepared for piecewise-linear sampling.
///
/// Observations arrive in whatever order the caller recorded them, so the
/// table sorts them by time before handing them to the interpolator. Queries
/// outside the tabulated range return the nearest boundary luminosity rather
/// than extending the end segments.
#[derive(Debug)]
pub struct LuminosityTable {
    kind: TableKind,
    len: usize,
}

#[derive(Debug)]
enum TableKind {
    Empty,
    Constant(f64),
    Interpolated(Interp1DOwned<f64, Linear>),
}

impl LuminosityTable {
    /// Builds a table from paired `times` and `luminosities`.
    ///
    /// Pairs are stably sorted by time. Non-finite times cannot be ordered and
    /// are dropped. When a time repeats, the first pair in sorted order wins.
    /// Extra trailing entries in the longer slice are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Validation`] if the underlying interpolator
    /// rejects the prepared grid.
    pub fn new(times: &[f64], luminosities: &[f64]) -> Result<Self, InterpError> {
        let mut pairs: Vec<(f64, f64)> = times
            .iter()
            .copied()
            .zip(luminosities.iter().copied())
            .filter(|(t, _)| t.is_finite())
            .collect();

        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        pairs.dedup_by(|later, earlier| later.0 == earlier.0);

        trace!(
            points = pairs.len(),
            dropped = times.len().min(luminosities.len()) - pairs.len(),
            "built luminosity table"
        );

        let len = pairs.len();
        let kind = match len {
            0 => TableKind::Empty,
            1 => TableKind::Constant(pairs[0].1),
            _ => {
                let (x, f_x): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                TableKind::Interpolated(Interp1DOwned::new(
                    Array1::from(x),
                    Array1::from(f_x),
                    Linear,
                    Extrapolate::Clamp,
                )?)
            }
        };

        Ok(Self { kind, len })
    }

    /// Returns the number of distinct points in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples the luminosity at time `x`.
    ///
    /// An empty table or a NaN query yields NaN.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Interpolation`] if the interpolator fails.
    pub fn sample(&self, x: f64) -> Result<f64, InterpError> {
        if x.is_nan() {
            return Ok(f64::NAN);
        }
        match &self.kind {
            TableKind::Empty => Ok(f64::NAN),
            TableKind::Constant(lum) => Ok(*lum),
            TableKind::Interpolated(interp) => Ok(interp.interpolate(&[x])?),
        }
    }
}
