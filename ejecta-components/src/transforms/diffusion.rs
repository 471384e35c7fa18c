//! Photon diffusion through expanding, optically thick ejecta.
//!
//! Converts an input heating curve (for example radioactive decay) into the
//! observed bolometric luminosity. Each output point is a convolution of the
//! input curve with the Arnett diffusion kernel, scaled by the fraction of
//! gamma rays trapped in the ejecta:
//!
//! ```text
//! L(te) = ∫ 2 L_in(t) t / τ² · exp((t² − te²) / τ²) dt · (1 − exp(−A / te²))
//! ```
//!
//! where `τ` is the diffusion timescale and `A` the trapping coefficient.
//! The integral runs over `[tb, te]`, with `tb` placed [`MIN_EXP_ARG`]
//! diffusion times before `te` (floored at the explosion), and is evaluated
//! with the trapezoidal rule on [`N_INT_TIMES`] evenly spaced points.

mod error;
mod params;


use ejecta_core::{Model, constants::DAY_CGS};
use ndarray::Array1;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    interpolation::{InterpError, LuminosityTable},
    quadrature::{linspace, trapezoid},
};

pub use error::DiffusionError;
pub use params::{DerivedScalars, EjectaParameters};

/// Number of abscissas in each integration window, endpoints included.
pub const N_INT_TIMES: usize = 20;

/// Length of the integration window, in diffusion timescales.
pub const MIN_EXP_ARG: f64 = 20.0;

/// Keyword inputs supplied by the fitting pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffusionInput {
    #[serde(flatten)]
    pub parameters: EjectaParameters,

    /// Observation times, in days.
    pub times: Vec<f64>,

    /// Source luminosity at each time, in erg/s.
    pub luminosities: Vec<f64>,
}

/// Diffused luminosities, one per input time and in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffusionOutput {
    pub luminosities: Vec<f64>,
}

/// The diffusion transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diffusion;

impl Diffusion {
    /// Diffuses `luminosities` sampled at `times` through ejecta described by
    /// `parameters`.
    ///
    /// Times before or at the explosion yield zero. The source curve is
    /// interpolated over the whole series regardless of each point's window.
    ///
    /// # Errors
    ///
    /// Returns [`DiffusionError::LengthMismatch`] if the series differ in
    /// length, or [`DiffusionError::Interpolation`] if the source curve cannot
    /// be sampled.
    pub fn process(
        parameters: &EjectaParameters,
        times: &[f64],
        luminosities: &[f64],
    ) -> Result<Vec<f64>, DiffusionError> {
        if times.len() != luminosities.len() {
            return Err(DiffusionError::LengthMismatch {
                times: times.len(),
                luminosities: luminosities.len(),
            });
        }

        let times_since_exp: Vec<f64> = times
            .iter()
            .map(|&t| (t - parameters.t_explosion) * DAY_CGS)
            .collect();

        let scalars = DerivedScalars::from_parameters(parameters);
        let table = LuminosityTable::new(&times_since_exp, luminosities)?;

        debug!(
            tau_diff = scalars.tau_diff,
            trap_coeff = scalars.trap_coeff,
            points = times.len(),
            "diffusing luminosity curve"
        );

        #[cfg(feature = "parallel")]
        let iter = times_since_exp.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = times_since_exp.iter();

        let diffused = iter
            .map(|&te| diffuse_point(te, &scalars, &table))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(diffused)
    }
}

impl Model for Diffusion {
    type Input = DiffusionInput;
    type Output = DiffusionOutput;
    type Error = DiffusionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let luminosities = Self::process(&input.parameters, &input.times, &input.luminosities)?;
        Ok(DiffusionOutput { luminosities })
    }
}

/// Returns the start of the integration window ending at `te`.
///
/// The window reaches back [`MIN_EXP_ARG`] diffusion timescales in `t²`,
/// floored at zero. A NaN timescale passes through as NaN.
fn window_start(te: f64, tau_diff: f64) -> f64 {
    let span = te.powi(2) - (MIN_EXP_ARG * tau_diff).powi(2);
    let span = if 0.0 > span { 0.0 } else { span };
    span.sqrt()
}

/// Computes the diffused luminosity at `te` seconds after explosion.
fn diffuse_point(
    te: f64,
    scalars: &DerivedScalars,
    table: &LuminosityTable,
) -> Result<f64, InterpError> {
    if te <= 0.0 {
        return Ok(0.0);
    }

    let DerivedScalars {
        tau_diff: td,
        trap_coeff: a,
    } = *scalars;
    let td2 = td.powi(2);
    let te2 = te.powi(2);
    let trapped = 1.0 - (-a / te2).exp();

    let int_times = linspace(window_start(te, td), te, N_INT_TIMES);
    let int_args = int_times
        .iter()
        .map(|&t| -> Result<f64, InterpError> {
            let l = table.sample(t)?;
            let arg = 2.0 * l * t / td2 * ((t.powi(2) - te2) / td2).exp() * trapped;
            Ok(if arg.is_nan() { 0.0 } else { arg })
        })
        .collect::<Result<Array1<f64>, _>>()?;

    Ok(trapezoid(int_args.view(), int_times.view()))
}
