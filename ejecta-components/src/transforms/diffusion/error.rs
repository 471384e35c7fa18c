use thiserror::Error;

use crate::interpolation::InterpError;

/// Errors that can occur while diffusing a luminosity curve.
///
/// Numerically degenerate parameters are not errors: they produce zero, NaN,
/// or infinite luminosities under IEEE arithmetic.
#[derive(Debug, Error)]
pub enum DiffusionError {
    /// The time and luminosity series must pair up one-to-one.
    #[error("got {times} times but {luminosities} luminosities")]
    LengthMismatch { times: usize, luminosities: usize },

    /// The source luminosity series could not be interpolated.
    #[error("source luminosity interpolation failed: {0}")]
    Interpolation(#[from] InterpError),
}
