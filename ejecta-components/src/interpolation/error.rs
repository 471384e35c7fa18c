use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

/// Errors raised while building or evaluating an interpolator.
#[derive(Error, Debug)]
pub enum InterpError {
    /// The grid was rejected, e.g. abscissas that are not strictly increasing.
    #[error(transparent)]
    Validation(#[from] ValidateError),

    /// The interpolant point could not be evaluated.
    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}
