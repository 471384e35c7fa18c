//! Transforms that turn an input luminosity curve into an observed one.

pub mod diffusion;

pub use diffusion::{Diffusion, DiffusionError, DiffusionInput, DiffusionOutput};
