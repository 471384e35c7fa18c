//! Core traits and constants shared by the ejecta workspace.
//!
//! - [`Model`] — a deterministic callable that maps a typed input to a typed output
//! - [`constants`] — CGS physical constants used by the light-curve transforms

pub mod constants;
mod model;

pub use model::Model;
