//! Light-curve transforms for expanding supernova ejecta.
//!
//! The transforms in this crate are [`Model`](ejecta_core::Model)s: pure
//! functions of their inputs that a parameter-estimation pipeline can call
//! repeatedly.

pub mod interpolation;
mod quadrature;
pub mod transforms;
