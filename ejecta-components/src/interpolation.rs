//! One-dimensional interpolation over tabulated light curves.
//!
//! [`LuminosityTable`] samples an irregular, possibly unsorted luminosity
//! series with `ninterp`'s linear strategy, clamped at both ends.

mod error;
mod table;

pub use error::InterpError;
pub use table::LuminosityTable;
