//! Photometric band lookups for light-curve plots.
//!
//! Maps band codes to canonical names, aliases, instrument groups, effective
//! wavelengths, display offsets, and plot colors. Unknown codes fall back to
//! neutral values (the code itself, `""`, `0.0`, or `"black"`), so callers can
//! pass through whatever band labels their photometry carries.

mod colors;
mod husl;
mod palette;
mod tables;

pub use colors::{band_color, radio_color, xray_color};
pub use palette::Cubehelix;
pub use tables::{
    BAND_CODES, MetaField, band_alias, band_group, band_meta, band_offset, band_rep,
    band_short_alias, band_wavelength,
};
