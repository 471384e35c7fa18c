//! Shared fixtures for cross-crate tests.

/// Radioactive heating from the ⁵⁶Ni → ⁵⁶Co → ⁵⁶Fe chain, in erg/s.
///
/// `t` is days since explosion and `m_nickel` the initial nickel mass in
/// solar masses. Times before the explosion produce no heating.
#[must_use]
pub fn nickel_cobalt_heating(t: f64, m_nickel: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    m_nickel * (6.45e43 * (-t / 8.8).exp() + 1.45e43 * (-t / 111.3).exp())
}

/// Observation epochs every two days from two days before explosion.
#[must_use]
pub fn epochs() -> Vec<f64> {
    (0..22).map(|i| -2.0 + 2.0 * f64::from(i)).collect()
}

/// Heating sampled at each epoch for 0.6 solar masses of nickel.
#[must_use]
pub fn heating_curve(times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| nickel_cobalt_heating(t, 0.6)).collect()
}
