use ejecta_core::constants::{C_CGS, FOUR_PI, KM_CGS, M_SUN_CGS};
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Mass, Time, Velocity},
    mass::gram,
    time::day,
    velocity::kilometer_per_second,
};

/// Calibration factor of the analytic diffusion solution.
const DIFFUSION_GEOMETRY: f64 = 13.7;

/// Physical parameters of the expanding ejecta.
///
/// Field names on the wire follow the pipeline's keyword names
/// (`texplosion`, `kappa`, `kappagamma`, `mejecta`, `vejecta`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EjectaParameters {
    /// Explosion epoch, in days.
    #[serde(rename = "texplosion")]
    pub t_explosion: f64,

    /// Optical opacity, in cm²/g.
    pub kappa: f64,

    /// Gamma-ray opacity, in cm²/g.
    #[serde(rename = "kappagamma")]
    pub kappa_gamma: f64,

    /// Ejecta mass, in solar masses.
    #[serde(rename = "mejecta")]
    pub m_ejecta: f64,

    /// Ejecta velocity, in km/s.
    #[serde(rename = "vejecta")]
    pub v_ejecta: f64,
}

impl EjectaParameters {
    /// Builds parameters from dimensioned explosion time, mass, and velocity.
    ///
    /// Opacities are passed in cm²/g.
    #[must_use]
    pub fn from_quantities(
        t_explosion: Time,
        kappa: f64,
        kappa_gamma: f64,
        m_ejecta: Mass,
        v_ejecta: Velocity,
    ) -> Self {
        Self {
            t_explosion: t_explosion.get::<day>(),
            kappa,
            kappa_gamma,
            m_ejecta: m_ejecta.get::<gram>() / M_SUN_CGS,
            v_ejecta: v_ejecta.get::<kilometer_per_second>(),
        }
    }
}

/// Scalars derived once per call and shared by every output point.
///
/// Non-positive mass or velocity is not rejected. A zero velocity makes both
/// scalars infinite, and a negative velocity makes `tau_diff` NaN; these
/// values flow through the transform under IEEE rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedScalars {
    /// Photon diffusion timescale, in seconds.
    pub tau_diff: f64,

    /// Gamma-ray trapping coefficient, in s².
    pub trap_coeff: f64,
}

impl DerivedScalars {
    #[must_use]
    pub fn from_parameters(parameters: &EjectaParameters) -> Self {
        let EjectaParameters {
            kappa,
            kappa_gamma,
            m_ejecta,
            v_ejecta,
            ..
        } = *parameters;

        let v_ejecta_cms = v_ejecta * KM_CGS;

        let tau_diff = (2.0 * kappa * m_ejecta * M_SUN_CGS
            / (DIFFUSION_GEOMETRY * C_CGS * v_ejecta_cms))
            .sqrt();
        let trap_coeff =
            3.0 * kappa_gamma * m_ejecta * M_SUN_CGS / (FOUR_PI * v_ejecta_cms.powi(2));

        Self {
            tau_diff,
            trap_coeff,
        }
    }
}
