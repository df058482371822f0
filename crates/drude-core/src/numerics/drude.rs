use crate::domain::{DispersionError, DispersionResult};
use num_complex::Complex64;

/// Free-electron model parameters. `eps_inf` is the high-frequency
/// permittivity, `omega_p` the plasma frequency in rad/s, `gamma` the
/// damping rate in 1/s; all strictly positive physical quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrudeParameters {
    pub eps_inf: f64,
    pub omega_p: f64,
    pub gamma: f64,
}

impl DrudeParameters {
    pub fn new(eps_inf: f64, omega_p: f64, gamma: f64) -> Self {
        Self {
            eps_inf,
            omega_p,
            gamma,
        }
    }

    pub fn validate(&self) -> DispersionResult<()> {
        for (field, value) in [
            ("eps_inf", self.eps_inf),
            ("omega_p", self.omega_p),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DispersionError::NonPositiveParameter { field, value });
            }
        }
        Ok(())
    }
}

pub trait DrudePermittivityApi {
    fn drude_permittivity(
        &self,
        omega: f64,
        parameters: DrudeParameters,
    ) -> DispersionResult<Complex64>;
}

/// Drude dispersion `eps(omega) = eps_inf - omega_p^2 / (omega^2 + i*gamma*omega)`.
///
/// `omega = 0` would zero the denominator and is rejected along with any
/// non-positive parameter. The complex division is the standard
/// double-precision formula supplied by `num-complex`; no shortcut
/// approximations are taken anywhere in the evaluation.
pub fn drude_permittivity(
    omega: f64,
    parameters: DrudeParameters,
) -> DispersionResult<Complex64> {
    parameters.validate()?;
    if !omega.is_finite() || omega <= 0.0 {
        return Err(DispersionError::FrequencyOutOfDomain { value: omega });
    }

    let denominator = Complex64::new(omega * omega, parameters.gamma * omega);
    let susceptibility = parameters.omega_p * parameters.omega_p / denominator;
    Ok(Complex64::new(parameters.eps_inf, 0.0) - susceptibility)
}
