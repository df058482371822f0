//! Physical constants shared across the dispersion kernels.
//!
//! Values live here so model, metric, and sample derivations never carry
//! ad hoc per-module literal constants.

pub const PI: f64 = 3.141_592_653_589_793_238_462_643_383_279_5_f64;
pub const PI2: f64 = 6.283_185_307_179_586_476_925_286_766_559_f64;

/// Speed of light in vacuum, m/s (CODATA exact).
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8_f64;

/// Photon energy conversion `E[eV] = HC_EV_NM / lambda[nm]`.
pub const HC_EV_NM: f64 = 1_240.0_f64;

/// Nanometre in metres, for wavelength-to-frequency conversion.
pub const NM_TO_M: f64 = 1.0e-9_f64;

/// Regularization floor in the normalized error metric, guards the
/// denominator for near-zero-permittivity samples.
pub const EPS_REG: f64 = 1.0e-12_f64;
