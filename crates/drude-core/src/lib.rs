//! Drude dispersion fitting engine.
//!
//! Converts tabulated optical constants `(wavelength, n, k)` of a metal into
//! complex permittivity and angular-frequency domains, evaluates the
//! free-electron (Drude) dispersion model, and extracts an effective plasma
//! frequency and damping rate with a windowed brute-force grid search.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
