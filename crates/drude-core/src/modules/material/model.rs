use crate::common::constants::{HC_EV_NM, NM_TO_M, PI2};
use crate::domain::{DispersionError, DispersionResult};

/// One measured row of the optical table: wavelength in nanometres,
/// refractive index `n`, extinction coefficient `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalSample {
    pub wavelength_nm: f64,
    pub n: f64,
    pub k: f64,
}

impl OpticalSample {
    pub fn new(wavelength_nm: f64, n: f64, k: f64) -> Self {
        Self {
            wavelength_nm,
            n,
            k,
        }
    }
}

/// Value object over the loaded optical table. Construction derives the
/// permittivity and frequency sequences once; afterwards the set is
/// read-only and every accessor returns an index-aligned slice, so index
/// `i` always refers to the same physical sample across wavelength, n, k,
/// omega, energy, eps1, and eps2.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalSampleSet {
    wavelength: Vec<f64>,
    n: Vec<f64>,
    k: Vec<f64>,
    omega: Vec<f64>,
    energy: Vec<f64>,
    eps1: Vec<f64>,
    eps2: Vec<f64>,
}

impl OpticalSampleSet {
    /// Build the set from ordered `(lambda, n, k)` rows. The sequence is
    /// expected in increasing wavelength order; that ordering is assumed by
    /// downstream reporting, not enforced here. An empty sequence is an
    /// input-validation error because min/max wavelength statistics would be
    /// undefined.
    pub fn from_samples(
        samples: &[OpticalSample],
        speed_of_light: f64,
    ) -> DispersionResult<Self> {
        if samples.is_empty() {
            return Err(DispersionError::EmptySampleSet);
        }
        if !speed_of_light.is_finite() || speed_of_light <= 0.0 {
            return Err(DispersionError::NonPositiveParameter {
                field: "speed_of_light",
                value: speed_of_light,
            });
        }

        let mut set = Self {
            wavelength: Vec::with_capacity(samples.len()),
            n: Vec::with_capacity(samples.len()),
            k: Vec::with_capacity(samples.len()),
            omega: Vec::with_capacity(samples.len()),
            energy: Vec::with_capacity(samples.len()),
            eps1: Vec::with_capacity(samples.len()),
            eps2: Vec::with_capacity(samples.len()),
        };

        for (row, sample) in samples.iter().enumerate() {
            validate_sample(sample, row)?;
            set.wavelength.push(sample.wavelength_nm);
            set.n.push(sample.n);
            set.k.push(sample.k);
            set.omega
                .push(PI2 * speed_of_light / (sample.wavelength_nm * NM_TO_M));
            set.energy.push(HC_EV_NM / sample.wavelength_nm);
            set.eps1.push(sample.n * sample.n - sample.k * sample.k);
            set.eps2.push(2.0 * sample.n * sample.k);
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty tables, kept for slice-like symmetry.
        self.wavelength.is_empty()
    }

    pub fn wavelength(&self) -> &[f64] {
        &self.wavelength
    }

    pub fn n(&self) -> &[f64] {
        &self.n
    }

    pub fn k(&self) -> &[f64] {
        &self.k
    }

    /// Angular frequency per sample, rad/s.
    pub fn omega(&self) -> &[f64] {
        &self.omega
    }

    /// Photon energy per sample, eV.
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Real permittivity `n^2 - k^2` per sample.
    pub fn eps1(&self) -> &[f64] {
        &self.eps1
    }

    /// Imaginary permittivity `2nk` per sample.
    pub fn eps2(&self) -> &[f64] {
        &self.eps2
    }

    /// First and last tabulated wavelength, nm.
    pub fn wavelength_span(&self) -> (f64, f64) {
        (self.wavelength[0], self.wavelength[self.len() - 1])
    }
}

fn validate_sample(sample: &OpticalSample, row: usize) -> DispersionResult<()> {
    if !sample.wavelength_nm.is_finite() || sample.wavelength_nm <= 0.0 {
        return Err(DispersionError::InvalidSampleValue {
            field: "wavelength",
            requirement: "> 0",
            row,
            value: sample.wavelength_nm,
        });
    }
    for (field, value) in [("n", sample.n), ("k", sample.k)] {
        if !value.is_finite() || value < 0.0 {
            return Err(DispersionError::InvalidSampleValue {
                field,
                requirement: ">= 0",
                row,
                value,
            });
        }
    }
    Ok(())
}
