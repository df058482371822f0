pub mod errors;

pub use errors::{DispersionError, DispersionErrorCategory, DispersionResult};

use crate::common::constants::SPEED_OF_LIGHT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Inclusive angular-frequency interval in which the Drude model is assumed
/// valid; samples outside it never contribute to the fit error.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct FitWindow {
    pub omega_min: f64,
    pub omega_max: f64,
}

impl FitWindow {
    pub fn new(omega_min: f64, omega_max: f64) -> DispersionResult<Self> {
        let window = Self {
            omega_min,
            omega_max,
        };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> DispersionResult<()> {
        if !self.omega_min.is_finite()
            || !self.omega_max.is_finite()
            || self.omega_min <= 0.0
            || self.omega_min >= self.omega_max
        {
            return Err(DispersionError::InvalidWindow {
                omega_min: self.omega_min,
                omega_max: self.omega_max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, omega: f64) -> bool {
        omega >= self.omega_min && omega <= self.omega_max
    }
}

/// Fixed-step parameter axis. Candidate `i` sits at `min + i * step`; the
/// count is `floor((max - min) / step) + 1`, so `max` itself is included
/// exactly when the span divides by the step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn validate(&self, axis: &'static str) -> DispersionResult<()> {
        for (field, value) in [
            ("range min", self.min),
            ("range max", self.max),
            ("range step", self.step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DispersionError::NonPositiveParameter { field, value });
            }
        }
        if self.min >= self.max {
            return Err(DispersionError::EmptySearchSpace {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of candidates on a validated axis.
    pub fn candidate_count(&self) -> usize {
        ((self.max - self.min) / self.step).floor() as usize + 1
    }

    pub fn candidate(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step
    }
}

/// Immutable fit configuration. One instance per fit run, so several fits
/// (different metals, different windows) can run side by side without
/// interfering through shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FitConfig {
    /// Speed of light in vacuum, m/s.
    pub speed_of_light: f64,
    /// High-frequency permittivity, held fixed during the search.
    pub eps_inf: f64,
    pub window: FitWindow,
    pub omega_p: ParameterRange,
    pub gamma: ParameterRange,
}

impl Default for FitConfig {
    /// Silver-flavored defaults: the window sits below the interband edge
    /// (~3.9 eV) and the ranges bracket the literature plasma frequency
    /// (~1.37e16 rad/s) and damping rate (~2.7e13 1/s).
    fn default() -> Self {
        Self {
            speed_of_light: SPEED_OF_LIGHT,
            eps_inf: 3.7,
            window: FitWindow {
                omega_min: 1.5e15,
                omega_max: 5.0e15,
            },
            omega_p: ParameterRange::new(1.2e16, 1.5e16, 5.0e13),
            gamma: ParameterRange::new(1.0e13, 1.0e14, 1.0e12),
        }
    }
}

impl FitConfig {
    pub fn validate(&self) -> DispersionResult<()> {
        if !self.speed_of_light.is_finite() || self.speed_of_light <= 0.0 {
            return Err(DispersionError::NonPositiveParameter {
                field: "speed_of_light",
                value: self.speed_of_light,
            });
        }
        if !self.eps_inf.is_finite() || self.eps_inf <= 0.0 {
            return Err(DispersionError::NonPositiveParameter {
                field: "eps_inf",
                value: self.eps_inf,
            });
        }
        self.window.validate()?;
        self.omega_p.validate("omega_p")?;
        self.gamma.validate("gamma")?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FitConfigError {
    #[error("failed to read fit configuration '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse fit configuration '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a `FitConfig` from a JSON file; omitted fields keep their defaults.
pub fn load_fit_config(config_path: impl AsRef<Path>) -> Result<FitConfig, FitConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| FitConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| FitConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}
