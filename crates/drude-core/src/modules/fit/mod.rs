mod model;

pub use model::{FitResult, GridCandidate, ParameterGrid};

use crate::domain::{DispersionError, DispersionResult, FitConfig};
use crate::modules::material::OpticalSampleSet;
use crate::numerics::drude::{DrudeParameters, drude_permittivity};
use crate::numerics::metric::{FitErrorInput, windowed_fit_error};

/// Exhaustive brute-force search over the `(omega_p, gamma)` grid.
///
/// Deliberately simple: no pruning, no early termination, no local-minima
/// risk, O(P * G * S) in the two grid sizes and the sample count. Each
/// candidate only reads the immutable sample set and configuration, so the
/// loop body is trivially partitionable; the shipped implementation runs it
/// sequentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSearchOptimizer {
    config: FitConfig,
}

impl GridSearchOptimizer {
    pub fn new(config: FitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Run the full grid search and return the winning parameters, the
    /// minimum error, and the model curve at every sample frequency.
    ///
    /// The incumbent starts at `f64::INFINITY` and is replaced on strict
    /// `<` only, so the first candidate in enumeration order wins ties;
    /// later equal candidates never displace it.
    pub fn search(&self, samples: &OpticalSampleSet) -> DispersionResult<FitResult> {
        self.config.validate()?;
        let grid = ParameterGrid::new(self.config.omega_p, self.config.gamma)?;

        let mut best_error = f64::INFINITY;
        let mut winner: Option<GridCandidate> = None;
        for candidate in grid.candidates() {
            let parameters = DrudeParameters::new(
                self.config.eps_inf,
                candidate.omega_p,
                candidate.gamma,
            );
            let error = windowed_fit_error(FitErrorInput::new(
                samples.omega(),
                samples.eps1(),
                samples.eps2(),
                parameters,
                self.config.window,
            ))?;
            if error < best_error {
                best_error = error;
                winner = Some(candidate);
            }
        }

        // A validated grid always holds at least one candidate.
        let winner = winner.ok_or(DispersionError::EmptySearchSpace {
            axis: "omega_p",
            min: self.config.omega_p.min,
            max: self.config.omega_p.max,
        })?;

        let winning_parameters =
            DrudeParameters::new(self.config.eps_inf, winner.omega_p, winner.gamma);
        let mut model_eps1 = Vec::with_capacity(samples.len());
        let mut model_eps2 = Vec::with_capacity(samples.len());
        for &omega in samples.omega() {
            let model = drude_permittivity(omega, winning_parameters)?;
            model_eps1.push(model.re);
            model_eps2.push(model.im);
        }

        Ok(FitResult {
            best_omega_p: winner.omega_p,
            best_gamma: winner.gamma,
            best_error,
            best_candidate_index: winner.index,
            candidates_evaluated: grid.candidate_count(),
            model_eps1,
            model_eps2,
        })
    }
}
