use crate::domain::{DispersionResult, ParameterRange};
use serde::{Deserialize, Serialize};

/// One `(omega_p, gamma)` pair of the search grid together with its stable
/// enumeration index. The index makes the tie-break order explicit: a
/// partitioned search can reduce on `(error, index)` lexicographically and
/// reproduce the sequential winner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCandidate {
    pub index: usize,
    pub omega_p: f64,
    pub gamma: f64,
}

/// Finite, deterministic 2-D search grid over plasma frequency and damping
/// rate. Enumeration is row-major: outer `omega_p` ascending, inner `gamma`
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterGrid {
    omega_p: ParameterRange,
    gamma: ParameterRange,
    omega_p_count: usize,
    gamma_count: usize,
}

impl ParameterGrid {
    pub fn new(omega_p: ParameterRange, gamma: ParameterRange) -> DispersionResult<Self> {
        omega_p.validate("omega_p")?;
        gamma.validate("gamma")?;
        Ok(Self {
            omega_p,
            gamma,
            omega_p_count: omega_p.candidate_count(),
            gamma_count: gamma.candidate_count(),
        })
    }

    pub fn candidate_count(&self) -> usize {
        self.omega_p_count * self.gamma_count
    }

    pub fn candidates(&self) -> impl Iterator<Item = GridCandidate> + '_ {
        (0..self.omega_p_count).flat_map(move |omega_p_index| {
            (0..self.gamma_count).map(move |gamma_index| GridCandidate {
                index: omega_p_index * self.gamma_count + gamma_index,
                omega_p: self.omega_p.candidate(omega_p_index),
                gamma: self.gamma.candidate(gamma_index),
            })
        })
    }
}

/// Immutable record of one completed grid search: winning parameters, the
/// minimum windowed error, and the model permittivity evaluated at every
/// sample frequency (full range, not just the fit window) for overlay
/// reporting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FitResult {
    pub best_omega_p: f64,
    pub best_gamma: f64,
    pub best_error: f64,
    pub best_candidate_index: usize,
    pub candidates_evaluated: usize,
    pub model_eps1: Vec<f64>,
    pub model_eps2: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::ParameterGrid;
    use crate::domain::{DispersionError, ParameterRange};

    #[test]
    fn enumeration_is_row_major_with_stable_indices() {
        let grid = ParameterGrid::new(
            ParameterRange::new(1.0e15, 2.0e15, 1.0e15),
            ParameterRange::new(1.0e13, 2.0e13, 1.0e13),
        )
        .expect("grid should build");

        assert_eq!(grid.candidate_count(), 4);
        let candidates: Vec<_> = grid.candidates().collect();
        let pairs: Vec<(usize, f64, f64)> = candidates
            .iter()
            .map(|candidate| (candidate.index, candidate.omega_p, candidate.gamma))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (0, 1.0e15, 1.0e13),
                (1, 1.0e15, 2.0e13),
                (2, 2.0e15, 1.0e13),
                (3, 2.0e15, 2.0e13),
            ]
        );
    }

    #[test]
    fn degenerate_axis_is_rejected_at_construction() {
        assert!(matches!(
            ParameterGrid::new(
                ParameterRange::new(2.0e15, 1.0e15, 1.0e15),
                ParameterRange::new(1.0e13, 2.0e13, 1.0e13),
            ),
            Err(DispersionError::EmptySearchSpace { axis: "omega_p", .. })
        ));
        assert!(matches!(
            ParameterGrid::new(
                ParameterRange::new(1.0e15, 2.0e15, 1.0e15),
                ParameterRange::new(2.0e13, 2.0e13, 1.0e13),
            ),
            Err(DispersionError::EmptySearchSpace { axis: "gamma", .. })
        ));
    }

    #[test]
    fn step_wider_than_span_keeps_the_lower_endpoint() {
        let grid = ParameterGrid::new(
            ParameterRange::new(1.0e15, 1.5e15, 1.0e15),
            ParameterRange::new(1.0e13, 2.0e13, 1.0e13),
        )
        .expect("grid should build");
        assert_eq!(grid.candidate_count(), 2);
        let omegas: Vec<f64> = grid.candidates().map(|candidate| candidate.omega_p).collect();
        assert_eq!(omegas, vec![1.0e15, 1.0e15]);
    }
}
