use crate::common::constants::EPS_REG;
use crate::domain::{DispersionError, DispersionResult, FitWindow};
use crate::numerics::drude::{DrudeParameters, drude_permittivity};

/// Borrowed, index-aligned view of the measured data compared against one
/// model candidate. Index `i` refers to the same physical sample in all
/// three slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitErrorInput<'a> {
    pub omega: &'a [f64],
    pub eps1: &'a [f64],
    pub eps2: &'a [f64],
    pub parameters: DrudeParameters,
    pub window: FitWindow,
}

impl<'a> FitErrorInput<'a> {
    pub fn new(
        omega: &'a [f64],
        eps1: &'a [f64],
        eps2: &'a [f64],
        parameters: DrudeParameters,
        window: FitWindow,
    ) -> Self {
        Self {
            omega,
            eps1,
            eps2,
            parameters,
            window,
        }
    }
}

pub trait FitErrorMetricApi {
    fn windowed_fit_error(&self, input: FitErrorInput<'_>) -> DispersionResult<f64>;
}

/// Windowed normalized least-squares distance between model and data.
///
/// For every sample whose `omega` lies inside the window (inclusive bounds)
/// the squared residual of real and imaginary permittivity is normalized by
/// `eps1^2 + eps2^2 + EPS_REG` and accumulated. Samples outside the window
/// contribute nothing and are not counted either: the result is a sum, not
/// a mean, so errors computed over windows of different widths are not
/// directly comparable. Zero in-window samples yield 0.0, a degenerate
/// "perfect fit" the caller has to interpret with care.
pub fn windowed_fit_error(input: FitErrorInput<'_>) -> DispersionResult<f64> {
    input.window.validate()?;
    let sample_count = input.omega.len();
    for (sequence, actual) in [("eps1", input.eps1.len()), ("eps2", input.eps2.len())] {
        if actual != sample_count {
            return Err(DispersionError::SequenceLengthMismatch {
                sequence,
                actual,
                expected: sample_count,
            });
        }
    }

    let mut accumulated = 0.0;
    for index in 0..sample_count {
        let omega = input.omega[index];
        if !input.window.contains(omega) {
            continue;
        }
        let model = drude_permittivity(omega, input.parameters)?;
        let residual_re = model.re - input.eps1[index];
        let residual_im = model.im - input.eps2[index];
        let scale = input.eps1[index] * input.eps1[index]
            + input.eps2[index] * input.eps2[index]
            + EPS_REG;
        accumulated += (residual_re * residual_re + residual_im * residual_im) / scale;
    }
    Ok(accumulated)
}
