use std::path::PathBuf;

pub type DispersionResult<T> = Result<T, DispersionError>;

/// Failure taxonomy for the fitting pipeline. Every error is raised at the
/// boundary of the offending operation and never recovered internally; the
/// surrounding program reports it and aborts the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispersionError {
    #[error("optical sample table is empty")]
    EmptySampleSet,

    #[error("sample field '{field}' must be finite and {requirement} at row {row}, got {value}")]
    InvalidSampleValue {
        field: &'static str,
        requirement: &'static str,
        row: usize,
        value: f64,
    },

    #[error("derived sequence '{sequence}' has length {actual}, expected {expected}")]
    SequenceLengthMismatch {
        sequence: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("malformed table line {line}: {reason}")]
    MalformedTableLine { line: usize, reason: String },

    #[error("failed to read optical table '{}': {reason}", path.display())]
    TableRead { path: PathBuf, reason: String },

    #[error("model parameter '{field}' must be finite and > 0, got {value}")]
    NonPositiveParameter { field: &'static str, value: f64 },

    #[error("model frequency must be finite and > 0, got {value}")]
    FrequencyOutOfDomain { value: f64 },

    #[error("fit window requires omega_min < omega_max, got [{omega_min}, {omega_max}]")]
    InvalidWindow { omega_min: f64, omega_max: f64 },

    #[error("parameter grid axis '{axis}' is empty: min {min} >= max {max}")]
    EmptySearchSpace {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispersionErrorCategory {
    InputValidation,
    Domain,
    EmptySearchSpace,
}

impl DispersionErrorCategory {
    /// Stable process exit code for the category: input problems exit 2,
    /// computation problems exit 4.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidation => 2,
            Self::Domain | Self::EmptySearchSpace => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidation => "InputValidationError",
            Self::Domain => "DomainError",
            Self::EmptySearchSpace => "EmptySearchSpaceError",
        }
    }
}

impl DispersionError {
    pub fn category(&self) -> DispersionErrorCategory {
        match self {
            Self::EmptySampleSet
            | Self::InvalidSampleValue { .. }
            | Self::SequenceLengthMismatch { .. }
            | Self::MalformedTableLine { .. }
            | Self::TableRead { .. } => DispersionErrorCategory::InputValidation,
            Self::NonPositiveParameter { .. }
            | Self::FrequencyOutOfDomain { .. }
            | Self::InvalidWindow { .. } => DispersionErrorCategory::Domain,
            Self::EmptySearchSpace { .. } => DispersionErrorCategory::EmptySearchSpace,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.category().as_str(), self)
    }
}
