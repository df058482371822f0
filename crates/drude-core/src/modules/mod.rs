pub mod fit;
pub mod material;

pub use fit::{FitResult, GridSearchOptimizer};
pub use material::{OpticalSample, OpticalSampleSet};
