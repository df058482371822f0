pub mod drude;
pub mod metric;

pub use drude::{DrudeParameters, DrudePermittivityApi, drude_permittivity};
pub use metric::{FitErrorInput, FitErrorMetricApi, windowed_fit_error};
