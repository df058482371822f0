use super::CliError;
use drude_core::domain::{FitConfig, load_fit_config};
use drude_core::modules::fit::GridSearchOptimizer;
use drude_core::modules::material::load_sample_set;
use std::fs;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct FitArgs {
    /// Optical table path, one `wavelength,n,k` triple per line
    table: PathBuf,

    /// Fit configuration JSON; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// High-frequency permittivity override
    #[arg(long)]
    eps_inf: Option<f64>,

    /// Fit window lower bound override, rad/s
    #[arg(long)]
    omega_min: Option<f64>,

    /// Fit window upper bound override, rad/s
    #[arg(long)]
    omega_max: Option<f64>,

    /// Plasma-frequency axis overrides, rad/s
    #[arg(long)]
    omega_p_min: Option<f64>,
    #[arg(long)]
    omega_p_max: Option<f64>,
    #[arg(long)]
    omega_p_step: Option<f64>,

    /// Damping-rate axis overrides, 1/s
    #[arg(long)]
    gamma_min: Option<f64>,
    #[arg(long)]
    gamma_max: Option<f64>,
    #[arg(long)]
    gamma_step: Option<f64>,

    /// Write the machine-readable fit report here as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

impl FitArgs {
    fn resolve_config(&self) -> Result<FitConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_fit_config(path)?,
            None => FitConfig::default(),
        };

        if let Some(eps_inf) = self.eps_inf {
            config.eps_inf = eps_inf;
        }
        if let Some(omega_min) = self.omega_min {
            config.window.omega_min = omega_min;
        }
        if let Some(omega_max) = self.omega_max {
            config.window.omega_max = omega_max;
        }
        if let Some(value) = self.omega_p_min {
            config.omega_p.min = value;
        }
        if let Some(value) = self.omega_p_max {
            config.omega_p.max = value;
        }
        if let Some(value) = self.omega_p_step {
            config.omega_p.step = value;
        }
        if let Some(value) = self.gamma_min {
            config.gamma.min = value;
        }
        if let Some(value) = self.gamma_max {
            config.gamma.max = value;
        }
        if let Some(value) = self.gamma_step {
            config.gamma.step = value;
        }

        Ok(config)
    }
}

pub(super) fn run_fit(args: FitArgs) -> Result<i32, CliError> {
    let config = args.resolve_config()?;
    let samples = load_sample_set(&args.table, config.speed_of_light)?;
    let (first_nm, last_nm) = samples.wavelength_span();
    tracing::info!(
        samples = samples.len(),
        first_nm,
        last_nm,
        "loaded optical table '{}'",
        args.table.display()
    );

    let result = GridSearchOptimizer::new(config).search(&samples)?;
    tracing::info!(
        candidates = result.candidates_evaluated,
        best_candidate_index = result.best_candidate_index,
        "grid search complete"
    );

    println!(
        "Loaded {} samples between {first_nm} and {last_nm} nm",
        samples.len()
    );
    println!("Best-fit plasma frequency: {:.6e} rad/s", result.best_omega_p);
    println!("Best-fit damping rate:     {:.6e} 1/s", result.best_gamma);
    println!(
        "Windowed error:            {:.6e} over {} candidates",
        result.best_error, result.candidates_evaluated
    );
    if result.best_error == 0.0 {
        println!(
            "Warning: zero error usually means no samples fell inside the fit window \
             [{:.3e}, {:.3e}] rad/s",
            config.window.omega_min, config.window.omega_max
        );
    }

    if let Some(report_path) = &args.report {
        if let Some(parent) = report_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| CliError::ReportWrite {
                    path: report_path.clone(),
                    source,
                })?;
            }
        }
        let report = serde_json::to_string_pretty(&result).map_err(|source| {
            CliError::ReportWrite {
                path: report_path.clone(),
                source: std::io::Error::other(source),
            }
        })?;
        fs::write(report_path, report).map_err(|source| CliError::ReportWrite {
            path: report_path.clone(),
            source,
        })?;
        println!("Wrote fit report to {}", report_path.display());
    }

    Ok(0)
}

#[derive(clap::Args)]
pub(super) struct EpsilonArgs {
    /// Optical table path, one `wavelength,n,k` triple per line
    table: PathBuf,

    /// Speed of light in vacuum, m/s
    #[arg(long, default_value_t = drude_core::common::constants::SPEED_OF_LIGHT)]
    speed_of_light: f64,
}

pub(super) fn run_epsilon(args: EpsilonArgs) -> Result<i32, CliError> {
    let samples = load_sample_set(&args.table, args.speed_of_light)?;

    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>12} {:>12}",
        "lambda_nm", "E_eV", "n", "k", "eps1", "eps2"
    );
    for index in 0..samples.len() {
        println!(
            "{:>12.3} {:>10.4} {:>10.4} {:>10.4} {:>12.4} {:>12.4}",
            samples.wavelength()[index],
            samples.energy()[index],
            samples.n()[index],
            samples.k()[index],
            samples.eps1()[index],
            samples.eps2()[index],
        );
    }

    Ok(0)
}
