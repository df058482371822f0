mod commands;

use clap::Parser;
use drude_core::domain::{DispersionError, FitConfigError};
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let full_args = std::iter::once("drude-fit".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => match cli.command {
            CliCommand::Fit(fit_args) => commands::run_fit(fit_args),
            CliCommand::Epsilon(epsilon_args) => commands::run_epsilon(epsilon_args),
        },
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "drude-fit", about = "Drude dispersion fitter for tabulated optical constants")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Fit the Drude model to a wavelength,n,k table with a grid search
    Fit(commands::FitArgs),
    /// Print the derived per-sample dispersion columns for a table
    Epsilon(commands::EpsilonArgs),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] FitConfigError),

    #[error(transparent)]
    Dispersion(#[from] DispersionError),

    #[error("failed to write fit report '{}': {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Config(_) => 2,
            Self::Dispersion(error) => error.exit_code(),
            Self::ReportWrite { .. } => 3,
        }
    }

    pub fn diagnostic_line(&self) -> String {
        match self {
            Self::Dispersion(error) => error.diagnostic_line(),
            other => format!("ERROR: {other}"),
        }
    }
}
