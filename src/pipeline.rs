// src/pipeline.rs

use crate::config::Config;
use crate::fetch::{fetch, FetchError, Request};
use crate::output::{summary, write_csv};
use crate::process::{normalize_with, profile::Profile, ShapeError};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

/// Where the cleaned table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Print { head: usize },
    Save(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The API answered, but no row survived cleaning.
    NoData,
    Printed { summary: String },
    Saved { path: PathBuf, rows: usize },
}

/// Failure of a whole run. Each variant reads differently to the user.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not fetch data: {0}")]
    Fetch(#[from] FetchError),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("could not save table: {0:#}")]
    Save(anyhow::Error),
}

/// Fetch once, normalize, then print or save.
pub async fn run(
    config: &Config,
    request: &Request,
    profile: &Profile,
    target: &Target,
) -> Result<Outcome, PipelineError> {
    let raw = fetch(config, request).await?;

    info!("starting data cleaning");
    let table = normalize_with(profile, &raw)?;
    info!("data cleaning complete");

    if table.is_empty() {
        return Ok(Outcome::NoData);
    }

    match target {
        Target::Print { head } => Ok(Outcome::Printed {
            summary: summary(&table, *head),
        }),
        Target::Save(path) => {
            write_csv(&table, path).map_err(PipelineError::Save)?;
            Ok(Outcome::Saved {
                path: path.clone(),
                rows: table.len(),
            })
        }
    }
}

/// Print the outcome for a human and map it to the process exit code.
pub fn report(result: Result<Outcome, PipelineError>) -> ExitCode {
    match result {
        Ok(Outcome::NoData) => {
            println!("No data found for this query.");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Printed { summary }) => {
            println!();
            print!("{}", summary);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Saved { path, rows }) => {
            println!("Saved {} rows to {}", rows, path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
