// src/cli.rs

use crate::config::Config;
use crate::fetch::Request;
use crate::pipeline::Target;
use crate::sensitive::Sensitive;
use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Options shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Save the cleaned table as CSV at this path instead of printing it
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Rows to print when not saving
    #[arg(long, default_value_t = 5)]
    pub head: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Skip TLS certificate verification. Leaves the request open to tampering.
    #[arg(long)]
    pub insecure: bool,
}

impl CommonArgs {
    pub fn config(&self, defaults: Config) -> Config {
        let cfg = defaults
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_accept_invalid_certs(self.insecure);
        match &self.base_url {
            Some(base) => cfg.with_base_url(base.clone()),
            None => cfg,
        }
    }

    pub fn target(&self) -> Target {
        match &self.output {
            Some(path) => Target::Save(path.clone()),
            None => Target::Print { head: self.head },
        }
    }
}

/// Fetch a time series from the EIA open-data API and clean it into a table.
#[derive(Parser, Debug)]
#[command(name = "eiascraper", version)]
pub struct EiaArgs {
    /// EIA API key
    #[arg(long = "api_key", env = "EIA_API_KEY", hide_env_values = true,
          value_parser = NonEmptyStringValueParser::new().map(Sensitive::new))]
    pub api_key: Sensitive<String>,

    /// API route, e.g. petroleum/crd/crpdn/data
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub route: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl EiaArgs {
    pub fn config(&self) -> Config {
        self.common.config(Config::eia())
    }

    pub fn request(&self) -> Request {
        Request::new(self.route.clone(), self.api_key.expose().clone())
    }
}

/// Search TMDB for movies matching a query and clean the results into a table.
#[derive(Parser, Debug)]
#[command(name = "movie_search", version)]
pub struct SearchArgs {
    /// Search term
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub query: String,

    /// TMDB API key
    #[arg(long = "api_key", env = "TMDB_API_KEY", hide_env_values = true,
          value_parser = NonEmptyStringValueParser::new().map(Sensitive::new))]
    pub api_key: Sensitive<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub const MOVIE_SEARCH_ROUTE: &str = "search/movie";

impl SearchArgs {
    pub fn config(&self) -> Config {
        self.common.config(Config::tmdb())
    }

    pub fn request(&self) -> Request {
        Request::new(MOVIE_SEARCH_ROUTE, self.api_key.expose().clone())
            .with_param("query", self.query.clone())
    }
}
