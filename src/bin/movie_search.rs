use clap::Parser;
use eiascraper::{
    cli::SearchArgs,
    logging::init_logging,
    pipeline::{report, run},
    process::profile::MOVIE_SEARCH,
};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let args = SearchArgs::parse();
    init_logging();

    info!(query = %args.query, "searching movies");
    let config = args.config();
    let request = args.request();
    let target = args.common.target();

    report(run(&config, &request, &MOVIE_SEARCH, &target).await)
}
