use clap::Parser;
use eiascraper::{
    cli::EiaArgs,
    logging::init_logging,
    pipeline::{report, run},
    process::profile::EIA_TIMESERIES,
};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    // invalid invocations exit here, before any network activity
    let args = EiaArgs::parse();
    init_logging();

    info!(route = %args.route, "fetching data");
    let config = args.config();
    let request = args.request();
    let target = args.common.target();

    report(run(&config, &request, &EIA_TIMESERIES, &target).await)
}
