use crate::demo::{
    run_demo, run_detail, run_report, run_search, DemoArgs, DetailArgs, ReportArgs, SearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use strikehistory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lightning Strike History",
    about = "Search, inspect, and certify lightning strike history near a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List days with strike activity in a lookback window
    Search(SearchArgs),
    /// Expand the 24-hour strike detail for one day
    Detail(DetailArgs),
    /// Synthesize a report or certificate for one day
    Report(ReportArgs),
    /// Run an end-to-end demo of the search, detail, and report pipeline
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Fixed RNG seed so the served synthetic data is reproducible
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Detail(args) => run_detail(args),
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
