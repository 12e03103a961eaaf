use crate::console::{run_search, run_show, run_stats, SearchArgs, ShowArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gate_access::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Gate Access",
    about = "Look up vehicles at the facility gate and review access statistics",
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
    /// Search the roster by registration number, driver name, or company
    Search(SearchArgs),
    /// Show the full record for one vehicle
    Show(ShowArgs),
    /// Print access statistics for the whole roster
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Roster file (CSV or JSON) to serve instead of the configured one
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Show(args) => run_show(args),
        Command::Stats(args) => run_stats(args),
    }
}
