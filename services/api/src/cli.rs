use crate::console::{run_compare, run_parties, run_report, CompareArgs, PartiesArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use partyscope::error::AppError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "partyscope",
    about = "Browse curated party ratings and issue positions, or serve them over HTTP",
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
    /// List parties, optionally filtered by name
    Parties(PartiesArgs),
    /// Print the detailed report for one party
    Report(ReportArgs),
    /// Print issue positions side by side
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the catalog from this JSON file instead of the bundled data
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Parties(args) => run_parties(args),
        Command::Report(args) => run_report(args),
        Command::Compare(args) => run_compare(args),
    }
}
