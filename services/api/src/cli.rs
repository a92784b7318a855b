use crate::demo::{run_catalogue, run_demo, run_score, CatalogueArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wellbeing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wellbeing Assessment Service",
    about = "Score burnout assessments and serve the scoring API",
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
    /// Score a saved answer ledger or a response table export
    Score(ScoreArgs),
    /// Print the BAT-12 question catalogue
    Catalogue(CatalogueArgs),
    /// Walk a synthetic respondent through the BAT-12 and print the resulting report
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Catalogue(args) => run_catalogue(args),
        Command::Demo(args) => run_demo(args),
    }
}
